//! # Blog Core
//!
//! The domain layer of the blog post API.
//! This crate holds the `BlogPost` entity, its validated payloads and the
//! repository port. It has zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
