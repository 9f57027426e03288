//! # Blog Shared
//!
//! Types exchanged across the API boundary.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
