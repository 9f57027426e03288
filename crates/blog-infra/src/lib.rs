//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//! This crate owns every database connection and every SQL statement
//! the service issues. It talks to PostgreSQL through SeaORM.

pub mod database;

pub use database::{DatabaseConfig, DatabasePool, PostgresBlogPostRepository};
