//! Database connection management and repositories.

mod connections;
mod postgres_base;
pub mod postgres_repo;

pub mod entity;

pub use connections::{DatabaseConfig, DatabasePool};
pub use postgres_base::PostgresBaseRepository;
pub use postgres_repo::PostgresBlogPostRepository;

#[cfg(test)]
mod tests;
