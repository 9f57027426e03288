//! SeaORM table models and their mapping to domain types.

pub mod blog_post;
