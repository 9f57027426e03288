//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::error::RepoError;
use blog_core::ports::BlogPostRepository;
use blog_infra::{DatabaseConfig, DatabasePool};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn BlogPostRepository>,
}

impl AppState {
    pub fn new(posts: Arc<dyn BlogPostRepository>) -> Self {
        Self { posts }
    }

    /// Connect to the database and wire the PostgreSQL repository.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, RepoError> {
        let pool = DatabasePool::connect(config).await?;

        if config.create_schema {
            pool.ensure_schema().await?;
        }

        tracing::info!("Application state initialized");

        Ok(Self::new(Arc::new(pool.blog_posts())))
    }
}
