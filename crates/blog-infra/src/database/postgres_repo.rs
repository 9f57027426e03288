//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter};

use blog_core::domain::{BlogPost, BlogPostChanges, BlogPostId, NewBlogPost};
use blog_core::error::RepoError;
use blog_core::ports::BlogPostRepository;

use super::entity::blog_post::{self, Entity as BlogPostEntity};
use super::postgres_base::PostgresBaseRepository;

/// PostgreSQL blog post repository.
pub type PostgresBlogPostRepository = PostgresBaseRepository<BlogPostEntity>;

#[async_trait]
impl BlogPostRepository for PostgresBlogPostRepository {
    async fn insert(&self, post: NewBlogPost) -> Result<BlogPost, RepoError> {
        let row = blog_post::ActiveModel::from(post);
        let model = self.run(row.insert(&self.db)).await?;

        tracing::debug!(post_id = model.id, "Inserted blog post");
        Ok(model.into())
    }

    async fn update(&self, id: BlogPostId, changes: BlogPostChanges) -> Result<u64, RepoError> {
        let result = self
            .run(
                BlogPostEntity::update_many()
                    .col_expr(blog_post::Column::Title, Expr::value(changes.title))
                    .col_expr(blog_post::Column::Content, Expr::value(changes.content))
                    .filter(blog_post::Column::Id.eq(id))
                    .exec(&self.db),
            )
            .await?;

        tracing::debug!(
            post_id = id,
            rows_affected = result.rows_affected,
            "Updated blog post"
        );
        Ok(result.rows_affected)
    }
}
