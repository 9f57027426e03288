use async_trait::async_trait;

use crate::domain::{BlogPost, BlogPostChanges, BlogPostId, NewBlogPost};
use crate::error::RepoError;

/// Generic repository trait for the read and delete operations every table shares.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Return every row, ordered by primary key.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Find an entity by its unique ID. `None` when no row matches.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Delete an entity by its ID, returning the number of rows removed.
    async fn delete(&self, id: ID) -> Result<u64, RepoError>;

    /// Check that the backing store answers.
    async fn ping(&self) -> Result<(), RepoError>;
}

/// Blog post repository.
#[async_trait]
pub trait BlogPostRepository: BaseRepository<BlogPost, BlogPostId> {
    /// Persist a new post in one statement and return it with its generated id.
    async fn insert(&self, post: NewBlogPost) -> Result<BlogPost, RepoError>;

    /// Overwrite title and content of an existing post.
    ///
    /// Returns the number of rows affected; `0` means no post has this id.
    async fn update(&self, id: BlogPostId, changes: BlogPostChanges) -> Result<u64, RepoError>;
}
