//! Domain entities - the core business objects.

mod blog_post;

pub use blog_post::{BlogPost, BlogPostChanges, BlogPostId, NewBlogPost};
