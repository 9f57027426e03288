use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Database-assigned identifier of a blog post.
pub type BlogPostId = i32;

/// BlogPost entity - a stored blog post row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: BlogPostId,
    pub title: String,
    pub content: String,
    pub creation_date: DateTime<Utc>,
}

/// A post that has not been persisted yet. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlogPost {
    pub title: String,
    pub content: String,
    pub creation_date: DateTime<Utc>,
}

impl NewBlogPost {
    /// Validate the fields and stamp the creation date with the current UTC time.
    pub fn new(title: String, content: String) -> Result<Self, DomainError> {
        require("title", &title)?;
        require("content", &content)?;

        Ok(Self {
            title,
            content,
            creation_date: Utc::now(),
        })
    }
}

/// The mutable part of a post. `id` and `creation_date` never change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPostChanges {
    pub title: String,
    pub content: String,
}

impl BlogPostChanges {
    pub fn new(title: String, content: String) -> Result<Self, DomainError> {
        require("title", &title)?;
        require("content", &content)?;

        Ok(Self { title, content })
    }
}

fn require(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!("{field} is required")));
    }
    Ok(())
}
