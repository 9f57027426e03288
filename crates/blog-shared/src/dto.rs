//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /blogpost` and `PUT /blogpost/{id}`.
///
/// Missing fields deserialize as empty strings and are rejected by validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogPostRequest {
    pub title: String,
    pub content: String,
}

/// Full projection of a stored blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostResponse {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub creation_date: DateTime<Utc>,
}
