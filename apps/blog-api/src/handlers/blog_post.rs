//! Blog post handlers.

use actix_web::{HttpResponse, http::header, web};

use blog_core::DomainError;
use blog_core::domain::{BlogPost, BlogPostChanges, BlogPostId, NewBlogPost};
use blog_shared::dto::{BlogPostRequest, BlogPostResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;

fn to_response(post: BlogPost) -> BlogPostResponse {
    BlogPostResponse {
        id: post.id,
        title: post.title,
        content: post.content,
        creation_date: post.creation_date,
    }
}

fn not_found(id: BlogPostId) -> DomainError {
    DomainError::NotFound {
        entity_type: "BlogPost",
        id: id.into(),
    }
}

/// GET /blogpost
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    let body: Vec<BlogPostResponse> = posts.into_iter().map(to_response).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /blogpost/{id}
pub async fn get(
    state: web::Data<AppState>,
    path: web::Path<BlogPostId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// POST /blogpost
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<BlogPostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let draft = NewBlogPost::new(req.title, req.content)?;

    let post = state.posts.insert(draft).await?;
    tracing::info!(post_id = post.id, "Blog post created");

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/blogpost/{}", post.id)))
        .json(to_response(post)))
}

/// PUT /blogpost/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<BlogPostId>,
    body: web::Json<BlogPostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();
    let changes = BlogPostChanges::new(req.title, req.content)?;

    if state.posts.update(id, changes).await? == 0 {
        return Err(not_found(id).into());
    }
    tracing::info!(post_id = id, "Blog post updated");

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /blogpost/{id}
///
/// Deleting a post that does not exist is not an error.
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<BlogPostId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let removed = state.posts.delete(id).await?;
    tracing::info!(post_id = id, removed, "Blog post delete requested");

    Ok(HttpResponse::NoContent().finish())
}
