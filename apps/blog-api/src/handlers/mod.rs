//! HTTP handlers and route configuration.

mod blog_post;
mod health;


use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .route("/health", web::get().to(health::health_check))
    .service(
        web::scope("/blogpost")
            .route("", web::get().to(blog_post::list))
            .route("", web::post().to(blog_post::create))
            .route("/{id}", web::get().to(blog_post::get))
            .route("/{id}", web::put().to(blog_post::update))
            .route("/{id}", web::delete().to(blog_post::delete)),
    );
}
