use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::errors::ErrorCode;

pub mod articles;
pub mod health;

/// Register every route of the service.
///
/// Shared by `main.rs` and the integration tests so both exercise the same
/// paths; middleware is wrapped around it by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // /api/articles, /api/articles/{id}
    cfg.service(web::scope("/api/articles").configure(articles::configure_routes));
}

/// Fallback for unmatched paths, keeping the `{"error": ...}` body shape.
pub async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::not_found(ErrorCode::NotFound, "Not found"))
}
