//! Article HTTP routes.

use actix_web::{web, HttpResponse, Result};
use serde::Serialize;
use serde_json::Value;

use crate::db::require_db;
use crate::error::AppError;
use crate::extractors::article_id::ArticleId;
use crate::extractors::validated_json::ValidatedJson;
use crate::repos::articles::{Article, ArticleSummary};
use crate::services::articles::{ArticleDraft, ArticleService};
use crate::state::app_state::AppState;

pub const CREATED_MESSAGE: &str = "Article created successfully";

#[derive(Debug, Serialize)]
pub struct ArticleListResponse {
    pub articles: Vec<ArticleSummary>,
}

#[derive(Debug, Serialize)]
pub struct ArticleResponse {
    pub article: Article,
}

#[derive(Debug, Serialize)]
pub struct CreateArticleResponse {
    pub message: &'static str,
    pub id: i64,
}

/// Read one create field from the raw body.
///
/// Absent, `null`, `false`, `0` and `""` count as missing. Any other
/// non-string value is kept as its JSON text.
fn field_text(body: &Value, name: &str) -> Option<String> {
    match body.get(name)? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

/// Non-object bodies (arrays, bare scalars) carry no fields at all.
fn draft_from_body(body: &Value) -> ArticleDraft {
    ArticleDraft {
        title: field_text(body, "title"),
        description: field_text(body, "description"),
        content: field_text(body, "content"),
        date: field_text(body, "date"),
        author: field_text(body, "author"),
    }
}

/// GET /api/articles
///
/// Summaries only; `content` is never loaded for the list view.
async fn list_articles(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let articles = ArticleService::new().list(db).await?;

    Ok(HttpResponse::Ok().json(ArticleListResponse { articles }))
}

/// GET /api/articles/{id}
async fn get_article(
    article_id: ArticleId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let article = ArticleService::new().get(db, article_id.0).await?;

    Ok(HttpResponse::Ok().json(ArticleResponse { article }))
}

/// POST /api/articles
///
/// Responds 201 only after the insert has been acknowledged by the store.
async fn create_article(
    body: ValidatedJson<Value>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let draft = draft_from_body(&body);
    let id = ArticleService::new().create(db, draft).await?;

    Ok(HttpResponse::Created().json(CreateArticleResponse {
        message: CREATED_MESSAGE,
        id,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_articles))
            .route(web::post().to(create_article)),
    );
    cfg.service(web::resource("/{id}").route(web::get().to(get_article)));
}
