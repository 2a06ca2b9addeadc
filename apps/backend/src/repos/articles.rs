//! Article repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::adapters::articles_sea as articles_adapter;
use crate::errors::domain::DomainError;

/// Article domain model: the full stored row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub content: String,
    pub date: String,
    pub author: String,
}

/// List-view projection of an article; has no `content`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleSummary {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub date: String,
    pub author: String,
}

/// Fields supplied by the author when creating an article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticle {
    pub title: String,
    pub description: String,
    pub content: String,
    pub date: String,
    pub author: String,
}

pub async fn list_summaries<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<ArticleSummary>, DomainError> {
    let rows = articles_adapter::list_summaries(conn).await?;
    Ok(rows.into_iter().map(ArticleSummary::from).collect())
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<Article>, DomainError> {
    let article = articles_adapter::find_by_id(conn, id).await?;
    Ok(article.map(Article::from))
}

/// Insert a new row and return the id storage assigned to it.
pub async fn insert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    article: NewArticle,
) -> Result<i64, DomainError> {
    let dto = articles_adapter::ArticleCreate::new(
        article.title,
        article.description,
        article.content,
        article.date,
        article.author,
    );
    let model = articles_adapter::create_article(conn, dto).await?;
    Ok(model.id)
}

pub async fn count<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, DomainError> {
    Ok(articles_adapter::count(conn).await?)
}

// Conversions between SeaORM models and domain models

impl From<crate::entities::articles::Model> for Article {
    fn from(model: crate::entities::articles::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            content: model.content,
            date: model.date,
            author: model.author,
        }
    }
}

impl From<articles_adapter::ArticleSummaryRow> for ArticleSummary {
    fn from(row: articles_adapter::ArticleSummaryRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            date: row.date,
            author: row.author,
        }
    }
}
