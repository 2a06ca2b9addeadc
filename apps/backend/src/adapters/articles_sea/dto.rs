//! DTOs for articles_sea adapter.

use sea_orm::FromQueryResult;

/// DTO for inserting a new article row.
#[derive(Debug, Clone)]
pub struct ArticleCreate {
    pub title: String,
    pub description: String,
    pub content: String,
    pub date: String,
    pub author: String,
}

impl ArticleCreate {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        content: impl Into<String>,
        date: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            content: content.into(),
            date: date.into(),
            author: author.into(),
        }
    }
}

/// Row shape for list queries; `content` is never selected.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct ArticleSummaryRow {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub date: String,
    pub author: String,
}
