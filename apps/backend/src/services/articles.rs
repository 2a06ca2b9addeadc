//! Article domain service.

use sea_orm::ConnectionTrait;
use tracing::{debug, info};

use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::articles::{self, Article, ArticleSummary, NewArticle};

/// Message reported when a create payload is incomplete. It names the class
/// of violation, not the offending field.
pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields";

/// Message reported when no article has the requested id.
pub const ARTICLE_NOT_FOUND_MESSAGE: &str = "Article not found";

/// Create payload as received. Absent or `null` fields are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub date: Option<String>,
    pub author: Option<String>,
}

impl ArticleDraft {
    /// Every field must be present and non-empty. Nothing else is checked:
    /// `date` is stored as given.
    pub fn validate(self) -> Result<NewArticle, DomainError> {
        fn required(value: Option<String>) -> Result<String, DomainError> {
            match value {
                Some(v) if !v.is_empty() => Ok(v),
                _ => Err(DomainError::validation(MISSING_FIELDS_MESSAGE)),
            }
        }

        Ok(NewArticle {
            title: required(self.title)?,
            description: required(self.description)?,
            content: required(self.content)?,
            date: required(self.date)?,
            author: required(self.author)?,
        })
    }
}

/// Article domain service.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArticleService;

impl ArticleService {
    pub fn new() -> Self {
        Self
    }

    /// Summaries of every article, newest `date` first.
    pub async fn list<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<ArticleSummary>, DomainError> {
        let summaries = articles::list_summaries(conn).await?;
        debug!(count = summaries.len(), "articles listed");
        Ok(summaries)
    }

    /// The full article, or `NotFound(Article)` when no row has this id.
    pub async fn get<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i64,
    ) -> Result<Article, DomainError> {
        articles::find_by_id(conn, id).await?.ok_or_else(|| {
            debug!(article_id = id, "article not found");
            DomainError::not_found(NotFoundKind::Article, ARTICLE_NOT_FOUND_MESSAGE)
        })
    }

    /// Validate and persist a new article, returning its assigned id.
    /// Nothing is written when validation fails.
    pub async fn create<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        draft: ArticleDraft,
    ) -> Result<i64, DomainError> {
        let article = draft.validate()?;
        let id = articles::insert(conn, article).await?;
        info!(article_id = id, "article created");
        Ok(id)
    }
}
