#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod infra;
pub mod middleware;
pub mod repos;
pub mod routes;
pub mod services;
pub mod state;
pub mod trace_ctx;


pub use config::db::{db_url, ConnectionSettings, DbProfile};
pub use error::AppError;
pub use errors::{DomainError, ErrorCode};
pub use extractors::{ArticleId, ValidatedJson};
pub use infra::db::{bootstrap_db, connect_db};
pub use infra::state::build_state;
pub use middleware::{cors_middleware, RequestTrace, StructuredLogger, TraceSpan};
pub use repos::articles::{Article, ArticleSummary, NewArticle};
pub use services::articles::{ArticleDraft, ArticleService};
pub use state::AppState;

#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
