use actix_web::{web, HttpResponse};
use migration::get_latest_migration_version;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::warn;

use crate::db::require_db;
use crate::error::AppError;
use crate::repos::articles;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    app_version: &'static str,
    db: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    db_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    article_count: Option<u64>,
    migrations: String,
    time: String,
}

struct DbProbe {
    error: Option<String>,
    article_count: Option<u64>,
    migrations: String,
}

async fn probe(db: &DatabaseConnection) -> DbProbe {
    if let Err(e) = db
        .query_one(Statement::from_string(
            db.get_database_backend(),
            "SELECT 1 AS health_check",
        ))
        .await
    {
        return DbProbe {
            error: Some(format!("DB query failed: {e}")),
            article_count: None,
            migrations: "unknown".to_string(),
        };
    }

    let migrations = match get_latest_migration_version(db).await {
        Ok(Some(version)) => version,
        Ok(None) => "no_migrations".to_string(),
        Err(_) => "unknown".to_string(),
    };

    match articles::count(db).await {
        Ok(count) => DbProbe {
            error: None,
            article_count: Some(count),
            migrations,
        },
        Err(e) => DbProbe {
            error: Some(format!("article count failed: {e}")),
            article_count: None,
            migrations,
        },
    }
}

/// GET /health
///
/// Always 200; storage problems are reported in the body.
async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let time = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());

    let db_probe = match require_db(&app_state) {
        Ok(db) => probe(db).await,
        Err(e) => DbProbe {
            error: Some(format!("DB unavailable: {e}")),
            article_count: None,
            migrations: "unknown".to_string(),
        },
    };

    if let Some(error) = &db_probe.error {
        warn!(error = %error, "health_check_degraded");
    }

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        app_version: env!("CARGO_PKG_VERSION"),
        db: if db_probe.error.is_none() { "ok" } else { "error" },
        db_error: db_probe.error,
        article_count: db_probe.article_count,
        migrations: db_probe.migrations,
        time,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(health));
}
