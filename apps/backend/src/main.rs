use actix_web::middleware::NormalizePath;
use actix_web::{web, App, HttpServer};
use articles_backend::config::db::{ConnectionSettings, DbProfile};
use articles_backend::infra::state::build_state;
use articles_backend::middleware::{cors_middleware, RequestTrace, StructuredLogger, TraceSpan};
use articles_backend::routes;
use tracing::{error, info};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Configuration comes from the environment only (see README).
    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = match std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "3001".to_string())
        .parse::<u16>()
    {
        Ok(port) => port,
        Err(_) => {
            error!("BACKEND_PORT must be a valid port number");
            std::process::exit(1);
        }
    };

    let settings = match ConnectionSettings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            error!(error = %e, "invalid database settings");
            std::process::exit(1);
        }
    };

    // Schema and seed are in place before the listener binds.
    let app_state = match build_state()
        .with_db(DbProfile::SqliteFile { file: None })
        .with_settings(settings)
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "failed to initialize article store");
            std::process::exit(1);
        }
    };

    let data = web::Data::new(app_state);
    let server_data = data.clone();

    info!(%host, port, "articles backend listening");

    HttpServer::new(move || {
        App::new()
            .wrap(NormalizePath::trim())
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(server_data.clone())
            .configure(routes::configure)
            .default_service(web::to(routes::not_found))
    })
    .bind((host.as_str(), port))?
    .run()
    .await?;

    if let Some(db) = data.db() {
        match db.clone().close().await {
            Ok(()) => info!("database connection closed"),
            Err(e) => error!(error = %e, "failed to close database connection"),
        }
    }

    Ok(())
}
