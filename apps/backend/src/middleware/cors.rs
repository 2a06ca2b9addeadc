use std::env;

use actix_cors::Cors;
use actix_web::http::header;

/// Origins of the local frontend dev servers, used when nothing valid is configured.
const DEV_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://127.0.0.1:3000",
    "http://localhost:5173",
    "http://127.0.0.1:5173",
];

/// Parse a comma-separated origin list, dropping blanks, `null` and
/// anything that is not an http(s) origin.
pub fn parse_allowed_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(|s| s.trim_end_matches('/').to_string())
        .collect()
}

/// CORS for the article reader frontend.
///
/// Origins come from `CORS_ALLOWED_ORIGINS`; the API only needs `GET`,
/// `POST` and preflight `OPTIONS`.
pub fn cors_middleware() -> Cors {
    let configured = parse_allowed_origins(&env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default());

    let origins: Vec<String> = if configured.is_empty() {
        DEV_ORIGINS.iter().map(|s| s.to_string()).collect()
    } else {
        configured
    };

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers(vec![
            header::HeaderName::from_static("x-request-id"),
            header::HeaderName::from_static("x-trace-id"),
            header::HeaderName::from_static("x-error-code"),
        ])
        .max_age(3600);

    for origin in &origins {
        cors = cors.allowed_origin(origin);
    }

    cors
}
