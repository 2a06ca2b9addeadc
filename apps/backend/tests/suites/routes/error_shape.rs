use actix_web::http::StatusCode;
use actix_web::{test, web, HttpResponse};
use articles_backend::{AppError, AppState, ErrorCode};
use backend_test_support::error_body::{assert_error_body_from_parts, assert_error_message};
use sea_orm::{ConnectionTrait, Statement};

use super::send;
use crate::support::{create_test_app, empty_store};

async fn missing_fields() -> Result<HttpResponse, AppError> {
    Err(AppError::invalid(
        ErrorCode::MissingRequiredFields,
        "Missing required fields",
    ))
}

async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::not_found(ErrorCode::ArticleNotFound, "Article not found"))
}

async fn storage_failure() -> Result<HttpResponse, AppError> {
    Err(AppError::db("database is locked"))
}

// handler-only: no store behind these routes
#[actix_web::test]
async fn canned_errors_share_one_body_shape() {
    let app = create_test_app(AppState::new_without_db())
        .with_routes(|cfg| {
            cfg.route("/_test/missing", web::get().to(missing_fields))
                .route("/_test/not_found", web::get().to(not_found))
                .route("/_test/db", web::get().to(storage_failure));
        })
        .build()
        .await;

    let cases = [
        ("/_test/missing", StatusCode::BAD_REQUEST, "MISSING_REQUIRED_FIELDS", "Missing required fields"),
        ("/_test/not_found", StatusCode::NOT_FOUND, "ARTICLE_NOT_FOUND", "Article not found"),
        ("/_test/db", StatusCode::INTERNAL_SERVER_ERROR, "DB_ERROR", "database is locked"),
    ];

    for (uri, status, code, message) in cases {
        let resp = send(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_error_body_from_parts(resp.status, &resp.headers, &resp.body, status, code, message);
    }
}

#[actix_web::test]
async fn error_trace_id_matches_request_id() {
    let app = create_test_app(AppState::new_without_db())
        .with_routes(|cfg| {
            cfg.route("/_test/not_found", web::get().to(not_found));
        })
        .build()
        .await;

    let resp = send(
        &app,
        test::TestRequest::get().uri("/_test/not_found").to_request(),
    )
    .await;

    let trace_id = resp.headers.get("x-trace-id").unwrap();
    let request_id = resp.headers.get("x-request-id").unwrap();
    assert_eq!(trace_id, request_id);
    assert_ne!(trace_id, "unknown");
}

#[actix_web::test]
async fn storage_error_passes_driver_message_through() {
    let db = empty_store().await;
    db.execute(Statement::from_string(
        db.get_database_backend(),
        "DROP TABLE articles",
    ))
    .await
    .unwrap();
    let app = create_test_app(AppState::new(db))
        .with_prod_routes()
        .build()
        .await;

    for req in [
        test::TestRequest::get().uri("/api/articles").to_request(),
        test::TestRequest::get().uri("/api/articles/1").to_request(),
        test::TestRequest::post()
            .uri("/api/articles")
            .set_json(crate::support::factory::create_body("lost"))
            .to_request(),
    ] {
        let resp = send(&app, req).await;
        assert_eq!(resp.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(resp.headers.get("x-error-code").unwrap(), "DB_ERROR");
        let message = resp.json()["error"].as_str().unwrap().to_string();
        assert!(message.contains("no such table"), "message: {message}");
    }
}

#[actix_web::test]
async fn state_without_store_is_500() {
    let app = create_test_app(AppState::new_without_db())
        .with_prod_routes()
        .build()
        .await;

    let resp = send(&app, test::TestRequest::get().uri("/api/articles").to_request()).await;
    assert_error_message(
        resp.status,
        &resp.body,
        StatusCode::INTERNAL_SERVER_ERROR,
        "Database unavailable",
    );
}

#[actix_web::test]
async fn unknown_path_is_json_404() {
    let app = create_test_app(AppState::new_without_db())
        .with_prod_routes()
        .build()
        .await;

    for uri in ["/api/nowhere", "/api/articles/1/comments"] {
        let resp = send(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_error_body_from_parts(
            resp.status,
            &resp.headers,
            &resp.body,
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Not found",
        );
    }
}
