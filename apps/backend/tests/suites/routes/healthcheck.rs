use actix_web::http::StatusCode;
use actix_web::test;
use articles_backend::AppState;

use super::send;
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn health_reports_store_and_migration() {
    let state = build_test_state().await.expect("test state");
    let app = create_test_app(state).with_prod_routes().build().await;

    let resp = send(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status, StatusCode::OK);

    let json = resp.json();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db"], "ok");
    assert_eq!(json["article_count"], 5);
    assert_eq!(json["migrations"], "m20240101_000001_create_articles");
    assert_eq!(json["app_version"], env!("CARGO_PKG_VERSION"));
    assert!(json.get("db_error").is_none());
    assert!(json["time"].as_str().unwrap().contains('T'));
}

#[actix_web::test]
async fn health_without_store_reports_db_error() {
    let app = create_test_app(AppState::new_without_db())
        .with_prod_routes()
        .build()
        .await;

    let resp = send(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status, StatusCode::OK);

    let json = resp.json();
    assert_eq!(json["db"], "error");
    assert!(json["db_error"].as_str().unwrap().contains("DB unavailable"));
    assert!(json.get("article_count").is_none());
    assert_eq!(json["migrations"], "unknown");
}
