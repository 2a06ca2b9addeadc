use actix_web::test;
use articles_backend::AppState;
use uuid::Uuid;

use super::send;
use crate::support::create_test_app;

#[actix_web::test]
async fn every_response_gets_a_uuid_request_id() {
    let app = create_test_app(AppState::new_without_db())
        .with_prod_routes()
        .build()
        .await;

    let first = send(&app, test::TestRequest::get().uri("/health").to_request()).await;
    let second = send(&app, test::TestRequest::get().uri("/nowhere").to_request()).await;

    let first_id = first.headers.get("x-request-id").unwrap().to_str().unwrap();
    let second_id = second.headers.get("x-request-id").unwrap().to_str().unwrap();

    assert!(Uuid::parse_str(first_id).is_ok());
    assert!(Uuid::parse_str(second_id).is_ok());
    assert_ne!(first_id, second_id);
}

#[actix_web::test]
async fn plain_incoming_request_id_is_echoed() {
    let app = create_test_app(AppState::new_without_db())
        .with_prod_routes()
        .build()
        .await;

    let resp = send(
        &app,
        test::TestRequest::get()
            .uri("/health")
            .insert_header(("x-request-id", "edge-7f3a"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.headers.get("x-request-id").unwrap(), "edge-7f3a");

    let resp = send(
        &app,
        test::TestRequest::get()
            .uri("/health")
            .insert_header(("x-request-id", "not plain!"))
            .to_request(),
    )
    .await;
    let echoed = resp.headers.get("x-request-id").unwrap().to_str().unwrap();
    assert!(Uuid::parse_str(echoed).is_ok());
}
