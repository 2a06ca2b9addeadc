use actix_web::http::header::CONTENT_TYPE;
use actix_web::http::StatusCode;
use actix_web::test;
use articles_backend::repos::articles;
use articles_backend::AppState;
use backend_test_support::error_body::assert_error_body_from_parts;
use serde_json::json;

use super::send;
use crate::support::factory::{create_body, FIELDS};
use crate::support::{create_test_app, empty_store};

#[actix_web::test]
async fn create_returns_201_and_persists() {
    let db = empty_store().await;
    let app = create_test_app(AppState::new(db.clone()))
        .with_prod_routes()
        .build()
        .await;

    let resp = send(
        &app,
        test::TestRequest::post()
            .uri("/api/articles")
            .set_json(create_body("posted"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status, StatusCode::CREATED);

    let json = resp.json();
    assert_eq!(json["message"], "Article created successfully");
    let id = json["id"].as_i64().expect("integer id");

    let stored = articles::find_by_id(&db, id).await.unwrap().unwrap();
    assert_eq!(stored.title, "Article posted");
    assert_eq!(stored.content, "# Article posted\n\nBody of posted.");
}

#[actix_web::test]
async fn create_then_get_round_trips() {
    let app = create_test_app(AppState::new(empty_store().await))
        .with_prod_routes()
        .build()
        .await;

    let created = send(
        &app,
        test::TestRequest::post()
            .uri("/api/articles")
            .set_json(create_body("rt"))
            .to_request(),
    )
    .await
    .json();
    let id = created["id"].as_i64().unwrap();

    let fetched = send(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/articles/{id}"))
            .to_request(),
    )
    .await
    .json();

    let mut expected = create_body("rt");
    expected["id"] = json!(id);
    assert_eq!(fetched["article"], expected);
}

#[actix_web::test]
async fn create_rejects_absent_null_or_empty_fields() {
    let db = empty_store().await;
    let app = create_test_app(AppState::new(db.clone()))
        .with_prod_routes()
        .build()
        .await;

    for field in FIELDS {
        let mut absent = create_body("bad");
        absent.as_object_mut().unwrap().remove(field);
        let mut null = create_body("bad");
        null[field] = serde_json::Value::Null;
        let mut empty = create_body("bad");
        empty[field] = json!("");

        for body in [absent, null, empty] {
            let resp = send(
                &app,
                test::TestRequest::post()
                    .uri("/api/articles")
                    .set_json(&body)
                    .to_request(),
            )
            .await;

            assert_error_body_from_parts(
                resp.status,
                &resp.headers,
                &resp.body,
                StatusCode::BAD_REQUEST,
                "MISSING_REQUIRED_FIELDS",
                "Missing required fields",
            );
        }
    }

    assert_eq!(articles::count(&db).await.unwrap(), 0);
}

#[actix_web::test]
async fn create_with_empty_body_is_missing_fields() {
    let app = create_test_app(AppState::new(empty_store().await))
        .with_prod_routes()
        .build()
        .await;

    for payload in ["", "{}"] {
        let resp = send(
            &app,
            test::TestRequest::post()
                .uri("/api/articles")
                .insert_header((CONTENT_TYPE, "application/json"))
                .set_payload(payload)
                .to_request(),
        )
        .await;

        assert_error_body_from_parts(
            resp.status,
            &resp.headers,
            &resp.body,
            StatusCode::BAD_REQUEST,
            "MISSING_REQUIRED_FIELDS",
            "Missing required fields",
        );
    }
}

#[actix_web::test]
async fn create_with_malformed_json_is_400() {
    let db = empty_store().await;
    let app = create_test_app(AppState::new(db.clone()))
        .with_prod_routes()
        .build()
        .await;

    let resp = send(
        &app,
        test::TestRequest::post()
            .uri("/api/articles")
            .insert_header((CONTENT_TYPE, "application/json"))
            .set_payload(r#"{"title": "x", "#)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.headers.get("x-error-code").unwrap(), "BAD_REQUEST");
    assert!(resp.json()["error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid JSON"));

    assert_eq!(articles::count(&db).await.unwrap(), 0);
}

#[actix_web::test]
async fn create_treats_falsy_values_as_missing() {
    let db = empty_store().await;
    let app = create_test_app(AppState::new(db.clone()))
        .with_prod_routes()
        .build()
        .await;

    for value in [json!(0), json!(false), json!(0.0)] {
        let mut body = create_body("falsy");
        body["title"] = value;

        let resp = send(
            &app,
            test::TestRequest::post()
                .uri("/api/articles")
                .set_json(&body)
                .to_request(),
        )
        .await;

        assert_error_body_from_parts(
            resp.status,
            &resp.headers,
            &resp.body,
            StatusCode::BAD_REQUEST,
            "MISSING_REQUIRED_FIELDS",
            "Missing required fields",
        );
    }

    for body in [json!(["a", "b", "c", "d", "e"]), json!("title")] {
        let resp = send(
            &app,
            test::TestRequest::post()
                .uri("/api/articles")
                .set_json(&body)
                .to_request(),
        )
        .await;
        assert_eq!(resp.status, StatusCode::BAD_REQUEST);
        assert_eq!(resp.json()["error"], "Missing required fields");
    }

    assert_eq!(articles::count(&db).await.unwrap(), 0);
}

#[actix_web::test]
async fn create_stores_truthy_non_strings_as_text() {
    let db = empty_store().await;
    let app = create_test_app(AppState::new(db.clone()))
        .with_prod_routes()
        .build()
        .await;

    for (value, stored) in [(json!(42), "42"), (json!(true), "true"), (json!(["a"]), r#"["a"]"#)] {
        let mut body = create_body("typed");
        body["title"] = value;

        let resp = send(
            &app,
            test::TestRequest::post()
                .uri("/api/articles")
                .set_json(&body)
                .to_request(),
        )
        .await;
        assert_eq!(resp.status, StatusCode::CREATED);

        let id = resp.json()["id"].as_i64().unwrap();
        let article = articles::find_by_id(&db, id).await.unwrap().unwrap();
        assert_eq!(article.title, stored);
    }
}

#[actix_web::test]
async fn create_ignores_unknown_fields_and_client_ids() {
    let db = empty_store().await;
    let app = create_test_app(AppState::new(db.clone()))
        .with_prod_routes()
        .build()
        .await;

    let mut body = create_body("extra");
    body["id"] = json!(777);
    body["tags"] = json!(["x"]);

    let resp = send(
        &app,
        test::TestRequest::post()
            .uri("/api/articles")
            .set_json(&body)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status, StatusCode::CREATED);
    assert_ne!(resp.json()["id"], json!(777));
    assert_eq!(articles::count(&db).await.unwrap(), 1);
}
