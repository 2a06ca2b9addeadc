use actix_web::http::StatusCode;
use actix_web::test;
use articles_backend::AppState;

use super::send;
use crate::support::factory::insert_article;
use crate::support::{build_test_state, create_test_app, empty_store};

#[actix_web::test]
async fn list_returns_seeded_summaries_newest_first() {
    let state = build_test_state().await.expect("test state");
    let app = create_test_app(state).with_prod_routes().build().await;

    let resp = send(&app, test::TestRequest::get().uri("/api/articles").to_request()).await;
    assert_eq!(resp.status, StatusCode::OK);

    let json = resp.json();
    let articles = json["articles"].as_array().expect("articles array");
    assert_eq!(articles.len(), 5);

    let dates: Vec<&str> = articles.iter().map(|a| a["date"].as_str().unwrap()).collect();
    assert_eq!(
        dates,
        vec!["2024-04-01", "2024-03-20", "2024-03-05", "2024-02-10", "2024-01-15"]
    );
    assert_eq!(articles[0]["title"], "Building RESTful APIs with Express");
    assert_eq!(articles[0]["author"], "API Team");
}

#[actix_web::test]
async fn list_summaries_omit_content() {
    let state = build_test_state().await.expect("test state");
    let app = create_test_app(state).with_prod_routes().build().await;

    let json = send(&app, test::TestRequest::get().uri("/api/articles").to_request())
        .await
        .json();

    for summary in json["articles"].as_array().unwrap() {
        let keys: Vec<&String> = summary.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 5, "unexpected keys {keys:?}");
        assert!(summary.get("content").is_none());
        assert!(summary["id"].is_i64());
    }
}

#[actix_web::test]
async fn list_on_empty_store_is_empty_array() {
    let app = create_test_app(AppState::new(empty_store().await))
        .with_prod_routes()
        .build()
        .await;

    let resp = send(&app, test::TestRequest::get().uri("/api/articles").to_request()).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json(), serde_json::json!({ "articles": [] }));
}

#[actix_web::test]
async fn list_breaks_date_ties_by_insertion() {
    let db = empty_store().await;
    let first = insert_article(&db, "first", "2024-05-05").await;
    let second = insert_article(&db, "second", "2024-05-05").await;
    let app = create_test_app(AppState::new(db))
        .with_prod_routes()
        .build()
        .await;

    let json = send(&app, test::TestRequest::get().uri("/api/articles").to_request())
        .await
        .json();
    let ids: Vec<i64> = json["articles"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_i64().unwrap())
        .collect();

    assert_eq!(ids, vec![first, second]);
}

#[actix_web::test]
async fn trailing_slash_paths_route_like_bare_paths() {
    let state = build_test_state().await.expect("test state");
    let app = create_test_app(state).with_prod_routes().build().await;

    let resp = send(&app, test::TestRequest::get().uri("/api/articles/").to_request()).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json()["articles"].as_array().unwrap().len(), 5);

    let resp = send(&app, test::TestRequest::get().uri("/api/articles/1/").to_request()).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json()["article"]["id"], 1);
}
