#![allow(dead_code)]

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::test;
use serde_json::Value;

#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Read a response body as JSON, panicking with the raw body on failure.
pub async fn json_body(resp: ServiceResponse<BoxBody>) -> Value {
    let body = test::read_body(resp).await;
    serde_json::from_slice(&body).unwrap_or_else(|e| {
        panic!(
            "response body is not JSON ({e}): {}",
            String::from_utf8_lossy(&body)
        )
    })
}
