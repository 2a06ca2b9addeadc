//! Error body test helpers
//!
//! Assertions for the stable error contract without depending on backend
//! types: `{"error": "<message>"}` plus the `x-trace-id` and `x-error-code`
//! response headers.

use actix_web::http::header::HeaderMap;
use actix_web::http::StatusCode;
use serde::Deserialize;

/// Local mirror of the backend's error body
#[derive(Debug, Deserialize)]
struct ErrorBodyLike {
    error: String,
}

/// Assert that response parts conform to the stable error contract
///
/// Validates:
/// - HTTP status matches expected
/// - body is exactly `{"error": ...}` with the expected message
/// - x-error-code header carries the expected machine code
/// - x-trace-id header is present and non-empty
pub fn assert_error_body_from_parts(
    status: StatusCode,
    headers: &HeaderMap,
    body_bytes: &[u8],
    expected_status: StatusCode,
    expected_code: &str,
    expected_error: &str,
) {
    assert_eq!(status, expected_status);

    let value: serde_json::Value =
        serde_json::from_slice(body_bytes).expect("Response body should be valid JSON");
    let object = value
        .as_object()
        .expect("Response body should be a JSON object");
    assert_eq!(
        object.len(),
        1,
        "error body should only carry the `error` field, got: {value}"
    );

    let body: ErrorBodyLike =
        serde_json::from_value(value.clone()).expect("Response body should match error shape");
    assert_eq!(body.error, expected_error);

    let code = headers
        .get("x-error-code")
        .expect("x-error-code header should be present")
        .to_str()
        .expect("x-error-code header should be valid UTF-8");
    assert_eq!(code, expected_code);

    let trace_id = headers
        .get("x-trace-id")
        .expect("x-trace-id header should be present")
        .to_str()
        .expect("x-trace-id header should be valid UTF-8");
    assert!(!trace_id.is_empty());
}

/// Assert only the status and the error message, for callers that do not
/// have the headers at hand.
pub fn assert_error_message(
    status: StatusCode,
    body_bytes: &[u8],
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(status, expected_status);
    let body: ErrorBodyLike =
        serde_json::from_slice(body_bytes).expect("Response body should match error shape");
    assert_eq!(body.error, expected_error);
}
