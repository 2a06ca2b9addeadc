//! Task-local trace context for web requests.
//!
//! `RequestTrace` scopes every request future with the request's trace id so
//! that error responses and log lines produced deep inside handlers can carry
//! it without threading the `HttpRequest` through every call.

use std::cell::RefCell;

use tokio::task_local;

/// Value reported when no request scope is active (startup, tests).
pub const UNKNOWN_TRACE_ID: &str = "unknown";

task_local! {
    static TRACE_ID: RefCell<Option<String>>;
}

/// Get the trace_id for the current task, or [`UNKNOWN_TRACE_ID`].
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(|cell| cell.borrow().clone())
        .ok()
        .flatten()
        .unwrap_or_else(|| UNKNOWN_TRACE_ID.to_string())
}

/// Run a future within a trace context.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(RefCell::new(Some(trace_id)), future).await
}
