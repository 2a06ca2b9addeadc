//! Once-only tracing subscriber for test binaries.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INSTALLED: OnceCell<()> = OnceCell::new();

/// Filter directive for test output: `TEST_LOG`, then `RUST_LOG`, then `warn`.
fn test_filter() -> EnvFilter {
    std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the test subscriber. Safe to call from every test binary and from
/// several ctors; only the first call has an effect.
///
/// ```bash
/// TEST_LOG=articles_backend=debug cargo test -p articles-backend
/// ```
pub fn init() {
    INSTALLED.get_or_init(|| {
        // with_test_writer keeps output inside libtest's capture
        let _ = fmt()
            .with_env_filter(test_filter())
            .with_test_writer()
            .without_time()
            .try_init();
    });
}
