//! Backend test support utilities
//!
//! Helpers shared by the backend's integration test binaries: unified
//! logging initialization and assertions for the `{"error": ...}` response
//! contract.

pub mod error_body;
pub mod logging;
