//! Adapters for external dependencies.

pub mod articles_sea;
