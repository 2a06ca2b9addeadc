//! Error codes for the articles API.
//!
//! Every failure the API reports carries one of these codes. The code is
//! logged with the failure and exposed in the `x-error-code` response header;
//! the JSON body keeps the plain `{"error": ...}` shape clients depend on.
//! Add new codes here; never pass ad-hoc strings as error codes.

use core::fmt;

/// Centralized error codes for the articles API.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Create payload is missing a required field or has an empty one
    MissingRequiredFields,
    /// Body could not be read or parsed
    BadRequest,

    // Resource Not Found
    /// No article with the requested id
    ArticleNotFound,
    /// General not found error
    NotFound,

    // System Errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Stored data could not be mapped back to the domain
    DataCorruption,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MissingRequiredFields => "MISSING_REQUIRED_FIELDS",
            Self::BadRequest => "BAD_REQUEST",

            Self::ArticleNotFound => "ARTICLE_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
