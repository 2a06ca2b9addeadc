use sea_orm::DatabaseConnection;

use crate::error::AppError;
use crate::state::app_state::AppState;

/// Message reported when the state was built without a store.
pub const NO_STORE_MESSAGE: &str = "Database unavailable";

/// Centralized helper to access the database connection from AppState.
///
/// Returns `AppError::DbUnavailable` (500) when the state was built without
/// a store.
pub fn require_db(state: &AppState) -> Result<&DatabaseConnection, AppError> {
    state
        .db()
        .ok_or_else(|| AppError::db_unavailable(NO_STORE_MESSAGE))
}
