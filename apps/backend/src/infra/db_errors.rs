//! SeaORM -> DomainError translation helpers.
//!
//! Adapters return `sea_orm::DbErr`; repositories convert it here, and higher
//! layers map `DomainError` to `AppError` via `From`.

use tracing::{error, warn};

use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};
use crate::trace_ctx;

/// Translate a `DbErr` into a `DomainError`.
///
/// Storage failures keep the driver message so the 500 body carries it
/// through for diagnostics.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            DomainError::not_found(NotFoundKind::Other("Record".into()), "Record not found")
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %error_msg, "Database unavailable");
            DomainError::infra(InfraErrorKind::DbUnavailable, error_msg)
        }
        sea_orm::DbErr::Type(_) | sea_orm::DbErr::TryIntoErr { .. } => {
            error!(trace_id = %trace_id, raw_error = %error_msg, "Stored row failed to decode");
            DomainError::infra(InfraErrorKind::DataCorruption, error_msg)
        }
        _ => {
            error!(trace_id = %trace_id, raw_error = %error_msg, "Database operation failed");
            DomainError::infra(InfraErrorKind::Other("DbErr".into()), error_msg)
        }
    }
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        map_db_err(e)
    }
}
