//! Error handling for handlers
//!
//! Re-exports the unified error types from `shared` and maps repository
//! failures onto them. Raw database messages are logged here and never sent
//! to the client.

use crate::db::repository::RepoError;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => {
                tracing::debug!("{}", msg);
                AppError::new(ErrorCode::ItemNotFound)
            }
            RepoError::Duplicate(qr_id) => AppError::qr_id_exists(qr_id),
            RepoError::Constraint(raw) => {
                tracing::warn!(error = %raw, "Write rejected by storage constraint");
                AppError::new(ErrorCode::ItemConstraintViolation)
            }
            RepoError::Database(e) => {
                tracing::error!(error = %e, "Database operation failed");
                AppError::new(ErrorCode::DatabaseError)
            }
        }
    }
}

/// Map a failed create
///
/// Every create failure is reported as a client error after the transaction
/// has rolled back. Store failures that are not constraint violations get a
/// fixed message and are logged here.
pub fn create_failed(err: RepoError) -> AppError {
    match err {
        RepoError::Database(e) => {
            tracing::error!(error = %e, "Item create failed, transaction rolled back");
            AppError::new(ErrorCode::ItemCreateFailed)
        }
        other => other.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[test]
    fn test_not_found_maps_to_404() {
        let err: AppError = RepoError::NotFound("Item QR-1 not found".into()).into();
        assert_eq!(err.code, ErrorCode::ItemNotFound);
        assert_eq!(err.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message, "Item not found");
    }

    #[test]
    fn test_duplicate_names_the_qr_id() {
        let err: AppError = RepoError::Duplicate("QR-7".into()).into();
        assert_eq!(err.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Item with qr_id 'QR-7' already exists");
    }

    #[test]
    fn test_constraint_message_is_not_leaked() {
        let raw = "CHECK constraint failed: type IN ('elastic_rail_clip', 'liner')";
        let err: AppError = RepoError::Constraint(raw.into()).into();
        assert_eq!(err.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Item violates a storage constraint");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_create_store_failure_is_bad_request() {
        let err = create_failed(RepoError::Database(sqlx::Error::PoolClosed));
        assert_eq!(err.code, ErrorCode::ItemCreateFailed);
        assert_eq!(err.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Item could not be created");
        assert!(err.details.is_none());

        // Classified failures keep their own codes
        let err = create_failed(RepoError::Duplicate("QR-7".into()));
        assert_eq!(err.code, ErrorCode::QrIdExists);
        let err = create_failed(RepoError::Constraint("CHECK constraint failed".into()));
        assert_eq!(err.code, ErrorCode::ItemConstraintViolation);
    }

    #[test]
    fn test_database_error_is_internal() {
        let err: AppError = RepoError::Database(sqlx::Error::PoolTimedOut).into();
        assert_eq!(err.http_status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.message.contains("pool"));
    }
}
