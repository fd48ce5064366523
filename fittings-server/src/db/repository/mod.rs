//! Repository Module
//!
//! Free functions over a `SqlitePool`, one file per table or read model.

pub mod analytics;
pub mod item;

use sqlx::error::ErrorKind;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    /// CHECK / NOT NULL / FOREIGN KEY failure; holds the raw store message
    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl RepoError {
    /// Classify a failed write, naming `key` when it collides with an existing row
    pub fn from_write(err: sqlx::Error, key: &str) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            match db_err.kind() {
                ErrorKind::UniqueViolation => return RepoError::Duplicate(key.to_string()),
                ErrorKind::CheckViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::ForeignKeyViolation => {
                    return RepoError::Constraint(db_err.message().to_string());
                }
                _ => {}
            }
        }
        RepoError::Database(err)
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
