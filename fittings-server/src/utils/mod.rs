//! Utilities: error re-exports, extractors, logging
//!
//! - [`AppError`] - application error (from shared::error)
//! - [`AppJson`] / [`AppQuery`] / [`AppPath`] - extractors with enveloped rejections
//! - [`JsonPayload`] - per-payload explanation of rejected bodies

pub mod error;
pub mod extract;
pub mod logger;

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use extract::{AppJson, AppPath, AppQuery, JsonPayload};
