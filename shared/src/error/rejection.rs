//! Extractor rejections mapped onto [`AppError`]
//!
//! Lets handlers surface malformed bodies and query strings through the same
//! error envelope as every other failure. Payload-specific codes (unknown
//! fitting type, immutable field in a patch) are chosen by the server from the
//! decoded body, never from these messages.

use super::codes::ErrorCode;
use super::types::AppError;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let err = match &rejection {
            JsonRejection::JsonDataError(_) => AppError::validation("Invalid request body"),
            JsonRejection::JsonSyntaxError(_) => {
                AppError::with_message(ErrorCode::InvalidFormat, "Malformed JSON body")
            }
            JsonRejection::MissingJsonContentType(_) => AppError::invalid_request(
                "Expected request with `Content-Type: application/json`",
            ),
            _ => AppError::invalid_request("Failed to read request body"),
        };
        err.with_detail("reason", rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::validation("Invalid query parameters").with_detail("reason", rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::invalid_request("Invalid path parameter").with_detail("reason", rejection.body_text())
    }
}
