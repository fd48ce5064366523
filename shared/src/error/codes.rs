//! Unified error codes for the QRixAlt service
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 6xxx: Fitting inventory errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so the frontend can switch on
/// a plain number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,

    // ==================== 6xxx: Fitting ====================
    /// No item with the requested qr_id
    ItemNotFound = 6001,
    /// An item with the same qr_id is already registered
    QrIdExists = 6002,
    /// Fitting type is not one of the known variants
    InvalidFittingType = 6003,
    /// Item rejected by a storage constraint
    ItemConstraintViolation = 6004,
    /// Update payload contains a field that cannot be changed
    UnknownPatchField = 6005,
    /// Create failed for a reason other than a constraint; rolled back
    ItemCreateFailed = 6006,

    // ==================== 9xxx: System ====================
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",

            // Fitting
            ErrorCode::ItemNotFound => "Item not found",
            ErrorCode::QrIdExists => "Item with this qr_id already exists",
            ErrorCode::InvalidFittingType => "Unknown fitting type",
            ErrorCode::ItemConstraintViolation => "Item violates a storage constraint",
            ErrorCode::UnknownPatchField => "Field cannot be updated",
            ErrorCode::ItemCreateFailed => "Item could not be created",

            // System
            ErrorCode::DatabaseError => "Database error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),

            // Fitting
            6001 => Ok(ErrorCode::ItemNotFound),
            6002 => Ok(ErrorCode::QrIdExists),
            6003 => Ok(ErrorCode::InvalidFittingType),
            6004 => Ok(ErrorCode::ItemConstraintViolation),
            6005 => Ok(ErrorCode::UnknownPatchField),
            6006 => Ok(ErrorCode::ItemCreateFailed),

            // System
            9002 => Ok(ErrorCode::DatabaseError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
