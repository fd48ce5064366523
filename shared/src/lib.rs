//! Shared types for the QRixAlt fittings service
//!
//! Domain models and the unified error system used by the server and its
//! HTTP clients.

pub mod error;
pub mod models;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{AnalyticsSummary, FittingType, Item, ItemCreate, ItemUpdate, MonthlyCount};
