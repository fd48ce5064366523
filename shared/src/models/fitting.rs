//! Fitting Item Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Railway track fitting type
///
/// Stored as snake_case TEXT (`elastic_rail_clip`, `liner`, `rail_pad`, `sleeper`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "snake_case"))]
pub enum FittingType {
    ElasticRailClip,
    Liner,
    RailPad,
    Sleeper,
}

impl FittingType {
    /// All known fitting types, in reporting order
    pub const ALL: [FittingType; 4] = [
        FittingType::ElasticRailClip,
        FittingType::Liner,
        FittingType::RailPad,
        FittingType::Sleeper,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            FittingType::ElasticRailClip => "elastic_rail_clip",
            FittingType::Liner => "liner",
            FittingType::RailPad => "rail_pad",
            FittingType::Sleeper => "sleeper",
        }
    }
}

impl fmt::Display for FittingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown fitting type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown fitting type: {0}")]
pub struct UnknownFittingType(pub String);

impl FromStr for FittingType {
    type Err = UnknownFittingType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FittingType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownFittingType(s.to_string()))
    }
}

fn default_status() -> String {
    "active".to_string()
}

/// Inventory item (one physical fitting)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Item {
    pub id: i64,
    /// Externally generated identifier printed on the QR label
    pub qr_id: String,
    #[serde(rename = "type")]
    #[cfg_attr(feature = "db", sqlx(rename = "type"))]
    pub fitting_type: FittingType,
    pub warranty: String,
    pub date_of_manufacture: NaiveDate,
    pub manufacturer: String,
    pub status: String,
}

/// Create item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCreate {
    pub qr_id: String,
    #[serde(rename = "type")]
    pub fitting_type: FittingType,
    pub warranty: String,
    pub date_of_manufacture: NaiveDate,
    pub manufacturer: String,
    #[serde(default = "default_status")]
    pub status: String,
}

/// Update item payload
///
/// Only these fields may change after creation. `qr_id`, `type` and
/// `date_of_manufacture` identify the physical fitting and are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemUpdate {
    pub warranty: Option<String>,
    pub manufacturer: Option<String>,
    pub status: Option<String>,
}

impl ItemUpdate {
    /// Keys a patch may carry
    pub const FIELDS: [&'static str; 3] = ["warranty", "manufacturer", "status"];

    pub fn is_empty(&self) -> bool {
        self.warranty.is_none() && self.manufacturer.is_none() && self.status.is_none()
    }
}

/// Delete confirmation body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResult {
    pub message: String,
}
