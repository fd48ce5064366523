//! Analytics Model

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::fitting::FittingType;

/// Item count for one manufacture month (`YYYY-MM`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MonthlyCount {
    pub month: String,
    pub count: i64,
}

/// Dashboard summary
///
/// `type_count` always carries every [`FittingType`] (zero when absent);
/// `manufacturer_count` only lists manufacturers that have items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub type_count: BTreeMap<FittingType, i64>,
    pub manufacturer_count: BTreeMap<String, i64>,
    pub monthly_trend: Vec<MonthlyCount>,
}

impl AnalyticsSummary {
    /// Build a summary from grouped rows, zero-filling missing fitting types
    pub fn from_groups(
        by_type: impl IntoIterator<Item = (FittingType, i64)>,
        by_manufacturer: impl IntoIterator<Item = (String, i64)>,
        monthly_trend: Vec<MonthlyCount>,
    ) -> Self {
        let mut type_count: BTreeMap<FittingType, i64> =
            FittingType::ALL.into_iter().map(|t| (t, 0)).collect();
        type_count.extend(by_type);

        Self {
            type_count,
            manufacturer_count: by_manufacturer.into_iter().collect(),
            monthly_trend,
        }
    }

    /// Total number of items across all fitting types
    pub fn total_items(&self) -> i64 {
        self.type_count.values().sum()
    }
}
