//! Sensitivity domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ALERT_THRESHOLD, HIGH_SENSITIVITY_SCORE, MEDIUM_SENSITIVITY_SCORE};
use crate::utils::{DateRange, Timeframe};

/// One stored sensitivity observation. A date may carry several, e.g. one per room type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SensitivitySample {
    pub date: NaiveDate,
    pub room_type_id: Option<String>,
    /// Score between 0 and 10
    pub sensitivity: Decimal,
    pub adr: Decimal,
    pub utilization_pct: Decimal,
    /// Utilization points gained per currency unit of price change
    pub price_elasticity: Option<Decimal>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SensitivityLevel {
    High,
    Medium,
    Low,
}

impl SensitivityLevel {
    pub fn from_score(score: Decimal) -> Self {
        if score > HIGH_SENSITIVITY_SCORE {
            SensitivityLevel::High
        } else if score > MEDIUM_SENSITIVITY_SCORE {
            SensitivityLevel::Medium
        } else {
            SensitivityLevel::Low
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SensitivityDay {
    pub date: NaiveDate,
    /// Mean score of the day, one decimal
    pub sensitivity: Decimal,
    /// Mean ADR of the day, whole amount
    pub adr: Decimal,
    pub utilization_pct: i64,
    /// Rooms occupied by confirmed bookings that night
    pub bookings: i64,
    pub level: SensitivityLevel,
}

/// One step of the simulated demand response to a price change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ElasticityPoint {
    pub price_change_pct: i32,
    /// Clamped to ±40, one decimal
    pub demand_change_pct: Decimal,
    /// Revenue relative to the current price, 100 = unchanged
    pub revenue_index: i64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SensitivitySettings {
    pub alert_threshold: Decimal,
}

impl Default for SensitivitySettings {
    fn default() -> Self {
        Self {
            alert_threshold: DEFAULT_ALERT_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensitivityAnalysis {
    pub property_code: String,
    pub timeframe: Timeframe,
    pub range: DateRange,
    pub days: Vec<SensitivityDay>,
    pub average_sensitivity: Option<Decimal>,
    pub high_sensitivity_days: i64,
    pub alert_threshold: Decimal,
    pub elasticity_slope: Option<Decimal>,
    pub avg_adr: Decimal,
    pub avg_utilization_pct: Decimal,
    pub curve: Vec<ElasticityPoint>,
    pub optimal_price: Option<Decimal>,
}
