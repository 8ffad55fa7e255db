//! Pricing domain models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SENSITIVITY_SLIDER;
use crate::sensitivity::SensitivityLevel;
use crate::utils::DateRange;

/// Stored pricing figures for one room type on one date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PricingSnapshot {
    pub date: NaiveDate,
    pub room_type_id: String,
    pub room_type: String,
    pub booked_count: i32,
    pub max_count: i32,
    pub adr: Decimal,
    pub peer_adr: Option<Decimal>,
    pub suggested_adr: Decimal,
    pub sensitivity: Decimal,
    pub is_event: bool,
}

/// A rate typed in by hand, replacing the suggestion for that room type and date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RateOverride {
    pub id: String,
    pub property_id: String,
    pub room_type_id: String,
    pub rate_date: NaiveDate,
    pub override_adr: Decimal,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewRateOverride {
    pub room_type_id: String,
    pub rate_date: NaiveDate,
    pub override_adr: Decimal,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UtilizationTier {
    High,
    Medium,
    Low,
}

impl UtilizationTier {
    pub fn from_pct(utilization_pct: i64) -> Self {
        if utilization_pct > 80 {
            UtilizationTier::High
        } else if utilization_pct > 60 {
            UtilizationTier::Medium
        } else {
            UtilizationTier::Low
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PricingRow {
    pub date: NaiveDate,
    pub room_type_id: String,
    pub room_type: String,
    pub booked_count: i32,
    pub max_count: i32,
    pub utilization_pct: i64,
    pub utilization_tier: UtilizationTier,
    pub adr: Decimal,
    pub peer_adr: Option<Decimal>,
    /// Own ADR against the peer ADR, percent with one decimal
    pub peer_change_pct: Option<Decimal>,
    pub sensitivity: Decimal,
    pub sensitivity_level: SensitivityLevel,
    pub suggested_adr: Decimal,
    pub override_adr: Option<Decimal>,
    /// Override when present, otherwise the suggestion
    pub effective_adr: Decimal,
    pub is_event: bool,
}

/// Controls of the pricing dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PricingTableOptions {
    pub apply_peer_pricing: bool,
    /// Sensitivity slider, 0 to 100; 50 keeps the peer rate
    pub sensitivity: u8,
    pub show_events: bool,
}

impl Default for PricingTableOptions {
    fn default() -> Self {
        Self {
            apply_peer_pricing: false,
            sensitivity: DEFAULT_SENSITIVITY_SLIDER,
            show_events: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PricingKpis {
    pub avg_utilization_pct: i64,
    pub avg_adr: Option<Decimal>,
    pub avg_peer_adr: Option<Decimal>,
    pub avg_sensitivity: Option<Decimal>,
    pub avg_suggested_adr: Option<Decimal>,
    pub manual_overrides: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingTable {
    pub property_code: String,
    pub range: DateRange,
    pub options: PricingTableOptions,
    pub rows: Vec<PricingRow>,
    pub kpis: PricingKpis,
}
