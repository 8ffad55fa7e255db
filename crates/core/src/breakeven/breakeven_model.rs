//! Breakeven domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::bookings::OccupancyAggregate;
use crate::constants::DEFAULT_VARIABLE_COST_RATE_PCT;
use crate::utils::{parse_decimal_or, DateRange, Timeframe};

/// Monthly cost structure of a property.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CostProfile {
    pub fixed_costs: Decimal,
    /// Variable costs as a percentage of revenue (35 means 35%)
    pub variable_cost_rate_pct: Decimal,
}

impl Default for CostProfile {
    fn default() -> Self {
        Self {
            fixed_costs: Decimal::ZERO,
            variable_cost_rate_pct: DEFAULT_VARIABLE_COST_RATE_PCT,
        }
    }
}

impl CostProfile {
    pub fn new(fixed_costs: Decimal, variable_cost_rate_pct: Decimal) -> Self {
        Self {
            fixed_costs,
            variable_cost_rate_pct,
        }
    }

    /// Variable cost rate as a fraction of revenue.
    pub fn variable_cost_fraction(&self) -> Decimal {
        self.variable_cost_rate_pct / Decimal::ONE_HUNDRED
    }
}

/// Cost settings exactly as typed into the what-if form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostProfileInput {
    pub fixed_costs: Option<String>,
    pub variable_cost_rate: Option<String>,
}

impl CostProfileInput {
    /// Missing or non-numeric fixed costs become 0, the variable rate falls
    /// back to the default. Never fails.
    pub fn coerce(&self) -> CostProfile {
        CostProfile {
            fixed_costs: parse_decimal_or(self.fixed_costs.as_deref(), Decimal::ZERO),
            variable_cost_rate_pct: parse_decimal_or(
                self.variable_cost_rate.as_deref(),
                DEFAULT_VARIABLE_COST_RATE_PCT,
            ),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BreakevenResult {
    pub breakeven_room_nights_per_period: i64,
    pub breakeven_room_nights_per_day: i64,
    pub utilization_needed_pct: i64,
    pub safety_margin_pct: i64,
    /// Set when the average rate was zero or negative and the floor was applied
    pub degenerate_rate: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProfitabilityStatus {
    Profitable,
    AtRisk,
}

impl ProfitabilityStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProfitabilityStatus::Profitable => "Profitable",
            ProfitabilityStatus::AtRisk => "At Risk",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoomTypeBreakeven {
    pub room_type_id: String,
    pub room_type: String,
    pub rooms: i32,
    pub breakeven_adr: Decimal,
    pub current_adr: Decimal,
    pub margin_pct: i64,
    pub status: ProfitabilityStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdownItem {
    pub category: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyBreakevenPoint {
    /// First day of the month
    pub month: NaiveDate,
    /// Short month label, e.g. "Jan"
    pub label: String,
    pub revenue: Decimal,
    pub costs: Decimal,
    pub breakeven: Decimal,
}

/// Everything the breakeven page shows for one property and timeframe.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakevenAnalysis {
    pub property_code: String,
    pub timeframe: Timeframe,
    pub range: DateRange,
    pub days_in_period: i64,
    pub cost_profile: CostProfile,
    pub avg_adr: Decimal,
    pub total_rooms: i64,
    pub occupancy: OccupancyAggregate,
    pub range_revenue: Decimal,
    pub result: BreakevenResult,
    pub rooms_above_breakeven: i64,
    pub room_types: Vec<RoomTypeBreakeven>,
    pub cost_breakdown: Vec<CostBreakdownItem>,
    pub monthly_trend: Vec<MonthlyBreakevenPoint>,
}
