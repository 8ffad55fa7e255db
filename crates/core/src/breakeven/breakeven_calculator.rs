//! Breakeven formulas.
//!
//! Every function here is pure and total: degenerate denominators are floored
//! (average rate at 1, rooms and days at 1, retained revenue share at
//! `MIN_RETAINED_SHARE`) so the result is always a finite number, however odd.

use chrono::NaiveDate;
use log::warn;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::{BTreeMap, HashMap};

use crate::bookings::OccupancyAggregate;
use crate::breakeven::{
    BreakevenResult, CostBreakdownItem, CostProfile, CostProfileInput, MonthlyBreakevenPoint,
    ProfitabilityStatus, RoomTypeBreakeven,
};
use crate::constants::{DISPLAY_DECIMAL_PRECISION, MIN_BREAKEVEN_RATE, MIN_RETAINED_SHARE};
use crate::properties::RoomType;
use crate::utils::{
    ceil_to_i64, round_half_up, round_to_i64, saturating_add, saturating_div, saturating_mul,
    saturating_sub,
};

/// Heuristic split of fixed costs shown in the cost structure chart.
pub const COST_BREAKDOWN_SHARES: [(&str, Decimal); 6] = [
    ("Staff", dec!(0.40)),
    ("Utilities", dec!(0.18)),
    ("Maintenance", dec!(0.13)),
    ("Marketing", dec!(0.09)),
    ("Insurance", dec!(0.07)),
    ("Other", dec!(0.13)),
];

/// Share of revenue kept after variable costs, floored at `MIN_RETAINED_SHARE`.
fn retained_share(variable_cost_rate_pct: Decimal) -> Decimal {
    let share = Decimal::ONE - variable_cost_rate_pct / Decimal::ONE_HUNDRED;
    if share < MIN_RETAINED_SHARE {
        warn!(
            "Variable cost rate {}% leaves no contribution margin; flooring retained share at {}",
            variable_cost_rate_pct, MIN_RETAINED_SHARE
        );
        MIN_RETAINED_SHARE
    } else {
        share
    }
}

/// Cost settings from raw form strings. See [`CostProfileInput::coerce`].
pub fn coerce_cost_inputs(fixed_raw: Option<&str>, variable_raw: Option<&str>) -> CostProfile {
    CostProfileInput {
        fixed_costs: fixed_raw.map(str::to_string),
        variable_cost_rate: variable_raw.map(str::to_string),
    }
    .coerce()
}

fn at_least_one(value: i64) -> Decimal {
    Decimal::from(value.max(1))
}

/// Room-nights per period needed to cover fixed and variable costs:
/// `ceil(fixed / (avg_rate × (1 − variable%/100)))`.
///
/// An average rate below 1 is replaced by 1; a non-positive one is logged as
/// a degenerate input.
pub fn compute_breakeven_room_nights(
    fixed_costs: Decimal,
    variable_cost_rate_pct: Decimal,
    avg_rate: Decimal,
) -> i64 {
    if avg_rate <= Decimal::ZERO {
        warn!(
            "Degenerate average rate {} for breakeven; using {} instead",
            avg_rate, MIN_BREAKEVEN_RATE
        );
    }
    let rate = avg_rate.max(MIN_BREAKEVEN_RATE);
    let contribution = saturating_mul(rate, retained_share(variable_cost_rate_pct));
    ceil_to_i64(saturating_div(fixed_costs, contribution))
}

/// Breakeven spread over the days of the period, rounded up.
pub fn compute_breakeven_room_nights_per_day(breakeven_room_nights: i64, days_in_period: i64) -> i64 {
    ceil_to_i64(Decimal::from(breakeven_room_nights) / at_least_one(days_in_period))
}

/// `round((actual − breakeven) / max(1, breakeven) × 100)`. Negative means below breakeven.
pub fn compute_safety_margin_pct(actual_room_nights: i64, breakeven_room_nights: i64) -> i64 {
    let gap = Decimal::from(actual_room_nights) - Decimal::from(breakeven_room_nights);
    round_to_i64(gap / at_least_one(breakeven_room_nights) * Decimal::ONE_HUNDRED)
}

/// Share of all available room-nights the breakeven requires, in whole percent.
pub fn compute_utilization_needed_pct(
    breakeven_room_nights: i64,
    total_rooms: i64,
    days_in_period: i64,
) -> i64 {
    let available =
        saturating_mul(Decimal::from(total_rooms), Decimal::from(days_in_period)).max(Decimal::ONE);
    round_to_i64(Decimal::from(breakeven_room_nights) / available * Decimal::ONE_HUNDRED)
}

/// ADR at which one room-night covers its even share of fixed costs plus the
/// variable costs it causes.
pub fn compute_per_room_type_breakeven_adr(
    fixed_costs: Decimal,
    total_rooms: i64,
    days_in_period: i64,
    variable_cost_rate_pct: Decimal,
) -> Decimal {
    let per_night_fixed = fixed_costs / at_least_one(total_rooms) / at_least_one(days_in_period);
    saturating_div(per_night_fixed, retained_share(variable_cost_rate_pct))
}

/// Room-nights sold beyond the breakeven, never negative.
pub fn rooms_above_breakeven(actual_room_nights: i64, breakeven_room_nights: i64) -> i64 {
    actual_room_nights.saturating_sub(breakeven_room_nights).max(0)
}

/// Margin of the current ADR over the breakeven ADR, percent of the current ADR.
/// Zero when there is no current rate.
pub fn compute_room_type_margin_pct(current_adr: Decimal, breakeven_adr: Decimal) -> i64 {
    if current_adr <= Decimal::ZERO {
        return 0;
    }
    let gap = saturating_sub(current_adr, breakeven_adr);
    round_to_i64(saturating_mul(
        saturating_div(gap, current_adr),
        Decimal::ONE_HUNDRED,
    ))
}

pub fn classify_room_type(current_adr: Decimal, breakeven_adr: Decimal) -> ProfitabilityStatus {
    if current_adr > breakeven_adr {
        ProfitabilityStatus::Profitable
    } else {
        ProfitabilityStatus::AtRisk
    }
}

/// Assembles the headline breakeven figures for a period.
pub fn compute_breakeven_result(
    profile: &CostProfile,
    avg_rate: Decimal,
    occupancy: &OccupancyAggregate,
    total_rooms: i64,
    days_in_period: i64,
) -> BreakevenResult {
    let breakeven = compute_breakeven_room_nights(
        profile.fixed_costs,
        profile.variable_cost_rate_pct,
        avg_rate,
    );
    BreakevenResult {
        breakeven_room_nights_per_period: breakeven,
        breakeven_room_nights_per_day: compute_breakeven_room_nights_per_day(
            breakeven,
            days_in_period,
        ),
        utilization_needed_pct: compute_utilization_needed_pct(
            breakeven,
            total_rooms,
            days_in_period,
        ),
        safety_margin_pct: compute_safety_margin_pct(occupancy.rooms_sold_nights, breakeven),
        degenerate_rate: avg_rate <= Decimal::ZERO,
    }
}

/// One row per room type. A room type without a usable rate of its own is
/// judged at `fallback_adr`.
pub fn build_room_type_breakevens(
    room_types: &[RoomType],
    avg_adr_by_room_type: &HashMap<String, Decimal>,
    fallback_adr: Decimal,
    profile: &CostProfile,
    total_rooms: i64,
    days_in_period: i64,
) -> Vec<RoomTypeBreakeven> {
    let breakeven_adr = compute_per_room_type_breakeven_adr(
        profile.fixed_costs,
        total_rooms,
        days_in_period,
        profile.variable_cost_rate_pct,
    );

    room_types
        .iter()
        .map(|rt| {
            let current = avg_adr_by_room_type
                .get(&rt.id)
                .copied()
                .unwrap_or(fallback_adr);
            RoomTypeBreakeven {
                room_type_id: rt.id.clone(),
                room_type: rt.name.clone(),
                rooms: rt.rooms_count,
                breakeven_adr: round_half_up(breakeven_adr, DISPLAY_DECIMAL_PRECISION),
                current_adr: round_half_up(current, DISPLAY_DECIMAL_PRECISION),
                margin_pct: compute_room_type_margin_pct(current, breakeven_adr),
                status: classify_room_type(current, breakeven_adr),
            }
        })
        .collect()
}

/// Splits fixed costs into display categories by `COST_BREAKDOWN_SHARES`,
/// each rounded to a whole amount.
pub fn build_cost_breakdown(fixed_costs: Decimal) -> Vec<CostBreakdownItem> {
    COST_BREAKDOWN_SHARES
        .iter()
        .map(|(category, share)| CostBreakdownItem {
            category: (*category).to_string(),
            amount: round_half_up(fixed_costs * share, 0),
        })
        .collect()
}

/// Revenue against total costs (fixed + variable share of revenue) per month,
/// oldest first.
pub fn build_monthly_trend(
    monthly_revenue: &BTreeMap<NaiveDate, Decimal>,
    profile: &CostProfile,
) -> Vec<MonthlyBreakevenPoint> {
    let variable = profile.variable_cost_fraction();
    monthly_revenue
        .iter()
        .map(|(month, revenue)| MonthlyBreakevenPoint {
            month: *month,
            label: month.format("%b").to_string(),
            revenue: round_half_up(*revenue, 0),
            costs: round_half_up(
                saturating_add(profile.fixed_costs, saturating_mul(variable, *revenue)),
                0,
            ),
            breakeven: profile.fixed_costs,
        })
        .collect()
}
