use super::*;
use crate::bookings::OccupancyAggregate;
use crate::properties::RoomType;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::{BTreeMap, HashMap};

fn room_type(id: &str, name: &str, rooms: i32) -> RoomType {
    RoomType {
        id: id.to_string(),
        property_id: "p1".to_string(),
        name: name.to_string(),
        rooms_count: rooms,
    }
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

// ==================== Breakeven room-nights ====================

#[test]
fn test_breakeven_reference_scenario() {
    // 45000 / (245 × 0.65) = 282.57 → 283
    assert_eq!(compute_breakeven_room_nights(dec!(45000), dec!(35), dec!(245)), 283);
}

#[test]
fn test_breakeven_without_variable_costs() {
    assert_eq!(compute_breakeven_room_nights(dec!(45000), dec!(0), dec!(250)), 180);
    assert_eq!(compute_breakeven_room_nights(dec!(45001), dec!(0), dec!(250)), 181);
}

#[test]
fn test_breakeven_zero_fixed_costs() {
    assert_eq!(compute_breakeven_room_nights(Decimal::ZERO, dec!(35), dec!(245)), 0);
}

#[test]
fn test_breakeven_grows_with_costs() {
    let base = compute_breakeven_room_nights(dec!(45000), dec!(35), dec!(245));
    assert!(compute_breakeven_room_nights(dec!(50000), dec!(35), dec!(245)) > base);
    assert!(compute_breakeven_room_nights(dec!(45000), dec!(50), dec!(245)) > base);
}

#[test]
fn test_breakeven_drops_with_higher_rate() {
    let low = compute_breakeven_room_nights(dec!(45000), dec!(35), dec!(200));
    let high = compute_breakeven_room_nights(dec!(45000), dec!(35), dec!(300));
    assert!(high < low);
}

#[test]
fn test_breakeven_floors_non_positive_rate() {
    // Treated as a rate of 1: 1000 / 0.65 = 1538.46
    assert_eq!(compute_breakeven_room_nights(dec!(1000), dec!(35), Decimal::ZERO), 1539);
    assert_eq!(compute_breakeven_room_nights(dec!(1000), dec!(35), dec!(-50)), 1539);
    assert_eq!(compute_breakeven_room_nights(dec!(1000), dec!(35), dec!(0.5)), 1539);
}

#[test]
fn test_breakeven_with_full_variable_rate_stays_finite() {
    // Retained share floors at 0.0001: 1000 / (100 × 0.0001) = 100000
    assert_eq!(compute_breakeven_room_nights(dec!(1000), dec!(100), dec!(100)), 100_000);
    assert_eq!(compute_breakeven_room_nights(dec!(1000), dec!(150), dec!(100)), 100_000);
}

#[test]
fn test_breakeven_saturates_instead_of_overflowing() {
    assert_eq!(
        compute_breakeven_room_nights(Decimal::MAX, dec!(100), dec!(1)),
        i64::MAX
    );
}

#[test]
fn test_breakeven_per_day_rounds_up() {
    assert_eq!(compute_breakeven_room_nights_per_day(283, 30), 10);
    assert_eq!(compute_breakeven_room_nights_per_day(300, 30), 10);
    assert_eq!(compute_breakeven_room_nights_per_day(283, 0), 283);
}

// ==================== Margins and utilization ====================

#[test]
fn test_safety_margin() {
    assert_eq!(compute_safety_margin_pct(300, 283), 6);
    assert_eq!(compute_safety_margin_pct(200, 283), -29);
    assert_eq!(compute_safety_margin_pct(283, 283), 0);
}

#[test]
fn test_safety_margin_with_zero_breakeven() {
    assert_eq!(compute_safety_margin_pct(12, 0), 1200);
    assert_eq!(compute_safety_margin_pct(0, 0), 0);
}

#[test]
fn test_utilization_needed() {
    // 283 / (48 × 30) = 19.65%
    assert_eq!(compute_utilization_needed_pct(283, 48, 30), 20);
    assert_eq!(compute_utilization_needed_pct(5, 0, 0), 500);
}

#[test]
fn test_rooms_above_breakeven_never_negative() {
    assert_eq!(rooms_above_breakeven(300, 283), 17);
    assert_eq!(rooms_above_breakeven(100, 283), 0);
}

#[test]
fn test_per_room_type_breakeven_adr() {
    // 45000 / 48 / 30 = 31.25 per room-night, / 0.65
    let adr = compute_per_room_type_breakeven_adr(dec!(45000), 48, 30, dec!(35));
    assert_eq!(crate::utils::round_half_up(adr, 2), dec!(48.08));
    let no_rooms = compute_per_room_type_breakeven_adr(dec!(300), 0, 0, dec!(0));
    assert_eq!(no_rooms, dec!(300));
}

#[test]
fn test_room_type_margin_and_status() {
    assert_eq!(compute_room_type_margin_pct(dec!(200), dec!(150)), 25);
    assert_eq!(compute_room_type_margin_pct(dec!(100), dec!(150)), -50);
    assert_eq!(compute_room_type_margin_pct(Decimal::ZERO, dec!(150)), 0);

    assert_eq!(classify_room_type(dec!(200), dec!(150)), ProfitabilityStatus::Profitable);
    assert_eq!(classify_room_type(dec!(150), dec!(150)), ProfitabilityStatus::AtRisk);
    assert_eq!(ProfitabilityStatus::AtRisk.label(), "At Risk");
}

// ==================== Assembled results ====================

#[test]
fn test_compute_breakeven_result() {
    let profile = CostProfile::new(dec!(45000), dec!(35));
    let occupancy = OccupancyAggregate::new(300, 48 * 30);

    let result = compute_breakeven_result(&profile, dec!(245), &occupancy, 48, 30);

    assert_eq!(result.breakeven_room_nights_per_period, 283);
    assert_eq!(result.breakeven_room_nights_per_day, 10);
    assert_eq!(result.utilization_needed_pct, 20);
    assert_eq!(result.safety_margin_pct, 6);
    assert!(!result.degenerate_rate);
}

#[test]
fn test_compute_breakeven_result_flags_degenerate_rate() {
    let profile = CostProfile::new(dec!(1000), dec!(35));
    let result = compute_breakeven_result(&profile, Decimal::ZERO, &OccupancyAggregate::default(), 10, 7);
    assert!(result.degenerate_rate);
    assert_eq!(result.breakeven_room_nights_per_period, 1539);
}

#[test]
fn test_room_type_rows_fall_back_to_property_adr() {
    let room_types = vec![room_type("std", "Standard", 30), room_type("ste", "Suite", 18)];
    let mut by_type = HashMap::new();
    by_type.insert("ste".to_string(), dec!(30));
    let profile = CostProfile::new(dec!(45000), dec!(35));

    let rows = build_room_type_breakevens(&room_types, &by_type, dec!(245), &profile, 48, 30);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].room_type, "Standard");
    assert_eq!(rows[0].current_adr, dec!(245));
    assert_eq!(rows[0].breakeven_adr, dec!(48.08));
    assert_eq!(rows[0].status, ProfitabilityStatus::Profitable);
    assert_eq!(rows[0].margin_pct, 80);

    assert_eq!(rows[1].current_adr, dec!(30));
    assert_eq!(rows[1].status, ProfitabilityStatus::AtRisk);
    assert_eq!(rows[1].margin_pct, -60);
}

#[test]
fn test_cost_breakdown_split() {
    let items = build_cost_breakdown(dec!(45000));
    let amounts: Vec<(String, Decimal)> = items
        .into_iter()
        .map(|i| (i.category, i.amount))
        .collect();
    assert_eq!(
        amounts,
        vec![
            ("Staff".to_string(), dec!(18000)),
            ("Utilities".to_string(), dec!(8100)),
            ("Maintenance".to_string(), dec!(5850)),
            ("Marketing".to_string(), dec!(4050)),
            ("Insurance".to_string(), dec!(3150)),
            ("Other".to_string(), dec!(5850)),
        ]
    );
}

#[test]
fn test_cost_breakdown_rounds_each_item() {
    let items = build_cost_breakdown(dec!(1001));
    assert_eq!(items[0].amount, dec!(400));
    assert_eq!(items[1].amount, dec!(180));
}

#[test]
fn test_monthly_trend() {
    let mut revenue = BTreeMap::new();
    revenue.insert(d(2024, 2, 1), dec!(80000));
    revenue.insert(d(2024, 1, 1), dec!(60000));
    let profile = CostProfile::new(dec!(45000), dec!(35));

    let trend = build_monthly_trend(&revenue, &profile);

    assert_eq!(trend.len(), 2);
    assert_eq!(trend[0].label, "Jan");
    assert_eq!(trend[0].costs, dec!(66000));
    assert_eq!(trend[0].breakeven, dec!(45000));
    assert_eq!(trend[1].label, "Feb");
    assert_eq!(trend[1].revenue, dec!(80000));
    assert_eq!(trend[1].costs, dec!(73000));
}

#[test]
fn test_coerce_cost_inputs() {
    let profile = coerce_cost_inputs(Some("45,000"), Some("abc"));
    assert_eq!(profile.fixed_costs, dec!(45000));
    assert_eq!(profile.variable_cost_rate_pct, dec!(35));

    let empty = coerce_cost_inputs(None, None);
    assert_eq!(empty, CostProfile::default());

    let scientific = coerce_cost_inputs(Some("4.5e4"), Some(" 40 "));
    assert_eq!(scientific, CostProfile::new(dec!(45000), dec!(40)));
}

// ==================== Numeric extremes ====================

#[test]
fn test_utilization_needed_with_huge_room_counts() {
    // 1e30 available room-nights saturate at Decimal::MAX
    assert_eq!(
        compute_utilization_needed_pct(283, 1_000_000_000_000_000, 1_000_000_000_000_000),
        0
    );
    assert_eq!(compute_utilization_needed_pct(283, i64::MAX, i64::MAX), 0);
    // A negative product floors at one room-night
    assert_eq!(compute_utilization_needed_pct(283, i64::MAX, i64::MIN), 28_300);
}

#[test]
fn test_breakeven_result_with_huge_room_counts() {
    let profile = CostProfile::new(dec!(45000), dec!(35));
    let occupancy = OccupancyAggregate::new(300, i64::MAX);
    let result = compute_breakeven_result(
        &profile,
        dec!(245),
        &occupancy,
        1_000_000_000_000_000,
        1_000_000_000_000_000,
    );
    assert_eq!(result.breakeven_room_nights_per_period, 283);
    assert_eq!(result.utilization_needed_pct, 0);
    assert_eq!(result.breakeven_room_nights_per_day, 1);
}

#[test]
fn test_room_type_margin_against_saturated_breakeven_adr() {
    let breakeven_adr = compute_per_room_type_breakeven_adr(Decimal::MAX, 1, 1, dec!(35));
    assert_eq!(breakeven_adr, Decimal::MAX);
    assert_eq!(compute_room_type_margin_pct(dec!(0.5), breakeven_adr), i64::MIN);
    assert_eq!(compute_room_type_margin_pct(Decimal::MAX, Decimal::MIN), 100);
    assert_eq!(
        classify_room_type(dec!(0.5), breakeven_adr),
        ProfitabilityStatus::AtRisk
    );
}

#[test]
fn test_monthly_trend_saturates_costs() {
    let mut revenue = BTreeMap::new();
    revenue.insert(d(2024, 1, 1), dec!(10000));

    let huge_rate = build_monthly_trend(&revenue, &CostProfile::new(dec!(45000), dec!(1e27)));
    assert_eq!(huge_rate[0].costs, Decimal::MAX);

    let huge_fixed = build_monthly_trend(&revenue, &CostProfile::new(Decimal::MAX, dec!(35)));
    assert_eq!(huge_fixed[0].costs, Decimal::MAX);
    assert_eq!(huge_fixed[0].breakeven, Decimal::MAX);

    let negative = build_monthly_trend(&revenue, &CostProfile::new(Decimal::MIN, dec!(-1e27)));
    assert!(negative[0].costs <= Decimal::MIN + Decimal::ONE);
}

#[test]
fn test_room_type_rows_with_extreme_profile() {
    let room_types = vec![room_type("std", "Standard", 30)];
    let profile = CostProfile::new(Decimal::MAX, dec!(99.99));
    let rows = build_room_type_breakevens(&room_types, &HashMap::new(), dec!(0.01), &profile, 1, 1);
    assert_eq!(rows[0].breakeven_adr, Decimal::MAX);
    assert_eq!(rows[0].status, ProfitabilityStatus::AtRisk);
    assert_eq!(rows[0].margin_pct, i64::MIN);
}
