use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::pricing::{
    apply_peer_pricing, average_suggested_adr, PricingKpis, PricingRow, PricingSnapshot,
    PricingTableOptions, RateOverride, UtilizationTier,
};
use crate::sensitivity::SensitivityLevel;
use crate::utils::{
    mean, round_half_up, round_to_i64, saturating_div, saturating_mul, saturating_sub,
};

/// `round(booked / max(1, max) × 100)`
pub fn utilization_pct(booked_count: i32, max_count: i32) -> i64 {
    round_to_i64(
        Decimal::from(booked_count) / Decimal::from(max_count.max(1)) * Decimal::ONE_HUNDRED,
    )
}

/// Own ADR against the peer ADR in percent, one decimal. `None` without a positive peer rate.
pub fn peer_change_pct(adr: Decimal, peer_adr: Option<Decimal>) -> Option<Decimal> {
    let peer = peer_adr.filter(|p| *p > Decimal::ZERO)?;
    let ratio = saturating_div(saturating_sub(adr, peer), peer);
    Some(round_half_up(saturating_mul(ratio, Decimal::ONE_HUNDRED), 1))
}

pub fn build_row(snapshot: &PricingSnapshot, override_adr: Option<Decimal>) -> PricingRow {
    let utilization = utilization_pct(snapshot.booked_count, snapshot.max_count);
    PricingRow {
        date: snapshot.date,
        room_type_id: snapshot.room_type_id.clone(),
        room_type: snapshot.room_type.clone(),
        booked_count: snapshot.booked_count,
        max_count: snapshot.max_count,
        utilization_pct: utilization,
        utilization_tier: UtilizationTier::from_pct(utilization),
        adr: snapshot.adr,
        peer_adr: snapshot.peer_adr,
        peer_change_pct: peer_change_pct(snapshot.adr, snapshot.peer_adr),
        sensitivity: snapshot.sensitivity,
        sensitivity_level: SensitivityLevel::from_score(snapshot.sensitivity),
        suggested_adr: snapshot.suggested_adr,
        override_adr,
        effective_adr: override_adr.unwrap_or(snapshot.suggested_adr),
        is_event: snapshot.is_event,
    }
}

/// Rows shown on the dashboard. Overrides are matched by room type and date;
/// event days are dropped when `show_events` is off; suggestions are
/// recomputed from peer rates when peer pricing is on.
pub fn build_rows(
    snapshots: &[PricingSnapshot],
    overrides: &[RateOverride],
    options: &PricingTableOptions,
) -> Vec<PricingRow> {
    let by_key: HashMap<(&str, NaiveDate), Decimal> = overrides
        .iter()
        .map(|o| ((o.room_type_id.as_str(), o.rate_date), o.override_adr))
        .collect();

    let rows: Vec<PricingRow> = snapshots
        .iter()
        .filter(|s| options.show_events || !s.is_event)
        .map(|s| {
            let override_adr = by_key.get(&(s.room_type_id.as_str(), s.date)).copied();
            build_row(s, override_adr)
        })
        .collect();

    if options.apply_peer_pricing {
        apply_peer_pricing(&rows, options.sensitivity)
    } else {
        rows
    }
}

/// Headline figures over one row set. Pass the rows exactly as displayed so
/// the suggested ADR average matches the table.
pub fn compute_kpis(rows: &[PricingRow]) -> PricingKpis {
    let to_cents = |avg: Decimal| round_half_up(avg, DISPLAY_DECIMAL_PRECISION);
    PricingKpis {
        avg_utilization_pct: mean(rows.iter().map(|r| Decimal::from(r.utilization_pct)))
            .map(round_to_i64)
            .unwrap_or(0),
        avg_adr: mean(rows.iter().map(|r| r.adr)).map(to_cents),
        avg_peer_adr: mean(rows.iter().filter_map(|r| r.peer_adr)).map(to_cents),
        avg_sensitivity: mean(rows.iter().map(|r| r.sensitivity)).map(|avg| round_half_up(avg, 1)),
        avg_suggested_adr: average_suggested_adr(rows),
        manual_overrides: rows.iter().filter(|r| r.override_adr.is_some()).count() as i64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn snapshot(
        day: u32,
        room_type: &str,
        booked: i32,
        max: i32,
        adr: Decimal,
        peer: Option<Decimal>,
        suggested: Decimal,
        sensitivity: Decimal,
        is_event: bool,
    ) -> PricingSnapshot {
        PricingSnapshot {
            date: d(day),
            room_type_id: room_type.to_lowercase(),
            room_type: room_type.to_string(),
            booked_count: booked,
            max_count: max,
            adr,
            peer_adr: peer,
            suggested_adr: suggested,
            sensitivity,
            is_event,
        }
    }

    fn dashboard_snapshots() -> Vec<PricingSnapshot> {
        vec![
            snapshot(15, "Studio", 8, 12, dec!(245), Some(dec!(238)), dec!(252), dec!(6.8), false),
            snapshot(16, "Studio", 11, 12, dec!(245), Some(dec!(242)), dec!(265), dec!(8.9), true),
            snapshot(17, "Loft", 4, 8, dec!(320), Some(dec!(315)), dec!(310), dec!(4.2), false),
            snapshot(18, "Studio", 9, 12, dec!(245), Some(dec!(240)), dec!(248), dec!(7.5), false),
        ]
    }

    fn loft_override() -> RateOverride {
        RateOverride {
            id: "o1".to_string(),
            property_id: "p1".to_string(),
            room_type_id: "loft".to_string(),
            rate_date: d(17),
            override_adr: dec!(325),
            updated_at: d(10).and_hms_opt(9, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_row_derivations() {
        let row = build_row(&dashboard_snapshots()[0], None);
        assert_eq!(row.utilization_pct, 67);
        assert_eq!(row.utilization_tier, UtilizationTier::Medium);
        assert_eq!(row.peer_change_pct, Some(dec!(2.9)));
        assert_eq!(row.sensitivity_level, SensitivityLevel::Medium);
        assert_eq!(row.effective_adr, dec!(252));
    }

    #[test]
    fn test_row_edge_cases() {
        let mut s = dashboard_snapshots()[1].clone();
        s.max_count = 0;
        s.peer_adr = Some(Decimal::ZERO);
        let row = build_row(&s, None);
        assert_eq!(row.utilization_pct, 1100);
        assert_eq!(row.utilization_tier, UtilizationTier::High);
        assert_eq!(row.peer_change_pct, None);
        assert_eq!(peer_change_pct(dec!(245), None), None);
    }

    #[test]
    fn test_build_rows_matches_overrides() {
        let rows = build_rows(
            &dashboard_snapshots(),
            &[loft_override()],
            &PricingTableOptions::default(),
        );
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[2].override_adr, Some(dec!(325)));
        assert_eq!(rows[2].effective_adr, dec!(325));
        assert_eq!(rows[0].override_adr, None);
    }

    #[test]
    fn test_build_rows_can_hide_events() {
        let options = PricingTableOptions {
            show_events: false,
            ..Default::default()
        };
        let rows = build_rows(&dashboard_snapshots(), &[], &options);
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| !r.is_event));
    }

    #[test]
    fn test_kpis_follow_the_displayed_rows() {
        let snapshots = dashboard_snapshots();
        let plain = build_rows(&snapshots, &[loft_override()], &PricingTableOptions::default());
        let peer = build_rows(
            &snapshots,
            &[loft_override()],
            &PricingTableOptions {
                apply_peer_pricing: true,
                sensitivity: 50,
                show_events: true,
            },
        );

        let plain_kpis = compute_kpis(&plain);
        // (252 + 265 + 310 + 248) / 4
        assert_eq!(plain_kpis.avg_suggested_adr, Some(dec!(268.75)));
        // (238 + 242 + 315 + 240) / 4
        assert_eq!(compute_kpis(&peer).avg_suggested_adr, Some(dec!(258.75)));

        assert_eq!(plain_kpis.manual_overrides, 1);
        assert_eq!(plain_kpis.avg_utilization_pct, 71);
        assert_eq!(plain_kpis.avg_adr, Some(dec!(263.75)));
        assert_eq!(plain_kpis.avg_peer_adr, Some(dec!(258.75)));
        assert_eq!(plain_kpis.avg_sensitivity, Some(dec!(6.9)));
    }

    #[test]
    fn test_kpis_of_empty_table() {
        assert_eq!(compute_kpis(&[]), PricingKpis::default());
    }

    #[test]
    fn test_peer_change_saturates_for_extreme_rates() {
        assert_eq!(
            peer_change_pct(Decimal::MAX, Some(dec!(0.0001))),
            Some(Decimal::MAX)
        );
        assert_eq!(
            peer_change_pct(Decimal::MIN, Some(Decimal::MAX)),
            Some(dec!(-100))
        );
        assert_eq!(peer_change_pct(dec!(245), Some(Decimal::ZERO)), None);
    }
}
