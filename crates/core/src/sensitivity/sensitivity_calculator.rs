use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap};

use crate::sensitivity::{SensitivityDay, SensitivityLevel, SensitivitySample};
use crate::utils::{mean, round_half_up, round_to_i64};

/// Collapses samples into one row per date, oldest first. `rooms_by_date`
/// supplies the booked rooms shown next to each day.
pub fn aggregate_by_day(
    samples: &[SensitivitySample],
    rooms_by_date: &HashMap<NaiveDate, i64>,
) -> Vec<SensitivityDay> {
    let mut by_day: BTreeMap<NaiveDate, Vec<&SensitivitySample>> = BTreeMap::new();
    for sample in samples {
        by_day.entry(sample.date).or_default().push(sample);
    }

    by_day
        .into_iter()
        .filter_map(|(date, group)| {
            let sensitivity = round_half_up(mean(group.iter().map(|s| s.sensitivity))?, 1);
            let adr = round_half_up(mean(group.iter().map(|s| s.adr))?, 0);
            let utilization = mean(group.iter().map(|s| s.utilization_pct))?;
            Some(SensitivityDay {
                date,
                sensitivity,
                adr,
                utilization_pct: round_to_i64(utilization),
                bookings: rooms_by_date.get(&date).copied().unwrap_or(0),
                level: SensitivityLevel::from_score(sensitivity),
            })
        })
        .collect()
}

/// The slope is repeated on every sample of a period; the first one carrying it wins.
pub fn elasticity_slope(samples: &[SensitivitySample]) -> Option<Decimal> {
    samples.iter().find_map(|s| s.price_elasticity)
}

pub fn average_sensitivity(days: &[SensitivityDay]) -> Option<Decimal> {
    mean(days.iter().map(|d| d.sensitivity)).map(|avg| round_half_up(avg, 1))
}

/// Days whose score reaches the alert threshold.
pub fn high_sensitivity_days(days: &[SensitivityDay], threshold: Decimal) -> i64 {
    days.iter().filter(|d| d.sensitivity >= threshold).count() as i64
}

/// Mean daily ADR and utilization feeding the elasticity curve; zero for an empty period.
pub fn curve_inputs(days: &[SensitivityDay]) -> (Decimal, Decimal) {
    let adr = mean(days.iter().map(|d| d.adr)).unwrap_or(Decimal::ZERO);
    let utilization =
        mean(days.iter().map(|d| Decimal::from(d.utilization_pct))).unwrap_or(Decimal::ZERO);
    (adr, utilization)
}
