use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::constants::{DISPLAY_DECIMAL_PRECISION, FALLBACK_AVG_ADR};
use crate::rates::RateSample;
use crate::utils::{mean, round_half_up, saturating_add};

/// Mean of the usable samples, `None` when there are none.
pub fn average_rate(samples: &[RateSample]) -> Option<Decimal> {
    mean(
        samples
            .iter()
            .filter(|s| s.is_usable())
            .map(|s| s.amount_per_night),
    )
}

/// Property-wide ADR for a period, rounded to cents, falling back to
/// `FALLBACK_AVG_ADR` when no sample is usable.
pub fn average_rate_or_fallback(samples: &[RateSample]) -> Decimal {
    average_rate(samples)
        .map(|avg| round_half_up(avg, DISPLAY_DECIMAL_PRECISION))
        .unwrap_or(FALLBACK_AVG_ADR)
}

/// Mean usable rate per room type. Room types whose samples are all
/// unusable are absent from the map.
pub fn average_rate_by_room_type(samples: &[RateSample]) -> HashMap<String, Decimal> {
    let mut sums: HashMap<&str, (Decimal, i64)> = HashMap::new();
    for sample in samples.iter().filter(|s| s.is_usable()) {
        let entry = sums
            .entry(sample.room_type_id.as_str())
            .or_insert((Decimal::ZERO, 0));
        entry.0 = saturating_add(entry.0, sample.amount_per_night);
        entry.1 += 1;
    }
    sums.into_iter()
        .map(|(id, (sum, count))| (id.to_string(), sum / Decimal::from(count)))
        .collect()
}
