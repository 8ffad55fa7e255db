//! Numeric helpers shared by the calculators.
//!
//! Rounding follows the dashboard convention: halves round toward positive
//! infinity, so `-2.5` rounds to `-2` and `2.5` rounds to `3`.

use log::debug;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::str::FromStr;

/// Rounds `value` to `dp` decimal places, halves toward positive infinity.
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    let scale = Decimal::from(10_i64.pow(dp));
    value
        .checked_mul(scale)
        .and_then(|scaled| scaled.checked_add(dec!(0.5)))
        .map(|shifted| shifted.floor() / scale)
        // Too large to scale; already far beyond the requested precision.
        .unwrap_or(value)
}

/// Rounds to a whole number and converts, saturating at the `i64` bounds.
pub fn round_to_i64(value: Decimal) -> i64 {
    to_i64_saturating(round_half_up(value, 0))
}

/// Rounds up to a whole number and converts, saturating at the `i64` bounds.
pub fn ceil_to_i64(value: Decimal) -> i64 {
    to_i64_saturating(value.ceil())
}

fn to_i64_saturating(value: Decimal) -> i64 {
    value.to_i64().unwrap_or(if value.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}

/// Divides, saturating to `Decimal::MAX` (or `MIN`) instead of overflowing.
///
/// The divisor must be non-zero; callers floor their denominators first.
pub fn saturating_div(numerator: Decimal, denominator: Decimal) -> Decimal {
    numerator.checked_div(denominator).unwrap_or_else(|| {
        if numerator.is_sign_negative() != denominator.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        }
    })
}

/// Multiplies, saturating to `Decimal::MAX` (or `MIN`) instead of overflowing.
pub fn saturating_mul(lhs: Decimal, rhs: Decimal) -> Decimal {
    lhs.checked_mul(rhs).unwrap_or_else(|| {
        if lhs.is_sign_negative() != rhs.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        }
    })
}

/// Adds, saturating to `Decimal::MAX` (or `MIN`) instead of overflowing.
pub fn saturating_add(lhs: Decimal, rhs: Decimal) -> Decimal {
    lhs.checked_add(rhs)
        .unwrap_or(if lhs < -rhs { Decimal::MIN } else { Decimal::MAX })
}

/// Subtracts, saturating to `Decimal::MAX` (or `MIN`) instead of overflowing.
pub fn saturating_sub(lhs: Decimal, rhs: Decimal) -> Decimal {
    lhs.checked_sub(rhs)
        .unwrap_or(if lhs < rhs { Decimal::MIN } else { Decimal::MAX })
}

/// Sum that sticks at the `Decimal` bounds.
pub fn saturating_sum<I>(values: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    values.into_iter().fold(Decimal::ZERO, saturating_add)
}

/// Parses a user-typed number, falling back to `default` when it is missing or not numeric.
///
/// Accepts plain and scientific notation, surrounding whitespace, and a leading `$`.
pub fn parse_decimal_or(raw: Option<&str>, default: Decimal) -> Decimal {
    let Some(raw) = raw else {
        return default;
    };
    let trimmed = raw.trim().trim_start_matches('$').replace(',', "");
    if trimmed.is_empty() {
        return default;
    }
    Decimal::from_str(&trimmed)
        .or_else(|_| Decimal::from_scientific(&trimmed))
        .unwrap_or_else(|_| {
            debug!("Unparseable numeric input '{}', using default {}", raw, default);
            default
        })
}

/// Arithmetic mean, `None` for an empty input. The running sum saturates.
pub fn mean<I>(values: I) -> Option<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    let mut sum = Decimal::ZERO;
    let mut count: i64 = 0;
    for value in values {
        sum = saturating_add(sum, value);
        count += 1;
    }
    if count == 0 {
        None
    } else {
        Some(sum / Decimal::from(count))
    }
}
