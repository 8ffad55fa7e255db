//! Peer-based rate suggestions driven by the sensitivity slider.

use log::debug;
use rust_decimal::Decimal;

use crate::constants::{DISPLAY_DECIMAL_PRECISION, MAX_SLIDER_VALUE, NEUTRAL_SLIDER_VALUE};
use crate::pricing::PricingRow;
use crate::utils::{mean, round_half_up, saturating_mul};

/// Suggested ADR for a slider position: the peer rate moved by
/// `(slider − 50)%`, to cents. Without a peer rate the existing suggestion is
/// returned untouched. Positions above 100 count as 100.
pub fn adjust(peer_adr: Option<Decimal>, slider: u8, existing_suggested: Decimal) -> Decimal {
    let Some(peer) = peer_adr else {
        return existing_suggested;
    };
    let slider = slider.min(MAX_SLIDER_VALUE);
    let nudge = Decimal::from(i32::from(slider) - i32::from(NEUTRAL_SLIDER_VALUE))
        / Decimal::ONE_HUNDRED;
    round_half_up(
        saturating_mul(peer, Decimal::ONE + nudge),
        DISPLAY_DECIMAL_PRECISION,
    )
}

/// Copy of `rows` with suggestions recomputed from peer rates. Rows without
/// a peer rate keep their stored suggestion.
pub fn apply_peer_pricing(rows: &[PricingRow], slider: u8) -> Vec<PricingRow> {
    debug!("Applying peer pricing at slider {} to {} rows", slider, rows.len());
    rows.iter()
        .map(|row| {
            let suggested_adr = adjust(row.peer_adr, slider, row.suggested_adr);
            PricingRow {
                suggested_adr,
                effective_adr: row.override_adr.unwrap_or(suggested_adr),
                ..row.clone()
            }
        })
        .collect()
}

/// Mean suggested ADR of one consistent row set, to cents.
pub fn average_suggested_adr(rows: &[PricingRow]) -> Option<Decimal> {
    mean(rows.iter().map(|r| r.suggested_adr))
        .map(|avg| round_half_up(avg, DISPLAY_DECIMAL_PRECISION))
}
