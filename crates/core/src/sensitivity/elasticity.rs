//! Synthetic elasticity curve.
//!
//! The curve is not fitted to data: a single slope (utilization points per
//! currency unit) is projected across a fixed grid of price changes.

use rust_decimal::Decimal;

use crate::constants::{DEMAND_CHANGE_CLAMP_PCT, DISPLAY_DECIMAL_PRECISION, PRICE_CHANGE_GRID};
use crate::sensitivity::ElasticityPoint;
use crate::utils::{mean, round_half_up, round_to_i64, saturating_div, saturating_mul};

/// Demand change (percent of current utilization) caused by a `price_change_pct`
/// move away from `avg_adr`, clamped to `±DEMAND_CHANGE_CLAMP_PCT`.
fn demand_change_pct(
    avg_adr: Decimal,
    avg_utilization_pct: Decimal,
    slope: Decimal,
    price_change_pct: Decimal,
) -> Decimal {
    if avg_utilization_pct.is_zero() {
        return Decimal::ZERO;
    }
    let delta_price = saturating_mul(avg_adr, price_change_pct / Decimal::ONE_HUNDRED);
    let utilization_change = saturating_mul(slope, delta_price);
    let pct = saturating_mul(
        saturating_div(utilization_change, avg_utilization_pct),
        Decimal::ONE_HUNDRED,
    );
    pct.clamp(-DEMAND_CHANGE_CLAMP_PCT, DEMAND_CHANGE_CLAMP_PCT)
}

/// Builds one point per step of `PRICE_CHANGE_GRID`. A missing slope means
/// demand does not react, so the revenue index simply follows the price.
pub fn build_curve(
    avg_adr: Decimal,
    avg_utilization_pct: Decimal,
    elasticity_slope: Option<Decimal>,
) -> Vec<ElasticityPoint> {
    let slope = elasticity_slope.unwrap_or(Decimal::ZERO);

    PRICE_CHANGE_GRID
        .iter()
        .map(|&step| {
            let price_change = Decimal::from(step);
            let demand = demand_change_pct(avg_adr, avg_utilization_pct, slope, price_change);
            let revenue = (Decimal::ONE + price_change / Decimal::ONE_HUNDRED)
                * (Decimal::ONE + demand / Decimal::ONE_HUNDRED)
                * Decimal::ONE_HUNDRED;
            ElasticityPoint {
                price_change_pct: step,
                demand_change_pct: round_half_up(demand, 1),
                revenue_index: round_to_i64(revenue),
            }
        })
        .collect()
}

/// Mean of the positive suggested ADRs, to cents. `None` when there are none.
pub fn optimal_price<I>(suggested_adrs: I) -> Option<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    mean(suggested_adrs.into_iter().filter(|adr| *adr > Decimal::ZERO))
        .map(|avg| round_half_up(avg, DISPLAY_DECIMAL_PRECISION))
}
