use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Variable cost rate (percent of revenue) assumed when none is stored or the input is unusable
pub const DEFAULT_VARIABLE_COST_RATE_PCT: Decimal = dec!(35);

/// ADR assumed when no published rate in the period is positive
pub const FALLBACK_AVG_ADR: Decimal = dec!(245);

/// Lowest average rate the breakeven formula will divide by
pub const MIN_BREAKEVEN_RATE: Decimal = Decimal::ONE;

/// Lowest share of revenue left after variable costs that the breakeven formulas divide by.
/// Reached only when the variable cost rate is 100% or more.
pub const MIN_RETAINED_SHARE: Decimal = dec!(0.0001);

/// Price change steps (percent) of the simulated elasticity curve
pub const PRICE_CHANGE_GRID: [i32; 9] = [-20, -15, -10, -5, 0, 5, 10, 15, 20];

/// Bound applied to simulated demand change (percent), both directions
pub const DEMAND_CHANGE_CLAMP_PCT: Decimal = dec!(40);

/// Sensitivity slider position that leaves the peer rate untouched
pub const NEUTRAL_SLIDER_VALUE: u8 = 50;

/// Upper end of the sensitivity slider
pub const MAX_SLIDER_VALUE: u8 = 100;

/// Slider position the pricing dashboard opens with
pub const DEFAULT_SENSITIVITY_SLIDER: u8 = 75;

/// Sensitivity score at or above which a day counts as a high-sensitivity day
pub const DEFAULT_ALERT_THRESHOLD: Decimal = dec!(7.5);

/// Scores above this are "High"
pub const HIGH_SENSITIVITY_SCORE: Decimal = dec!(8);

/// Scores above this (and not High) are "Medium"
pub const MEDIUM_SENSITIVITY_SCORE: Decimal = dec!(6);

/// Decimal precision for currency display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Number of months shown in the revenue vs costs trend
pub const TREND_MONTHS: u32 = 6;

/// Number of bookings listed in the recent bookings panel
pub const RECENT_BOOKINGS_LIMIT: i64 = 5;
