use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One published nightly rate for a room type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RateSample {
    pub room_type_id: String,
    pub rate_date: NaiveDate,
    pub amount_per_night: Decimal,
}

impl RateSample {
    /// Only strictly positive amounts count toward averages.
    pub fn is_usable(&self) -> bool {
        self.amount_per_night > Decimal::ZERO
    }
}
