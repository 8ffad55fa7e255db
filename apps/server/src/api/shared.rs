use std::str::FromStr;

use chrono::NaiveDate;
use ratewise_core::utils::{business_date_today, Timeframe};

use crate::error::ApiResult;

/// Timeframe query value; a missing one means the current month.
pub fn parse_timeframe(raw: Option<&str>) -> ApiResult<Timeframe> {
    match raw {
        Some(value) if !value.trim().is_empty() => Ok(Timeframe::from_str(value)?),
        _ => Ok(Timeframe::default()),
    }
}

/// Reference date of a report; today's business date unless the caller pins one.
pub fn resolve_as_of(as_of: Option<NaiveDate>) -> NaiveDate {
    as_of.unwrap_or_else(business_date_today)
}
