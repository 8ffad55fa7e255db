use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, ValidationError};

/// Default timezone for business dates.
/// Night audit boundaries follow the property's local day, not UTC.
pub const DEFAULT_BUSINESS_TZ: Tz = chrono_tz::America::New_York;

/// Converts a UTC instant to a business date in the given timezone.
pub fn business_date_from_utc(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Convenience function that uses the default business timezone.
pub fn business_date_today() -> NaiveDate {
    business_date_from_utc(Utc::now(), DEFAULT_BUSINESS_TZ)
}

pub fn get_days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    if start > end {
        return Vec::new();
    }
    start.iter_days().take_while(|d| *d <= end).collect()
}

/// First days of the `count` months ending with the month of `as_of`, oldest first.
pub fn trailing_month_starts(as_of: NaiveDate, count: u32) -> Vec<NaiveDate> {
    let current = as_of.with_day(1).unwrap_or(as_of);
    (0..count)
        .rev()
        .filter_map(|back| current.checked_sub_months(Months::new(back)))
        .collect()
}

/// Inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Number of days covered, never less than 1.
    pub fn days(&self) -> i64 {
        ((self.end - self.start).num_days() + 1).max(1)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Reporting window selected on the dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    #[serde(alias = "7d")]
    Week,
    #[default]
    #[serde(alias = "30d")]
    Month,
    #[serde(alias = "90d")]
    Quarter,
    Year,
}

impl Timeframe {
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::Week => "week",
            Timeframe::Month => "month",
            Timeframe::Quarter => "quarter",
            Timeframe::Year => "year",
        }
    }

    /// Trailing window ending on `end`: 7, 30, 90 or 365 days. Starts no
    /// earlier than `NaiveDate::MIN`.
    pub fn rolling_range(&self, end: NaiveDate) -> DateRange {
        let back = match self {
            Timeframe::Week => 6,
            Timeframe::Month => 29,
            Timeframe::Quarter => 89,
            Timeframe::Year => 364,
        };
        let start = end
            .checked_sub_signed(chrono::Duration::days(back))
            .unwrap_or(NaiveDate::MIN);
        DateRange::new(start, end)
    }

    /// Calendar window ending on `end`: the current month, the last three
    /// months or the last twelve months, each starting on the 1st. A week is
    /// always the trailing seven days.
    pub fn calendar_range(&self, end: NaiveDate) -> DateRange {
        let months_back = match self {
            Timeframe::Week => return self.rolling_range(end),
            Timeframe::Month => 0,
            Timeframe::Quarter => 2,
            Timeframe::Year => 11,
        };
        let first_of_month = end.with_day(1).unwrap_or(end);
        let start = first_of_month
            .checked_sub_months(Months::new(months_back))
            .unwrap_or(first_of_month);
        DateRange::new(start, end)
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "week" | "7d" => Ok(Timeframe::Week),
            "month" | "30d" => Ok(Timeframe::Month),
            "quarter" | "90d" => Ok(Timeframe::Quarter),
            "year" => Ok(Timeframe::Year),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown timeframe '{}'",
                other
            )))),
        }
    }
}
