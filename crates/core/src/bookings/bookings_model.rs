//! Booking domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::{Error, ValidationError};
use crate::utils::{round_to_i64, saturating_mul, DateRange};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Pending,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Pending => "pending",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

impl FromStr for BookingStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "confirmed" => Ok(BookingStatus::Confirmed),
            "pending" => Ok(BookingStatus::Pending),
            "cancelled" | "canceled" => Ok(BookingStatus::Cancelled),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown booking status '{}'",
                other
            )))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub property_id: String,
    pub room_type_id: Option<String>,
    pub guest_name: Option<String>,
    pub check_in: NaiveDate,
    pub nights: i32,
    pub rooms: i32,
    pub status: BookingStatus,
    pub price_per_night: Decimal,
}

impl Booking {
    pub fn is_confirmed(&self) -> bool {
        self.status == BookingStatus::Confirmed
    }

    /// Rooms × nights; negative counts are treated as zero.
    pub fn room_nights(&self) -> i64 {
        i64::from(self.rooms.max(0)) * i64::from(self.nights.max(0))
    }

    /// Revenue of a single night of the stay (price × rooms).
    pub fn nightly_revenue(&self) -> Decimal {
        saturating_mul(self.price_per_night, Decimal::from(self.rooms.max(0)))
    }

    pub fn revenue(&self) -> Decimal {
        saturating_mul(self.nightly_revenue(), Decimal::from(self.nights.max(0)))
    }

    /// Every night of the stay, starting on the check-in date.
    pub fn stay_dates(&self) -> impl Iterator<Item = NaiveDate> {
        self.check_in.iter_days().take(self.nights.max(0) as usize)
    }
}

/// Rooms sold against rooms available in a period.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct OccupancyAggregate {
    pub rooms_sold_nights: i64,
    pub total_available_room_nights: i64,
}

impl OccupancyAggregate {
    pub fn new(rooms_sold_nights: i64, total_available_room_nights: i64) -> Self {
        Self {
            rooms_sold_nights: rooms_sold_nights.max(0),
            total_available_room_nights: total_available_room_nights.max(0),
        }
    }

    /// Sold / available, clamped to `[0, 1]`; zero when nothing is available.
    pub fn occupancy_rate(&self) -> Decimal {
        if self.total_available_room_nights == 0 {
            return Decimal::ZERO;
        }
        (Decimal::from(self.rooms_sold_nights) / Decimal::from(self.total_available_room_nights))
            .clamp(Decimal::ZERO, Decimal::ONE)
    }

    pub fn occupancy_pct(&self) -> i64 {
        round_to_i64(self.occupancy_rate() * Decimal::ONE_HUNDRED)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyBookingPoint {
    pub date: NaiveDate,
    /// Bookings checking in on this date
    pub bookings: i64,
    pub revenue: Decimal,
    pub rooms_sold: i64,
    pub occupancy_pct: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecentBooking {
    pub id: String,
    pub guest: String,
    pub room_type: String,
    pub check_in: NaiveDate,
    pub nights: i32,
    pub rooms: i32,
    pub amount: Decimal,
    pub status: BookingStatus,
}

/// Optional narrowing of a booking query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingFilter {
    pub status: Option<BookingStatus>,
    pub room_type_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSummary {
    pub range: DateRange,
    pub total_bookings: i64,
    pub total_revenue: Decimal,
    pub avg_occupancy_pct: i64,
    pub conversion_rate_pct: Decimal,
    pub series: Vec<DailyBookingPoint>,
    pub recent: Vec<RecentBooking>,
}
