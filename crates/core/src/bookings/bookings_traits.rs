use chrono::NaiveDate;

use crate::bookings::{Booking, BookingFilter, BookingSummary};
use crate::errors::Result;
use crate::utils::Timeframe;

/// Repository trait for reservations.
pub trait BookingRepositoryTrait: Send + Sync {
    /// Bookings of a property checking in within `[start, end]`, ordered by check-in.
    fn get_bookings(
        &self,
        property_id: &str,
        start: NaiveDate,
        end: NaiveDate,
        filter: &BookingFilter,
    ) -> Result<Vec<Booking>>;

    /// Latest bookings by check-in date, newest first.
    fn get_recent_bookings(&self, property_id: &str, limit: i64) -> Result<Vec<Booking>>;
}

pub trait BookingServiceTrait: Send + Sync {
    /// Booking counts, revenue, occupancy and conversion for a trailing window ending on `as_of`.
    fn get_booking_summary(
        &self,
        property_code: &str,
        timeframe: Timeframe,
        filter: &BookingFilter,
        as_of: NaiveDate,
    ) -> Result<BookingSummary>;
}
