//! Aggregations over booking lists. Pure functions; the service feeds them
//! repository data.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap};

use crate::bookings::{Booking, DailyBookingPoint, OccupancyAggregate};
use crate::utils::{
    get_days_between, mean, round_half_up, round_to_i64, saturating_add, saturating_sum, DateRange,
};

/// One point per day of `range`. Check-ins count on their arrival day; rooms
/// and revenue are spread across every night of the stay that falls inside
/// the range.
pub fn build_daily_series(
    bookings: &[Booking],
    range: &DateRange,
    total_rooms: i64,
) -> Vec<DailyBookingPoint> {
    let mut by_day: BTreeMap<NaiveDate, (i64, Decimal, i64)> = get_days_between(range.start, range.end)
        .into_iter()
        .map(|d| (d, (0, Decimal::ZERO, 0)))
        .collect();

    for booking in bookings {
        if let Some(day) = by_day.get_mut(&booking.check_in) {
            day.0 += 1;
        }
        for night in booking.stay_dates() {
            if let Some(day) = by_day.get_mut(&night) {
                day.1 = saturating_add(day.1, booking.nightly_revenue());
                day.2 = day.2.saturating_add(i64::from(booking.rooms.max(0)));
            }
        }
    }

    by_day
        .into_iter()
        .map(|(date, (count, revenue, rooms_sold))| DailyBookingPoint {
            date,
            bookings: count,
            revenue,
            rooms_sold,
            occupancy_pct: daily_occupancy_pct(rooms_sold, total_rooms),
        })
        .collect()
}

fn daily_occupancy_pct(rooms_sold: i64, total_rooms: i64) -> i64 {
    if total_rooms <= 0 {
        return 0;
    }
    round_to_i64(Decimal::from(rooms_sold) / Decimal::from(total_rooms) * Decimal::ONE_HUNDRED)
}

/// Rounded mean of the daily occupancy, 0 for an empty series.
pub fn average_occupancy_pct(series: &[DailyBookingPoint]) -> i64 {
    mean(series.iter().map(|p| Decimal::from(p.occupancy_pct)))
        .map(round_to_i64)
        .unwrap_or(0)
}

/// Confirmed share of all bookings, percent with one decimal.
pub fn conversion_rate_pct(bookings: &[Booking]) -> Decimal {
    let confirmed = bookings.iter().filter(|b| b.is_confirmed()).count();
    let total = bookings.len().max(1);
    round_half_up(
        Decimal::from(confirmed as i64) / Decimal::from(total as i64) * Decimal::ONE_HUNDRED,
        1,
    )
}

/// Revenue of every night of the given bookings, regardless of status.
pub fn total_revenue(bookings: &[Booking]) -> Decimal {
    saturating_sum(bookings.iter().map(Booking::revenue))
}

/// Room-nights sold by confirmed bookings against the rooms available over
/// `days_in_period` days.
pub fn occupancy_aggregate(
    bookings: &[Booking],
    total_rooms: i64,
    days_in_period: i64,
) -> OccupancyAggregate {
    let sold = bookings
        .iter()
        .filter(|b| b.is_confirmed())
        .map(Booking::room_nights)
        .fold(0_i64, i64::saturating_add);
    OccupancyAggregate::new(
        sold,
        total_rooms.max(0).saturating_mul(days_in_period.max(0)),
    )
}

/// Revenue of confirmed bookings.
pub fn confirmed_revenue(bookings: &[Booking]) -> Decimal {
    saturating_sum(
        bookings
            .iter()
            .filter(|b| b.is_confirmed())
            .map(Booking::revenue),
    )
}

/// Confirmed revenue bucketed by the month each night falls in, keyed by the
/// first day of that month.
pub fn monthly_revenue(bookings: &[Booking]) -> BTreeMap<NaiveDate, Decimal> {
    let mut months: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for booking in bookings.iter().filter(|b| b.is_confirmed()) {
        for night in booking.stay_dates() {
            let key = night.with_day(1).unwrap_or(night);
            let month = months.entry(key).or_insert(Decimal::ZERO);
            *month = saturating_add(*month, booking.nightly_revenue());
        }
    }
    months
}

/// Rooms occupied per night by confirmed bookings.
pub fn rooms_booked_by_date(bookings: &[Booking]) -> HashMap<NaiveDate, i64> {
    let mut by_date = HashMap::new();
    for booking in bookings.iter().filter(|b| b.is_confirmed()) {
        for night in booking.stay_dates() {
            let rooms = by_date.entry(night).or_insert(0_i64);
            *rooms = rooms.saturating_add(i64::from(booking.rooms.max(0)));
        }
    }
    by_date
}
