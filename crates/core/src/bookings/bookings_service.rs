use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use log::debug;

use crate::bookings::{
    average_occupancy_pct, build_daily_series, conversion_rate_pct, total_revenue,
    BookingFilter, BookingRepositoryTrait, BookingServiceTrait, BookingSummary, RecentBooking,
};
use crate::constants::RECENT_BOOKINGS_LIMIT;
use crate::errors::Result;
use crate::properties::{total_rooms, PropertyServiceTrait};
use crate::utils::Timeframe;

pub struct BookingService {
    property_service: Arc<dyn PropertyServiceTrait>,
    booking_repository: Arc<dyn BookingRepositoryTrait>,
}

impl BookingService {
    pub fn new(
        property_service: Arc<dyn PropertyServiceTrait>,
        booking_repository: Arc<dyn BookingRepositoryTrait>,
    ) -> Self {
        Self {
            property_service,
            booking_repository,
        }
    }
}

impl BookingServiceTrait for BookingService {
    fn get_booking_summary(
        &self,
        property_code: &str,
        timeframe: Timeframe,
        filter: &BookingFilter,
        as_of: NaiveDate,
    ) -> Result<BookingSummary> {
        let property = self.property_service.get_property(property_code)?;
        let room_types = self.property_service.get_room_types(property_code)?;
        let rooms = total_rooms(&room_types);
        let range = timeframe.rolling_range(as_of);

        let bookings =
            self.booking_repository
                .get_bookings(&property.id, range.start, range.end, filter)?;
        debug!(
            "Booking summary for '{}' {}..{}: {} bookings, {} rooms",
            property_code,
            range.start,
            range.end,
            bookings.len(),
            rooms
        );

        let series = build_daily_series(&bookings, &range, rooms);

        let names: HashMap<&str, &str> = room_types
            .iter()
            .map(|rt| (rt.id.as_str(), rt.name.as_str()))
            .collect();
        let recent = self
            .booking_repository
            .get_recent_bookings(&property.id, RECENT_BOOKINGS_LIMIT)?
            .into_iter()
            .map(|b| RecentBooking {
                room_type: b
                    .room_type_id
                    .as_deref()
                    .and_then(|id| names.get(id).copied())
                    .unwrap_or("Room")
                    .to_string(),
                guest: b.guest_name.clone().unwrap_or_else(|| "Guest".to_string()),
                amount: b.revenue(),
                id: b.id,
                check_in: b.check_in,
                nights: b.nights,
                rooms: b.rooms,
                status: b.status,
            })
            .collect();

        Ok(BookingSummary {
            range,
            total_bookings: bookings.len() as i64,
            total_revenue: total_revenue(&bookings),
            avg_occupancy_pct: average_occupancy_pct(&series),
            conversion_rate_pct: conversion_rate_pct(&bookings),
            series,
            recent,
        })
    }
}
