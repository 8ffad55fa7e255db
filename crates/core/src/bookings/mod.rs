//! Bookings module - reservations and the occupancy figures derived from them.

mod bookings_calculator;
mod bookings_model;
mod bookings_service;
mod bookings_traits;

pub use bookings_calculator::*;
pub use bookings_model::{
    Booking, BookingFilter, BookingStatus, BookingSummary, DailyBookingPoint, OccupancyAggregate,
    RecentBooking,
};
pub use bookings_service::BookingService;
pub use bookings_traits::{BookingRepositoryTrait, BookingServiceTrait};
