//! SQLite storage implementation for bookings.

mod model;
mod repository;

pub use model::{BookingDB, NewBookingDB};
pub use repository::BookingRepository;
