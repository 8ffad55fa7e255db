//! Database models for bookings.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use std::str::FromStr;

use ratewise_core::bookings::{Booking, BookingStatus};

use crate::errors::StorageError;
use crate::utils::parse_decimal;

#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::bookings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BookingDB {
    pub id: String,
    pub property_id: String,
    pub room_type_id: Option<String>,
    pub guest_name: Option<String>,
    pub check_in: NaiveDate,
    pub nights: i32,
    pub rooms: i32,
    pub status: String,
    pub price_per_night: String,
    pub created_at: NaiveDateTime,
}

/// Database model for inserting a booking; `created_at` is set by SQLite.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::bookings)]
pub struct NewBookingDB {
    pub id: String,
    pub property_id: String,
    pub room_type_id: Option<String>,
    pub guest_name: Option<String>,
    pub check_in: NaiveDate,
    pub nights: i32,
    pub rooms: i32,
    pub status: String,
    pub price_per_night: String,
}

impl TryFrom<BookingDB> for Booking {
    type Error = StorageError;

    fn try_from(db: BookingDB) -> Result<Self, Self::Error> {
        let status = BookingStatus::from_str(&db.status)
            .map_err(|_| StorageError::MalformedValue(format!("status '{}'", db.status)))?;
        Ok(Self {
            price_per_night: parse_decimal(&db.price_per_night, "price_per_night")?,
            id: db.id,
            property_id: db.property_id,
            room_type_id: db.room_type_id,
            guest_name: db.guest_name,
            check_in: db.check_in,
            nights: db.nights,
            rooms: db.rooms,
            status,
        })
    }
}

impl From<Booking> for NewBookingDB {
    fn from(domain: Booking) -> Self {
        Self {
            id: domain.id,
            property_id: domain.property_id,
            room_type_id: domain.room_type_id,
            guest_name: domain.guest_name,
            check_in: domain.check_in,
            nights: domain.nights,
            rooms: domain.rooms,
            status: domain.status.as_str().to_string(),
            price_per_night: domain.price_per_night.to_string(),
        }
    }
}
