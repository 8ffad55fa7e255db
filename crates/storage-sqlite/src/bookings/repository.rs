use chrono::NaiveDate;
use diesel::prelude::*;
use std::sync::Arc;

use ratewise_core::bookings::{Booking, BookingFilter, BookingRepositoryTrait};
use ratewise_core::Result;

use super::model::BookingDB;
use crate::db::{get_connection, DbConnection, DbPool};
use crate::errors::StorageError;
use crate::schema::bookings;
use crate::utils::chunk_for_sqlite;

pub struct BookingRepository {
    pool: Arc<DbPool>,
}

impl BookingRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    fn load_range(
        conn: &mut DbConnection,
        property_id: &str,
        start: NaiveDate,
        end: NaiveDate,
        filter: &BookingFilter,
        room_type_ids: Option<&[String]>,
    ) -> std::result::Result<Vec<BookingDB>, StorageError> {
        let mut query = bookings::table
            .filter(bookings::property_id.eq(property_id))
            .filter(bookings::check_in.between(start, end))
            .select(BookingDB::as_select())
            .into_boxed();

        if let Some(status) = filter.status {
            query = query.filter(bookings::status.eq(status.as_str()));
        }
        if let Some(ids) = room_type_ids {
            query = query.filter(bookings::room_type_id.eq_any(ids));
        }

        Ok(query.load::<BookingDB>(conn)?)
    }

    fn into_domain(rows: Vec<BookingDB>) -> Result<Vec<Booking>> {
        let bookings = rows
            .into_iter()
            .map(Booking::try_from)
            .collect::<std::result::Result<Vec<_>, StorageError>>()?;
        Ok(bookings)
    }
}

impl BookingRepositoryTrait for BookingRepository {
    fn get_bookings(
        &self,
        property_id: &str,
        start: NaiveDate,
        end: NaiveDate,
        filter: &BookingFilter,
    ) -> Result<Vec<Booking>> {
        let mut conn = get_connection(&self.pool)?;

        let mut rows = match filter.room_type_ids.as_deref() {
            Some([]) => return Ok(Vec::new()),
            Some(ids) => {
                let mut rows = Vec::new();
                for chunk in chunk_for_sqlite(ids) {
                    rows.extend(Self::load_range(
                        &mut conn,
                        property_id,
                        start,
                        end,
                        filter,
                        Some(chunk),
                    )?);
                }
                rows
            }
            None => Self::load_range(&mut conn, property_id, start, end, filter, None)?,
        };
        rows.sort_by(|a, b| a.check_in.cmp(&b.check_in).then_with(|| a.id.cmp(&b.id)));

        Self::into_domain(rows)
    }

    fn get_recent_bookings(&self, property_id: &str, limit: i64) -> Result<Vec<Booking>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = bookings::table
            .filter(bookings::property_id.eq(property_id))
            .select(BookingDB::as_select())
            .order((bookings::check_in.desc(), bookings::created_at.desc()))
            .limit(limit.max(0))
            .load::<BookingDB>(&mut conn)
            .map_err(StorageError::from)?;
        Self::into_domain(rows)
    }
}
