use chrono::NaiveDate;
use diesel::prelude::*;
use std::sync::Arc;

use ratewise_core::rates::{RateRepositoryTrait, RateSample};
use ratewise_core::Result;

use super::model::PublishedRateDB;
use crate::db::{get_connection, DbPool};
use crate::errors::{IntoCore, StorageError};
use crate::schema::published_rates;

pub struct RateRepository {
    pool: Arc<DbPool>,
}

impl RateRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl RateRepositoryTrait for RateRepository {
    fn get_published_rates(
        &self,
        property_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<RateSample>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = published_rates::table
            .filter(published_rates::property_id.eq(property_id))
            .filter(published_rates::rate_date.between(start, end))
            .select(PublishedRateDB::as_select())
            .order((published_rates::rate_date.asc(), published_rates::room_type_id.asc()))
            .load::<PublishedRateDB>(&mut conn)
            .into_core()?;

        let samples = rows
            .into_iter()
            .map(RateSample::try_from)
            .collect::<std::result::Result<Vec<_>, StorageError>>()?;
        Ok(samples)
    }
}
