use chrono::NaiveDate;
use diesel::prelude::*;

use ratewise_core::rates::RateSample;

use crate::errors::StorageError;
use crate::utils::parse_decimal;

#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::published_rates)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PublishedRateDB {
    pub id: String,
    pub property_id: String,
    pub room_type_id: String,
    pub rate_date: NaiveDate,
    pub amount_per_night: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::published_rates)]
pub struct NewPublishedRateDB {
    pub id: String,
    pub property_id: String,
    pub room_type_id: String,
    pub rate_date: NaiveDate,
    pub amount_per_night: String,
}

impl TryFrom<PublishedRateDB> for RateSample {
    type Error = StorageError;

    fn try_from(db: PublishedRateDB) -> Result<Self, Self::Error> {
        Ok(Self {
            amount_per_night: parse_decimal(&db.amount_per_night, "amount_per_night")?,
            room_type_id: db.room_type_id,
            rate_date: db.rate_date,
        })
    }
}
