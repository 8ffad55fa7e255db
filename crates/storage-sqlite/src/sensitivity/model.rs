use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use ratewise_core::sensitivity::{SensitivitySample, SensitivitySettings};

use crate::errors::StorageError;
use crate::utils::{parse_decimal, parse_optional_decimal};

#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::sensitivity_samples)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SensitivitySampleDB {
    pub id: String,
    pub property_id: String,
    pub room_type_id: Option<String>,
    pub sample_date: NaiveDate,
    pub sensitivity: String,
    pub adr: String,
    pub utilization: String,
    pub price_elasticity: Option<String>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::sensitivity_samples)]
pub struct NewSensitivitySampleDB {
    pub id: String,
    pub property_id: String,
    pub room_type_id: Option<String>,
    pub sample_date: NaiveDate,
    pub sensitivity: String,
    pub adr: String,
    pub utilization: String,
    pub price_elasticity: Option<String>,
}

#[derive(Queryable, Insertable, AsChangeset, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::sensitivity_settings)]
#[diesel(primary_key(property_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SensitivitySettingsDB {
    pub property_id: String,
    pub alert_threshold: String,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<SensitivitySampleDB> for SensitivitySample {
    type Error = StorageError;

    fn try_from(db: SensitivitySampleDB) -> Result<Self, Self::Error> {
        Ok(Self {
            date: db.sample_date,
            sensitivity: parse_decimal(&db.sensitivity, "sensitivity")?,
            adr: parse_decimal(&db.adr, "adr")?,
            utilization_pct: parse_decimal(&db.utilization, "utilization")?,
            price_elasticity: parse_optional_decimal(
                db.price_elasticity.as_deref(),
                "price_elasticity",
            )?,
            room_type_id: db.room_type_id,
        })
    }
}

impl TryFrom<SensitivitySettingsDB> for SensitivitySettings {
    type Error = StorageError;

    fn try_from(db: SensitivitySettingsDB) -> Result<Self, Self::Error> {
        Ok(Self {
            alert_threshold: parse_decimal(&db.alert_threshold, "alert_threshold")?,
        })
    }
}
