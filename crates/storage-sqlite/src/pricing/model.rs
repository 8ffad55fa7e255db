//! Database models for the pricing table.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use ratewise_core::pricing::{PricingSnapshot, RateOverride};

use crate::errors::StorageError;
use crate::utils::{parse_decimal, parse_optional_decimal};

#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::pricing_snapshots)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PricingSnapshotDB {
    pub id: String,
    pub property_id: String,
    pub room_type_id: String,
    pub snapshot_date: NaiveDate,
    pub booked_count: i32,
    pub max_count: i32,
    pub adr: String,
    pub peer_adr: Option<String>,
    pub suggested_adr: String,
    pub sensitivity: String,
    pub is_event: bool,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::pricing_snapshots)]
pub struct NewPricingSnapshotDB {
    pub id: String,
    pub property_id: String,
    pub room_type_id: String,
    pub snapshot_date: NaiveDate,
    pub booked_count: i32,
    pub max_count: i32,
    pub adr: String,
    pub peer_adr: Option<String>,
    pub suggested_adr: String,
    pub sensitivity: String,
    pub is_event: bool,
}

#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::rate_overrides)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct RateOverrideDB {
    pub id: String,
    pub property_id: String,
    pub room_type_id: String,
    pub rate_date: NaiveDate,
    pub override_adr: String,
    pub updated_at: NaiveDateTime,
}

impl PricingSnapshotDB {
    /// Converts a row joined with the name of its room type.
    pub fn into_domain(self, room_type: String) -> Result<PricingSnapshot, StorageError> {
        Ok(PricingSnapshot {
            date: self.snapshot_date,
            room_type_id: self.room_type_id,
            room_type,
            booked_count: self.booked_count,
            max_count: self.max_count,
            adr: parse_decimal(&self.adr, "adr")?,
            peer_adr: parse_optional_decimal(self.peer_adr.as_deref(), "peer_adr")?,
            suggested_adr: parse_decimal(&self.suggested_adr, "suggested_adr")?,
            sensitivity: parse_decimal(&self.sensitivity, "sensitivity")?,
            is_event: self.is_event,
        })
    }
}

impl TryFrom<RateOverrideDB> for RateOverride {
    type Error = StorageError;

    fn try_from(db: RateOverrideDB) -> Result<Self, Self::Error> {
        Ok(Self {
            override_adr: parse_decimal(&db.override_adr, "override_adr")?,
            id: db.id,
            property_id: db.property_id,
            room_type_id: db.room_type_id,
            rate_date: db.rate_date,
            updated_at: db.updated_at,
        })
    }
}
