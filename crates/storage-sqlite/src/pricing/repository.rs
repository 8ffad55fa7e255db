use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use diesel::prelude::*;
use diesel::upsert::excluded;
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use ratewise_core::pricing::{
    NewRateOverride, PricingRepositoryTrait, PricingSnapshot, RateOverride,
};
use ratewise_core::Result;

use super::model::{PricingSnapshotDB, RateOverrideDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{pricing_snapshots, rate_overrides, room_types};

pub struct PricingRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl PricingRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl PricingRepositoryTrait for PricingRepository {
    fn get_pricing_snapshots(
        &self,
        property_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PricingSnapshot>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = pricing_snapshots::table
            .inner_join(room_types::table)
            .filter(pricing_snapshots::property_id.eq(property_id))
            .filter(pricing_snapshots::snapshot_date.between(start, end))
            .select((PricingSnapshotDB::as_select(), room_types::name))
            .order((pricing_snapshots::snapshot_date.asc(), room_types::name.asc()))
            .load::<(PricingSnapshotDB, String)>(&mut conn)
            .map_err(StorageError::from)?;

        let snapshots = rows
            .into_iter()
            .map(|(row, name)| row.into_domain(name))
            .collect::<std::result::Result<Vec<_>, StorageError>>()?;
        Ok(snapshots)
    }

    fn get_rate_overrides(
        &self,
        property_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<RateOverride>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = rate_overrides::table
            .filter(rate_overrides::property_id.eq(property_id))
            .filter(rate_overrides::rate_date.between(start, end))
            .select(RateOverrideDB::as_select())
            .order((rate_overrides::rate_date.asc(), rate_overrides::room_type_id.asc()))
            .load::<RateOverrideDB>(&mut conn)
            .map_err(StorageError::from)?;

        let overrides = rows
            .into_iter()
            .map(RateOverride::try_from)
            .collect::<std::result::Result<Vec<_>, StorageError>>()?;
        Ok(overrides)
    }

    async fn upsert_rate_override(
        &self,
        property_id: &str,
        new_override: NewRateOverride,
    ) -> Result<RateOverride> {
        let row = RateOverrideDB {
            id: Uuid::new_v4().to_string(),
            property_id: property_id.to_string(),
            room_type_id: new_override.room_type_id,
            rate_date: new_override.rate_date,
            override_adr: new_override.override_adr.to_string(),
            updated_at: Utc::now().naive_utc(),
        };

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<RateOverride> {
                // The existing row keeps its id; only the amount and timestamp change.
                let saved = diesel::insert_into(rate_overrides::table)
                    .values(&row)
                    .on_conflict((
                        rate_overrides::property_id,
                        rate_overrides::room_type_id,
                        rate_overrides::rate_date,
                    ))
                    .do_update()
                    .set((
                        rate_overrides::override_adr.eq(excluded(rate_overrides::override_adr)),
                        rate_overrides::updated_at.eq(excluded(rate_overrides::updated_at)),
                    ))
                    .returning(RateOverrideDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(RateOverride::try_from(saved)?)
            })
            .await
    }
}
