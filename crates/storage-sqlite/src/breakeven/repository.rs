use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use ratewise_core::breakeven::{CostProfile, CostProfileRepositoryTrait};
use ratewise_core::Result;

use super::model::BreakevenSettingsDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::breakeven_settings;

pub struct CostProfileRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl CostProfileRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl CostProfileRepositoryTrait for CostProfileRepository {
    fn get_cost_profile(&self, property_id: &str) -> Result<Option<CostProfile>> {
        let mut conn = get_connection(&self.pool)?;
        let row = breakeven_settings::table
            .find(property_id)
            .select(BreakevenSettingsDB::as_select())
            .first::<BreakevenSettingsDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;

        Ok(row.map(CostProfile::try_from).transpose()?)
    }

    async fn upsert_cost_profile(
        &self,
        property_id: &str,
        profile: CostProfile,
    ) -> Result<CostProfile> {
        let row = BreakevenSettingsDB::new(property_id, &profile, Utc::now().naive_utc());

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<CostProfile> {
                let saved = diesel::insert_into(breakeven_settings::table)
                    .values(&row)
                    .on_conflict(breakeven_settings::property_id)
                    .do_update()
                    .set(&row)
                    .returning(BreakevenSettingsDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(CostProfile::try_from(saved)?)
            })
            .await
    }
}
