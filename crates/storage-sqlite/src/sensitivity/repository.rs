use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use ratewise_core::sensitivity::{
    SensitivityRepositoryTrait, SensitivitySample, SensitivitySettings,
};
use ratewise_core::Result;

use super::model::{SensitivitySampleDB, SensitivitySettingsDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{sensitivity_samples, sensitivity_settings};

pub struct SensitivityRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SensitivityRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl SensitivityRepositoryTrait for SensitivityRepository {
    fn get_samples(
        &self,
        property_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<SensitivitySample>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = sensitivity_samples::table
            .filter(sensitivity_samples::property_id.eq(property_id))
            .filter(sensitivity_samples::sample_date.between(start, end))
            .select(SensitivitySampleDB::as_select())
            .order((
                sensitivity_samples::sample_date.asc(),
                sensitivity_samples::id.asc(),
            ))
            .load::<SensitivitySampleDB>(&mut conn)
            .map_err(StorageError::from)?;

        let samples = rows
            .into_iter()
            .map(SensitivitySample::try_from)
            .collect::<std::result::Result<Vec<_>, StorageError>>()?;
        Ok(samples)
    }

    fn get_settings(&self, property_id: &str) -> Result<Option<SensitivitySettings>> {
        let mut conn = get_connection(&self.pool)?;
        let row = sensitivity_settings::table
            .find(property_id)
            .select(SensitivitySettingsDB::as_select())
            .first::<SensitivitySettingsDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;

        Ok(row.map(SensitivitySettings::try_from).transpose()?)
    }

    async fn upsert_settings(
        &self,
        property_id: &str,
        settings: SensitivitySettings,
    ) -> Result<SensitivitySettings> {
        let row = SensitivitySettingsDB {
            property_id: property_id.to_string(),
            alert_threshold: settings.alert_threshold.to_string(),
            updated_at: Utc::now().naive_utc(),
        };

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<SensitivitySettings> {
                let saved = diesel::insert_into(sensitivity_settings::table)
                    .values(&row)
                    .on_conflict(sensitivity_settings::property_id)
                    .do_update()
                    .set(&row)
                    .returning(SensitivitySettingsDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(SensitivitySettings::try_from(saved)?)
            })
            .await
    }
}
