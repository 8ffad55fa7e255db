use async_trait::async_trait;
use chrono::NaiveDate;

use crate::errors::Result;
use crate::sensitivity::{SensitivityAnalysis, SensitivitySample, SensitivitySettings};
use crate::utils::Timeframe;

/// Repository trait for sensitivity observations and alert settings.
#[async_trait]
pub trait SensitivityRepositoryTrait: Send + Sync {
    /// Samples with `date` in `[start, end]`, ordered by date.
    fn get_samples(
        &self,
        property_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<SensitivitySample>>;

    fn get_settings(&self, property_id: &str) -> Result<Option<SensitivitySettings>>;

    async fn upsert_settings(
        &self,
        property_id: &str,
        settings: SensitivitySettings,
    ) -> Result<SensitivitySettings>;
}

#[async_trait]
pub trait SensitivityServiceTrait: Send + Sync {
    /// Sensitivity days, KPIs and elasticity curve for the trailing window ending on `as_of`.
    fn get_sensitivity_analysis(
        &self,
        property_code: &str,
        timeframe: Timeframe,
        as_of: NaiveDate,
    ) -> Result<SensitivityAnalysis>;

    fn get_settings(&self, property_code: &str) -> Result<SensitivitySettings>;

    async fn update_settings(
        &self,
        property_code: &str,
        settings: SensitivitySettings,
    ) -> Result<SensitivitySettings>;
}
