use async_trait::async_trait;
use chrono::NaiveDate;

use crate::breakeven::{BreakevenAnalysis, CostProfile};
use crate::errors::Result;
use crate::utils::Timeframe;

/// Repository trait for the stored cost settings of a property.
#[async_trait]
pub trait CostProfileRepositoryTrait: Send + Sync {
    /// `None` when the property never saved breakeven settings.
    fn get_cost_profile(&self, property_id: &str) -> Result<Option<CostProfile>>;
    async fn upsert_cost_profile(&self, property_id: &str, profile: CostProfile)
        -> Result<CostProfile>;
}

#[async_trait]
pub trait BreakevenServiceTrait: Send + Sync {
    /// Breakeven figures for the calendar period of `timeframe` ending on `as_of`.
    /// `what_if` replaces the stored cost profile for this calculation only.
    fn get_breakeven_analysis(
        &self,
        property_code: &str,
        timeframe: Timeframe,
        what_if: Option<CostProfile>,
        as_of: NaiveDate,
    ) -> Result<BreakevenAnalysis>;

    /// Stored profile, or the defaults when nothing was saved.
    fn get_cost_profile(&self, property_code: &str) -> Result<CostProfile>;

    async fn update_cost_profile(
        &self,
        property_code: &str,
        profile: CostProfile,
    ) -> Result<CostProfile>;
}
