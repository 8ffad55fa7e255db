use async_trait::async_trait;
use chrono::NaiveDate;

use crate::errors::Result;
use crate::pricing::{
    NewRateOverride, PricingSnapshot, PricingTable, PricingTableOptions, RateOverride,
};

/// Repository trait for pricing snapshots and manual rate overrides.
#[async_trait]
pub trait PricingRepositoryTrait: Send + Sync {
    /// Snapshots with `date` in `[start, end]`, ordered by date then room type.
    fn get_pricing_snapshots(
        &self,
        property_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PricingSnapshot>>;

    fn get_rate_overrides(
        &self,
        property_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<RateOverride>>;

    /// Inserts or replaces the override for the room type and date.
    async fn upsert_rate_override(
        &self,
        property_id: &str,
        new_override: NewRateOverride,
    ) -> Result<RateOverride>;
}

#[async_trait]
pub trait PricingServiceTrait: Send + Sync {
    fn get_pricing_table(
        &self,
        property_code: &str,
        start: NaiveDate,
        end: NaiveDate,
        options: PricingTableOptions,
    ) -> Result<PricingTable>;

    async fn save_rate_override(
        &self,
        property_code: &str,
        new_override: NewRateOverride,
    ) -> Result<RateOverride>;
}
