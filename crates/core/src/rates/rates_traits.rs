use chrono::NaiveDate;

use crate::errors::Result;
use crate::rates::RateSample;

pub trait RateRepositoryTrait: Send + Sync {
    /// Published rates of a property with `rate_date` in `[start, end]`.
    fn get_published_rates(
        &self,
        property_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<RateSample>>;
}
