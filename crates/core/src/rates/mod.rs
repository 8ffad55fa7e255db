//! Published rates module - observed room rates and their averages.

mod rates_calculator;
mod rates_model;
mod rates_traits;

pub use rates_calculator::*;
pub use rates_model::RateSample;
pub use rates_traits::RateRepositoryTrait;
