//! SQLite storage implementation for published rates.

mod model;
mod repository;

pub use model::{NewPublishedRateDB, PublishedRateDB};
pub use repository::RateRepository;
