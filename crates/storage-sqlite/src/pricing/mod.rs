//! SQLite storage implementation for pricing snapshots and rate overrides.

mod model;
mod repository;

pub use model::{NewPricingSnapshotDB, PricingSnapshotDB, RateOverrideDB};
pub use repository::PricingRepository;
