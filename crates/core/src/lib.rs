//! Ratewise Core - Domain entities, calculators, services, and traits.
//!
//! This crate contains the pricing analytics of the Ratewise dashboards:
//! breakeven thresholds, the elasticity curve and peer-based suggested rates.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod bookings;
pub mod breakeven;
pub mod constants;
pub mod errors;
pub mod events;
pub mod pricing;
pub mod properties;
pub mod rates;
pub mod sensitivity;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
