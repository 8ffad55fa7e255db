//! SQLite storage implementation for Ratewise.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `ratewise-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations (schema plus the default property)
//! - Repository implementations for all domain entities
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the workspace where Diesel dependencies exist.
//! `core` is database-agnostic and works with traits; the server wires both together.
//!
//! ```text
//! core (domain, calculators)
//!       │
//!       ▼
//! storage-sqlite (this crate)
//!       │
//!       ▼
//!   SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;
pub mod utils;

// Repository implementations
pub mod bookings;
pub mod breakeven;
pub mod pricing;
pub mod properties;
pub mod rates;
pub mod sensitivity;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

pub use bookings::BookingRepository;
pub use breakeven::CostProfileRepository;
pub use pricing::PricingRepository;
pub use properties::PropertyRepository;
pub use rates::RateRepository;
pub use sensitivity::SensitivityRepository;

// Re-export from ratewise-core for convenience
pub use ratewise_core::errors::{DatabaseError, Error, Result};
