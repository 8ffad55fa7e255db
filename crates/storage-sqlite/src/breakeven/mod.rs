//! SQLite storage implementation for the breakeven cost settings.

mod model;
mod repository;

pub use model::BreakevenSettingsDB;
pub use repository::CostProfileRepository;
