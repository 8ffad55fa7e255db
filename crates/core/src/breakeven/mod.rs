//! Breakeven module - cost structure, breakeven thresholds and margins.

mod breakeven_calculator;
mod breakeven_model;
mod breakeven_service;
mod breakeven_traits;

#[cfg(test)]
mod breakeven_calculator_tests;

pub use breakeven_calculator::*;
pub use breakeven_model::*;
pub use breakeven_service::BreakevenService;
pub use breakeven_traits::{BreakevenServiceTrait, CostProfileRepositoryTrait};
