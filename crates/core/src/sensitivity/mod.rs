//! Sensitivity module - daily price sensitivity and the simulated elasticity curve.

mod elasticity;
mod sensitivity_calculator;
mod sensitivity_model;
mod sensitivity_service;
mod sensitivity_traits;

#[cfg(test)]
mod sensitivity_service_tests;

pub use elasticity::{build_curve, optimal_price};
pub use sensitivity_calculator::*;
pub use sensitivity_model::*;
pub use sensitivity_service::SensitivityService;
pub use sensitivity_traits::{SensitivityRepositoryTrait, SensitivityServiceTrait};
