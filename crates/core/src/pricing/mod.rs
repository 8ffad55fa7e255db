//! Pricing module - the daily pricing table, peer-based suggestions and manual overrides.

mod pricing_calculator;
mod pricing_model;
mod pricing_service;
mod pricing_traits;
mod rate_adjuster;


pub use pricing_calculator::*;
pub use pricing_model::*;
pub use pricing_service::PricingService;
pub use pricing_traits::{PricingRepositoryTrait, PricingServiceTrait};
pub use rate_adjuster::{adjust, apply_peer_pricing, average_suggested_adr};
