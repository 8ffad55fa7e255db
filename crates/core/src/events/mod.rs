//! Domain events module.
//!
//! Provides domain event types and the sink trait for emitting events after
//! successful mutations. The server implements the sink to publish change
//! notifications to connected dashboards.

mod domain_event;
mod sink;

pub use domain_event::*;
pub use sink::*;
