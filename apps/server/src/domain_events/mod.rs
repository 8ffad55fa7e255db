//! Domain events runtime bridge for the web server.
//!
//! Core services emit domain events through the injected sink after a save;
//! the sink turns them into named server events on the [`EventBus`] so that
//! open dashboards can refresh.
//!
//! [`EventBus`]: crate::events::EventBus

mod sink;

pub use sink::{server_event_for, WebDomainEventSink};
