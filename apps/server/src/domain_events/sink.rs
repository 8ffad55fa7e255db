//! Web domain event sink implementation.

use ratewise_core::events::{DomainEvent, DomainEventSink};
use serde_json::Value;

use crate::events::{
    EventBus, ServerEvent, BREAKEVEN_SETTINGS_UPDATED, PRICING_OVERRIDE_SAVED,
    SENSITIVITY_SETTINGS_UPDATED,
};

/// Domain event sink for the web server runtime.
///
/// Publishing on the broadcast bus never blocks, so events are forwarded
/// inline from `emit()`.
pub struct WebDomainEventSink {
    event_bus: EventBus,
}

impl WebDomainEventSink {
    pub fn new(event_bus: EventBus) -> Self {
        Self { event_bus }
    }
}

/// Server event carrying the domain event plus a `message` for notification toasts.
pub fn server_event_for(event: &DomainEvent) -> ServerEvent {
    let name = match event {
        DomainEvent::CostProfileUpdated { .. } => BREAKEVEN_SETTINGS_UPDATED,
        DomainEvent::RateOverrideSaved { .. } => PRICING_OVERRIDE_SAVED,
        DomainEvent::SensitivityThresholdUpdated { .. } => SENSITIVITY_SETTINGS_UPDATED,
    };

    match serde_json::to_value(event) {
        Ok(Value::Object(mut payload)) => {
            payload.insert("message".to_string(), Value::String(event.summary()));
            ServerEvent::with_payload(name, Value::Object(payload))
        }
        Ok(_) | Err(_) => {
            tracing::warn!("Domain event {} could not be serialized", name);
            ServerEvent::new(name)
        }
    }
}

impl DomainEventSink for WebDomainEventSink {
    fn emit(&self, event: DomainEvent) {
        tracing::debug!("Domain event for '{}': {}", event.property_code(), event.summary());
        self.event_bus.publish(server_event_for(&event));
    }
}
