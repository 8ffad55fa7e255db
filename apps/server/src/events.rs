use serde_json::Value;
use tokio::sync::broadcast;

/// Event names pushed to dashboards over SSE.
pub const BREAKEVEN_SETTINGS_UPDATED: &str = "breakeven:settings-updated";
pub const PRICING_OVERRIDE_SAVED: &str = "pricing:override-saved";
pub const SENSITIVITY_SETTINGS_UPDATED: &str = "sensitivity:settings-updated";

/// Serializable envelope that carries event names and optional payloads.
#[derive(Clone, Debug)]
pub struct ServerEvent {
    pub name: &'static str,
    pub payload: Option<Value>,
}

impl ServerEvent {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            payload: None,
        }
    }

    pub fn with_payload(name: &'static str, payload: Value) -> Self {
        Self {
            name,
            payload: Some(payload),
        }
    }
}

/// Lightweight broadcast bus that fans out events to any connected clients.
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<ServerEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _receiver) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ServerEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: ServerEvent) {
        // No subscribers is not an error.
        let _ = self.sender.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_publish_reaches_subscribers() {
        let bus = EventBus::new(8);
        let mut rx = bus.subscribe();

        bus.publish(ServerEvent::new(PRICING_OVERRIDE_SAVED));

        let event = rx.recv().await.unwrap();
        assert_eq!(event.name, PRICING_OVERRIDE_SAVED);
        assert!(event.payload.is_none());
    }

    #[test]
    fn test_publish_without_subscribers_is_ignored() {
        let bus = EventBus::new(8);
        bus.publish(ServerEvent::new(BREAKEVEN_SETTINGS_UPDATED));
    }
}
