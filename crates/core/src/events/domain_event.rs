//! Domain event types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Domain events emitted by core services after successful mutations.
///
/// These are facts about stored data changes. Runtime adapters translate them
/// into user-facing notifications (the server pushes them over SSE).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum DomainEvent {
    /// Fixed/variable cost settings of a property were saved.
    CostProfileUpdated {
        property_code: String,
        fixed_costs: Decimal,
        variable_cost_rate_pct: Decimal,
    },

    /// A manual rate override was saved for a room type and date.
    RateOverrideSaved {
        property_code: String,
        room_type_id: String,
        rate_date: NaiveDate,
        override_adr: Decimal,
    },

    /// The sensitivity alert threshold of a property changed.
    SensitivityThresholdUpdated {
        property_code: String,
        alert_threshold: Decimal,
    },
}

impl DomainEvent {
    pub fn property_code(&self) -> &str {
        match self {
            DomainEvent::CostProfileUpdated { property_code, .. }
            | DomainEvent::RateOverrideSaved { property_code, .. }
            | DomainEvent::SensitivityThresholdUpdated { property_code, .. } => property_code,
        }
    }

    /// Short human-readable message for notification toasts.
    pub fn summary(&self) -> String {
        match self {
            DomainEvent::CostProfileUpdated { .. } => "Breakeven settings saved".to_string(),
            DomainEvent::RateOverrideSaved {
                rate_date,
                override_adr,
                ..
            } => format!("Override of {} saved for {}", override_adr, rate_date),
            DomainEvent::SensitivityThresholdUpdated {
                alert_threshold, ..
            } => format!("Sensitivity alert threshold set to {}", alert_threshold),
        }
    }
}
