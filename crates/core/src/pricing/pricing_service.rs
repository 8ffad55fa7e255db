use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, info};
use rust_decimal::Decimal;

use crate::errors::{Error, Result, ValidationError};
use crate::events::{DomainEvent, DomainEventSink};
use crate::pricing::{
    build_rows, compute_kpis, NewRateOverride, PricingRepositoryTrait, PricingServiceTrait,
    PricingTable, PricingTableOptions, RateOverride,
};
use crate::properties::PropertyServiceTrait;
use crate::utils::DateRange;

pub struct PricingService {
    property_service: Arc<dyn PropertyServiceTrait>,
    pricing_repository: Arc<dyn PricingRepositoryTrait>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl PricingService {
    pub fn new(
        property_service: Arc<dyn PropertyServiceTrait>,
        pricing_repository: Arc<dyn PricingRepositoryTrait>,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        Self {
            property_service,
            pricing_repository,
            event_sink,
        }
    }
}

#[async_trait]
impl PricingServiceTrait for PricingService {
    fn get_pricing_table(
        &self,
        property_code: &str,
        start: NaiveDate,
        end: NaiveDate,
        options: PricingTableOptions,
    ) -> Result<PricingTable> {
        if start > end {
            return Err(ValidationError::InvalidInput(format!(
                "Start date {} is after end date {}",
                start, end
            ))
            .into());
        }
        let property = self.property_service.get_property(property_code)?;

        let snapshots = self
            .pricing_repository
            .get_pricing_snapshots(&property.id, start, end)?;
        let overrides = self
            .pricing_repository
            .get_rate_overrides(&property.id, start, end)?;
        debug!(
            "Pricing table for '{}' {}..{}: {} snapshots, {} overrides, peer pricing {}",
            property_code,
            start,
            end,
            snapshots.len(),
            overrides.len(),
            options.apply_peer_pricing
        );

        let rows = build_rows(&snapshots, &overrides, &options);
        let kpis = compute_kpis(&rows);

        Ok(PricingTable {
            property_code: property.code,
            range: DateRange::new(start, end),
            options,
            rows,
            kpis,
        })
    }

    async fn save_rate_override(
        &self,
        property_code: &str,
        new_override: NewRateOverride,
    ) -> Result<RateOverride> {
        if new_override.override_adr <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "Override rate must be positive, got {}",
                new_override.override_adr
            ))
            .into());
        }
        let property = self.property_service.get_property(property_code)?;
        let room_types = self.property_service.get_room_types(property_code)?;
        if !room_types.iter().any(|rt| rt.id == new_override.room_type_id) {
            return Err(Error::NotFound(format!(
                "Room type '{}' of property '{}'",
                new_override.room_type_id, property_code
            )));
        }

        let saved = self
            .pricing_repository
            .upsert_rate_override(&property.id, new_override)
            .await?;
        info!(
            "Saved override {} for room type {} on {}",
            saved.override_adr, saved.room_type_id, saved.rate_date
        );

        self.event_sink.emit(DomainEvent::RateOverrideSaved {
            property_code: property.code,
            room_type_id: saved.room_type_id.clone(),
            rate_date: saved.rate_date,
            override_adr: saved.override_adr,
        });
        Ok(saved)
    }
}
