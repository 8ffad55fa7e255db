use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, info};
use rust_decimal::Decimal;

use crate::bookings::{rooms_booked_by_date, BookingFilter, BookingRepositoryTrait, BookingStatus};
use crate::errors::{Result, ValidationError};
use crate::events::{DomainEvent, DomainEventSink};
use crate::pricing::PricingRepositoryTrait;
use crate::properties::PropertyServiceTrait;
use crate::sensitivity::{
    aggregate_by_day, average_sensitivity, build_curve, curve_inputs, elasticity_slope,
    high_sensitivity_days, optimal_price, SensitivityAnalysis, SensitivityRepositoryTrait,
    SensitivityServiceTrait, SensitivitySettings,
};
use crate::utils::Timeframe;

const MAX_SENSITIVITY_SCORE: Decimal = Decimal::TEN;

pub struct SensitivityService {
    property_service: Arc<dyn PropertyServiceTrait>,
    sensitivity_repository: Arc<dyn SensitivityRepositoryTrait>,
    booking_repository: Arc<dyn BookingRepositoryTrait>,
    pricing_repository: Arc<dyn PricingRepositoryTrait>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl SensitivityService {
    pub fn new(
        property_service: Arc<dyn PropertyServiceTrait>,
        sensitivity_repository: Arc<dyn SensitivityRepositoryTrait>,
        booking_repository: Arc<dyn BookingRepositoryTrait>,
        pricing_repository: Arc<dyn PricingRepositoryTrait>,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        Self {
            property_service,
            sensitivity_repository,
            booking_repository,
            pricing_repository,
            event_sink,
        }
    }
}

#[async_trait]
impl SensitivityServiceTrait for SensitivityService {
    fn get_sensitivity_analysis(
        &self,
        property_code: &str,
        timeframe: Timeframe,
        as_of: NaiveDate,
    ) -> Result<SensitivityAnalysis> {
        let property = self.property_service.get_property(property_code)?;
        let range = timeframe.rolling_range(as_of);

        let samples = self
            .sensitivity_repository
            .get_samples(&property.id, range.start, range.end)?;
        let filter = BookingFilter {
            status: Some(BookingStatus::Confirmed),
            room_type_ids: None,
        };
        let bookings =
            self.booking_repository
                .get_bookings(&property.id, range.start, range.end, &filter)?;
        let days = aggregate_by_day(&samples, &rooms_booked_by_date(&bookings));

        let settings = self
            .sensitivity_repository
            .get_settings(&property.id)?
            .unwrap_or_default();
        let slope = elasticity_slope(&samples);
        let (avg_adr, avg_utilization_pct) = curve_inputs(&days);

        let snapshots = self
            .pricing_repository
            .get_pricing_snapshots(&property.id, range.start, range.end)?;
        debug!(
            "Sensitivity for '{}' {}: {} samples over {} days, slope {:?}",
            property_code,
            timeframe,
            samples.len(),
            days.len(),
            slope
        );

        Ok(SensitivityAnalysis {
            property_code: property.code,
            timeframe,
            range,
            average_sensitivity: average_sensitivity(&days),
            high_sensitivity_days: high_sensitivity_days(&days, settings.alert_threshold),
            alert_threshold: settings.alert_threshold,
            elasticity_slope: slope,
            curve: build_curve(avg_adr, avg_utilization_pct, slope),
            avg_adr,
            avg_utilization_pct,
            optimal_price: optimal_price(snapshots.iter().map(|s| s.suggested_adr)),
            days,
        })
    }

    fn get_settings(&self, property_code: &str) -> Result<SensitivitySettings> {
        let property = self.property_service.get_property(property_code)?;
        Ok(self
            .sensitivity_repository
            .get_settings(&property.id)?
            .unwrap_or_default())
    }

    async fn update_settings(
        &self,
        property_code: &str,
        settings: SensitivitySettings,
    ) -> Result<SensitivitySettings> {
        if settings.alert_threshold < Decimal::ZERO
            || settings.alert_threshold > MAX_SENSITIVITY_SCORE
        {
            return Err(ValidationError::InvalidInput(format!(
                "Alert threshold must be between 0 and 10, got {}",
                settings.alert_threshold
            ))
            .into());
        }
        let property = self.property_service.get_property(property_code)?;
        let saved = self
            .sensitivity_repository
            .upsert_settings(&property.id, settings)
            .await?;
        info!(
            "Alert threshold for '{}' set to {}",
            property.code, saved.alert_threshold
        );

        self.event_sink.emit(DomainEvent::SensitivityThresholdUpdated {
            property_code: property.code,
            alert_threshold: saved.alert_threshold,
        });
        Ok(saved)
    }
}
