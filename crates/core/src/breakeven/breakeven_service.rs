use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, info};
use rust_decimal::Decimal;

use crate::bookings::{
    confirmed_revenue, monthly_revenue, occupancy_aggregate, BookingFilter, BookingRepositoryTrait,
};
use crate::breakeven::{
    build_cost_breakdown, build_monthly_trend, build_room_type_breakevens,
    compute_breakeven_result, rooms_above_breakeven, BreakevenAnalysis, BreakevenServiceTrait,
    CostProfile, CostProfileRepositoryTrait,
};
use crate::constants::TREND_MONTHS;
use crate::errors::{Result, ValidationError};
use crate::events::{DomainEvent, DomainEventSink};
use crate::properties::{total_rooms, PropertyServiceTrait};
use crate::rates::{average_rate_by_room_type, average_rate_or_fallback, RateRepositoryTrait};
use crate::utils::{trailing_month_starts, Timeframe};

pub struct BreakevenService {
    property_service: Arc<dyn PropertyServiceTrait>,
    rate_repository: Arc<dyn RateRepositoryTrait>,
    booking_repository: Arc<dyn BookingRepositoryTrait>,
    cost_profile_repository: Arc<dyn CostProfileRepositoryTrait>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl BreakevenService {
    pub fn new(
        property_service: Arc<dyn PropertyServiceTrait>,
        rate_repository: Arc<dyn RateRepositoryTrait>,
        booking_repository: Arc<dyn BookingRepositoryTrait>,
        cost_profile_repository: Arc<dyn CostProfileRepositoryTrait>,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        Self {
            property_service,
            rate_repository,
            booking_repository,
            cost_profile_repository,
            event_sink,
        }
    }

    fn validate_profile(profile: &CostProfile) -> Result<()> {
        if profile.fixed_costs < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "Fixed costs cannot be negative".to_string(),
            )
            .into());
        }
        if profile.variable_cost_rate_pct < Decimal::ZERO
            || profile.variable_cost_rate_pct >= Decimal::ONE_HUNDRED
        {
            return Err(ValidationError::InvalidInput(format!(
                "Variable cost rate must be at least 0% and below 100%, got {}%",
                profile.variable_cost_rate_pct
            ))
            .into());
        }
        Ok(())
    }
}

#[async_trait]
impl BreakevenServiceTrait for BreakevenService {
    fn get_breakeven_analysis(
        &self,
        property_code: &str,
        timeframe: Timeframe,
        what_if: Option<CostProfile>,
        as_of: NaiveDate,
    ) -> Result<BreakevenAnalysis> {
        let property = self.property_service.get_property(property_code)?;
        let room_types = self.property_service.get_room_types(property_code)?;
        let rooms = total_rooms(&room_types);
        let range = timeframe.calendar_range(as_of);
        let days = range.days();

        let cost_profile = match what_if {
            Some(profile) => profile,
            None => self
                .cost_profile_repository
                .get_cost_profile(&property.id)?
                .unwrap_or_default(),
        };

        let rates = self
            .rate_repository
            .get_published_rates(&property.id, range.start, range.end)?;
        let avg_adr = average_rate_or_fallback(&rates);
        let adr_by_room_type = average_rate_by_room_type(&rates);

        let bookings = self.booking_repository.get_bookings(
            &property.id,
            range.start,
            range.end,
            &BookingFilter::default(),
        )?;
        let occupancy = occupancy_aggregate(&bookings, rooms, days);

        let result = compute_breakeven_result(&cost_profile, avg_adr, &occupancy, rooms, days);
        debug!(
            "Breakeven for '{}' {} ({} days): {} room-nights at ADR {}, {} sold",
            property_code,
            timeframe,
            days,
            result.breakeven_room_nights_per_period,
            avg_adr,
            occupancy.rooms_sold_nights
        );

        let months = trailing_month_starts(as_of, TREND_MONTHS);
        let mut revenue_by_month = match months.first() {
            Some(trend_start) => {
                let trend_bookings = self.booking_repository.get_bookings(
                    &property.id,
                    *trend_start,
                    as_of,
                    &BookingFilter::default(),
                )?;
                monthly_revenue(&trend_bookings)
            }
            None => Default::default(),
        };
        // Stays running past `as_of` would add months beyond the trend window.
        revenue_by_month.retain(|month, _| months.contains(month));
        for month in &months {
            revenue_by_month.entry(*month).or_insert(Decimal::ZERO);
        }

        Ok(BreakevenAnalysis {
            property_code: property.code,
            timeframe,
            range,
            days_in_period: days,
            cost_profile,
            avg_adr,
            total_rooms: rooms,
            range_revenue: confirmed_revenue(&bookings),
            rooms_above_breakeven: rooms_above_breakeven(
                occupancy.rooms_sold_nights,
                result.breakeven_room_nights_per_period,
            ),
            room_types: build_room_type_breakevens(
                &room_types,
                &adr_by_room_type,
                avg_adr,
                &cost_profile,
                rooms,
                days,
            ),
            cost_breakdown: build_cost_breakdown(cost_profile.fixed_costs),
            monthly_trend: build_monthly_trend(&revenue_by_month, &cost_profile),
            occupancy,
            result,
        })
    }

    fn get_cost_profile(&self, property_code: &str) -> Result<CostProfile> {
        let property = self.property_service.get_property(property_code)?;
        Ok(self
            .cost_profile_repository
            .get_cost_profile(&property.id)?
            .unwrap_or_default())
    }

    async fn update_cost_profile(
        &self,
        property_code: &str,
        profile: CostProfile,
    ) -> Result<CostProfile> {
        Self::validate_profile(&profile)?;
        let property = self.property_service.get_property(property_code)?;
        let saved = self
            .cost_profile_repository
            .upsert_cost_profile(&property.id, profile)
            .await?;
        info!(
            "Saved cost profile for '{}': fixed {}, variable {}%",
            property.code, saved.fixed_costs, saved.variable_cost_rate_pct
        );

        self.event_sink.emit(DomainEvent::CostProfileUpdated {
            property_code: property.code,
            fixed_costs: saved.fixed_costs,
            variable_cost_rate_pct: saved.variable_cost_rate_pct,
        });
        Ok(saved)
    }
}
