use std::sync::Arc;

use crate::{config::Config, domain_events::WebDomainEventSink, events::EventBus};
use ratewise_core::{
    bookings::{BookingService, BookingServiceTrait},
    breakeven::{BreakevenService, BreakevenServiceTrait},
    events::DomainEventSink,
    pricing::{PricingService, PricingServiceTrait},
    properties::{PropertyService, PropertyServiceTrait},
    sensitivity::{SensitivityService, SensitivityServiceTrait},
};
use ratewise_storage_sqlite::{
    db, BookingRepository, CostProfileRepository, PricingRepository, PropertyRepository,
    RateRepository, SensitivityRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub property_service: Arc<dyn PropertyServiceTrait>,
    pub breakeven_service: Arc<dyn BreakevenServiceTrait>,
    pub sensitivity_service: Arc<dyn SensitivityServiceTrait>,
    pub pricing_service: Arc<dyn PricingServiceTrait>,
    pub booking_service: Arc<dyn BookingServiceTrait>,
    pub event_bus: EventBus,
}

pub fn init_tracing() {
    let log_format = std::env::var("RW_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone());

    let event_bus = EventBus::new(256);
    let domain_event_sink: Arc<dyn DomainEventSink> =
        Arc::new(WebDomainEventSink::new(event_bus.clone()));

    let property_repository = Arc::new(PropertyRepository::new(pool.clone()));
    let property_service: Arc<dyn PropertyServiceTrait> =
        Arc::new(PropertyService::new(property_repository));

    let rate_repository = Arc::new(RateRepository::new(pool.clone()));
    let booking_repository = Arc::new(BookingRepository::new(pool.clone()));
    let cost_profile_repository =
        Arc::new(CostProfileRepository::new(pool.clone(), writer.clone()));
    let sensitivity_repository =
        Arc::new(SensitivityRepository::new(pool.clone(), writer.clone()));
    let pricing_repository = Arc::new(PricingRepository::new(pool.clone(), writer.clone()));

    let breakeven_service: Arc<dyn BreakevenServiceTrait> = Arc::new(BreakevenService::new(
        property_service.clone(),
        rate_repository,
        booking_repository.clone(),
        cost_profile_repository,
        domain_event_sink.clone(),
    ));
    let sensitivity_service: Arc<dyn SensitivityServiceTrait> =
        Arc::new(SensitivityService::new(
            property_service.clone(),
            sensitivity_repository,
            booking_repository.clone(),
            pricing_repository.clone(),
            domain_event_sink.clone(),
        ));
    let pricing_service: Arc<dyn PricingServiceTrait> = Arc::new(PricingService::new(
        property_service.clone(),
        pricing_repository,
        domain_event_sink,
    ));
    let booking_service: Arc<dyn BookingServiceTrait> = Arc::new(BookingService::new(
        property_service.clone(),
        booking_repository,
    ));

    Ok(Arc::new(AppState {
        property_service,
        breakeven_service,
        sensitivity_service,
        pricing_service,
        booking_service,
        event_bus,
    }))
}
