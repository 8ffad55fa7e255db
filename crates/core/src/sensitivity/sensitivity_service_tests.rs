//! Unit tests for the sensitivity service.

use super::*;
use crate::bookings::{Booking, BookingFilter, BookingRepositoryTrait, BookingStatus};
use crate::errors::{DatabaseError, Error, Result};
use crate::events::{DomainEvent, MockDomainEventSink};
use crate::pricing::{NewRateOverride, PricingRepositoryTrait, PricingSnapshot, RateOverride};
use crate::properties::{Property, PropertyRepositoryTrait, PropertyService, RoomType};
use crate::utils::Timeframe;
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::{Arc, RwLock};

// ============================================================================
// Mock Implementations
// ============================================================================

struct MockPropertyRepository;

impl PropertyRepositoryTrait for MockPropertyRepository {
    fn list(&self) -> Result<Vec<Property>> {
        Ok(vec![grand_boutique()])
    }

    fn get_by_code(&self, code: &str) -> Result<Property> {
        if code == "grand-boutique" {
            Ok(grand_boutique())
        } else {
            Err(Error::Database(DatabaseError::NotFound(code.to_string())))
        }
    }

    fn list_room_types(&self, _property_id: &str) -> Result<Vec<RoomType>> {
        Ok(Vec::new())
    }
}

#[derive(Default)]
struct MockSensitivityRepository {
    samples: Vec<SensitivitySample>,
    settings: RwLock<Option<SensitivitySettings>>,
}

#[async_trait]
impl SensitivityRepositoryTrait for MockSensitivityRepository {
    fn get_samples(
        &self,
        _property_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<SensitivitySample>> {
        Ok(self
            .samples
            .iter()
            .filter(|s| s.date >= start && s.date <= end)
            .cloned()
            .collect())
    }

    fn get_settings(&self, _property_id: &str) -> Result<Option<SensitivitySettings>> {
        Ok(*self.settings.read().unwrap())
    }

    async fn upsert_settings(
        &self,
        _property_id: &str,
        settings: SensitivitySettings,
    ) -> Result<SensitivitySettings> {
        *self.settings.write().unwrap() = Some(settings);
        Ok(settings)
    }
}

struct MockBookingRepository {
    bookings: Vec<Booking>,
}

impl BookingRepositoryTrait for MockBookingRepository {
    fn get_bookings(
        &self,
        _property_id: &str,
        start: NaiveDate,
        end: NaiveDate,
        filter: &BookingFilter,
    ) -> Result<Vec<Booking>> {
        Ok(self
            .bookings
            .iter()
            .filter(|b| b.check_in >= start && b.check_in <= end)
            .filter(|b| filter.status.map_or(true, |s| b.status == s))
            .cloned()
            .collect())
    }

    fn get_recent_bookings(&self, _property_id: &str, _limit: i64) -> Result<Vec<Booking>> {
        unimplemented!()
    }
}

struct MockPricingRepository {
    snapshots: Vec<PricingSnapshot>,
}

#[async_trait]
impl PricingRepositoryTrait for MockPricingRepository {
    fn get_pricing_snapshots(
        &self,
        _property_id: &str,
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> Result<Vec<PricingSnapshot>> {
        Ok(self.snapshots.clone())
    }

    fn get_rate_overrides(
        &self,
        _property_id: &str,
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> Result<Vec<RateOverride>> {
        unimplemented!()
    }

    async fn upsert_rate_override(
        &self,
        _property_id: &str,
        _new_override: NewRateOverride,
    ) -> Result<RateOverride> {
        unimplemented!()
    }
}

// ============================================================================
// Fixtures
// ============================================================================

fn grand_boutique() -> Property {
    Property {
        id: "p1".to_string(),
        code: "grand-boutique".to_string(),
        name: "Grand Boutique".to_string(),
    }
}

fn d(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
}

fn sample(day: u32, sensitivity: Decimal, adr: Decimal, utilization: Decimal) -> SensitivitySample {
    SensitivitySample {
        date: d(day),
        room_type_id: Some("studio".to_string()),
        sensitivity,
        adr,
        utilization_pct: utilization,
        price_elasticity: Some(dec!(-0.02)),
    }
}

fn booking(id: &str, day: u32, nights: i32, rooms: i32, status: BookingStatus) -> Booking {
    Booking {
        id: id.to_string(),
        property_id: "p1".to_string(),
        room_type_id: None,
        guest_name: None,
        check_in: d(day),
        nights,
        rooms,
        status,
        price_per_night: dec!(245),
    }
}

fn suggested(adr: Decimal) -> PricingSnapshot {
    PricingSnapshot {
        date: d(20),
        room_type_id: "studio".to_string(),
        room_type: "Studio".to_string(),
        booked_count: 8,
        max_count: 12,
        adr: dec!(245),
        peer_adr: None,
        suggested_adr: adr,
        sensitivity: dec!(6.8),
        is_event: false,
    }
}

fn service(
    sensitivity_repository: Arc<MockSensitivityRepository>,
    sink: MockDomainEventSink,
) -> SensitivityService {
    SensitivityService::new(
        Arc::new(PropertyService::new(Arc::new(MockPropertyRepository))),
        sensitivity_repository,
        Arc::new(MockBookingRepository {
            bookings: vec![
                booking("b1", 18, 2, 3, BookingStatus::Confirmed),
                booking("b2", 19, 1, 5, BookingStatus::Pending),
            ],
        }),
        Arc::new(MockPricingRepository {
            snapshots: vec![suggested(dec!(250)), suggested(dec!(260)), suggested(Decimal::ZERO)],
        }),
        Arc::new(sink),
    )
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_analysis_over_trailing_week() {
    let repo = Arc::new(MockSensitivityRepository {
        samples: vec![
            sample(10, dec!(9.5), dec!(200), dec!(40)),
            sample(18, dec!(7.5), dec!(240), dec!(70)),
            sample(18, dec!(8.5), dec!(250), dec!(80)),
            sample(19, dec!(5.0), dec!(260), dec!(80)),
        ],
        ..Default::default()
    });
    let svc = service(repo, MockDomainEventSink::new());

    let analysis = svc
        .get_sensitivity_analysis("grand-boutique", Timeframe::Week, d(20))
        .unwrap();

    assert_eq!(analysis.range.start, d(14));
    assert_eq!(analysis.days.len(), 2);
    assert_eq!(analysis.days[0].sensitivity, dec!(8.0));
    assert_eq!(analysis.days[0].adr, dec!(245));
    assert_eq!(analysis.days[0].bookings, 3);
    // Pending booking does not count
    assert_eq!(analysis.days[1].bookings, 3);
    assert_eq!(analysis.average_sensitivity, Some(dec!(6.5)));
    assert_eq!(analysis.alert_threshold, dec!(7.5));
    assert_eq!(analysis.high_sensitivity_days, 1);
    assert_eq!(analysis.elasticity_slope, Some(dec!(-0.02)));
    assert_eq!(analysis.avg_adr, dec!(252.5));
    assert_eq!(analysis.avg_utilization_pct, dec!(77.5));
    assert_eq!(analysis.curve.len(), 9);
    assert_eq!(analysis.optimal_price, Some(dec!(255)));
}

#[test]
fn test_analysis_without_samples() {
    let svc = service(
        Arc::new(MockSensitivityRepository::default()),
        MockDomainEventSink::new(),
    );

    let analysis = svc
        .get_sensitivity_analysis("grand-boutique", Timeframe::Month, d(20))
        .unwrap();

    assert!(analysis.days.is_empty());
    assert_eq!(analysis.average_sensitivity, None);
    assert_eq!(analysis.high_sensitivity_days, 0);
    assert_eq!(analysis.elasticity_slope, None);
    assert!(analysis.curve.iter().all(|p| p.demand_change_pct.is_zero()));
}

#[tokio::test]
async fn test_threshold_update_changes_high_day_count() {
    let repo = Arc::new(MockSensitivityRepository {
        samples: vec![sample(18, dec!(7.0), dec!(240), dec!(70))],
        ..Default::default()
    });
    let sink = MockDomainEventSink::new();
    let svc = service(repo, sink.clone());

    let saved = svc
        .update_settings(
            "grand-boutique",
            SensitivitySettings {
                alert_threshold: dec!(6.5),
            },
        )
        .await
        .unwrap();
    assert_eq!(saved.alert_threshold, dec!(6.5));
    assert_eq!(svc.get_settings("grand-boutique").unwrap(), saved);

    let analysis = svc
        .get_sensitivity_analysis("grand-boutique", Timeframe::Week, d(20))
        .unwrap();
    assert_eq!(analysis.high_sensitivity_days, 1);
    assert_eq!(
        sink.events(),
        vec![DomainEvent::SensitivityThresholdUpdated {
            property_code: "grand-boutique".to_string(),
            alert_threshold: dec!(6.5),
        }]
    );
}

#[tokio::test]
async fn test_threshold_out_of_range_is_rejected() {
    let sink = MockDomainEventSink::new();
    let svc = service(Arc::new(MockSensitivityRepository::default()), sink.clone());

    let result = svc
        .update_settings(
            "grand-boutique",
            SensitivitySettings {
                alert_threshold: dec!(11),
            },
        )
        .await;

    assert!(matches!(result, Err(Error::Validation(_))));
    assert!(sink.is_empty());
}
