use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use ratewise_server::{api::app_router, build_state, config::Config, AppState};
use serde_json::{json, Value};
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;

async fn build_test_app() -> (TempDir, Arc<AppState>, Router) {
    let tmp = tempdir().unwrap();
    let config = Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        db_path: tmp.path().join("test.db").to_string_lossy().to_string(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(30),
    };
    let state = build_state(&config).await.unwrap();
    let app = app_router(state.clone(), &config);
    (tmp, state, app)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).to_string()));
    (status, value)
}

#[tokio::test]
async fn health_and_properties() {
    let (_tmp, _state, app) = build_test_app().await;

    let (status, body) = send(&app, Method::GET, "/api/v1/healthz", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("ok".to_string()));

    let (status, _) = send(&app, Method::GET, "/api/v1/readyz", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::GET, "/api/v1/properties", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["code"], "grand-boutique");

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/v1/properties/grand-boutique/room-types",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn unknown_property_is_404_with_error_body() {
    let (_tmp, _state, app) = build_test_app().await;

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/v1/properties/nowhere/breakeven",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);
    assert!(body["message"].as_str().unwrap().contains("nowhere"));
}

#[tokio::test]
async fn breakeven_settings_drive_the_analysis() {
    let (_tmp, _state, app) = build_test_app().await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/v1/properties/grand-boutique/breakeven/settings",
        Some(json!({ "fixedCosts": 45000, "variableCostRatePct": 35 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["fixedCosts"], 45000.0);

    // No published rates: the average rate falls back to 245.
    let (status, body) = send(
        &app,
        Method::GET,
        "/api/v1/properties/grand-boutique/breakeven?timeframe=month&asOf=2024-06-30",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["breakevenRoomNightsPerPeriod"], 283);
    assert_eq!(body["daysInPeriod"], 30);
    assert_eq!(body["totalRooms"], 48);
    assert_eq!(body["costBreakdown"].as_array().unwrap().len(), 6);
    assert_eq!(body["monthlyTrend"].as_array().unwrap().len(), 6);

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/v1/properties/grand-boutique/breakeven?asOf=2024-06-30&fixedCosts=10000",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["costProfile"]["fixedCosts"], 10000.0);
    assert_eq!(body["costProfile"]["variableCostRatePct"], 35.0);
    assert_eq!(body["result"]["breakevenRoomNightsPerPeriod"], 63);

    // The what-if query did not overwrite the stored settings.
    let (_, body) = send(
        &app,
        Method::GET,
        "/api/v1/properties/grand-boutique/breakeven/settings",
        None,
    )
    .await;
    assert_eq!(body["fixedCosts"], 45000.0);
}

#[tokio::test]
async fn invalid_cost_settings_are_rejected() {
    let (_tmp, _state, app) = build_test_app().await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/v1/properties/grand-boutique/breakeven/settings",
        Some(json!({ "fixedCosts": 1000, "variableCostRatePct": 100 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
}

#[tokio::test]
async fn stateless_calculators() {
    let (_tmp, _state, app) = build_test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/calculators/breakeven",
        Some(json!({
            "fixedCosts": "45,000",
            "variableCostRate": 35,
            "avgRate": 245,
            "roomsSoldNights": 300,
            "totalRooms": 48,
            "daysInPeriod": 30
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["breakevenRoomNightsPerPeriod"], 283);
    assert_eq!(body["result"]["safetyMarginPct"], 6);
    assert_eq!(body["roomsAboveBreakeven"], 17);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/calculators/elasticity-curve",
        Some(json!({ "avgAdr": 245, "avgUtilizationPct": 75, "elasticitySlope": -0.02 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let curve = body.as_array().unwrap();
    assert_eq!(curve.len(), 9);
    let point = curve
        .iter()
        .find(|p| p["priceChangePct"] == 10)
        .unwrap();
    assert_eq!(point["demandChangePct"].as_f64().unwrap(), -0.7);
    assert_eq!(point["revenueIndex"], 109);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/calculators/suggested-rate",
        Some(json!({ "peerAdr": 238, "sensitivity": 75 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["suggestedAdr"].as_f64().unwrap(), 297.5);

    let (_, body) = send(
        &app,
        Method::POST,
        "/api/v1/calculators/suggested-rate",
        Some(json!({ "peerAdr": null, "sensitivity": 90, "existingSuggested": 250 })),
    )
    .await;
    assert_eq!(body["suggestedAdr"].as_f64().unwrap(), 250.0);
}

#[tokio::test]
async fn rate_override_is_saved_and_announced() {
    let (_tmp, state, app) = build_test_app().await;
    let mut events = state.event_bus.subscribe();

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/v1/properties/grand-boutique/pricing/overrides",
        Some(json!({ "roomTypeId": "studio", "rateDate": "2024-06-01", "overrideAdr": 289 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["roomTypeId"], "studio");
    assert_eq!(body["overrideAdr"], 289.0);

    let event = events.recv().await.unwrap();
    assert_eq!(event.name, "pricing:override-saved");
    assert_eq!(event.payload.unwrap()["rateDate"], "2024-06-01");

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/v1/properties/grand-boutique/pricing/overrides",
        Some(json!({ "roomTypeId": "penthouse", "rateDate": "2024-06-01", "overrideAdr": 289 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/v1/properties/grand-boutique/pricing/overrides",
        Some(json!({ "roomTypeId": "studio", "rateDate": "2024-06-01", "overrideAdr": 0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn pricing_table_and_range_checks() {
    let (_tmp, _state, app) = build_test_app().await;

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/v1/properties/grand-boutique/pricing?start=2024-06-01&end=2024-06-07&applyPeerPricing=true&sensitivity=75",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["rows"].as_array().unwrap().is_empty());
    assert_eq!(body["options"]["applyPeerPricing"], true);
    assert_eq!(body["options"]["showEvents"], true);

    let (status, _) = send(
        &app,
        Method::GET,
        "/api/v1/properties/grand-boutique/pricing?start=2024-06-07&end=2024-06-01",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        Method::GET,
        "/api/v1/properties/grand-boutique/pricing?start=2024-01-01&end=2025-06-01",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn sensitivity_and_bookings_reports() {
    let (_tmp, _state, app) = build_test_app().await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/v1/properties/grand-boutique/sensitivity/settings",
        Some(json!({ "alertThreshold": 8.5 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["alertThreshold"].as_f64().unwrap(), 8.5);

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/v1/properties/grand-boutique/sensitivity?timeframe=week&asOf=2024-06-30",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["alertThreshold"].as_f64().unwrap(), 8.5);
    assert_eq!(body["curve"].as_array().unwrap().len(), 9);

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/v1/properties/grand-boutique/bookings/summary?range=7d&asOf=2024-06-30",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalBookings"], 0);
    assert_eq!(body["series"].as_array().unwrap().len(), 7);

    let (status, _) = send(
        &app,
        Method::GET,
        "/api/v1/properties/grand-boutique/bookings/summary?range=decade",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn breakeven_calculator_handles_huge_room_counts() {
    let (_tmp, _state, app) = build_test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/calculators/breakeven",
        Some(json!({
            "fixedCosts": "45000",
            "variableCostRate": "35",
            "avgRate": 245,
            "roomsSoldNights": 300,
            "totalRooms": 1_000_000_000_000_000_i64,
            "daysInPeriod": 1_000_000_000_000_000_i64
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["breakevenRoomNightsPerPeriod"], 283);
    assert_eq!(body["result"]["utilizationNeededPct"], 0);
}

#[tokio::test]
async fn breakeven_what_if_accepts_extreme_costs() {
    let (_tmp, _state, app) = build_test_app().await;

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/v1/properties/grand-boutique/breakeven?asOf=2024-06-30&fixedCosts=79228162514264337593543950335&variableCostRate=1e27",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["monthlyTrend"].as_array().unwrap().len(), 6);
    assert_eq!(body["result"]["breakevenRoomNightsPerPeriod"], i64::MAX);
}
