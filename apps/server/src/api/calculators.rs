//! Stateless calculator endpoints: nothing is read from or written to the store.

use std::sync::Arc;

use axum::{routing::post, Json, Router};
use ratewise_core::bookings::OccupancyAggregate;
use ratewise_core::breakeven::{
    compute_breakeven_result, rooms_above_breakeven, BreakevenResult, CostProfile,
    CostProfileInput,
};
use ratewise_core::pricing::adjust;
use ratewise_core::sensitivity::{build_curve, ElasticityPoint};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::main_lib::AppState;

/// A form value that may arrive as a JSON string or number.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
enum RawInput {
    Text(String),
    Number(serde_json::Number),
}

impl RawInput {
    fn into_text(self) -> String {
        match self {
            RawInput::Text(text) => text,
            RawInput::Number(number) => number.to_string(),
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct BreakevenCalculationRequest {
    fixed_costs: Option<RawInput>,
    variable_cost_rate: Option<RawInput>,
    avg_rate: Decimal,
    #[serde(default)]
    rooms_sold_nights: i64,
    #[serde(default)]
    total_rooms: i64,
    #[serde(default)]
    days_in_period: i64,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct BreakevenCalculationResponse {
    cost_profile: CostProfile,
    result: BreakevenResult,
    rooms_above_breakeven: i64,
}

async fn calculate_breakeven(
    Json(request): Json<BreakevenCalculationRequest>,
) -> Json<BreakevenCalculationResponse> {
    let profile = CostProfileInput {
        fixed_costs: request.fixed_costs.map(RawInput::into_text),
        variable_cost_rate: request.variable_cost_rate.map(RawInput::into_text),
    }
    .coerce();
    let occupancy = OccupancyAggregate::new(
        request.rooms_sold_nights,
        request.total_rooms.saturating_mul(request.days_in_period),
    );
    let result = compute_breakeven_result(
        &profile,
        request.avg_rate,
        &occupancy,
        request.total_rooms,
        request.days_in_period,
    );

    Json(BreakevenCalculationResponse {
        cost_profile: profile,
        rooms_above_breakeven: rooms_above_breakeven(
            occupancy.rooms_sold_nights,
            result.breakeven_room_nights_per_period,
        ),
        result,
    })
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ElasticityCurveRequest {
    avg_adr: Decimal,
    avg_utilization_pct: Decimal,
    elasticity_slope: Option<Decimal>,
}

async fn calculate_elasticity_curve(
    Json(request): Json<ElasticityCurveRequest>,
) -> Json<Vec<ElasticityPoint>> {
    Json(build_curve(
        request.avg_adr,
        request.avg_utilization_pct,
        request.elasticity_slope,
    ))
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct SuggestedRateRequest {
    peer_adr: Option<Decimal>,
    sensitivity: u8,
    #[serde(default)]
    existing_suggested: Decimal,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct SuggestedRateResponse {
    suggested_adr: Decimal,
}

async fn calculate_suggested_rate(
    Json(request): Json<SuggestedRateRequest>,
) -> Json<SuggestedRateResponse> {
    Json(SuggestedRateResponse {
        suggested_adr: adjust(
            request.peer_adr,
            request.sensitivity,
            request.existing_suggested,
        ),
    })
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/calculators/breakeven", post(calculate_breakeven))
        .route(
            "/calculators/elasticity-curve",
            post(calculate_elasticity_curve),
        )
        .route("/calculators/suggested-rate", post(calculate_suggested_rate))
}
