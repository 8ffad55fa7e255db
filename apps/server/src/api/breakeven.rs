use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use ratewise_core::breakeven::{BreakevenAnalysis, CostProfile};
use ratewise_core::utils::parse_decimal_or;
use serde::Deserialize;

use crate::{
    api::shared::{parse_timeframe, resolve_as_of},
    error::ApiResult,
    main_lib::AppState,
};

/// Query of the breakeven page. `fixedCosts` and `variableCostRate` are the
/// what-if inputs exactly as typed; a missing or unusable one keeps the stored value.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct BreakevenQuery {
    timeframe: Option<String>,
    fixed_costs: Option<String>,
    variable_cost_rate: Option<String>,
    as_of: Option<NaiveDate>,
}

async fn get_breakeven_analysis(
    Path(code): Path<String>,
    Query(query): Query<BreakevenQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<BreakevenAnalysis>> {
    let timeframe = parse_timeframe(query.timeframe.as_deref())?;

    let what_if = if query.fixed_costs.is_none() && query.variable_cost_rate.is_none() {
        None
    } else {
        let stored = state.breakeven_service.get_cost_profile(&code)?;
        Some(CostProfile::new(
            parse_decimal_or(query.fixed_costs.as_deref(), stored.fixed_costs),
            parse_decimal_or(
                query.variable_cost_rate.as_deref(),
                stored.variable_cost_rate_pct,
            ),
        ))
    };

    let analysis = state.breakeven_service.get_breakeven_analysis(
        &code,
        timeframe,
        what_if,
        resolve_as_of(query.as_of),
    )?;
    Ok(Json(analysis))
}

async fn get_cost_profile(
    Path(code): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<CostProfile>> {
    let profile = state.breakeven_service.get_cost_profile(&code)?;
    Ok(Json(profile))
}

async fn update_cost_profile(
    Path(code): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(profile): Json<CostProfile>,
) -> ApiResult<Json<CostProfile>> {
    let saved = state
        .breakeven_service
        .update_cost_profile(&code, profile)
        .await?;
    Ok(Json(saved))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/properties/{code}/breakeven", get(get_breakeven_analysis))
        .route(
            "/properties/{code}/breakeven/settings",
            get(get_cost_profile).put(update_cost_profile),
        )
}
