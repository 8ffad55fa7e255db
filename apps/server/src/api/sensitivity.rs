use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use ratewise_core::sensitivity::{SensitivityAnalysis, SensitivitySettings};
use serde::Deserialize;

use crate::{
    api::shared::{parse_timeframe, resolve_as_of},
    error::ApiResult,
    main_lib::AppState,
};

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct SensitivityQuery {
    timeframe: Option<String>,
    as_of: Option<NaiveDate>,
}

async fn get_sensitivity_analysis(
    Path(code): Path<String>,
    Query(query): Query<SensitivityQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<SensitivityAnalysis>> {
    let timeframe = parse_timeframe(query.timeframe.as_deref())?;
    let analysis = state.sensitivity_service.get_sensitivity_analysis(
        &code,
        timeframe,
        resolve_as_of(query.as_of),
    )?;
    Ok(Json(analysis))
}

async fn get_settings(
    Path(code): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<SensitivitySettings>> {
    Ok(Json(state.sensitivity_service.get_settings(&code)?))
}

async fn update_settings(
    Path(code): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(settings): Json<SensitivitySettings>,
) -> ApiResult<Json<SensitivitySettings>> {
    let saved = state
        .sensitivity_service
        .update_settings(&code, settings)
        .await?;
    Ok(Json(saved))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/properties/{code}/sensitivity",
            get(get_sensitivity_analysis),
        )
        .route(
            "/properties/{code}/sensitivity/settings",
            get(get_settings).put(update_settings),
        )
}
