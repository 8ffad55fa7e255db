use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::{get, put},
    Json, Router,
};
use chrono::{Duration, NaiveDate};
use ratewise_core::pricing::{NewRateOverride, PricingTable, PricingTableOptions, RateOverride};
use ratewise_core::utils::business_date_today;
use serde::Deserialize;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

/// Days shown when the caller gives no end date.
const DEFAULT_PRICING_WINDOW_DAYS: i64 = 14;

/// Longest range one pricing table may cover.
const MAX_PRICING_WINDOW_DAYS: i64 = 366;

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct PricingQuery {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    apply_peer_pricing: Option<bool>,
    sensitivity: Option<u8>,
    show_events: Option<bool>,
}

impl PricingQuery {
    fn options(&self) -> PricingTableOptions {
        let defaults = PricingTableOptions::default();
        PricingTableOptions {
            apply_peer_pricing: self.apply_peer_pricing.unwrap_or(defaults.apply_peer_pricing),
            sensitivity: self.sensitivity.unwrap_or(defaults.sensitivity),
            show_events: self.show_events.unwrap_or(defaults.show_events),
        }
    }
}

/// Resolves the requested window: a missing end means a two-week table.
fn pricing_window(
    start: NaiveDate,
    end: Option<NaiveDate>,
) -> ApiResult<(NaiveDate, NaiveDate)> {
    let end = match end {
        Some(end) => end,
        None => start
            .checked_add_signed(Duration::days(DEFAULT_PRICING_WINDOW_DAYS - 1))
            .ok_or_else(|| {
                ApiError::BadRequest(format!(
                    "No {}-day pricing window fits after {}",
                    DEFAULT_PRICING_WINDOW_DAYS, start
                ))
            })?,
    };
    if (end - start).num_days() >= MAX_PRICING_WINDOW_DAYS {
        return Err(ApiError::BadRequest(format!(
            "Pricing range is limited to {} days",
            MAX_PRICING_WINDOW_DAYS
        )));
    }
    Ok((start, end))
}

async fn get_pricing_table(
    Path(code): Path<String>,
    Query(query): Query<PricingQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<PricingTable>> {
    let (start, end) = pricing_window(
        query.start.unwrap_or_else(business_date_today),
        query.end,
    )?;
    let table = state
        .pricing_service
        .get_pricing_table(&code, start, end, query.options())?;
    Ok(Json(table))
}

async fn save_rate_override(
    Path(code): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(new_override): Json<NewRateOverride>,
) -> ApiResult<Json<RateOverride>> {
    let saved = state
        .pricing_service
        .save_rate_override(&code, new_override)
        .await?;
    Ok(Json(saved))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/properties/{code}/pricing", get(get_pricing_table))
        .route(
            "/properties/{code}/pricing/overrides",
            put(save_rate_override),
        )
}
