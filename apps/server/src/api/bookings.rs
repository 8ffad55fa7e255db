use std::str::FromStr;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use ratewise_core::bookings::{BookingFilter, BookingStatus, BookingSummary};
use serde::Deserialize;

use crate::{
    api::shared::{parse_timeframe, resolve_as_of},
    error::ApiResult,
    main_lib::AppState,
};

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct BookingSummaryQuery {
    /// `7d`, `30d` or `90d`
    range: Option<String>,
    status: Option<String>,
    /// Comma separated room type ids
    room_types: Option<String>,
    as_of: Option<NaiveDate>,
}

impl BookingSummaryQuery {
    fn filter(&self) -> ApiResult<BookingFilter> {
        let status = match self.status.as_deref() {
            Some(raw) if !raw.trim().is_empty() => Some(BookingStatus::from_str(raw)?),
            _ => None,
        };
        let room_type_ids = self.room_types.as_deref().map(|raw| {
            raw.split(',')
                .map(|id| id.trim().to_string())
                .filter(|id| !id.is_empty())
                .collect()
        });
        Ok(BookingFilter {
            status,
            room_type_ids,
        })
    }
}

async fn get_booking_summary(
    Path(code): Path<String>,
    Query(query): Query<BookingSummaryQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<BookingSummary>> {
    let timeframe = parse_timeframe(query.range.as_deref())?;
    let summary = state.booking_service.get_booking_summary(
        &code,
        timeframe,
        &query.filter()?,
        resolve_as_of(query.as_of),
    )?;
    Ok(Json(summary))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/properties/{code}/bookings/summary",
        get(get_booking_summary),
    )
}
