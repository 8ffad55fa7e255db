use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use ratewise_core::properties::{Property, RoomType};

use crate::{error::ApiResult, main_lib::AppState};

async fn list_properties(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Property>>> {
    let properties = state.property_service.get_properties()?;
    Ok(Json(properties))
}

async fn list_room_types(
    Path(code): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<RoomType>>> {
    let room_types = state.property_service.get_room_types(&code)?;
    Ok(Json(room_types))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/properties", get(list_properties))
        .route("/properties/{code}/room-types", get(list_room_types))
}
