use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use floornav_core::models::{Category, FloorId};

use crate::dto::{RoomInfo, RoomsQuery, SearchQuery};
use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_rooms(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RoomsQuery>,
) -> Result<Json<Vec<RoomInfo>>, ApiError> {
    tracing::info!(floor = ?query.floor, "Listing rooms");

    let bundle = state.navigator.current();
    let floor = known_floor(&bundle.floor_ids(), query.floor)?;

    let rooms = bundle.rooms().list(floor.as_ref()).into_iter().map(RoomInfo::from).collect();
    Ok(Json(rooms))
}

pub async fn list_room_types(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.navigator.current().rooms().labels())
}

pub async fn search_rooms(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<RoomInfo>>, ApiError> {
    tracing::info!(q = %query.q, category = ?query.category, floor = ?query.floor, "Searching rooms");

    let category = query
        .category
        .as_deref()
        .map(|c| Category::parse(c).ok_or_else(|| ApiError::bad_request(format!("Unknown category: {}", c))))
        .transpose()?;

    let bundle = state.navigator.current();
    let floor = known_floor(&bundle.floor_ids(), query.floor)?;

    let rooms = bundle
        .rooms()
        .search(&query.q, category, floor.as_ref())
        .into_iter()
        .map(RoomInfo::from)
        .collect();
    Ok(Json(rooms))
}

fn known_floor(floors: &[FloorId], requested: Option<String>) -> Result<Option<FloorId>, ApiError> {
    match requested {
        None => Ok(None),
        Some(id) => {
            let id = FloorId::new(id);
            if floors.contains(&id) {
                Ok(Some(id))
            } else {
                Err(ApiError::not_found(format!("Floor not found: {}", id)))
            }
        }
    }
}
