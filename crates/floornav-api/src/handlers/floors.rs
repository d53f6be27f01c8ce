use std::sync::Arc;

use axum::{extract::State, Json};
use floornav_geo::FloorStats;

use crate::state::AppState;

pub async fn list_floors(State(state): State<Arc<AppState>>) -> Json<Vec<FloorStats>> {
    tracing::info!("Listing floors");
    Json(state.navigator.current().floor_stats())
}
