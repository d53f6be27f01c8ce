use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::state::AppState;

/// Create the API router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health
        .route("/health", get(handlers::health_check))

        // Building catalogue
        .route("/api/v1/floors", get(handlers::list_floors))
        .route("/api/v1/rooms", get(handlers::list_rooms))
        .route("/api/v1/rooms/search", get(handlers::search_rooms))
        .route("/api/v1/room-types", get(handlers::list_room_types))

        // Routing
        .route("/api/v1/path", post(handlers::find_path))
        .route("/api/v1/exit", post(handlers::find_exit))

        // Geometry
        .route("/api/v1/reload", post(handlers::reload))

        .with_state(state)
}
