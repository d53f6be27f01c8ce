use std::sync::Arc;

use axum::{extract::State, Json};

use crate::dto::{ExitRequest, PathRequest, RouteResponse};
use crate::error::ApiError;
use crate::state::AppState;

pub async fn find_path(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PathRequest>,
) -> Result<Json<RouteResponse>, ApiError> {
    let start = required("start", &request.start)?;
    let end = required("end", &request.end)?;

    tracing::info!(start = %start, end = %end, "Finding path");

    let route = state.navigator.current().navigate(start, end).map_err(|e| {
        tracing::warn!(error = %e, start = %start, end = %end, "Route lookup failed");
        ApiError::from(e)
    })?;

    tracing::info!(
        segments = route.segments.len(),
        total_weight = route.total_weight,
        "Path found"
    );

    Ok(Json(RouteResponse::from(&route)))
}

pub async fn find_exit(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ExitRequest>,
) -> Result<Json<RouteResponse>, ApiError> {
    let start = required("start", &request.start)?;

    tracing::info!(start = %start, "Finding nearest emergency exit");

    let route = state.navigator.current().find_nearest_exit(start).map_err(|e| {
        tracing::warn!(error = %e, start = %start, "Exit lookup failed");
        ApiError::from(e)
    })?;

    Ok(Json(RouteResponse::from(&route)))
}

/// Trimmed request identifier; stored labels are matched verbatim
fn required<'a>(field: &str, value: &'a str) -> Result<&'a str, ApiError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ApiError::bad_request(format!("'{}' must not be empty", field)))
    } else {
        Ok(value)
    }
}
