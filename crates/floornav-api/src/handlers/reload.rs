use std::sync::Arc;

use axum::{extract::State, Json};

use crate::dto::ReloadResponse;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn reload(State(state): State<Arc<AppState>>) -> Result<Json<ReloadResponse>, ApiError> {
    let source = state.source.describe();
    tracing::info!(source = %source, "Reloading geometry");

    let bundle = state.navigator.reload(state.source.as_ref(), &state.options).await.map_err(|e| {
        tracing::error!(error = %e, "Reload failed; keeping current graph");
        ApiError::from(e)
    })?;

    Ok(Json(ReloadResponse::success(&bundle, &source)))
}
