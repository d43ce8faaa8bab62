//! HTTP handlers for PIN-based location auto-fill

use axum::{extract::State, Json};

use shared::ResolvedForm;

use crate::error::AppResult;
use crate::services::{LocationService, ResolveLocationInput};
use crate::AppState;

/// Resolve the PIN of a form location
pub async fn resolve_location(
    State(state): State<AppState>,
    Json(input): Json<ResolveLocationInput>,
) -> AppResult<Json<ResolvedForm>> {
    let service = LocationService::new(state.postal);
    let form = service.resolve(input).await?;
    Ok(Json(form))
}
