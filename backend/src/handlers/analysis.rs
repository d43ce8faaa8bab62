//! HTTP handlers for prompt building and analysis

use axum::{extract::State, Json};
use shared::{AnalysisRequest, PromptDocument};

use crate::error::AppResult;
use crate::services::{prepare_prompt, AnalysisResponse, AnalysisService};
use crate::AppState;

/// Build the prompt for a request without running it
pub async fn preview_prompt(Json(request): Json<AnalysisRequest>) -> AppResult<Json<PromptDocument>> {
    Ok(Json(prepare_prompt(&request)?))
}

/// Run an analysis
pub async fn run_analysis(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> AppResult<Json<AnalysisResponse>> {
    let service = AnalysisService::new(state.gemini);
    let response = service.analyze(request).await?;
    Ok(Json(response))
}
