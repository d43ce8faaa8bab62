//! Analysis service
//!
//! Validates a submission, builds the prompt, calls the generative backend
//! once and renders the reply. Backend failures of every kind collapse into
//! [`AppError::AnalysisFailed`]; the cause only goes to the log.

use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::{
    build_prompt, check_contract, render_result, validate_submission, AnalysisRequest,
    AnalysisResult, AnalysisTask, ContractViolation, Language, PromptDocument, ResultView,
};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::external::GeminiClient;

#[derive(Clone)]
pub struct AnalysisService {
    gemini: GeminiClient,
}

/// Completed analysis as returned to the client
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub request_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub task: AnalysisTask,
    pub language: Language,
    pub result: AnalysisResult,
    pub view: ResultView,
    /// Reply contract violations; the result is still usable
    pub warnings: Vec<ContractViolation>,
}

/// Validate a request and build its prompt without calling the backend
pub fn prepare_prompt(request: &AnalysisRequest) -> AppResult<PromptDocument> {
    validate_submission(request).map_err(|e| AppError::submission(e, request.language))?;
    Ok(build_prompt(request))
}

impl AnalysisService {
    pub fn new(gemini: GeminiClient) -> Self {
        Self { gemini }
    }

    pub async fn analyze(&self, request: AnalysisRequest) -> AppResult<AnalysisResponse> {
        let prompt = prepare_prompt(&request)?;
        let request_id = Uuid::new_v4();

        tracing::info!(
            %request_id,
            task = %request.task,
            language = %request.language,
            model = self.gemini.model(),
            "Running analysis"
        );

        let result = self.gemini.generate(&prompt).await.map_err(|e| {
            tracing::error!(%request_id, "Analysis failed: {}", e);
            AppError::AnalysisFailed {
                language: request.language,
            }
        })?;

        let warnings = check_contract(request.task, &result);
        for violation in &warnings {
            tracing::warn!(%request_id, task = %request.task, "Reply contract violation: {}", violation);
        }

        let view = render_result(&result, request.language);

        Ok(AnalysisResponse {
            request_id,
            generated_at: Utc::now(),
            task: request.task,
            language: request.language,
            result,
            view,
            warnings,
        })
    }
}
