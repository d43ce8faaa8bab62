//! Error handling for the AgriSense server
//!
//! Provides consistent error responses in the requested display language,
//! always paired with the English text

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::{texts, Language, SubmissionError};
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {error}")]
    Submission {
        error: SubmissionError,
        language: Language,
    },

    // External service errors. The cause is logged where it happens and
    // never reaches the client.
    #[error("Analysis failed")]
    AnalysisFailed { language: Language },
}

impl AppError {
    pub fn submission(error: SubmissionError, language: Language) -> Self {
        AppError::Submission { error, language }
    }
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub message_en: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::Submission { error, language } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: error.code().to_string(),
                    message: error.message(*language).to_string(),
                    message_en: error.message(Language::English).to_string(),
                    field: Some(error.field().to_string()),
                },
            ),
            AppError::AnalysisFailed { language } => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "ANALYSIS_FAILED".to_string(),
                    message: texts(*language).errors.analysis_failed.to_string(),
                    message_en: texts(Language::English).errors.analysis_failed.to_string(),
                    field: None,
                },
            ),
        };

        // Log the error for debugging
        if status.is_server_error() {
            tracing::error!("Error: {:?}", self);
        } else {
            tracing::debug!("Rejected request: {:?}", self);
        }

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_submission_error_is_localized() {
        let response =
            AppError::submission(SubmissionError::SubjectRequired, Language::Hindi).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "SUBJECT_REQUIRED");
        assert_eq!(json["error"]["field"], "subject_name");
        assert_eq!(json["error"]["message_en"], "Enter Name");
        assert_eq!(json["error"]["message"], texts(Language::Hindi).enter_name);
    }

    #[tokio::test]
    async fn test_analysis_failure_is_generic() {
        let response = AppError::AnalysisFailed {
            language: Language::English,
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "ANALYSIS_FAILED");
        assert!(json["error"].get("field").is_none());
    }
}
