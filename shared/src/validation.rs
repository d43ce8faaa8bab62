//! Validation utilities for AgriSense
//!
//! Input filters for the location form and the checks run before any
//! analysis request leaves the client.

use thiserror::Error;
use validator::Validate;

use crate::i18n::texts;
use crate::models::{AnalysisRequest, PINCODE_LENGTH};
use crate::types::Language;

// ============================================================================
// PIN Input Filters
// ============================================================================

/// Validate a value typed into the PIN field: digits only, at most 6.
/// Values failing this are rejected by the input and never stored.
pub fn validate_pincode_input(value: &str) -> Result<(), &'static str> {
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Err("PINCODE must contain digits only");
    }
    if value.len() > PINCODE_LENGTH {
        return Err("PINCODE must be at most 6 digits");
    }
    Ok(())
}

/// A PIN is ready for directory lookup once it is exactly 6 digits
pub fn is_lookup_ready(value: &str) -> bool {
    value.len() == PINCODE_LENGTH && value.chars().all(|c| c.is_ascii_digit())
}

// ============================================================================
// Submission Validation
// ============================================================================

/// Reasons a submission is blocked before any outbound call
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("Country and PINCODE are required")]
    LocationRequired,

    #[error("PINCODE must be digits only, at most 6")]
    InvalidPincode,

    #[error("PINCODE lookup needs exactly 6 digits")]
    IncompletePincode,

    #[error("A crop or fruit name is required for suitability checks")]
    SubjectRequired,

    #[error("No analysis task selected")]
    TaskRequired,

    #[error("An analysis is already in progress")]
    Busy,
}

impl SubmissionError {
    /// Form field the error belongs to
    pub fn field(&self) -> &'static str {
        match self {
            SubmissionError::LocationRequired => "location",
            SubmissionError::InvalidPincode | SubmissionError::IncompletePincode => "pincode",
            SubmissionError::SubjectRequired => "subject_name",
            SubmissionError::TaskRequired => "task",
            SubmissionError::Busy => "submit",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            SubmissionError::LocationRequired => "LOCATION_REQUIRED",
            SubmissionError::InvalidPincode => "INVALID_PINCODE",
            SubmissionError::IncompletePincode => "INCOMPLETE_PINCODE",
            SubmissionError::SubjectRequired => "SUBJECT_REQUIRED",
            SubmissionError::TaskRequired => "TASK_REQUIRED",
            SubmissionError::Busy => "BUSY",
        }
    }

    /// Inline message in the display language
    pub fn message(&self, language: Language) -> &'static str {
        let t = texts(language);
        match self {
            SubmissionError::LocationRequired => t.errors.location_required,
            SubmissionError::InvalidPincode => t.errors.invalid_pincode,
            SubmissionError::IncompletePincode => t.errors.incomplete_pincode,
            SubmissionError::SubjectRequired => t.enter_name,
            SubmissionError::TaskRequired => t.select_task,
            SubmissionError::Busy => t.analyzing,
        }
    }
}

/// Check a request before it is sent: country and PIN present, PIN well
/// formed, and a subject name for the two check tasks.
pub fn validate_submission(request: &AnalysisRequest) -> Result<(), SubmissionError> {
    let location = &request.location;
    if location.country.trim().is_empty() || location.pincode.trim().is_empty() {
        return Err(SubmissionError::LocationRequired);
    }
    if request.validate().is_err() {
        return Err(SubmissionError::InvalidPincode);
    }
    if request.task.is_check() && request.subject().is_none() {
        return Err(SubmissionError::SubjectRequired);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AnalysisTask, LocationData};

    fn request(country: &str, pincode: &str, task: AnalysisTask) -> AnalysisRequest {
        AnalysisRequest::new(
            LocationData {
                country: country.to_string(),
                pincode: pincode.to_string(),
                ..Default::default()
            },
            task,
            Language::English,
        )
    }

    #[test]
    fn test_pincode_input_filter() {
        assert!(validate_pincode_input("").is_ok());
        assert!(validate_pincode_input("4122").is_ok());
        assert!(validate_pincode_input("412207").is_ok());
        assert!(validate_pincode_input("4122071").is_err());
        assert!(validate_pincode_input("41a").is_err());
        assert!(validate_pincode_input("४१२२०७").is_err());
    }

    #[test]
    fn test_lookup_ready() {
        assert!(is_lookup_ready("412207"));
        assert!(!is_lookup_ready("41220"));
        assert!(!is_lookup_ready("41220x"));
        assert!(!is_lookup_ready("4122070"));
    }

    #[test]
    fn test_location_required() {
        let err = validate_submission(&request("", "412207", AnalysisTask::History));
        assert_eq!(err, Err(SubmissionError::LocationRequired));

        let err = validate_submission(&request("India", "", AnalysisTask::History));
        assert_eq!(err, Err(SubmissionError::LocationRequired));

        let err = validate_submission(&request("   ", "412207", AnalysisTask::History));
        assert_eq!(err, Err(SubmissionError::LocationRequired));
    }

    #[test]
    fn test_malformed_pincode() {
        let err = validate_submission(&request("India", "41-207", AnalysisTask::History));
        assert_eq!(err, Err(SubmissionError::InvalidPincode));
    }

    #[test]
    fn test_pincode_message_matches_rule() {
        // a partial PIN is still a valid submission
        assert!(validate_submission(&request("India", "4122", AnalysisTask::History)).is_ok());
        let message = SubmissionError::InvalidPincode.message(Language::English);
        assert!(!message.contains("exactly"));
        assert!(SubmissionError::IncompletePincode
            .message(Language::English)
            .contains("6 digits"));
        for language in Language::ALL {
            assert_ne!(
                SubmissionError::InvalidPincode.message(language),
                SubmissionError::IncompletePincode.message(language)
            );
        }
    }

    #[test]
    fn test_subject_required_for_checks() {
        let err = validate_submission(&request("India", "412207", AnalysisTask::CropCheck));
        assert_eq!(err, Err(SubmissionError::SubjectRequired));

        let ok = request("India", "412207", AnalysisTask::CropCheck).with_subject("Turmeric");
        assert!(validate_submission(&ok).is_ok());

        let not_needed = request("India", "412207", AnalysisTask::FruitRecommendation);
        assert!(validate_submission(&not_needed).is_ok());
    }

    #[test]
    fn test_messages_are_distinct_and_localized() {
        let location = SubmissionError::LocationRequired.message(Language::English);
        let subject = SubmissionError::SubjectRequired.message(Language::English);
        assert_ne!(location, subject);
        assert_eq!(subject, "Enter Name");
        assert_eq!(
            SubmissionError::SubjectRequired.message(Language::Gujarati),
            "નામ દાખલ કરો"
        );
    }
}
