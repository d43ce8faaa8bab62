//! Location resolver service
//!
//! Wraps the postal directory so a lookup never fails past this point: any
//! directory problem degrades to an advisory status and leaves the submitted
//! fields untouched.

use serde::Deserialize;
use shared::{
    is_lookup_ready, validate_pincode_input, Language, LocationData, LookupOutcome, LookupStatus,
    ResolvedForm, SubmissionError,
};

use crate::error::{AppError, AppResult};
use crate::external::PostalClient;

#[derive(Clone)]
pub struct LocationService {
    postal: PostalClient,
}

/// Input for resolving the current form location
#[derive(Debug, Deserialize)]
pub struct ResolveLocationInput {
    pub location: LocationData,
    #[serde(default)]
    pub language: Language,
}

impl LocationService {
    pub fn new(postal: PostalClient) -> Self {
        Self { postal }
    }

    /// Resolve the PIN of a form location.
    ///
    /// A PIN that is not exactly 6 digits is rejected without a lookup:
    /// malformed input as invalid, a partial PIN as incomplete.
    pub async fn resolve(&self, input: ResolveLocationInput) -> AppResult<ResolvedForm> {
        let ResolveLocationInput {
            mut location,
            language,
        } = input;

        if validate_pincode_input(&location.pincode).is_err() {
            return Err(AppError::submission(SubmissionError::InvalidPincode, language));
        }
        if !is_lookup_ready(&location.pincode) {
            return Err(AppError::submission(SubmissionError::IncompletePincode, language));
        }

        let outcome = match self.postal.lookup(&location.pincode).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(pincode = %location.pincode, "PIN lookup degraded: {}", e);
                LookupOutcome::Unavailable
            }
        };

        let status = LookupStatus::for_outcome(&outcome, language);
        let localities = match outcome {
            LookupOutcome::Found(resolved) => {
                location.apply_resolved(&resolved);
                resolved.localities
            }
            LookupOutcome::NotFound => {
                tracing::info!(pincode = %location.pincode, "PIN not in directory");
                Vec::new()
            }
            LookupOutcome::Unavailable => Vec::new(),
        };

        Ok(ResolvedForm {
            location,
            localities,
            status,
        })
    }
}
