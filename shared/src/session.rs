//! Form session state
//!
//! One owned record holds everything the form shows. The two asynchronous
//! operations (PIN lookup and analysis) hand out tickets stamped with a
//! generation number; a completion is applied only while its ticket is the
//! latest one issued, so a late response never overwrites newer state.

use serde::Serialize;

use crate::i18n::texts;
use crate::models::{
    AnalysisRequest, AnalysisResult, AnalysisTask, LocationData, LocationField, LookupOutcome,
    LookupStatus, LookupStatusKind,
};
use crate::types::Language;
use crate::validation::{is_lookup_ready, validate_pincode_input, validate_submission, SubmissionError};

/// Handle for an in-flight PIN lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    generation: u64,
    pub pincode: String,
}

impl LookupTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Handle for an in-flight analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisTicket {
    generation: u64,
}

impl AnalysisTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Whether a completion was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Stale,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSession {
    pub language: Language,
    pub location: LocationData,
    pub task: Option<AnalysisTask>,
    pub subject_name: String,
    pub localities: Vec<String>,
    pub lookup_status: Option<LookupStatus>,
    pub busy: bool,
    pub error: Option<String>,
    pub result: Option<AnalysisResult>,
    #[serde(skip)]
    lookup_generation: u64,
    #[serde(skip)]
    analysis_generation: u64,
}

impl FormSession {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Default::default()
        }
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Edit a location field. PIN edits go through [`Self::enter_pincode`].
    pub fn edit_field(&mut self, field: LocationField, value: impl Into<String>) {
        self.location.set(field, value);
    }

    /// Enter a PIN. Values failing the input filter are dropped and the
    /// previous value kept. Any accepted edit invalidates the lookup in
    /// flight. Returns a ticket once the PIN reaches 6 digits.
    pub fn enter_pincode(&mut self, value: &str) -> Option<LookupTicket> {
        if validate_pincode_input(value).is_err() {
            return None;
        }
        self.location.pincode = value.to_string();
        self.lookup_generation += 1;
        if !is_lookup_ready(value) {
            if self
                .lookup_status
                .as_ref()
                .is_some_and(|status| status.kind == LookupStatusKind::Searching)
            {
                self.lookup_status = None;
            }
            return None;
        }

        self.lookup_status = Some(LookupStatus::new(LookupStatusKind::Searching, self.language));
        Some(LookupTicket {
            generation: self.lookup_generation,
            pincode: value.to_string(),
        })
    }

    /// Apply a lookup outcome. A found location overwrites the administrative
    /// fields and the suggestions; a failure only updates the status.
    pub fn complete_lookup(&mut self, ticket: &LookupTicket, outcome: LookupOutcome) -> Completion {
        if ticket.generation != self.lookup_generation {
            return Completion::Stale;
        }

        self.lookup_status = Some(LookupStatus::for_outcome(&outcome, self.language));
        if let LookupOutcome::Found(resolved) = outcome {
            self.location.apply_resolved(&resolved);
            self.localities = resolved.localities;
        }
        Completion::Applied
    }

    /// Select a task. Leaving the check tasks clears the subject name.
    pub fn select_task(&mut self, task: AnalysisTask) {
        self.task = Some(task);
        if !task.is_check() {
            self.subject_name.clear();
        }
    }

    pub fn set_subject_name(&mut self, name: impl Into<String>) {
        self.subject_name = name.into();
    }

    /// Request for the current form state, if a task is selected
    pub fn request(&self) -> Option<AnalysisRequest> {
        let task = self.task?;
        let request = AnalysisRequest::new(self.location.clone(), task, self.language);
        Some(if task.is_check() {
            request.with_subject(self.subject_name.clone())
        } else {
            request
        })
    }

    /// Validate and start an analysis. On failure the localized message is
    /// stored in `error` and nothing is sent.
    pub fn begin_submit(&mut self) -> Result<(AnalysisTicket, AnalysisRequest), SubmissionError> {
        match self.prepare_submit() {
            Ok(request) => {
                self.analysis_generation += 1;
                self.busy = true;
                self.error = None;
                self.result = None;
                Ok((
                    AnalysisTicket {
                        generation: self.analysis_generation,
                    },
                    request,
                ))
            }
            Err(err) => {
                // a rejected double submit must not hide the running state
                if err != SubmissionError::Busy {
                    self.error = Some(err.message(self.language).to_string());
                }
                Err(err)
            }
        }
    }

    fn prepare_submit(&self) -> Result<AnalysisRequest, SubmissionError> {
        if self.busy {
            return Err(SubmissionError::Busy);
        }
        let request = self.request().ok_or(SubmissionError::TaskRequired)?;
        validate_submission(&request)?;
        Ok(request)
    }

    /// Apply the outcome of an analysis. Any failure becomes the generic
    /// localized message; the cause is the caller's to log.
    pub fn complete_analysis<E>(
        &mut self,
        ticket: AnalysisTicket,
        outcome: Result<AnalysisResult, E>,
    ) -> Completion {
        if ticket.generation != self.analysis_generation {
            return Completion::Stale;
        }

        self.busy = false;
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.error = None;
            }
            Err(_) => {
                self.result = None;
                self.error = Some(texts(self.language).errors.analysis_failed.to_string());
            }
        }
        Completion::Applied
    }

    /// Clear the form. The language survives; in-flight tickets go stale.
    pub fn reset(&mut self) {
        let language = self.language;
        let lookup_generation = self.lookup_generation + 1;
        let analysis_generation = self.analysis_generation + 1;
        *self = Self {
            language,
            lookup_generation,
            analysis_generation,
            ..Default::default()
        };
    }
}
