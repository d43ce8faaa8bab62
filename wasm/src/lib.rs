//! WebAssembly module for AgriSense
//!
//! Provides client-side logic for:
//! - PIN input filtering and lookup readiness
//! - Task catalog and UI texts
//! - Verdict badges and crop imagery
//! - The form session with stale-completion protection
//!
//! Structured values cross the boundary as JSON strings.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use shared::{
    classify_verdict as classify, AnalysisRequest, AnalysisResult, AnalysisTask, AnalysisTicket,
    Completion, FormSession, Language, LocationField, LookupOutcome, LookupTicket, ResolvedForm,
    VerdictClass,
};

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    log("AgriSense WASM module loaded");
}

fn log(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&JsValue::from_str(message));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

fn log_error(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&JsValue::from_str(message));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization failed: {}", e))
}

fn parse_enum<T: serde::de::DeserializeOwned>(value: &str, what: &str) -> Result<T, String> {
    serde_json::from_value(serde_json::Value::String(value.to_string()))
        .map_err(|_| format!("Unknown {}: {}", what, value))
}

// ============================================================================
// Stateless helpers
// ============================================================================

/// Whether a PIN field value passes the input filter
#[wasm_bindgen]
pub fn accept_pincode_input(value: &str) -> bool {
    shared::validate_pincode_input(value).is_ok()
}

#[wasm_bindgen]
pub fn is_lookup_ready(value: &str) -> bool {
    shared::is_lookup_ready(value)
}

/// Badge class for a verdict: positive, caution, negative or unknown
#[wasm_bindgen]
pub fn classify_verdict(verdict: &str) -> String {
    match classify(verdict) {
        VerdictClass::Positive => "positive",
        VerdictClass::Caution => "caution",
        VerdictClass::Negative => "negative",
        VerdictClass::Unknown => "unknown",
    }
    .to_string()
}

#[wasm_bindgen]
pub fn image_seed(subject: &str) -> u32 {
    shared::image_seed(subject)
}

#[wasm_bindgen]
pub fn image_url(subject: &str) -> String {
    shared::image_url(subject)
}

/// Ordered task catalog as JSON
#[wasm_bindgen]
pub fn task_catalog(language: &str) -> Result<String, JsValue> {
    to_json(&shared::task_catalog(Language::parse_or_default(language))).map_err(js_error)
}

/// UI text bundle as JSON
#[wasm_bindgen]
pub fn ui_texts(language: &str) -> Result<String, JsValue> {
    to_json(shared::texts(Language::parse_or_default(language))).map_err(js_error)
}

/// Render a reply JSON into the view model JSON
#[wasm_bindgen]
pub fn render_result(result_json: &str, language: &str) -> Result<String, JsValue> {
    render_result_inner(result_json, Language::parse_or_default(language)).map_err(js_error)
}

fn render_result_inner(result_json: &str, language: Language) -> Result<String, String> {
    let result =
        AnalysisResult::from_json(result_json).map_err(|e| format!("Invalid result JSON: {}", e))?;
    to_json(&shared::render_result(&result, language))
}

/// Build the prompt document for a request JSON
#[wasm_bindgen]
pub fn build_prompt(request_json: &str) -> Result<String, JsValue> {
    build_prompt_inner(request_json).map_err(js_error)
}

fn build_prompt_inner(request_json: &str) -> Result<String, String> {
    let request: AnalysisRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid request JSON: {}", e))?;
    shared::validate_submission(&request).map_err(|e| e.message(request.language).to_string())?;
    to_json(&shared::build_prompt(&request))
}

fn js_error(message: String) -> JsValue {
    JsValue::from_str(&message)
}

// ============================================================================
// Form session
// ============================================================================

/// Handle returned when a PIN reaches 6 digits
#[wasm_bindgen]
pub struct LookupHandle {
    ticket: LookupTicket,
}

#[wasm_bindgen]
impl LookupHandle {
    #[wasm_bindgen(getter)]
    pub fn pincode(&self) -> String {
        self.ticket.pincode.clone()
    }
}

/// Handle returned when a submission starts
#[wasm_bindgen]
pub struct AnalysisHandle {
    ticket: AnalysisTicket,
    request: AnalysisRequest,
}

#[wasm_bindgen]
impl AnalysisHandle {
    /// The validated request to send to the server
    #[wasm_bindgen(getter)]
    pub fn request_json(&self) -> String {
        to_json(&self.request).unwrap_or_default()
    }
}

/// Browser-side owner of the form session
#[wasm_bindgen]
pub struct FormController {
    session: FormSession,
}

#[wasm_bindgen]
impl FormController {
    #[wasm_bindgen(constructor)]
    pub fn new(language: &str) -> Self {
        Self {
            session: FormSession::new(Language::parse_or_default(language)),
        }
    }

    pub fn set_language(&mut self, language: &str) {
        self.session.set_language(Language::parse_or_default(language));
    }

    /// Edit a non-PIN location field (country, state, district, taluka, town)
    pub fn edit_field(&mut self, field: &str, value: &str) -> Result<(), JsValue> {
        let field: LocationField = parse_enum(field, "field").map_err(js_error)?;
        if field == LocationField::Pincode {
            return Err(js_error("Use enter_pincode for the PIN".to_string()));
        }
        self.session.edit_field(field, value);
        Ok(())
    }

    /// Enter a PIN value; returns a handle when a lookup should start
    pub fn enter_pincode(&mut self, value: &str) -> Option<LookupHandle> {
        self.session
            .enter_pincode(value)
            .map(|ticket| LookupHandle { ticket })
    }

    /// Apply the body of a `POST /location/resolve` reply. An unreadable
    /// body counts as an unavailable directory. Returns false for a stale
    /// handle.
    pub fn complete_lookup(&mut self, handle: &LookupHandle, resolved_json: &str) -> bool {
        let outcome = match serde_json::from_str::<ResolvedForm>(resolved_json) {
            Ok(form) => form.into_outcome(),
            Err(e) => {
                log_error(&format!("Unreadable lookup reply: {}", e));
                LookupOutcome::Unavailable
            }
        };
        self.session.complete_lookup(&handle.ticket, outcome) == Completion::Applied
    }

    /// Record a lookup request that never got a reply
    pub fn fail_lookup(&mut self, handle: &LookupHandle, cause: &str) -> bool {
        log_error(&format!("Lookup failed: {}", cause));
        self.session
            .complete_lookup(&handle.ticket, LookupOutcome::Unavailable)
            == Completion::Applied
    }

    pub fn select_task(&mut self, task: &str) -> Result<(), JsValue> {
        let task: AnalysisTask = parse_enum(task, "task").map_err(js_error)?;
        self.session.select_task(task);
        Ok(())
    }

    pub fn set_subject_name(&mut self, name: &str) {
        self.session.set_subject_name(name);
    }

    /// Validate and start a submission. On failure the error is the
    /// localized message, also kept in the session state.
    pub fn begin_submit(&mut self) -> Result<AnalysisHandle, JsValue> {
        self.session
            .begin_submit()
            .map(|(ticket, request)| AnalysisHandle { ticket, request })
            .map_err(|e| js_error(e.message(self.session.language).to_string()))
    }

    /// Apply a reply JSON. Returns false for a stale handle.
    pub fn complete_analysis(&mut self, handle: &AnalysisHandle, result_json: &str) -> bool {
        let outcome = AnalysisResult::from_json(result_json);
        if let Err(e) = &outcome {
            log_error(&format!("Analysis reply rejected: {}", e));
        }
        self.session.complete_analysis(handle.ticket, outcome) == Completion::Applied
    }

    /// Record a failed analysis call. Returns false for a stale handle.
    pub fn fail_analysis(&mut self, handle: &AnalysisHandle, cause: &str) -> bool {
        log_error(&format!("Analysis failed: {}", cause));
        self.session
            .complete_analysis(handle.ticket, Err::<AnalysisResult, _>(cause))
            == Completion::Applied
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }

    #[wasm_bindgen(getter)]
    pub fn busy(&self) -> bool {
        self.session.busy
    }

    /// Whole session state as JSON
    pub fn state_json(&self) -> String {
        to_json(&self.session).unwrap_or_default()
    }

    /// View model of the current result, if any
    pub fn view_json(&self) -> Option<String> {
        let result = self.session.result.as_ref()?;
        to_json(&shared::render_result(result, self.session.language)).ok()
    }
}
