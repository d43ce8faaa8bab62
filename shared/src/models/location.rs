//! Farm location models

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::i18n::texts;
use crate::types::Language;

/// Maximum PIN length accepted by the form
pub const PINCODE_LENGTH: usize = 6;

/// Administrative location of the farm
///
/// All fields are free text. Created empty and filled by the user or by a
/// PIN lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(default)]
pub struct LocationData {
    pub country: String,
    pub state: String,
    pub district: String,
    /// Block-level subdivision (taluka / tehsil)
    pub taluka: String,
    /// Town or village
    pub town: String,
    #[validate(length(max = 6), custom = "validate_pincode_digits")]
    pub pincode: String,
}

fn validate_pincode_digits(pincode: &str) -> Result<(), ValidationError> {
    if pincode.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::new("pincode_digits"))
    }
}

/// Editable form fields
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LocationField {
    Country,
    State,
    District,
    Taluka,
    Town,
    Pincode,
}

impl LocationData {
    pub fn get(&self, field: LocationField) -> &str {
        match field {
            LocationField::Country => &self.country,
            LocationField::State => &self.state,
            LocationField::District => &self.district,
            LocationField::Taluka => &self.taluka,
            LocationField::Town => &self.town,
            LocationField::Pincode => &self.pincode,
        }
    }

    pub fn set(&mut self, field: LocationField, value: impl Into<String>) {
        let value = value.into();
        match field {
            LocationField::Country => self.country = value,
            LocationField::State => self.state = value,
            LocationField::District => self.district = value,
            LocationField::Taluka => self.taluka = value,
            LocationField::Town => self.town = value,
            LocationField::Pincode => self.pincode = value,
        }
    }

    /// Overwrite the administrative fields with a lookup result.
    ///
    /// Manually typed values are replaced; town and PIN are left alone.
    pub fn apply_resolved(&mut self, resolved: &ResolvedLocation) {
        self.country = resolved.country.clone();
        self.state = resolved.state.clone();
        self.district = resolved.district.clone();
        self.taluka = resolved.taluka.clone();
    }
}

/// Location fields resolved from a PIN
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolvedLocation {
    pub country: String,
    pub state: String,
    pub district: String,
    pub taluka: String,
    /// Distinct post office / locality names, in directory order
    pub localities: Vec<String>,
}

/// Form location after a lookup, as returned by `POST /location/resolve`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolvedForm {
    pub location: LocationData,
    #[serde(default)]
    pub localities: Vec<String>,
    pub status: LookupStatus,
}

impl ResolvedForm {
    /// Lookup outcome carried by a resolve reply. A searching status has no
    /// outcome yet and counts as unavailable.
    pub fn into_outcome(self) -> LookupOutcome {
        match self.status.kind {
            LookupStatusKind::Found => LookupOutcome::Found(ResolvedLocation {
                country: self.location.country,
                state: self.location.state,
                district: self.location.district,
                taluka: self.location.taluka,
                localities: self.localities,
            }),
            LookupStatusKind::NotFound => LookupOutcome::NotFound,
            LookupStatusKind::Searching | LookupStatusKind::Unavailable => {
                LookupOutcome::Unavailable
            }
        }
    }
}

/// Result of a PIN lookup. Never an error: failures degrade to a status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LookupOutcome {
    Found(ResolvedLocation),
    /// The directory answered but has no match for the PIN
    NotFound,
    /// Transport failure or an unexpected response shape
    Unavailable,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LookupStatusKind {
    Searching,
    Found,
    NotFound,
    Unavailable,
}

/// Advisory status shown next to the location form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LookupStatus {
    pub kind: LookupStatusKind,
    pub message: String,
}

impl LookupStatus {
    pub fn new(kind: LookupStatusKind, language: Language) -> Self {
        let status = &texts(language).status;
        let message = match kind {
            LookupStatusKind::Searching => status.searching,
            LookupStatusKind::Found => status.found,
            LookupStatusKind::NotFound => status.not_found,
            LookupStatusKind::Unavailable => status.manual_entry,
        };
        Self {
            kind,
            message: message.to_string(),
        }
    }

    pub fn for_outcome(outcome: &LookupOutcome, language: Language) -> Self {
        let kind = match outcome {
            LookupOutcome::Found(_) => LookupStatusKind::Found,
            LookupOutcome::NotFound => LookupStatusKind::NotFound,
            LookupOutcome::Unavailable => LookupStatusKind::Unavailable,
        };
        Self::new(kind, language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved() -> ResolvedLocation {
        ResolvedLocation {
            country: "India".to_string(),
            state: "Maharashtra".to_string(),
            district: "Pune".to_string(),
            taluka: "Haveli".to_string(),
            localities: vec!["Uruli Kanchan".to_string(), "Loni Kalbhor".to_string()],
        }
    }

    #[test]
    fn test_apply_resolved_overwrites_manual_values() {
        let mut location = LocationData {
            country: "Bharat".to_string(),
            state: "typed by hand".to_string(),
            town: "Uruli Kanchan".to_string(),
            pincode: "412202".to_string(),
            ..Default::default()
        };
        location.apply_resolved(&resolved());

        assert_eq!(location.country, "India");
        assert_eq!(location.state, "Maharashtra");
        assert_eq!(location.district, "Pune");
        assert_eq!(location.taluka, "Haveli");
        assert_eq!(location.town, "Uruli Kanchan");
        assert_eq!(location.pincode, "412202");
    }

    #[test]
    fn test_pincode_validation() {
        let mut location = LocationData {
            pincode: "412207".to_string(),
            ..Default::default()
        };
        assert!(location.validate().is_ok());

        location.pincode = "41220a".to_string();
        assert!(location.validate().is_err());

        location.pincode = "4122070".to_string();
        assert!(location.validate().is_err());
    }

    #[test]
    fn test_field_accessors() {
        let mut location = LocationData::default();
        location.set(LocationField::Town, "Daund");
        assert_eq!(location.get(LocationField::Town), "Daund");
        assert_eq!(location.town, "Daund");
    }

    #[test]
    fn test_status_message_is_localized() {
        let status = LookupStatus::for_outcome(&LookupOutcome::NotFound, Language::English);
        assert_eq!(status.kind, LookupStatusKind::NotFound);
        assert_eq!(status.message, "Details not found.");

        let status = LookupStatus::for_outcome(&LookupOutcome::Unavailable, Language::English);
        assert_eq!(status.message, "Manual entry required.");
    }

    #[test]
    fn test_resolved_form_reply_to_outcome() {
        let body = r#"{
            "location": {"country": "India", "state": "Maharashtra", "district": "Pune",
                "taluka": "Haveli", "town": "", "pincode": "412202"},
            "localities": ["Uruli Kanchan", "Loni Kalbhor"],
            "status": {"kind": "found", "message": "Location details found!"}
        }"#;
        let form: ResolvedForm = serde_json::from_str(body).unwrap();
        assert_eq!(form.into_outcome(), LookupOutcome::Found(resolved()));

        let body = r#"{"location": {"pincode": "999999"}, "localities": [],
            "status": {"kind": "not_found", "message": "Details not found."}}"#;
        let form: ResolvedForm = serde_json::from_str(body).unwrap();
        assert_eq!(form.into_outcome(), LookupOutcome::NotFound);
    }
}
