//! Verdict vocabulary and badge classification
//!
//! Verdict tokens are a contract between the generator and the renderer and
//! stay in English whatever the display language is.

use serde::{Deserialize, Serialize};

/// Fixed English verdict tokens
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Verdict {
    #[serde(rename = "Highly Recommended")]
    HighlyRecommended,
    #[serde(rename = "Recommended")]
    Recommended,
    #[serde(rename = "Grow")]
    Grow,
    #[serde(rename = "Grow with Care")]
    GrowWithCare,
    #[serde(rename = "Not Recommended")]
    NotRecommended,
}

/// Tokens allowed in a recommendation list
pub const RECOMMENDATION_VERDICTS: [Verdict; 4] = [
    Verdict::HighlyRecommended,
    Verdict::Recommended,
    Verdict::GrowWithCare,
    Verdict::NotRecommended,
];

/// Tokens allowed in a single suitability check
pub const SUITABILITY_VERDICTS: [Verdict; 3] = [
    Verdict::Grow,
    Verdict::GrowWithCare,
    Verdict::NotRecommended,
];

const ALL_VERDICTS: [Verdict; 5] = [
    Verdict::HighlyRecommended,
    Verdict::Recommended,
    Verdict::Grow,
    Verdict::GrowWithCare,
    Verdict::NotRecommended,
];

impl Verdict {
    pub fn token(&self) -> &'static str {
        match self {
            Verdict::HighlyRecommended => "Highly Recommended",
            Verdict::Recommended => "Recommended",
            Verdict::Grow => "Grow",
            Verdict::GrowWithCare => "Grow with Care",
            Verdict::NotRecommended => "Not Recommended",
        }
    }

    /// Exact vocabulary match, ignoring case and extra whitespace
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = normalize(value);
        ALL_VERDICTS
            .into_iter()
            .find(|v| v.token().to_lowercase() == normalized)
    }

    pub fn class(&self) -> VerdictClass {
        match self {
            Verdict::HighlyRecommended | Verdict::Recommended | Verdict::Grow => {
                VerdictClass::Positive
            }
            Verdict::GrowWithCare => VerdictClass::Caution,
            Verdict::NotRecommended => VerdictClass::Negative,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

/// Badge category derived from a verdict
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum VerdictClass {
    Positive,
    Caution,
    Negative,
    /// Neutral styling for anything outside the vocabulary
    Unknown,
}

impl VerdictClass {
    pub fn icon(&self) -> &'static str {
        match self {
            VerdictClass::Positive | VerdictClass::Unknown => "check-circle",
            VerdictClass::Caution => "alert-triangle",
            VerdictClass::Negative => "x-circle",
        }
    }

    /// CSS modifier for the badge
    pub fn style(&self) -> &'static str {
        match self {
            VerdictClass::Positive => "verdict-positive",
            VerdictClass::Caution => "verdict-caution",
            VerdictClass::Negative => "verdict-negative",
            VerdictClass::Unknown => "verdict-neutral",
        }
    }
}

/// Classify a raw verdict string into a badge category.
///
/// Vocabulary tokens map through [`Verdict::class`]. Plain `Recommended` is
/// positive here; the keyword rules alone would leave it unknown, since it
/// carries neither `highly` nor `grow`. Off-vocabulary phrasing
/// falls back to keyword rules (`highly`, or `grow` without `care`, is
/// positive; `care` or `risky` is caution; `not` is negative). Anything else
/// is [`VerdictClass::Unknown`].
pub fn classify_verdict(value: &str) -> VerdictClass {
    if let Some(verdict) = Verdict::parse(value) {
        return verdict.class();
    }

    let v = normalize(value);
    if v.contains("highly") || (v.contains("grow") && !v.contains("care")) {
        VerdictClass::Positive
    } else if v.contains("care") || v.contains("risky") {
        VerdictClass::Caution
    } else if v.contains("not") {
        VerdictClass::Negative
    } else {
        VerdictClass::Unknown
    }
}

fn normalize(value: &str) -> String {
    value
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
