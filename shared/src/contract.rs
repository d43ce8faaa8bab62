//! Reply contract check
//!
//! The generator is constrained by the output schema, but the schema cannot
//! express per-task rules (which section must be filled, how many items, the
//! mandatory guide). These are checked after parsing. Violations are reported
//! to the caller, never raised.

use std::fmt;

use serde::Serialize;

use crate::models::{
    AnalysisResult, AnalysisTask, RecommendationItem, ResultSection, Verdict,
    RECOMMENDATION_VERDICTS, SUITABILITY_VERDICTS,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContractViolation {
    EmptyLocationSummary,
    MissingSection {
        section: &'static str,
    },
    UnexpectedSection {
        section: &'static str,
    },
    ItemCount {
        expected: usize,
        actual: usize,
    },
    MissingCultivationGuide,
    IncompleteCultivationGuide {
        fields: Vec<&'static str>,
    },
    VerdictOutsideVocabulary {
        item: String,
        verdict: String,
    },
    ScoreOutOfRange {
        item: String,
        score: f64,
    },
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractViolation::EmptyLocationSummary => write!(f, "locationSummary is empty"),
            ContractViolation::MissingSection { section } => {
                write!(f, "expected section '{section}' is missing")
            }
            ContractViolation::UnexpectedSection { section } => {
                write!(f, "section '{section}' belongs to another task")
            }
            ContractViolation::ItemCount { expected, actual } => {
                write!(f, "expected {expected} recommendations, got {actual}")
            }
            ContractViolation::MissingCultivationGuide => {
                write!(f, "suitabilityCheck.cultivationGuide is missing")
            }
            ContractViolation::IncompleteCultivationGuide { fields } => {
                write!(f, "cultivation guide has empty fields: {}", fields.join(", "))
            }
            ContractViolation::VerdictOutsideVocabulary { item, verdict } => {
                write!(f, "verdict '{verdict}' for '{item}' is outside the vocabulary")
            }
            ContractViolation::ScoreOutOfRange { item, score } => {
                write!(f, "suitabilityScore {score} for '{item}' is outside 0-100")
            }
        }
    }
}

/// Check a parsed reply against the rules of the task it answers
pub fn check_contract(task: AnalysisTask, result: &AnalysisResult) -> Vec<ContractViolation> {
    let mut violations = Vec::new();

    if result.location_summary.trim().is_empty() {
        violations.push(ContractViolation::EmptyLocationSummary);
    }

    let expected = task.result_section();
    for (section, present) in sections(result) {
        if section == expected && !present {
            violations.push(ContractViolation::MissingSection {
                section: section.field_name(),
            });
        } else if section != expected && present {
            violations.push(ContractViolation::UnexpectedSection {
                section: section.field_name(),
            });
        }
    }

    if let Some(items) = &result.recommendations {
        if let Some(expected) = task.required_item_count() {
            if items.len() != expected {
                violations.push(ContractViolation::ItemCount {
                    expected,
                    actual: items.len(),
                });
            }
        }
        for item in items {
            check_item(item, &RECOMMENDATION_VERDICTS, &mut violations);
        }
    }

    if let Some(item) = &result.suitability_check {
        check_item(item, &SUITABILITY_VERDICTS, &mut violations);
        if task.is_check() {
            match &item.cultivation_guide {
                None => violations.push(ContractViolation::MissingCultivationGuide),
                Some(guide) => {
                    let fields = guide.missing_fields();
                    if !fields.is_empty() {
                        violations.push(ContractViolation::IncompleteCultivationGuide { fields });
                    }
                }
            }
        }
    }

    violations
}

fn sections(result: &AnalysisResult) -> [(ResultSection, bool); 4] {
    [
        (ResultSection::WeatherHistory, result.weather_history.is_some()),
        (ResultSection::FutureForecast, result.future_forecast.is_some()),
        (ResultSection::Recommendations, result.recommendations.is_some()),
        (ResultSection::SuitabilityCheck, result.suitability_check.is_some()),
    ]
}

fn check_item(
    item: &RecommendationItem,
    vocabulary: &[Verdict],
    violations: &mut Vec<ContractViolation>,
) {
    let allowed = Verdict::parse(&item.verdict).is_some_and(|v| vocabulary.contains(&v));
    if !allowed {
        violations.push(ContractViolation::VerdictOutsideVocabulary {
            item: item.name.clone(),
            verdict: item.verdict.clone(),
        });
    }
    if !(0.0..=100.0).contains(&item.suitability_score) {
        violations.push(ContractViolation::ScoreOutOfRange {
            item: item.name.clone(),
            score: item.suitability_score,
        });
    }
}
