//! Analysis request and result models
//!
//! The result types mirror the JSON contract the generator is constrained to,
//! so field names are camelCase on the wire.

use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use super::location::LocationData;
use super::task::AnalysisTask;
use crate::types::Language;

/// A single analysis submission
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct AnalysisRequest {
    #[validate]
    pub location: LocationData,
    pub task: AnalysisTask,
    #[serde(default)]
    pub language: Language,
    /// Crop or fruit to check. Only used by the two check tasks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_name: Option<String>,
}

impl AnalysisRequest {
    pub fn new(location: LocationData, task: AnalysisTask, language: Language) -> Self {
        Self {
            location,
            task,
            language,
            subject_name: None,
        }
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject_name = Some(subject.into());
        self
    }

    /// Trimmed subject name, if one was entered
    pub fn subject(&self) -> Option<&str> {
        self.subject_name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// One point of a weather chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherDataPoint {
    /// Year for history, month name for forecasts
    #[serde(deserialize_with = "string_or_number")]
    pub label: String,
    /// Average temperature in Celsius
    pub temperature: f64,
    /// Rainfall in mm
    pub rainfall: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FertilizerSchedule {
    pub organic: String,
    pub chemical: String,
}

/// Planting and care guide returned for suitability checks
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct CultivationGuide {
    pub plantation_distance: String,
    pub ground_preparation: String,
    /// Pit dimensions and basal dose
    pub hole_preparation: String,
    /// Care for the first 6-8 months
    pub care_instructions: String,
    pub fertilizer_schedule: FertilizerSchedule,
}

impl CultivationGuide {
    /// Names of the guide fields left empty by the generator
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let fields = [
            ("plantationDistance", &self.plantation_distance),
            ("groundPreparation", &self.ground_preparation),
            ("holePreparation", &self.hole_preparation),
            ("careInstructions", &self.care_instructions),
            ("fertilizerSchedule.organic", &self.fertilizer_schedule.organic),
            ("fertilizerSchedule.chemical", &self.fertilizer_schedule.chemical),
        ];
        fields
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
            .collect()
    }
}

/// A recommended (or checked) crop or fruit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationItem {
    /// Name in the display language
    pub name: String,
    /// English name, used for imagery
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub english_name: Option<String>,
    /// 0-100
    pub suitability_score: f64,
    pub season: String,
    pub yield_expected: String,
    pub water_requirement: String,
    pub difficulty: String,
    /// English verdict token, see [`crate::Verdict`]
    pub verdict: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cultivation_guide: Option<CultivationGuide>,
}

impl RecommendationItem {
    /// Name used to look up imagery: English when present, else localized
    pub fn image_subject(&self) -> &str {
        self.english_name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.name)
    }
}

/// Structured reply of the generative backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub location_summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather_history: Option<Vec<WeatherDataPoint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub future_forecast: Option<Vec<WeatherDataPoint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<RecommendationItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suitability_check: Option<RecommendationItem>,
}

impl AnalysisResult {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Label {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Label::deserialize(deserializer)? {
        Label::Text(s) => s,
        Label::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_result() {
        let result = AnalysisResult::from_json(r#"{"locationSummary": "Semi-arid"}"#).unwrap();
        assert_eq!(result.location_summary, "Semi-arid");
        assert!(result.weather_history.is_none());
        assert!(result.suitability_check.is_none());
    }

    #[test]
    fn test_missing_location_summary_is_rejected() {
        assert!(AnalysisResult::from_json(r#"{"weatherHistory": []}"#).is_err());
        assert!(AnalysisResult::from_json("not json").is_err());
    }

    #[test]
    fn test_numeric_labels_are_accepted() {
        let json = r#"{
            "locationSummary": "x",
            "weatherHistory": [{"label": 2015, "temperature": 26.1, "rainfall": 640}]
        }"#;
        let result = AnalysisResult::from_json(json).unwrap();
        let history = result.weather_history.unwrap();
        assert_eq!(history[0].label, "2015");
        assert_eq!(history[0].rainfall, 640.0);
    }

    #[test]
    fn test_absent_sections_are_not_serialized() {
        let result = AnalysisResult {
            location_summary: "x".to_string(),
            weather_history: None,
            future_forecast: Some(vec![]),
            recommendations: None,
            suitability_check: None,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("weatherHistory").is_none());
        assert!(json.get("futureForecast").is_some());
    }

    #[test]
    fn test_partial_cultivation_guide() {
        let guide: CultivationGuide =
            serde_json::from_str(r#"{"plantationDistance": "10x10 ft"}"#).unwrap();
        assert_eq!(guide.plantation_distance, "10x10 ft");
        assert_eq!(guide.missing_fields().len(), 5);
        assert!(guide.missing_fields().contains(&"fertilizerSchedule.organic"));
    }

    #[test]
    fn test_image_subject_prefers_english_name() {
        let mut item = RecommendationItem {
            name: "ड्रैगन फ्रूट".to_string(),
            english_name: Some("Dragon Fruit".to_string()),
            suitability_score: 80.0,
            season: String::new(),
            yield_expected: String::new(),
            water_requirement: String::new(),
            difficulty: String::new(),
            verdict: "Grow".to_string(),
            description: String::new(),
            cultivation_guide: None,
        };
        assert_eq!(item.image_subject(), "Dragon Fruit");

        item.english_name = Some("  ".to_string());
        assert_eq!(item.image_subject(), "ड्रैगन फ्रूट");
    }

    #[test]
    fn test_subject_is_trimmed() {
        let request = AnalysisRequest::new(
            LocationData::default(),
            AnalysisTask::FruitCheck,
            Language::English,
        )
        .with_subject("  Dragon Fruit ");
        assert_eq!(request.subject(), Some("Dragon Fruit"));

        let blank = request.clone().with_subject("   ");
        assert_eq!(blank.subject(), None);
    }
}
