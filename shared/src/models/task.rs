//! Analysis task catalog

use serde::{Deserialize, Serialize};

use crate::i18n::texts;
use crate::types::Language;

/// The six analysis intents a farmer can request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AnalysisTask {
    #[serde(rename = "History")]
    History,
    #[serde(rename = "Prediction")]
    Prediction,
    #[serde(rename = "Crop Recommendation")]
    CropRecommendation,
    #[serde(rename = "Fruit Recommendation")]
    FruitRecommendation,
    #[serde(rename = "Crop Check")]
    CropCheck,
    #[serde(rename = "Fruit Check")]
    FruitCheck,
}

/// Which result section a task populates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ResultSection {
    WeatherHistory,
    FutureForecast,
    Recommendations,
    SuitabilityCheck,
}

impl ResultSection {
    /// JSON field name in the reply
    pub fn field_name(&self) -> &'static str {
        match self {
            ResultSection::WeatherHistory => "weatherHistory",
            ResultSection::FutureForecast => "futureForecast",
            ResultSection::Recommendations => "recommendations",
            ResultSection::SuitabilityCheck => "suitabilityCheck",
        }
    }
}

impl AnalysisTask {
    /// Catalog order
    pub const ALL: [AnalysisTask; 6] = [
        AnalysisTask::History,
        AnalysisTask::Prediction,
        AnalysisTask::CropRecommendation,
        AnalysisTask::FruitRecommendation,
        AnalysisTask::CropCheck,
        AnalysisTask::FruitCheck,
    ];

    /// Suitability checks need a subject name and a cultivation guide
    pub fn is_check(&self) -> bool {
        matches!(self, AnalysisTask::CropCheck | AnalysisTask::FruitCheck)
    }

    /// Letter used by the prompt to refer to the task
    pub fn letter(&self) -> char {
        match self {
            AnalysisTask::History => 'A',
            AnalysisTask::Prediction => 'B',
            AnalysisTask::CropRecommendation => 'C',
            AnalysisTask::FruitRecommendation => 'D',
            AnalysisTask::CropCheck => 'E',
            AnalysisTask::FruitCheck => 'F',
        }
    }

    /// Task directive embedded in the prompt
    pub fn directive(&self) -> &'static str {
        match self {
            AnalysisTask::History => "A. Weather History Analysis (10–15 years)",
            AnalysisTask::Prediction => "B. Future Weather Prediction",
            AnalysisTask::CropRecommendation => "C. Best Crop Recommendation",
            AnalysisTask::FruitRecommendation => {
                "D. Best Fruit Plant Recommendation (Provide exactly 10 types)"
            }
            AnalysisTask::CropCheck => "E. Crop Suitability Check",
            AnalysisTask::FruitCheck => "F. Fruit Plant Suitability Check",
        }
    }

    pub fn result_section(&self) -> ResultSection {
        match self {
            AnalysisTask::History => ResultSection::WeatherHistory,
            AnalysisTask::Prediction => ResultSection::FutureForecast,
            AnalysisTask::CropRecommendation | AnalysisTask::FruitRecommendation => {
                ResultSection::Recommendations
            }
            AnalysisTask::CropCheck | AnalysisTask::FruitCheck => ResultSection::SuitabilityCheck,
        }
    }

    /// Required recommendation count, if the task fixes one
    pub fn required_item_count(&self) -> Option<usize> {
        match self {
            AnalysisTask::FruitRecommendation => Some(10),
            _ => None,
        }
    }

    pub fn label(&self, language: Language) -> &'static str {
        let tasks = &texts(language).tasks;
        match self {
            AnalysisTask::History => tasks.history,
            AnalysisTask::Prediction => tasks.prediction,
            AnalysisTask::CropRecommendation => tasks.crop_rec,
            AnalysisTask::FruitRecommendation => tasks.fruit_rec,
            AnalysisTask::CropCheck => tasks.crop_check,
            AnalysisTask::FruitCheck => tasks.fruit_check,
        }
    }

    pub fn description(&self, language: Language) -> &'static str {
        let tasks = &texts(language).tasks;
        match self {
            AnalysisTask::History => tasks.desc_history,
            AnalysisTask::Prediction => tasks.desc_prediction,
            AnalysisTask::CropRecommendation => tasks.desc_crop_rec,
            AnalysisTask::FruitRecommendation => tasks.desc_fruit_rec,
            AnalysisTask::CropCheck => tasks.desc_crop_check,
            AnalysisTask::FruitCheck => tasks.desc_fruit_check,
        }
    }

    /// Icon key understood by the front end's icon set
    pub fn icon(&self) -> &'static str {
        match self {
            AnalysisTask::History => "history",
            AnalysisTask::Prediction => "line-chart",
            AnalysisTask::CropRecommendation => "sprout",
            AnalysisTask::FruitRecommendation => "trees",
            AnalysisTask::CropCheck => "search",
            AnalysisTask::FruitCheck => "cloud-sun",
        }
    }

    /// Example subject shown in the name input of check tasks
    pub fn subject_placeholder(&self) -> Option<&'static str> {
        match self {
            AnalysisTask::CropCheck => Some("e.g. Turmeric"),
            AnalysisTask::FruitCheck => Some("e.g. Dragon Fruit"),
            _ => None,
        }
    }
}

impl std::fmt::Display for AnalysisTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AnalysisTask::History => "History",
            AnalysisTask::Prediction => "Prediction",
            AnalysisTask::CropRecommendation => "Crop Recommendation",
            AnalysisTask::FruitRecommendation => "Fruit Recommendation",
            AnalysisTask::CropCheck => "Crop Check",
            AnalysisTask::FruitCheck => "Fruit Check",
        };
        f.write_str(name)
    }
}

/// One entry of the task selector
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TaskEntry {
    pub task: AnalysisTask,
    pub label: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub requires_subject: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_placeholder: Option<&'static str>,
}

/// Ordered task catalog for the selection UI
pub fn task_catalog(language: Language) -> Vec<TaskEntry> {
    AnalysisTask::ALL
        .into_iter()
        .map(|task| TaskEntry {
            task,
            label: task.label(language),
            description: task.description(language),
            icon: task.icon(),
            requires_subject: task.is_check(),
            subject_placeholder: task.subject_placeholder(),
        })
        .collect()
}
