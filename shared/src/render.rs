//! Result renderer
//!
//! Maps an [`AnalysisResult`] into a view model the front end draws directly:
//! summary text, at most one chart, recommendation cards and the suitability
//! hero card with its cultivation guide.

use serde::Serialize;

use crate::i18n::texts;
use crate::models::{
    classify_verdict, AnalysisResult, AnalysisTask, CultivationGuide, RecommendationItem,
    VerdictClass, WeatherDataPoint,
};
use crate::types::Language;

pub const IMAGE_WIDTH: u32 = 600;
pub const IMAGE_HEIGHT: u32 = 400;

const IMAGE_BASE_URL: &str = "https://image.pollinations.ai/prompt/";

pub const TEMPERATURE_AXIS: &str = "Temp (°C)";
pub const RAINFALL_AXIS: &str = "Rain (mm)";

// ============================================================================
// Imagery
// ============================================================================

/// Stable seed for a subject name: the sum of its UTF-16 code units
pub fn image_seed(subject: &str) -> u32 {
    subject
        .encode_utf16()
        .map(u32::from)
        .fold(0u32, u32::wrapping_add)
}

/// Deterministic illustrative image for a subject
pub fn image_url(subject: &str) -> String {
    format!(
        "{IMAGE_BASE_URL}realistic%20{}%20plant%20crop%20agriculture%20farming%20harvest%20high%20quality%204k%20photography?width={IMAGE_WIDTH}&height={IMAGE_HEIGHT}&nologo=true&seed={}",
        urlencoding::encode(subject),
        image_seed(subject)
    )
}

// ============================================================================
// View Model
// ============================================================================

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartView {
    pub title: &'static str,
    pub temperature_axis: &'static str,
    pub rainfall_axis: &'static str,
    /// Chart order is reply order
    pub points: Vec<WeatherDataPoint>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BadgeView {
    pub class: VerdictClass,
    pub icon: &'static str,
    pub style: &'static str,
}

impl BadgeView {
    pub fn for_verdict(verdict: &str) -> Self {
        let class = classify_verdict(verdict);
        Self {
            class,
            icon: class.icon(),
            style: class.style(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub name: String,
    pub image_url: String,
    pub season: String,
    pub suitability_score: f64,
    pub yield_expected: String,
    pub water_requirement: String,
    pub difficulty: String,
    pub verdict: String,
    pub badge: BadgeView,
    pub description: String,
}

impl CardView {
    pub fn from_item(item: &RecommendationItem) -> Self {
        Self {
            name: item.name.clone(),
            image_url: image_url(item.image_subject()),
            season: item.season.clone(),
            suitability_score: item.suitability_score,
            yield_expected: item.yield_expected.clone(),
            water_requirement: item.water_requirement.clone(),
            difficulty: item.difficulty.clone(),
            verdict: item.verdict.clone(),
            badge: BadgeView::for_verdict(&item.verdict),
            description: item.description.clone(),
        }
    }
}

/// One titled block of the cultivation guide
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GuideSection {
    pub title: &'static str,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GuideView {
    pub title: &'static str,
    pub sections: Vec<GuideSection>,
    pub fertilizers_title: &'static str,
    pub organic: GuideSection,
    pub chemical: GuideSection,
}

impl GuideView {
    pub fn new(guide: &CultivationGuide, language: Language) -> Self {
        let t = texts(language);
        let section = |title, body: &String| GuideSection {
            title,
            body: body.clone(),
        };
        Self {
            title: t.guide_title,
            sections: vec![
                section(t.distance, &guide.plantation_distance),
                section(t.ground_prep, &guide.ground_preparation),
                section(t.hole_prep, &guide.hole_preparation),
                section(t.care, &guide.care_instructions),
            ],
            fertilizers_title: t.fertilizers,
            organic: section(t.organic, &guide.fertilizer_schedule.organic),
            chemical: section(t.chemical, &guide.fertilizer_schedule.chemical),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SuitabilityView {
    pub card: CardView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guide: Option<GuideView>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResultView {
    pub location_summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart: Option<ChartView>,
    pub cards: Vec<CardView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suitability: Option<SuitabilityView>,
}

// ============================================================================
// Rendering
// ============================================================================

/// History wins over forecast when a reply carries both
pub fn select_chart(result: &AnalysisResult, language: Language) -> Option<ChartView> {
    let (task, points) = match (&result.weather_history, &result.future_forecast) {
        (Some(history), _) => (AnalysisTask::History, history),
        (None, Some(forecast)) => (AnalysisTask::Prediction, forecast),
        (None, None) => return None,
    };
    Some(ChartView {
        title: task.label(language),
        temperature_axis: TEMPERATURE_AXIS,
        rainfall_axis: RAINFALL_AXIS,
        points: points.clone(),
    })
}

pub fn render_result(result: &AnalysisResult, language: Language) -> ResultView {
    let cards = result
        .recommendations
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(CardView::from_item)
        .collect();

    let suitability = result.suitability_check.as_ref().map(|item| SuitabilityView {
        card: CardView::from_item(item),
        guide: item
            .cultivation_guide
            .as_ref()
            .map(|guide| GuideView::new(guide, language)),
    });

    ResultView {
        location_summary: result.location_summary.clone(),
        chart: select_chart(result, language),
        cards,
        suitability,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(label: &str, temperature: f64, rainfall: f64) -> WeatherDataPoint {
        WeatherDataPoint {
            label: label.to_string(),
            temperature,
            rainfall,
        }
    }

    fn empty() -> AnalysisResult {
        AnalysisResult {
            location_summary: "Hot semi-arid".to_string(),
            weather_history: None,
            future_forecast: None,
            recommendations: None,
            suitability_check: None,
        }
    }

    #[test]
    fn test_image_seed_is_code_unit_sum() {
        assert_eq!(image_seed("Rice"), 82 + 105 + 99 + 101);
        assert_eq!(image_seed(""), 0);
        assert_eq!(image_seed("आम"), 0x0906 + 0x092E);
    }

    #[test]
    fn test_image_seed_wraps_on_long_names() {
        let name: String = std::iter::repeat('\u{FFFF}').take(70_000).collect();
        let expected = (70_000u64 * 0xFFFF % (1u64 << 32)) as u32;
        assert_eq!(image_seed(&name), expected);
    }

    #[test]
    fn test_image_url_shape() {
        let url = image_url("Dragon Fruit");
        assert!(url.starts_with("https://image.pollinations.ai/prompt/realistic%20Dragon%20Fruit%20plant"));
        assert!(url.contains("width=600&height=400&nologo=true"));
        assert!(url.ends_with(&format!("seed={}", image_seed("Dragon Fruit"))));
    }

    #[test]
    fn test_chart_prefers_history() {
        let mut result = empty();
        result.weather_history = Some(vec![point("2015", 26.0, 600.0)]);
        result.future_forecast = Some(vec![point("Jan", 22.0, 5.0)]);
        let chart = select_chart(&result, Language::English).unwrap();
        assert_eq!(chart.title, "Weather History (10y)");
        assert_eq!(chart.points[0].label, "2015");

        result.weather_history = None;
        let chart = select_chart(&result, Language::English).unwrap();
        assert_eq!(chart.title, "Future Forecast");
        assert_eq!(chart.points[0].label, "Jan");
        assert_eq!(chart.temperature_axis, "Temp (°C)");

        result.future_forecast = None;
        assert!(select_chart(&result, Language::English).is_none());
    }

    #[test]
    fn test_guide_only_when_present() {
        let item = RecommendationItem {
            name: "Turmeric".to_string(),
            english_name: None,
            suitability_score: 85.0,
            season: "Kharif".to_string(),
            yield_expected: "8 t/acre".to_string(),
            water_requirement: "Medium".to_string(),
            difficulty: "Moderate".to_string(),
            verdict: "Grow".to_string(),
            description: "Well suited".to_string(),
            cultivation_guide: None,
        };
        let mut result = empty();
        result.suitability_check = Some(item.clone());
        let view = render_result(&result, Language::English);
        let suitability = view.suitability.unwrap();
        assert!(suitability.guide.is_none());
        assert_eq!(suitability.card.badge.class, VerdictClass::Positive);
        assert!(view.cards.is_empty());

        let mut with_guide = item;
        with_guide.cultivation_guide = Some(CultivationGuide {
            plantation_distance: "1.5 ft".to_string(),
            ..Default::default()
        });
        result.suitability_check = Some(with_guide);
        let guide = render_result(&result, Language::Hindi)
            .suitability
            .and_then(|s| s.guide)
            .unwrap();
        assert_eq!(guide.sections.len(), 4);
        assert_eq!(guide.sections[0].body, "1.5 ft");
        assert_eq!(guide.title, texts(Language::Hindi).guide_title);
    }

    #[test]
    fn test_badges() {
        assert_eq!(BadgeView::for_verdict("Not Recommended").icon, "x-circle");
        assert_eq!(BadgeView::for_verdict("Grow with Care").style, "verdict-caution");
        assert_eq!(BadgeView::for_verdict("maybe").class, VerdictClass::Unknown);
    }
}
