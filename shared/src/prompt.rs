//! Prompt builder for the generative backend
//!
//! Turns a validated [`AnalysisRequest`] into the instruction text plus the
//! fixed output schema. Pure: the same request always yields the same
//! document.

use serde::Serialize;

use crate::models::{AnalysisRequest, AnalysisTask, LocationData};
use crate::schema::{analysis_result_schema, Schema};
use crate::types::Language;

/// Instruction and output schema sent to the generator
#[derive(Debug, Clone, Serialize)]
pub struct PromptDocument {
    pub instruction: String,
    pub schema: Schema,
}

/// Clause that makes the cultivation guide mandatory; only present for the
/// two check tasks
pub const CULTIVATION_GUIDE_CLAUSE: &str =
    "you **MUST** provide a **Detailed Cultivation Guide** in the 'suitabilityCheck.cultivationGuide' field";

/// Clause that fixes the fruit recommendation count
pub fn item_count_clause(count: usize) -> String {
    format!("You MUST return exactly **{}** different fruit plant recommendations.", count)
}

const PREAMBLE: &str = r#"You are **AgriSense AI**, an advanced Weather, Climate & Agricultural Intelligence Assistant.

Your responsibilities:
1. Analyze **10–15 years of historical weather data** and generate insights.
2. Predict **future weather trends** (temperature, rainfall, humidity, wind, drought risk, flood risk).
3. Provide climate-based recommendations for the user's exact **Country → State → District → Taluka → Town/Village → PINCODE**.
4. Suggest **best crops** and **best fruit plants** based on:
   * Weather patterns
   * Temperature & rainfall suitability
   * Soil data (assumed based on location)
   * Pest/disease risk
   * Seasonal timing
5. Provide a **Crop/Fruit Suitability Checker** when the user enters a specific name.
6. Output must always be clear, structured, and farmer-friendly.
7. If any data is insufficient, make reasonable assumptions and clearly mention them.
8. Always return practical, actionable agricultural advice.

---

### **IMPORTANT: Internal Knowledge Usage**
Use your internal agricultural knowledge for all major crops & fruit plants, including:
* Required temperature range & Ideal rainfall + irrigation need
* Suitable climate zone (tropical, dry, humid, cold, subtropical, etc.)
* Soil type preference (sandy, loamy, black soil, clay, red soil, alluvial)
* Sun/Sowing/Harvest details
* Pest/Disease risks
* Growth difficulty level

**Use this internal knowledge to evaluate crop/fruit suitability without requiring the user to provide details.**
"#;

/// Build the prompt document for a request
pub fn build_prompt(request: &AnalysisRequest) -> PromptDocument {
    PromptDocument {
        instruction: build_instruction(
            &request.location,
            request.task,
            request.language,
            request.subject(),
        ),
        schema: analysis_result_schema(),
    }
}

/// Instruction text alone
pub fn build_instruction(
    location: &LocationData,
    task: AnalysisTask,
    language: Language,
    subject: Option<&str>,
) -> String {
    let mut out = String::with_capacity(4096);
    out.push_str(PREAMBLE);

    if task.is_check() {
        out.push_str("\n---\n\n### **SPECIFIC INSTRUCTION FOR THE SELECTED SUITABILITY CHECK**\n");
        out.push_str(&format!("For this task {}, containing:\n", CULTIVATION_GUIDE_CLAUSE));
        out.push_str("1. **Plantation Distance**: Row-to-row and plant-to-plant spacing.\n");
        out.push_str("2. **Ground Preparation**: Ploughing depth and soil treatment.\n");
        out.push_str("3. **Hole/Pit Preparation**:\n");
        out.push_str("   - Dimensions based on plant height.\n");
        out.push_str(
            "   - **Basal Dose**: Explicitly mention adding **Cow dung (FYM), Vermicompost, \
             Organic Compost** and other basal fertilizers in the hole/pit before planting.\n",
        );
        out.push_str(
            "4. **Post-Plantation Care (6-8 Months)**: Watering schedule, staking/support, weeding.\n",
        );
        out.push_str(
            "5. **Fertilizer Schedule**: Provide specific **Organic** and **Chemical** \
             fertilizer suggestions for the growth phase.\n",
        );
    }

    out.push_str("\n---\n\n### **USER PROMPT**\n\n");
    out.push_str("**1️⃣ Location Input**\n");
    out.push_str(&format!("Country: {}\n", location.country));
    out.push_str(&format!("State: {}\n", location.state));
    out.push_str(&format!("District: {}\n", location.district));
    out.push_str(&format!("Taluka: {}\n", location.taluka));
    out.push_str(&format!("Town/Village: {}\n", location.town));
    out.push_str(&format!("PINCODE: {}\n\n", location.pincode));

    out.push_str("**2️⃣ Selected Task**\n");
    out.push_str(task.directive());
    out.push_str("\n\n");

    out.push_str("**3️⃣ Crop/Fruit Name (suitability checks only)**\n");
    let subject = if task.is_check() { subject } else { None };
    out.push_str(&format!("Crop/Fruit Name: {}\n", subject.unwrap_or("N/A")));

    out.push_str("\n---\n\n## 🧠 **MODEL OUTPUT INSTRUCTION**\n");
    out.push_str("Generate the response strictly as a JSON object matching the provided schema.\n\n");
    out.push_str(&language_directive(language));

    if let Some(count) = task.required_item_count() {
        out.push_str("\n**IMPORTANT**: ");
        out.push_str(&item_count_clause(count));
        out.push('\n');
    }

    out.push_str("\n**Structure Requirements**:\n");
    out.push_str(&format!(
        "- **Location Summary**: Clear climate profile for {}.\n",
        location.pincode
    ));
    out.push_str(section_requirement(task));
    out.push('\n');

    out
}

fn language_directive(language: Language) -> String {
    let name = language.name();
    format!(
        "**LANGUAGE INSTRUCTION**:\n\
         The user has selected **{name}**.\n\
         - Provide all text descriptions, summaries, and names in **{name}**.\n\
         - **EXCEPTION**: Keep the JSON property keys (like 'locationSummary', 'weatherHistory', 'cultivationGuide') in English.\n\
         - **EXCEPTION**: Keep the 'verdict' values strictly in English (e.g., 'Recommended', 'Grow', 'Grow with Care', 'Not Recommended') so the app can render the correct icons.\n\
         - **IMPORTANT**: Always populate the 'englishName' field with the English translation of the crop/fruit name.\n"
    )
}

/// Which part of the schema to fill; the other sections stay absent
fn section_requirement(task: AnalysisTask) -> &'static str {
    match task {
        AnalysisTask::History => {
            "- **Weather History**: Avg max/min temperature & seasonal rainfall, one point per year in 'weatherHistory'. Omit all other sections."
        }
        AnalysisTask::Prediction => {
            "- **Future Prediction**: 12-month forecast, one point per month in 'futureForecast'. Omit all other sections."
        }
        AnalysisTask::CropRecommendation | AnalysisTask::FruitRecommendation => {
            "- **Recommendations**: Suitability Score, Season, Yield, Soil, Water in 'recommendations'. Omit all other sections."
        }
        AnalysisTask::CropCheck | AnalysisTask::FruitCheck => {
            "- **Suitability Check**: a single item in 'suitabilityCheck'; the detailed cultivation guide is MANDATORY. Omit all other sections."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location() -> LocationData {
        LocationData {
            country: "India".to_string(),
            state: "Maharashtra".to_string(),
            district: "Pune".to_string(),
            taluka: "Haveli".to_string(),
            town: "Uruli Kanchan".to_string(),
            pincode: "412202".to_string(),
        }
    }

    #[test]
    fn test_location_fields_are_embedded_verbatim() {
        let text = build_instruction(&location(), AnalysisTask::History, Language::English, None);
        assert!(text.contains("Country: India\n"));
        assert!(text.contains("Taluka: Haveli\n"));
        assert!(text.contains("Town/Village: Uruli Kanchan\n"));
        assert!(text.contains("PINCODE: 412202\n"));
    }

    #[test]
    fn test_exactly_one_directive_per_task() {
        for task in AnalysisTask::ALL {
            let text = build_instruction(&location(), task, Language::English, Some("Mango"));
            let matching: Vec<_> = AnalysisTask::ALL
                .iter()
                .filter(|other| text.contains(other.directive()))
                .collect();
            assert_eq!(matching, vec![&task], "task {task}");
            assert_eq!(text.matches(task.directive()).count(), 1);
        }
    }

    #[test]
    fn test_guide_clause_only_for_checks() {
        for task in AnalysisTask::ALL {
            let text = build_instruction(&location(), task, Language::English, Some("Mango"));
            assert_eq!(text.contains(CULTIVATION_GUIDE_CLAUSE), task.is_check(), "task {task}");
        }
    }

    #[test]
    fn test_subject_only_embedded_for_checks() {
        let text = build_instruction(
            &location(),
            AnalysisTask::FruitCheck,
            Language::English,
            Some("Dragon Fruit"),
        );
        assert!(text.contains("Crop/Fruit Name: Dragon Fruit"));

        let text = build_instruction(
            &location(),
            AnalysisTask::CropRecommendation,
            Language::English,
            Some("Dragon Fruit"),
        );
        assert!(text.contains("Crop/Fruit Name: N/A"));
        assert!(!text.contains("Dragon Fruit"));
    }

    #[test]
    fn test_ten_fruits_only_for_fruit_recommendation() {
        for task in AnalysisTask::ALL {
            let text = build_instruction(&location(), task, Language::English, None);
            assert_eq!(
                text.contains(&item_count_clause(10)),
                task == AnalysisTask::FruitRecommendation
            );
        }
    }

    #[test]
    fn test_language_directive() {
        let text = build_instruction(&location(), AnalysisTask::Prediction, Language::Marathi, None);
        assert!(text.contains("The user has selected **Marathi**"));
        assert!(text.contains("Keep the 'verdict' values strictly in English"));
        assert!(text.contains("property keys"));
    }

    #[test]
    fn test_build_prompt_uses_trimmed_subject() {
        let request = AnalysisRequest::new(location(), AnalysisTask::CropCheck, Language::Hindi)
            .with_subject("  Turmeric ");
        let prompt = build_prompt(&request);
        assert!(prompt.instruction.contains("Crop/Fruit Name: Turmeric\n"));
        assert!(prompt.schema.get("locationSummary").is_some());
    }
}
