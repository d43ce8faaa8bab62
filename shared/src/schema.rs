//! Output schema sent alongside the prompt
//!
//! A small, language-neutral description of the reply shape (types,
//! required fields, enumerated values, per-field guidance). It serializes to
//! the OpenAPI-style dialect Gemini accepts as `responseSchema`.

use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::models::{Verdict, RECOMMENDATION_VERDICTS, SUITABILITY_VERDICTS};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum SchemaType {
    Object,
    Array,
    String,
    Number,
}

/// Schema node
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    pub kind: SchemaType,
    pub description: Option<String>,
    /// Allowed values for string nodes
    pub enum_values: Vec<String>,
    pub items: Option<Box<Schema>>,
    /// Object properties in declaration order
    pub properties: Vec<(String, Schema)>,
    pub required: Vec<String>,
}

impl Schema {
    fn of(kind: SchemaType) -> Self {
        Self {
            kind,
            description: None,
            enum_values: Vec::new(),
            items: None,
            properties: Vec::new(),
            required: Vec::new(),
        }
    }

    pub fn string() -> Self {
        Self::of(SchemaType::String)
    }

    pub fn number() -> Self {
        Self::of(SchemaType::Number)
    }

    pub fn object() -> Self {
        Self::of(SchemaType::Object)
    }

    pub fn array(items: Schema) -> Self {
        let mut schema = Self::of(SchemaType::Array);
        schema.items = Some(Box::new(items));
        schema
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn one_of<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enum_values = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn property(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.properties.push((name.into(), schema));
        self
    }

    pub fn require(mut self, names: &[&str]) -> Self {
        self.required.extend(names.iter().map(|n| n.to_string()));
        self
    }

    /// Look up a direct property by name
    pub fn get(&self, name: &str) -> Option<&Schema> {
        self.properties
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, schema)| schema)
    }

    /// Follow a dotted path through properties and array items,
    /// e.g. `suitabilityCheck.cultivationGuide`
    pub fn path(&self, path: &str) -> Option<&Schema> {
        path.split('.').try_fold(self, |node, segment| {
            let node = match (&node.kind, &node.items) {
                (SchemaType::Array, Some(items)) => items.as_ref(),
                _ => node,
            };
            node.get(segment)
        })
    }

    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }

    /// Render in the Gemini `responseSchema` dialect
    pub fn to_json(&self) -> Value {
        let mut out = Map::new();
        out.insert("type".to_string(), json!(self.kind));
        if let Some(description) = &self.description {
            out.insert("description".to_string(), json!(description));
        }
        if !self.enum_values.is_empty() {
            out.insert("enum".to_string(), json!(self.enum_values));
        }
        if let Some(items) = &self.items {
            out.insert("items".to_string(), items.to_json());
        }
        if !self.properties.is_empty() {
            let properties: Map<String, Value> = self
                .properties
                .iter()
                .map(|(name, schema)| (name.clone(), schema.to_json()))
                .collect();
            let ordering: Vec<&str> = self.properties.iter().map(|(n, _)| n.as_str()).collect();
            out.insert("properties".to_string(), Value::Object(properties));
            out.insert("propertyOrdering".to_string(), json!(ordering));
        }
        if !self.required.is_empty() {
            out.insert("required".to_string(), json!(self.required));
        }
        Value::Object(out)
    }
}

impl Serialize for Schema {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

const ITEM_REQUIRED: &[&str] = &[
    "name",
    "suitabilityScore",
    "season",
    "yieldExpected",
    "waterRequirement",
    "difficulty",
    "verdict",
    "description",
];

fn tokens(verdicts: &[Verdict]) -> Vec<&'static str> {
    verdicts.iter().map(|v| v.token()).collect()
}

fn weather_point(label: &str, temperature: &str, rainfall: &str) -> Schema {
    Schema::object()
        .property("label", Schema::string().describe(label))
        .property("temperature", Schema::number().describe(temperature))
        .property("rainfall", Schema::number().describe(rainfall))
        .require(&["label", "temperature", "rainfall"])
}

fn cultivation_guide() -> Schema {
    Schema::object()
        .describe("Detailed plantation guide. MANDATORY for Task E and F.")
        .property(
            "plantationDistance",
            Schema::string().describe("Distance between plants and rows (e.g., 10x10 ft)"),
        )
        .property(
            "groundPreparation",
            Schema::string().describe("Steps for ploughing and soil treatment"),
        )
        .property(
            "holePreparation",
            Schema::string()
                .describe("Pit size (LxWxD) and Basal Dose (Cow dung, Vermicompost, etc)"),
        )
        .property(
            "careInstructions",
            Schema::string().describe("Care for first 6-8 months (Watering, Weeding, Support)"),
        )
        .property(
            "fertilizerSchedule",
            Schema::object()
                .property(
                    "organic",
                    Schema::string().describe("Organic fertilizer suggestions"),
                )
                .property(
                    "chemical",
                    Schema::string().describe("Chemical fertilizer suggestions"),
                ),
        )
}

fn item_fields(schema: Schema, description: &str) -> Schema {
    schema
        .property(
            "englishName",
            Schema::string().describe("English name of the crop/fruit (for image search)"),
        )
        .property("suitabilityScore", Schema::number().describe("0-100 score"))
        .property("season", Schema::string().describe("Translated season"))
        .property("yieldExpected", Schema::string().describe("Translated yield info"))
        .property("waterRequirement", Schema::string().describe("Translated water info"))
        .property("difficulty", Schema::string().describe("Translated difficulty"))
        .property("description", Schema::string().describe(description))
}

/// Schema of [`crate::AnalysisResult`]
pub fn analysis_result_schema() -> Schema {
    let recommendation = item_fields(
        Schema::object().property(
            "name",
            Schema::string().describe("Name of crop/fruit in requested language"),
        ),
        "Short actionable advice in requested language",
    )
    .property(
        "verdict",
        Schema::string()
            .describe(
                "STRICTLY ONE OF: 'Highly Recommended', 'Recommended', 'Grow with Care', \
                 'Not Recommended'. Keep this in English for code logic.",
            )
            .one_of(tokens(&RECOMMENDATION_VERDICTS)),
    )
    .require(ITEM_REQUIRED);

    let suitability = item_fields(
        Schema::object()
            .describe("Result of a specific crop/fruit check (if requested).")
            .property("name", Schema::string().describe("Name in requested language")),
        "Detailed analysis in requested language.",
    )
    .property(
        "verdict",
        Schema::string()
            .describe(
                "STRICTLY ONE OF: 'Grow', 'Grow with Care', 'Not Recommended'. \
                 Keep this in English for code logic.",
            )
            .one_of(tokens(&SUITABILITY_VERDICTS)),
    )
    .property("cultivationGuide", cultivation_guide())
    .require(ITEM_REQUIRED);

    Schema::object()
        .property(
            "locationSummary",
            Schema::string().describe(
                "A clear climate profile based on the user's PINCODE and region. \
                 Translated to the requested language.",
            ),
        )
        .property(
            "weatherHistory",
            Schema::array(weather_point(
                "Year (e.g., 2015)",
                "Average temperature in Celsius",
                "Total rainfall in mm",
            ))
            .describe("Historical weather data for charts (if requested)."),
        )
        .property(
            "futureForecast",
            Schema::array(weather_point(
                "Month Name (e.g., Jan)",
                "Predicted avg temperature in Celsius",
                "Predicted rainfall in mm",
            ))
            .describe("Future weather prediction for charts (if requested)."),
        )
        .property(
            "recommendations",
            Schema::array(recommendation)
                .describe("List of recommended crops or fruits (if requested)."),
        )
        .property("suitabilityCheck", suitability)
        .require(&["locationSummary"])
}
