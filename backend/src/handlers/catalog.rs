//! HTTP handlers for the static catalogs: languages, UI texts and tasks

use axum::{extract::Query, Json};
use serde::Deserialize;
use shared::{language_options, task_catalog, texts, Language, LanguageOption, TaskEntry, TextBundle};

/// Query parameter selecting the display language; unknown values fall
/// back to English
#[derive(Debug, Default, Deserialize)]
pub struct LanguageQuery {
    #[serde(default)]
    pub language: Language,
}

/// List supported display languages
pub async fn list_languages() -> Json<Vec<LanguageOption>> {
    Json(language_options())
}

/// Get the UI text bundle for a language
pub async fn get_texts(Query(query): Query<LanguageQuery>) -> Json<&'static TextBundle> {
    Json(texts(query.language))
}

/// Get the ordered task catalog
pub async fn list_tasks(Query(query): Query<LanguageQuery>) -> Json<Vec<TaskEntry>> {
    Json(task_catalog(query.language))
}
