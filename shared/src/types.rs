//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// Supported display languages
///
/// Unknown names fall back to English, both when parsing and when
/// deserializing, so a stale or hand-edited client value never fails a request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(from = "String", into = "&'static str")]
pub enum Language {
    #[default]
    English,
    Hindi,
    Marathi,
    Gujarati,
    Bengali,
}

impl Language {
    /// All languages in selector order
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::Hindi,
        Language::Marathi,
        Language::Gujarati,
        Language::Bengali,
    ];

    /// English name, also used as the wire value and inside prompts
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Marathi => "Marathi",
            Language::Gujarati => "Gujarati",
            Language::Bengali => "Bengali",
        }
    }

    /// Name written in the language's own script
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिंदी",
            Language::Marathi => "मराठी",
            Language::Gujarati => "ગુજરાતી",
            Language::Bengali => "বাংলা",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Marathi => "mr",
            Language::Gujarati => "gu",
            Language::Bengali => "bn",
        }
    }

    /// Parse a language by English name or ISO code, case-insensitively.
    /// Anything unrecognised is English.
    pub fn parse_or_default(value: &str) -> Self {
        let value = value.trim();
        Language::ALL
            .into_iter()
            .find(|lang| {
                lang.name().eq_ignore_ascii_case(value) || lang.code().eq_ignore_ascii_case(value)
            })
            .unwrap_or_default()
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl From<String> for Language {
    fn from(value: String) -> Self {
        Language::parse_or_default(&value)
    }
}

impl From<&str> for Language {
    fn from(value: &str) -> Self {
        Language::parse_or_default(value)
    }
}

impl From<Language> for &'static str {
    fn from(value: Language) -> Self {
        value.name()
    }
}

/// Entry for the language selector
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LanguageOption {
    pub language: Language,
    pub code: String,
    pub label: String,
}

impl From<Language> for LanguageOption {
    fn from(language: Language) -> Self {
        let label = if language == Language::English {
            language.name().to_string()
        } else {
            format!("{} ({})", language.native_name(), language.name())
        };
        Self {
            language,
            code: language.code().to_string(),
            label,
        }
    }
}

/// Supported languages in selector order
pub fn language_options() -> Vec<LanguageOption> {
    Language::ALL.into_iter().map(LanguageOption::from).collect()
}
