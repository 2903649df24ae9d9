//! User display and behavior preferences
//!
//! Stored as a single JSON blob; last write wins. Fields missing from an
//! older blob take their default values.

use serde::{Deserialize, Serialize};

/// Supported content languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Language {
    #[serde(rename = "en")]
    #[default]
    English,
    #[serde(rename = "ur")]
    Urdu,
    #[serde(rename = "ar")]
    Arabic,
}

impl Language {
    /// Get the ISO 639-1 language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Urdu => "ur",
            Language::Arabic => "ar",
        }
    }

    /// Parse a language from its code
    pub fn from_code(code: &str) -> Option<Self> {
        let lowered = code.trim().to_lowercase();
        let primary = lowered.split(['-', '_']).next().unwrap_or_default();
        match primary {
            "en" => Some(Language::English),
            "ur" => Some(Language::Urdu),
            "ar" => Some(Language::Arabic),
            _ => None,
        }
    }

    /// Whether text in this language is laid out right-to-left
    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Urdu | Language::Arabic)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    /// Follow the operating system setting
    #[default]
    System,
}

/// Display/behavior toggles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPreferences {
    pub font_size: FontSize,
    pub show_transliteration: bool,
    pub show_translation: bool,
    pub audio_auto_play: bool,
    pub theme: Theme,
    pub language: Language,
    pub notifications_enabled: bool,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            font_size: FontSize::Medium,
            show_transliteration: true,
            show_translation: true,
            audio_auto_play: false,
            theme: Theme::System,
            language: Language::English,
            notifications_enabled: true,
        }
    }
}

/// A partial update; `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferencesPatch {
    pub font_size: Option<FontSize>,
    pub show_transliteration: Option<bool>,
    pub show_translation: Option<bool>,
    pub audio_auto_play: Option<bool>,
    pub theme: Option<Theme>,
    pub language: Option<Language>,
    pub notifications_enabled: Option<bool>,
}

impl UserPreferences {
    /// Returns these preferences with `patch` applied.
    pub fn merged(mut self, patch: &PreferencesPatch) -> Self {
        if let Some(v) = patch.font_size {
            self.font_size = v;
        }
        if let Some(v) = patch.show_transliteration {
            self.show_transliteration = v;
        }
        if let Some(v) = patch.show_translation {
            self.show_translation = v;
        }
        if let Some(v) = patch.audio_auto_play {
            self.audio_auto_play = v;
        }
        if let Some(v) = patch.theme {
            self.theme = v;
        }
        if let Some(v) = patch.language {
            self.language = v;
        }
        if let Some(v) = patch.notifications_enabled {
            self.notifications_enabled = v;
        }
        self
    }
}
