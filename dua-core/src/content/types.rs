// SPDX-FileCopyrightText: 2026 Dua Companion Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Content type definitions
//!
//! Normalized records ([`Dua`], [`DuaCategory`]) as persisted in the local
//! cache, and the raw shapes accepted from the bundled seed and remote
//! update documents.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::preferences::Language;

/// A supplication record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dua {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_arabic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_urdu: Option<String>,
    /// Category display name.
    pub category: String,
    pub category_id: String,
    #[serde(default)]
    pub arabic_text: String,
    #[serde(default)]
    pub transliteration: String,
    /// English translation.
    #[serde(default)]
    pub translation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation_urdu: Option<String>,
    pub reference: DuaReference,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub search_keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benefits: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benefits_urdu: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_note_urdu: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub situation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occasion: Option<String>,
}

impl Dua {
    /// Title in the requested language, falling back to English.
    pub fn localized_title(&self, language: Language) -> &str {
        let variant = match language {
            Language::English => None,
            Language::Urdu => self.title_urdu.as_deref(),
            Language::Arabic => self.title_arabic.as_deref(),
        };
        non_empty_or(variant, &self.title)
    }

    /// Translation in the requested language, falling back to English.
    ///
    /// Arabic readers get the English translation since the Arabic text
    /// itself is the original.
    pub fn localized_translation(&self, language: Language) -> &str {
        let variant = match language {
            Language::Urdu => self.translation_urdu.as_deref(),
            Language::English | Language::Arabic => None,
        };
        non_empty_or(variant, &self.translation)
    }

    /// Benefits text in the requested language, if any.
    pub fn localized_benefits(&self, language: Language) -> Option<&str> {
        match language {
            Language::Urdu => self
                .benefits_urdu
                .as_deref()
                .filter(|s| !s.is_empty())
                .or(self.benefits.as_deref()),
            Language::English | Language::Arabic => self.benefits.as_deref(),
        }
    }
}

fn non_empty_or<'a>(variant: Option<&'a str>, fallback: &'a str) -> &'a str {
    match variant {
        Some(s) if !s.trim().is_empty() => s,
        _ => fallback,
    }
}

/// Kind of source a citation points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Quran,
    Hadith,
    Other,
}

/// Grading of a hadith.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Authenticity {
    Sahih,
    Hasan,
    Daif,
}

/// Structured citation for a dua.
///
/// When derived from a free-text reference this is a best-effort label,
/// not a validated citation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuaReference {
    pub source: SourceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verse: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hadith_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authenticity: Option<Authenticity>,
}

impl DuaReference {
    /// The reference used when nothing better is known.
    pub fn other() -> Self {
        Self {
            source: SourceKind::Other,
            book: None,
            chapter: None,
            verse: None,
            hadith_number: None,
            authenticity: Some(Authenticity::Sahih),
        }
    }
}

/// A category of duas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuaCategory {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_arabic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_urdu: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_urdu: Option<String>,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
    /// Number of duas in this category. Recomputed on every read.
    #[serde(default)]
    pub dua_count: usize,
    #[serde(default)]
    pub order: i32,
}

/// A parsed seed or update document, before normalization.
#[derive(Debug, Clone)]
pub struct RawDataset {
    /// Declared version (defaults to 1).
    pub version: u32,
    pub duas: Vec<RawDua>,
    pub categories: Vec<RawCategory>,
}

/// `category` field of a raw dua: a bare name or an `{id, name}` object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawCategoryRef {
    Name(String),
    Object {
        id: String,
        #[serde(default)]
        name: Option<String>,
    },
}

/// A dua as it appears in a seed or update document.
///
/// Field shapes are coerced rather than enforced: a missing or mistyped text
/// field reads as empty, non-string list entries are dropped. Shape checks
/// belong to strict validation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDua {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub title_arabic: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub title_urdu: Option<String>,
    #[serde(default, deserialize_with = "lenient::category")]
    pub category: Option<RawCategoryRef>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub arabic_text: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub transliteration: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub translation: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub translation_urdu: Option<String>,
    /// A string, a structured object, or absent.
    #[serde(default)]
    pub reference: Option<Value>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub tags: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub search_keywords: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub benefits: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub benefits_urdu: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub additional_note: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub additional_note_urdu: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub situation: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub occasion: Option<String>,
}

/// A category as it appears in a seed or update document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCategory {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub name_arabic: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub name_urdu: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub description_urdu: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub color: Option<String>,
    /// An integer or a numeric string.
    #[serde(default, deserialize_with = "lenient::order")]
    pub order: Option<i32>,
}

/// Coercing field readers for raw documents. None of these fail on any JSON
/// value.
mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    use super::RawCategoryRef;

    fn text(value: Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        Ok(text(Value::deserialize(d)?).unwrap_or_default())
    }

    pub fn opt_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(text(Value::deserialize(d)?))
    }

    pub fn string_list<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<Vec<String>>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Array(items) => Some(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::String(s) => Some(s),
                        _ => None,
                    })
                    .collect(),
            ),
            _ => None,
        })
    }

    pub fn category<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<RawCategoryRef>, D::Error> {
        Ok(serde_json::from_value(Value::deserialize(d)?).ok())
    }

    pub fn order<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i32>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Number(n) => n.as_i64().and_then(|v| i32::try_from(v).ok()),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
    }
}

/// A normalized dataset ready to be persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedDataset {
    pub version: u32,
    pub duas: Vec<Dua>,
    pub categories: Vec<DuaCategory>,
}

/// Result of an update check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The remote version is not newer than the installed one.
    UpToDate {
        /// Version currently installed.
        current_version: u32,
    },
    /// A newer dataset was installed.
    Applied {
        /// Version now installed.
        version: u32,
        dua_count: usize,
        category_count: usize,
    },
    /// Remote updates are disabled by configuration.
    Disabled,
}
