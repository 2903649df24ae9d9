// SPDX-FileCopyrightText: 2026 Dua Companion Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Normalization of seed and update documents
//!
//! The bundled seed and every remote update pass through [`normalize_dataset`]
//! so first-install data and updated data always have the same shape.

use std::collections::HashSet;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::warn;

use super::store::ContentError;
use super::types::{
    Authenticity, Dua, DuaCategory, DuaReference, NormalizedDataset, RawCategory, RawCategoryRef,
    RawDataset, RawDua, SourceKind,
};

/// Hadith collections recognized in free-text references, with the label
/// recorded as `book`. Matching is case-insensitive, first entry wins.
const HADITH_COLLECTIONS: [(&str, &str); 6] = [
    ("bukhari", "Bukhari"),
    ("muslim", "Muslim"),
    ("tirmidhi", "Tirmidhi"),
    ("abu dawud", "Abu Dawud"),
    ("ibn majah", "Ibn Majah"),
    ("nisai", "Nisai"),
];

/// Parses a seed or update document.
///
/// Only the presence of the `duas` and `categories` arrays is required.
/// A missing, zero or non-integer `version` counts as 1. Record fields are
/// read leniently and entries that are not objects are skipped.
pub fn parse_dataset(data: &[u8]) -> Result<RawDataset, ContentError> {
    parse_dataset_with(data, false)
}

/// Parses a document, rejecting malformed records when `strict` is set.
///
/// Strict parsing requires every dua to be an object with string `id` and
/// `title`, a string or `{id}` object `category`, and string-only `tags` and
/// `searchKeywords`; every category needs string `id` and `name` and an
/// integer `order` when present.
pub fn parse_dataset_with(data: &[u8], strict: bool) -> Result<RawDataset, ContentError> {
    let mut document: Value = serde_json::from_slice(data)
        .map_err(|e| ContentError::InvalidPayload(format!("not valid JSON: {}", e)))?;

    let version = document
        .get("version")
        .and_then(Value::as_u64)
        .filter(|v| *v > 0)
        .map(|v| u32::try_from(v).unwrap_or(u32::MAX))
        .unwrap_or(1);

    let duas = take_array(&mut document, "duas")?;
    let categories = take_array(&mut document, "categories")?;

    if strict {
        for (index, record) in duas.iter().enumerate() {
            check_dua_shape(record)
                .map_err(|e| ContentError::InvalidPayload(format!("dua #{}: {}", index, e)))?;
        }
        for (index, record) in categories.iter().enumerate() {
            check_category_shape(record).map_err(|e| {
                ContentError::InvalidPayload(format!("category #{}: {}", index, e))
            })?;
        }
    }

    Ok(RawDataset {
        version,
        duas: records(duas, "dua"),
        categories: records(categories, "category"),
    })
}

fn records<T: DeserializeOwned>(values: Vec<Value>, kind: &str) -> Vec<T> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(kind, index, error = %e, "skipping malformed record");
                None
            }
        })
        .collect()
}

fn check_dua_shape(record: &Value) -> Result<(), String> {
    let fields = record.as_object().ok_or("not an object")?;
    require_string(fields, "id")?;
    require_string(fields, "title")?;
    match fields.get("category") {
        Some(Value::String(_)) => {}
        Some(Value::Object(category)) => require_string(category, "id")
            .map_err(|e| format!("category {}", e))?,
        _ => return Err("missing or invalid 'category'".to_string()),
    }
    for key in ["tags", "searchKeywords"] {
        match fields.get(key) {
            None => {}
            Some(Value::Array(items)) if items.iter().all(Value::is_string) => {}
            Some(_) => return Err(format!("'{}' must be a list of strings", key)),
        }
    }
    Ok(())
}

fn check_category_shape(record: &Value) -> Result<(), String> {
    let fields = record.as_object().ok_or("not an object")?;
    require_string(fields, "id")?;
    require_string(fields, "name")?;
    match fields.get("order") {
        None => Ok(()),
        Some(order) if order.as_i64().is_some() => Ok(()),
        Some(_) => Err("'order' must be an integer".to_string()),
    }
}

fn require_string(fields: &Map<String, Value>, key: &str) -> Result<(), String> {
    match fields.get(key) {
        Some(Value::String(_)) => Ok(()),
        _ => Err(format!("missing or non-string '{}'", key)),
    }
}

fn take_array(document: &mut Value, key: &str) -> Result<Vec<Value>, ContentError> {
    match document.get_mut(key).map(Value::take) {
        Some(Value::Array(items)) => Ok(items),
        _ => Err(ContentError::InvalidPayload(format!(
            "missing required collection '{}'",
            key
        ))),
    }
}

/// Normalizes a parsed dataset.
pub fn normalize_dataset(raw: RawDataset) -> NormalizedDataset {
    NormalizedDataset {
        version: raw.version,
        duas: raw.duas.into_iter().map(normalize_dua).collect(),
        categories: raw.categories.into_iter().map(normalize_category).collect(),
    }
}

/// Normalizes a single dua record.
pub fn normalize_dua(raw: RawDua) -> Dua {
    let (category_id, category) = match raw.category {
        Some(RawCategoryRef::Name(name)) => (name.clone(), name),
        Some(RawCategoryRef::Object { id, name }) => {
            let display = name.filter(|n| !n.is_empty()).unwrap_or_else(|| id.clone());
            (id, display)
        }
        None => (String::new(), String::new()),
    };

    Dua {
        id: raw.id,
        title: raw.title,
        title_arabic: raw.title_arabic,
        title_urdu: raw.title_urdu,
        category,
        category_id,
        arabic_text: raw.arabic_text.unwrap_or_default(),
        transliteration: raw.transliteration.unwrap_or_default(),
        translation: raw.translation.unwrap_or_default(),
        translation_urdu: raw.translation_urdu,
        reference: normalize_reference(raw.reference.as_ref()),
        tags: raw.tags.unwrap_or_default(),
        search_keywords: raw.search_keywords.unwrap_or_default(),
        benefits: raw.benefits,
        benefits_urdu: raw.benefits_urdu,
        additional_note: raw.additional_note,
        additional_note_urdu: raw.additional_note_urdu,
        occasion: raw.occasion.or_else(|| raw.situation.clone()),
        situation: raw.situation,
    }
}

/// Normalizes a single category record. The count starts at zero.
pub fn normalize_category(raw: RawCategory) -> DuaCategory {
    let description = raw
        .description
        .or_else(|| raw.name_arabic.clone())
        .unwrap_or_else(|| raw.name.clone());
    let description_urdu = raw.description_urdu.or_else(|| raw.name_urdu.clone());

    DuaCategory {
        id: raw.id,
        name: raw.name,
        name_arabic: raw.name_arabic,
        name_urdu: raw.name_urdu,
        description,
        description_urdu,
        icon: raw.icon.unwrap_or_default(),
        color: raw.color.unwrap_or_default(),
        dua_count: 0,
        order: raw.order.unwrap_or_default(),
    }
}

/// Builds a structured citation from a raw `reference` value.
pub fn normalize_reference(raw: Option<&Value>) -> DuaReference {
    match raw {
        Some(Value::String(text)) if !text.is_empty() => classify_reference(text),
        Some(Value::Object(map)) if map.contains_key("source") => {
            let source = map
                .get("source")
                .and_then(|v| serde_json::from_value::<SourceKind>(v.clone()).ok())
                .unwrap_or(SourceKind::Other);
            let authenticity = map
                .get("authenticity")
                .and_then(|v| serde_json::from_value::<Authenticity>(v.clone()).ok());

            DuaReference {
                source,
                book: map.get("book").and_then(scalar_to_string),
                chapter: map.get("chapter").and_then(scalar_to_string),
                verse: map.get("verse").and_then(scalar_to_string),
                hadith_number: map.get("hadithNumber").and_then(scalar_to_string),
                authenticity,
            }
        }
        _ => DuaReference::other(),
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Classifies a free-text reference.
///
/// A `chapter:verse` pair or the word "quran" marks a Quran citation; a known
/// hadith collection name marks a hadith. This is a label guess: a title that
/// merely contains "Muslim" is classified as hadith too.
pub fn classify_reference(text: &str) -> DuaReference {
    let lowered = text.to_lowercase();
    let pair = first_numeric_pair(text);

    if pair.is_some() || lowered.contains("quran") {
        let (chapter, verse) = match pair {
            Some((c, v)) => (Some(c.to_string()), Some(v.to_string())),
            None => (None, None),
        };
        return DuaReference {
            source: SourceKind::Quran,
            book: None,
            chapter,
            verse,
            hadith_number: None,
            authenticity: None,
        };
    }

    if let Some((_, book)) = HADITH_COLLECTIONS
        .iter()
        .find(|(needle, _)| lowered.contains(needle))
    {
        return DuaReference {
            source: SourceKind::Hadith,
            book: Some(book.to_string()),
            chapter: None,
            verse: None,
            hadith_number: None,
            authenticity: Some(Authenticity::Sahih),
        };
    }

    DuaReference::other()
}

/// Finds the first `digits:digits` pair in `text`.
fn first_numeric_pair(text: &str) -> Option<(&str, &str)> {
    let bytes = text.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }

        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }

        if i + 1 < bytes.len() && bytes[i] == b':' && bytes[i + 1].is_ascii_digit() {
            let colon = i;
            let mut end = colon + 1;
            while end < bytes.len() && bytes[end].is_ascii_digit() {
                end += 1;
            }
            return Some((&text[start..colon], &text[colon + 1..end]));
        }
    }

    None
}

/// Rejects datasets with empty or duplicate dua ids, or duas pointing at a
/// category the dataset does not define.
pub fn validate_strict(dataset: &NormalizedDataset) -> Result<(), ContentError> {
    let category_ids: HashSet<&str> = dataset.categories.iter().map(|c| c.id.as_str()).collect();
    let mut seen = HashSet::new();

    for dua in &dataset.duas {
        if dua.id.trim().is_empty() {
            return Err(ContentError::InvalidPayload(
                "dua with empty id".to_string(),
            ));
        }
        if !seen.insert(dua.id.as_str()) {
            return Err(ContentError::InvalidPayload(format!(
                "duplicate dua id '{}'",
                dua.id
            )));
        }
        if !category_ids.contains(dua.category_id.as_str()) {
            return Err(ContentError::InvalidPayload(format!(
                "dua '{}' references unknown category '{}'",
                dua.id, dua.category_id
            )));
        }
    }

    Ok(())
}
