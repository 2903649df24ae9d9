// SPDX-FileCopyrightText: 2026 Dua Companion Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Names of Allah
//!
//! The list itself is supplied by the host app as a JSON array and persisted
//! by the content store.

use serde::{Deserialize, Serialize};

use crate::content::ContentError;

/// Names are numbered 1 through this value.
pub const NAME_COUNT: u32 = 99;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllahName {
    pub number: u32,
    pub arabic: String,
    pub transliteration: String,
    pub translation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation_urdu: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meaning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meaning_urdu: Option<String>,
}

/// Parses a names list, sorted by number.
///
/// Rejects numbers outside `1..=99` and duplicates.
pub fn parse_names(json: &str) -> Result<Vec<AllahName>, ContentError> {
    let mut names: Vec<AllahName> = serde_json::from_str(json)
        .map_err(|e| ContentError::InvalidPayload(format!("invalid names list: {}", e)))?;

    names.sort_by_key(|n| n.number);

    if let Some(bad) = names.iter().find(|n| !(1..=NAME_COUNT).contains(&n.number)) {
        return Err(ContentError::InvalidPayload(format!(
            "name number {} out of range",
            bad.number
        )));
    }
    if let Some(pair) = names.windows(2).find(|w| w[0].number == w[1].number) {
        return Err(ContentError::InvalidPayload(format!(
            "duplicate name number {}",
            pair[0].number
        )));
    }

    Ok(names)
}
