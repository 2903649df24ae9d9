// SPDX-FileCopyrightText: 2026 Dua Companion Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Client-side search
//!
//! Case-insensitive substring containment over a fixed set of fields.
//! No ranking, no fuzzy matching, no tokenization. Results keep the input
//! order.
//!
//! The filters do not enforce a minimum length: an empty term matches
//! everything. Callers gate on [`is_searchable`] before searching.

use crate::content::Dua;
use crate::names::AllahName;

/// Minimum number of characters (after trimming) before a search runs.
pub const MIN_SEARCH_LEN: usize = 2;

/// Whether `term` is long enough to be worth searching for.
pub fn is_searchable(term: &str) -> bool {
    term.trim().chars().count() >= MIN_SEARCH_LEN
}

/// Returns the duas whose searchable fields contain `term`.
pub fn filter_duas<'a>(duas: &'a [Dua], term: &str) -> Vec<&'a Dua> {
    let needle = term.to_lowercase();
    duas.iter().filter(|d| dua_matches(d, &needle)).collect()
}

/// Whether any searchable field of `dua` contains the already lowercased `needle`.
pub fn dua_matches(dua: &Dua, needle: &str) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(needle);

    contains(&dua.title)
        || dua.title_urdu.as_deref().is_some_and(contains)
        || contains(&dua.translation)
        || dua.translation_urdu.as_deref().is_some_and(contains)
        || contains(&dua.transliteration)
        || contains(&dua.category)
        || dua.tags.iter().any(|t| contains(t))
        || dua.search_keywords.iter().any(|k| contains(k))
}

/// Returns the names whose transliteration, translation, meaning or Arabic
/// form contain `term`.
pub fn filter_names<'a>(names: &'a [AllahName], term: &str) -> Vec<&'a AllahName> {
    let needle = term.to_lowercase();
    let contains = |field: &str| field.to_lowercase().contains(&needle);

    names
        .iter()
        .filter(|n| {
            contains(&n.transliteration)
                || contains(&n.translation)
                || n.meaning.as_deref().is_some_and(contains)
                || n.arabic.contains(term.trim())
        })
        .collect()
}
