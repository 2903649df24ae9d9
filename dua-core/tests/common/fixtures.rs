// SPDX-FileCopyrightText: 2026 Dua Companion Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Dataset builders and store constructors.

use dua_core::content::{ContentConfig, ContentStore};
use serde_json::{json, Value};
use tempfile::TempDir;

/// The eight category ids every full dataset uses.
pub const CATEGORY_IDS: [&str; 8] = [
    "daily",
    "sleep",
    "travel",
    "food",
    "anxiety",
    "study",
    "home",
    "gratitude",
];

/// A dataset document with `dua_count` duas spread round-robin over the
/// eight categories. Even-numbered duas use the `{id, name}` category shape,
/// odd-numbered ones the bare string shape.
pub fn dataset(version: u64, dua_count: usize) -> Value {
    let categories: Vec<Value> = CATEGORY_IDS
        .iter()
        .enumerate()
        .map(|(i, id)| {
            json!({
                "id": id,
                "name": title_case(id),
                "order": i + 1,
            })
        })
        .collect();

    let duas: Vec<Value> = (1..=dua_count)
        .map(|n| {
            let category_id = CATEGORY_IDS[(n - 1) % CATEGORY_IDS.len()];
            let category = if n % 2 == 0 {
                json!({"id": category_id, "name": title_case(category_id)})
            } else {
                json!(category_id)
            };
            json!({
                "id": format!("dua-{}", n),
                "title": format!("Dua number {}", n),
                "category": category,
                "arabicText": "بِسْمِ اللَّهِ",
                "transliteration": "Bismillah",
                "translation": format!("Translation {}", n),
                "reference": format!("Sahih Muslim {}", n),
                "tags": [category_id],
            })
        })
        .collect();

    json!({
        "version": version,
        "duas": duas,
        "categories": categories,
    })
}

pub fn dataset_bytes(version: u64, dua_count: usize) -> Vec<u8> {
    serde_json::to_vec(&dataset(version, dua_count)).unwrap()
}

/// An on-disk store seeded from `seed`. Keep the `TempDir` alive.
pub fn store_with_seed(seed: Value) -> (TempDir, ContentStore) {
    store_with_config(seed, ContentConfig::default())
}

pub fn store_with_config(seed: Value, config: ContentConfig) -> (TempDir, ContentStore) {
    let temp = TempDir::new().unwrap();
    let config = config.with_storage_path(temp.path());
    let store = ContentStore::open(config)
        .unwrap()
        .with_seed(seed.to_string());
    (temp, store)
}

fn title_case(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
