// SPDX-FileCopyrightText: 2026 Dua Companion Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for user state kept next to the content
//!
//! Preferences, recent searches, tasbih and names of Allah, persisted
//! through a reopen.

use crate::common::fixtures::{dataset, store_with_seed};
use dua_core::content::{ContentConfig, ContentStore};
use dua_core::preferences::{FontSize, Language, PreferencesPatch};
use dua_core::tasbih::TasbihError;

const NAMES: &str = r#"[
    {"number": 1, "arabic": "الرَّحْمَنُ", "transliteration": "Ar-Rahman", "translation": "The Most Gracious",
     "translationUrdu": "نہایت مہربان"},
    {"number": 2, "arabic": "الرَّحِيمُ", "transliteration": "Ar-Raheem", "translation": "The Most Merciful"},
    {"number": 3, "arabic": "الْمَلِكُ", "transliteration": "Al-Malik", "translation": "The King",
     "meaning": "The Sovereign Lord"}
]"#;

fn reopen(temp: &tempfile::TempDir) -> ContentStore {
    ContentStore::open(ContentConfig::default().with_storage_path(temp.path())).unwrap()
}

#[test]
fn test_preferences_survive_reopen() {
    let (temp, store) = store_with_seed(dataset(1, 1));
    store
        .update_preferences(&PreferencesPatch {
            font_size: Some(FontSize::Large),
            language: Some(Language::Arabic),
            ..Default::default()
        })
        .unwrap();
    drop(store);

    let prefs = reopen(&temp).preferences();
    assert_eq!(prefs.font_size, FontSize::Large);
    assert!(prefs.language.is_rtl());
    assert!(prefs.show_transliteration);
}

#[test]
fn test_recent_searches_newest_first() {
    let (_temp, store) = store_with_seed(dataset(1, 1));
    for query in ["travel", "sleep", "travel", ""] {
        store.add_recent_search(query).unwrap();
    }
    assert_eq!(store.recent_searches(), vec!["travel", "sleep"]);
}

#[test]
fn test_tasbih_session_roundtrip() {
    let (temp, store) = store_with_seed(dataset(1, 1));

    let mut counter = store.tasbih();
    counter.select_preset("astaghfirullah").unwrap();
    for _ in 0..100 {
        counter.increment();
    }
    counter.reset();
    assert_eq!(counter.set_target(0), Err(TasbihError::ZeroTarget));
    store.save_tasbih(&counter).unwrap();
    drop(store);

    let restored = reopen(&temp).tasbih();
    assert_eq!(restored.preset_id, "astaghfirullah");
    assert_eq!(restored.target, 100);
    assert_eq!(restored.count, 0);
    assert_eq!(restored.history.len(), 1);
    assert_eq!(restored.history[0].count, 100);
}

#[test]
fn test_names_lookup_and_search() {
    let (_temp, store) = store_with_seed(dataset(1, 1));
    assert!(store.names().is_empty());

    assert_eq!(store.load_names(NAMES).unwrap(), 3);
    assert_eq!(store.name_by_number(3).unwrap().transliteration, "Al-Malik");
    assert_eq!(store.search_names("sovereign").len(), 1);
    assert_eq!(store.search_names("most").len(), 2);
    assert_eq!(store.search_names("الرَّحِيمُ").len(), 1);
}

#[test]
fn test_invalid_names_keep_previous_list() {
    let (_temp, store) = store_with_seed(dataset(1, 1));
    store.load_names(NAMES).unwrap();

    assert!(store.load_names("[{\"number\": 0}]").is_err());
    assert_eq!(store.names().len(), 3);
}

#[test]
fn test_name_favorites_survive_reopen() {
    let (temp, store) = store_with_seed(dataset(1, 1));
    store.load_names(NAMES).unwrap();
    store.toggle_name_favorite(3).unwrap();
    store.toggle_name_favorite(1).unwrap();
    drop(store);

    assert_eq!(reopen(&temp).name_favorites(), vec![3, 1]);
}
