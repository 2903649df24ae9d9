// SPDX-FileCopyrightText: 2026 Dua Companion Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the content store on disk
//!
//! - First-run seeding and idempotency
//! - Persistence across reopen
//! - Live category counts
//! - End-to-end seed then update
//! - Factory reset

use crate::common::fixtures::{dataset, dataset_bytes, store_with_config, store_with_seed};
use dua_core::content::{normalize_dataset, parse_dataset, ContentConfig, ContentStore, UpdateOutcome};

#[test]
fn test_seed_then_update_end_to_end() {
    let (_temp, store) = store_with_seed(dataset(1, 50));
    store.ensure_seeded();

    assert_eq!(store.current_version(), 1);
    assert_eq!(store.categories().len(), 8);
    assert_eq!(store.all_duas().len(), 50);

    let outcome = store.apply_update_payload(&dataset_bytes(2, 52)).unwrap();
    assert_eq!(
        outcome,
        UpdateOutcome::Applied {
            version: 2,
            dua_count: 52,
            category_count: 8
        }
    );
    assert_eq!(store.current_version(), 2);
    assert_eq!(store.all_duas().len(), 52);
}

#[test]
fn test_update_installs_exactly_the_normalized_payload() {
    let (_temp, store) = store_with_seed(dataset(1, 10));
    store.ensure_seeded();

    let payload = dataset_bytes(4, 20);
    store.apply_update_payload(&payload).unwrap();

    let expected = normalize_dataset(parse_dataset(&payload).unwrap());
    assert_eq!(store.all_duas(), expected.duas);
    assert_eq!(store.current_version(), 4);
}

#[test]
fn test_stale_update_leaves_storage_untouched() {
    let (_temp, store) = store_with_seed(dataset(3, 10));
    store.ensure_seeded();

    let storage = store.storage();
    let before: Vec<_> = ["@local_duas", "@local_categories", "@data_version"]
        .iter()
        .map(|k| storage.get_raw(k).unwrap())
        .collect();

    for version in [1, 2, 3] {
        let outcome = store
            .apply_update_payload(&dataset_bytes(version, 40))
            .unwrap();
        assert_eq!(outcome, UpdateOutcome::UpToDate { current_version: 3 });
    }

    let after: Vec<_> = ["@local_duas", "@local_categories", "@data_version"]
        .iter()
        .map(|k| storage.get_raw(k).unwrap())
        .collect();
    assert_eq!(before, after);
}

#[test]
fn test_category_counts_follow_updates() {
    let (_temp, store) = store_with_seed(dataset(1, 8));
    store.ensure_seeded();
    assert!(store.categories().iter().all(|c| c.dua_count == 1));

    store.apply_update_payload(&dataset_bytes(2, 17)).unwrap();
    let categories = store.categories();
    // 17 duas round-robin over 8 categories
    assert_eq!(categories[0].id, "daily");
    assert_eq!(categories[0].dua_count, 3);
    assert!(categories[1..].iter().all(|c| c.dua_count == 2));

    let total: usize = categories.iter().map(|c| c.dua_count).sum();
    assert_eq!(total, store.all_duas().len());
}

#[test]
fn test_content_survives_reopen() {
    let (temp, store) = store_with_seed(dataset(1, 12));
    store.ensure_seeded();
    store.add_favorite("dua-12").unwrap();
    store.apply_update_payload(&dataset_bytes(2, 14)).unwrap();
    drop(store);

    let config = ContentConfig::default().with_storage_path(temp.path());
    let reopened = ContentStore::open(config).unwrap();
    reopened.ensure_seeded();

    assert_eq!(reopened.current_version(), 2);
    assert_eq!(reopened.all_duas().len(), 14);
    assert!(reopened.is_favorite("dua-12"));
}

#[test]
fn test_add_favorite_twice_stores_once() {
    let (_temp, store) = store_with_seed(dataset(1, 20));
    store.ensure_seeded();

    store.add_favorite("dua-12").unwrap();
    store.add_favorite("dua-12").unwrap();
    assert_eq!(store.favorites(), vec!["dua-12".to_string()]);
}

#[test]
fn test_reset_reinstalls_normalized_seed() {
    let seed = dataset(1, 30);
    let expected = normalize_dataset(parse_dataset(seed.to_string().as_bytes()).unwrap());

    let (_temp, store) = store_with_seed(seed);
    store.ensure_seeded();
    store.add_favorite("dua-3").unwrap();
    store.apply_update_payload(&dataset_bytes(5, 2)).unwrap();

    store.reset_to_factory().unwrap();

    assert_eq!(store.all_duas(), expected.duas);
    assert_eq!(store.current_version(), 1);
    assert!(store.is_favorite("dua-3"));
}

#[test]
fn test_reset_clearing_favorites() {
    let (_temp, store) = store_with_config(
        dataset(1, 5),
        ContentConfig::default().with_reset_clearing_favorites(),
    );
    store.ensure_seeded();
    store.add_favorite("dua-1").unwrap();

    store.reset_to_factory().unwrap();
    assert!(store.favorites().is_empty());
    assert_eq!(store.all_duas().len(), 5);
}

#[test]
fn test_namespaces_share_a_database_file() {
    let (temp, store) = store_with_seed(dataset(1, 3));
    store.ensure_seeded();

    let mut config = ContentConfig::default().with_storage_path(temp.path());
    config.namespace = "other".to_string();
    let other = ContentStore::open(config).unwrap();

    assert!(other.all_duas().is_empty());
    assert_eq!(store.all_duas().len(), 3);
}

#[test]
fn test_bundled_seed_reads() {
    let temp = tempfile::TempDir::new().unwrap();
    let store = ContentStore::open(ContentConfig::default().with_storage_path(temp.path())).unwrap();
    store.ensure_seeded();

    let duas = store.all_duas();
    assert!(!duas.is_empty());
    let first = &duas[0];
    assert_eq!(store.dua_by_id(&first.id).as_ref(), Some(first));
    assert!(store
        .duas_by_category(&first.category_id)
        .iter()
        .any(|d| d.id == first.id));
}
