// SPDX-FileCopyrightText: 2026 Dua Companion Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for remote update checks against a local HTTP stub
//!
//! - Newer remote dataset is installed
//! - Same or older version is reported as up to date
//! - Network and HTTP failures never touch the cache
//! - Malformed payloads are rejected

use crate::common::fixtures::{dataset, dataset_bytes, store_with_config, store_with_seed};
use crate::common::http_stub::{serve_once, unreachable_url};
use dua_core::content::{ContentConfig, ContentError, UpdateOutcome};

#[tokio::test]
async fn test_newer_remote_is_applied() {
    let (_temp, store) = store_with_seed(dataset(1, 50));
    store.ensure_seeded();

    let url = serve_once(200, dataset_bytes(2, 52));
    let outcome = store.check_and_apply_update(&url).await.unwrap();

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
    assert!(store.last_update_check().is_some());
    assert!(!store.should_check_for_updates());
}

#[tokio::test]
async fn test_same_version_is_up_to_date() {
    let (_temp, store) = store_with_seed(dataset(2, 10));
    store.ensure_seeded();

    let url = serve_once(200, dataset_bytes(2, 99));
    let outcome = store.check_and_apply_update(&url).await.unwrap();

    assert_eq!(outcome, UpdateOutcome::UpToDate { current_version: 2 });
    assert_eq!(store.all_duas().len(), 10);
    // A successful check is still recorded
    assert!(store.last_update_check().is_some());
}

#[tokio::test]
async fn test_http_error_is_fetch_error() {
    let (_temp, store) = store_with_seed(dataset(1, 10));
    store.ensure_seeded();
    let before = store.storage().get_raw("@local_duas").unwrap();

    let url = serve_once(500, "oops");
    let err = store.check_and_apply_update(&url).await.unwrap_err();

    assert!(matches!(err, ContentError::Fetch(_)), "got {:?}", err);
    assert!(err.to_string().contains("500"));
    assert_eq!(store.storage().get_raw("@local_duas").unwrap(), before);
    assert_eq!(store.current_version(), 1);
    assert!(store.last_update_check().is_none());
}

#[tokio::test]
async fn test_unreachable_server_is_fetch_error() {
    let (_temp, store) = store_with_seed(dataset(1, 10));
    store.ensure_seeded();

    let err = store
        .check_and_apply_update(&unreachable_url())
        .await
        .unwrap_err();
    assert!(matches!(err, ContentError::Fetch(_)));
    assert_eq!(store.all_duas().len(), 10);
}

#[tokio::test]
async fn test_malformed_payload_rejected() {
    let (_temp, store) = store_with_seed(dataset(1, 10));
    store.ensure_seeded();

    let url = serve_once(200, r#"{"version": 9, "duas": []}"#);
    let err = store.check_and_apply_update(&url).await.unwrap_err();

    assert!(matches!(err, ContentError::InvalidPayload(_)));
    assert_eq!(store.current_version(), 1);
    assert_eq!(store.all_duas().len(), 10);
}

#[tokio::test]
async fn test_oversized_payload_rejected() {
    let mut config = ContentConfig::default();
    config.max_content_size = 64;
    let (_temp, store) = store_with_config(dataset(1, 3), config);
    store.ensure_seeded();

    let url = serve_once(200, dataset_bytes(2, 5));
    let err = store.check_and_apply_update(&url).await.unwrap_err();

    assert!(err.to_string().contains("too large"), "got {}", err);
    assert_eq!(store.current_version(), 1);
}

#[tokio::test]
async fn test_disabled_updates_skip_network() {
    let (_temp, store) = store_with_config(
        dataset(1, 3),
        ContentConfig::default().without_remote_updates(),
    );
    store.ensure_seeded();

    let outcome = store
        .check_and_apply_update(&unreachable_url())
        .await
        .unwrap();
    assert_eq!(outcome, UpdateOutcome::Disabled);
}

#[tokio::test]
async fn test_configured_url_used_when_none_given() {
    let url = serve_once(200, dataset_bytes(3, 4));
    let (_temp, store) = store_with_config(dataset(1, 2), ContentConfig::default().with_update_url(url));
    store.ensure_seeded();

    let outcome = store.check_and_apply_update("").await.unwrap();
    assert!(matches!(outcome, UpdateOutcome::Applied { version: 3, .. }));
}

#[tokio::test]
async fn test_no_url_at_all_is_fetch_error() {
    let (_temp, store) = store_with_seed(dataset(1, 2));
    store.ensure_seeded();

    let err = store.check_and_apply_update("").await.unwrap_err();
    assert!(matches!(err, ContentError::Fetch(_)));
}
