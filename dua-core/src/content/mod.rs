// SPDX-FileCopyrightText: 2026 Dua Companion Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Dua content module
//!
//! Provides the offline-first content store:
//! - Bundled seed dataset installed on first run
//! - Persisted duas and categories read on every access
//! - Version-gated replacement from a remote dataset
//!
//! Seed and update documents share one normalization path, so records look
//! the same regardless of where they came from.

mod bundled;
mod config;
mod fetcher;
pub mod normalize;
mod store;
mod types;

pub use bundled::{default_categories, SEED_JSON};
pub use config::ContentConfig;
pub use fetcher::{ContentFetcher, FetchError};
pub use normalize::{classify_reference, normalize_dataset, parse_dataset, parse_dataset_with};
pub use store::{ContentError, ContentStore, MAX_RECENT_SEARCHES};
pub use types::{
    Authenticity, Dua, DuaCategory, DuaReference, NormalizedDataset, RawCategory, RawCategoryRef,
    RawDataset, RawDua, SourceKind, UpdateOutcome,
};
