// SPDX-FileCopyrightText: 2026 Dua Companion Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Content Store - the main entry point for local content
//!
//! The ContentStore coordinates between:
//! - Bundled seed content (first run, factory reset)
//! - Persisted content (every read)
//! - Remote content (fetched on demand, version-gated)
//!
//! It also owns the small pieces of user state that live next to the
//! content: favorites, recent searches, preferences, the tasbih counter and
//! the names of Allah.

use std::borrow::Cow;
use std::collections::HashMap;
use std::time::Duration;

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use super::bundled::{default_categories, SEED_JSON};
use super::config::ContentConfig;
#[cfg(feature = "content-updates")]
use super::fetcher::ContentFetcher;
use super::normalize::{normalize_dataset, parse_dataset, parse_dataset_with, validate_strict};
use super::types::{Dua, DuaCategory, NormalizedDataset, RawDataset, UpdateOutcome};
use crate::names::{parse_names, AllahName};
use crate::preferences::{PreferencesPatch, UserPreferences};
use crate::search;
use crate::storage::{keys, unix_now, Storage, StorageError};
use crate::tasbih::TasbihCounter;

/// Maximum number of recent searches kept.
pub const MAX_RECENT_SEARCHES: usize = 10;

/// Local content and user state backed by persistent storage.
///
/// Every read goes to storage; nothing is cached in memory.
pub struct ContentStore {
    config: ContentConfig,
    storage: Storage,
    seed: Cow<'static, str>,
}

impl ContentStore {
    /// Open (or create) the store's database under `config.storage_path`.
    pub fn open(config: ContentConfig) -> Result<Self, ContentError> {
        std::fs::create_dir_all(&config.storage_path)?;
        let storage = Storage::open(config.database_path(), &config.namespace)?;
        Ok(Self::with_storage(config, storage))
    }

    /// Build a store over an already opened storage.
    pub fn with_storage(config: ContentConfig, storage: Storage) -> Self {
        Self {
            config,
            storage,
            seed: Cow::Borrowed(SEED_JSON),
        }
    }

    /// Replace the bundled seed document.
    pub fn with_seed(mut self, seed: impl Into<Cow<'static, str>>) -> Self {
        self.seed = seed.into();
        self
    }

    /// Get the configuration
    pub fn config(&self) -> &ContentConfig {
        &self.config
    }

    /// Get access to the storage (for advanced operations)
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    // ==================== Seeding ====================

    /// Install the seed dataset unless it has already been installed.
    ///
    /// Failures are logged and leave the store unseeded, so the next call
    /// tries again.
    pub fn ensure_seeded(&self) {
        match self.seed_if_needed() {
            Ok(true) => {}
            Ok(false) => debug!("content already initialized"),
            Err(e) => error!(error = %e, "failed to seed local content"),
        }
    }

    fn seed_if_needed(&self) -> Result<bool, ContentError> {
        if self.storage.get_raw(keys::DATA_INITIALIZED)?.is_some() {
            return Ok(false);
        }

        let dataset = normalize_dataset(parse_dataset(self.seed.as_bytes())?);
        self.persist_dataset(&dataset)?;

        info!(
            version = dataset.version,
            duas = dataset.duas.len(),
            categories = dataset.categories.len(),
            "seeded local content"
        );
        Ok(true)
    }

    /// Write records, categories, version and the initialized flag in one
    /// transaction.
    fn persist_dataset(&self, dataset: &NormalizedDataset) -> Result<(), ContentError> {
        let duas = serde_json::to_string(&dataset.duas).map_err(StorageError::from)?;
        let categories = serde_json::to_string(&dataset.categories).map_err(StorageError::from)?;

        self.storage.write_batch(&[
            (keys::LOCAL_DUAS, duas),
            (keys::LOCAL_CATEGORIES, categories),
            (keys::DATA_VERSION, dataset.version.to_string()),
            (keys::DATA_INITIALIZED, "true".to_string()),
        ])?;
        Ok(())
    }

    // ==================== Reads ====================

    /// Read a JSON value, treating absence and storage failures alike.
    fn read_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        match self.storage.get_json(key) {
            Ok(Some(value)) => value,
            Ok(None) => T::default(),
            Err(e) => {
                warn!(key, error = %e, "unreadable stored value, using default");
                T::default()
            }
        }
    }

    /// All persisted duas; empty if nothing has been seeded.
    pub fn all_duas(&self) -> Vec<Dua> {
        self.read_or_default(keys::LOCAL_DUAS)
    }

    pub fn duas_by_category(&self, category_id: &str) -> Vec<Dua> {
        self.all_duas()
            .into_iter()
            .filter(|d| d.category_id == category_id)
            .collect()
    }

    pub fn dua_by_id(&self, id: &str) -> Option<Dua> {
        self.all_duas().into_iter().find(|d| d.id == id)
    }

    /// Categories sorted by `order`, each with a live `dua_count`.
    ///
    /// Falls back to the built-in categories when none are persisted.
    pub fn categories(&self) -> Vec<DuaCategory> {
        let mut categories: Vec<DuaCategory> = self.read_or_default(keys::LOCAL_CATEGORIES);
        if categories.is_empty() {
            categories = default_categories();
        }

        let mut counts: HashMap<String, usize> = HashMap::new();
        for dua in self.all_duas() {
            *counts.entry(dua.category_id).or_default() += 1;
        }

        for category in &mut categories {
            category.dua_count = counts.get(&category.id).copied().unwrap_or(0);
        }
        categories.sort_by_key(|c| c.order);
        categories
    }

    /// Duas matching `term`. Length limits are the caller's concern.
    pub fn search(&self, term: &str) -> Vec<Dua> {
        let duas = self.all_duas();
        search::filter_duas(&duas, term).into_iter().cloned().collect()
    }

    // ==================== Favorites ====================

    pub fn favorites(&self) -> Vec<String> {
        self.read_or_default(keys::FAVORITES)
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites().iter().any(|f| f == id)
    }

    /// Flip membership of `id`. Returns whether it is now a favorite.
    pub fn toggle_favorite(&self, id: &str) -> Result<bool, ContentError> {
        let mut favorites = self.favorites();
        let now_favorite = match favorites.iter().position(|f| f == id) {
            Some(index) => {
                favorites.remove(index);
                false
            }
            None => {
                favorites.push(id.to_string());
                true
            }
        };
        self.storage.set_json(keys::FAVORITES, &favorites)?;
        Ok(now_favorite)
    }

    pub fn add_favorite(&self, id: &str) -> Result<(), ContentError> {
        let mut favorites = self.favorites();
        if !favorites.iter().any(|f| f == id) {
            favorites.push(id.to_string());
            self.storage.set_json(keys::FAVORITES, &favorites)?;
        }
        Ok(())
    }

    pub fn remove_favorite(&self, id: &str) -> Result<(), ContentError> {
        let mut favorites = self.favorites();
        let before = favorites.len();
        favorites.retain(|f| f != id);
        if favorites.len() != before {
            self.storage.set_json(keys::FAVORITES, &favorites)?;
        }
        Ok(())
    }

    /// Favorite records in favorites order. Ids with no record are skipped.
    pub fn favorite_duas(&self) -> Vec<Dua> {
        let mut by_id: HashMap<String, Dua> = self
            .all_duas()
            .into_iter()
            .map(|d| (d.id.clone(), d))
            .collect();
        self.favorites()
            .iter()
            .filter_map(|id| by_id.remove(id))
            .collect()
    }

    // ==================== Versioning & updates ====================

    /// Installed dataset version; 1 when unset or unreadable.
    pub fn current_version(&self) -> u32 {
        match self.storage.get_raw(keys::DATA_VERSION) {
            Ok(Some(raw)) => raw
                .trim()
                .trim_matches('"')
                .parse()
                .ok()
                .filter(|v| *v > 0)
                .unwrap_or(1),
            Ok(None) => 1,
            Err(e) => {
                warn!(error = %e, "failed to read data version");
                1
            }
        }
    }

    /// Validate, compare and install an update document.
    ///
    /// Nothing is written unless the payload is newer and fully normalized;
    /// the write itself is a single transaction.
    pub fn apply_update_payload(&self, data: &[u8]) -> Result<UpdateOutcome, ContentError> {
        self.apply_parsed_update(parse_dataset_with(data, self.config.strict_validation)?)
    }

    fn apply_parsed_update(&self, raw: RawDataset) -> Result<UpdateOutcome, ContentError> {
        let current_version = self.current_version();

        if raw.version <= current_version {
            debug!(remote = raw.version, current_version, "content up to date");
            return Ok(UpdateOutcome::UpToDate { current_version });
        }

        let dataset = normalize_dataset(raw);
        if self.config.strict_validation {
            validate_strict(&dataset)?;
        }
        self.persist_dataset(&dataset)?;

        info!(
            from = current_version,
            to = dataset.version,
            duas = dataset.duas.len(),
            "applied content update"
        );
        Ok(UpdateOutcome::Applied {
            version: dataset.version,
            dua_count: dataset.duas.len(),
            category_count: dataset.categories.len(),
        })
    }

    /// Delete installed content and reinstall the seed.
    ///
    /// The last check time is cleared so the next update check is due at
    /// once. Favorites survive unless `reset_clears_favorites` is set.
    pub fn reset_to_factory(&self) -> Result<(), ContentError> {
        let mut doomed: Vec<&str> = keys::CONTENT_KEYS.to_vec();
        if self.config.reset_clears_favorites {
            doomed.push(keys::FAVORITES);
        }
        self.storage.remove_many(&doomed)?;
        info!(
            cleared_favorites = self.config.reset_clears_favorites,
            "reset content to factory state"
        );

        self.ensure_seeded();
        Ok(())
    }

    /// When the last update check happened (seconds since the UNIX epoch).
    pub fn last_update_check(&self) -> Option<u64> {
        self.read_or_default(keys::LAST_UPDATE_CHECK)
    }

    /// Whether an opportunistic update check is due.
    pub fn should_check_for_updates(&self) -> bool {
        if !self.config.remote_updates_enabled {
            return false;
        }

        let Some(last_check) = self.last_update_check() else {
            // Never checked before
            return true;
        };

        let elapsed = Duration::from_secs(unix_now().saturating_sub(last_check));
        elapsed >= self.config.check_interval
    }

    /// Record that an update check was performed
    pub fn record_check_time(&self) -> Result<(), ContentError> {
        self.storage.set_json(keys::LAST_UPDATE_CHECK, &unix_now())?;
        Ok(())
    }

    // ==================== Recent searches ====================

    pub fn recent_searches(&self) -> Vec<String> {
        self.read_or_default(keys::RECENT_SEARCHES)
    }

    /// Record a query as the most recent one. Blank queries are ignored.
    pub fn add_recent_search(&self, query: &str) -> Result<(), ContentError> {
        if query.trim().is_empty() {
            return Ok(());
        }

        let mut searches = self.recent_searches();
        searches.retain(|s| s != query);
        searches.insert(0, query.to_string());
        searches.truncate(MAX_RECENT_SEARCHES);
        self.storage.set_json(keys::RECENT_SEARCHES, &searches)?;
        Ok(())
    }

    pub fn clear_recent_searches(&self) -> Result<(), ContentError> {
        self.storage.remove(keys::RECENT_SEARCHES)?;
        Ok(())
    }

    // ==================== Preferences ====================

    pub fn preferences(&self) -> UserPreferences {
        self.read_or_default(keys::PREFERENCES)
    }

    pub fn save_preferences(&self, preferences: &UserPreferences) -> Result<(), ContentError> {
        self.storage.set_json(keys::PREFERENCES, preferences)?;
        Ok(())
    }

    /// Merge `patch` into the stored preferences and return the result.
    pub fn update_preferences(
        &self,
        patch: &PreferencesPatch,
    ) -> Result<UserPreferences, ContentError> {
        let merged = self.preferences().merged(patch);
        self.save_preferences(&merged)?;
        Ok(merged)
    }

    // ==================== Tasbih ====================

    pub fn tasbih(&self) -> TasbihCounter {
        self.read_or_default(keys::TASBIH)
    }

    pub fn save_tasbih(&self, counter: &TasbihCounter) -> Result<(), ContentError> {
        self.storage.set_json(keys::TASBIH, counter)?;
        Ok(())
    }

    // ==================== Names of Allah ====================

    /// Validate and persist a names list. Returns how many were stored.
    pub fn load_names(&self, json: &str) -> Result<usize, ContentError> {
        let names = parse_names(json)?;
        self.storage.set_json(keys::NAMES, &names)?;
        debug!(count = names.len(), "stored names of Allah");
        Ok(names.len())
    }

    pub fn names(&self) -> Vec<AllahName> {
        self.read_or_default(keys::NAMES)
    }

    pub fn name_by_number(&self, number: u32) -> Option<AllahName> {
        self.names().into_iter().find(|n| n.number == number)
    }

    pub fn search_names(&self, term: &str) -> Vec<AllahName> {
        let names = self.names();
        search::filter_names(&names, term)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn name_favorites(&self) -> Vec<u32> {
        self.read_or_default(keys::NAME_FAVORITES)
    }

    /// Flip favorite membership of a name. Returns whether it is now a favorite.
    pub fn toggle_name_favorite(&self, number: u32) -> Result<bool, ContentError> {
        let mut favorites = self.name_favorites();
        let now_favorite = match favorites.iter().position(|n| *n == number) {
            Some(index) => {
                favorites.remove(index);
                false
            }
            None => {
                favorites.push(number);
                true
            }
        };
        self.storage.set_json(keys::NAME_FAVORITES, &favorites)?;
        Ok(now_favorite)
    }
}

// Async methods (require content-updates feature)
#[cfg(feature = "content-updates")]
impl ContentStore {
    /// Fetch the dataset at `url` (or the configured URL when empty) and
    /// install it if it is newer.
    pub async fn check_and_apply_update(&self, url: &str) -> Result<UpdateOutcome, ContentError> {
        if !self.config.remote_updates_enabled {
            return Ok(UpdateOutcome::Disabled);
        }

        let url = if url.trim().is_empty() {
            self.config.update_url.as_str()
        } else {
            url
        };

        let fetcher =
            ContentFetcher::new(&self.config).map_err(|e| ContentError::Fetch(e.to_string()))?;
        let data = fetcher.fetch_dataset(url).await.map_err(|e| {
            warn!(url, error = %e, "content update fetch failed");
            ContentError::Fetch(e.to_string())
        })?;

        let raw = parse_dataset_with(&data, self.config.strict_validation)?;
        if let Err(e) = self.record_check_time() {
            warn!(error = %e, "failed to record update check time");
        }
        self.apply_parsed_update(raw)
    }
}

/// Errors that can occur with the content store
#[derive(Debug, Error)]
pub enum ContentError {
    /// Storage error
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Fetch error (network/remote)
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Document is not valid JSON or lacks a required collection
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
}
