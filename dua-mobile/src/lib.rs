//! Dua Companion Mobile Bindings
//!
//! UniFFI bindings for Android and iOS platforms.
//! Exposes a simplified, mobile-friendly API on top of dua-core.
//!
//! Note: Storage connections are created on-demand for thread safety,
//! as rusqlite's Connection is not Sync.

use std::path::PathBuf;
use std::sync::Arc;

use dua_core::search::{filter_names, is_searchable, MIN_SEARCH_LEN};
use dua_core::tasbih::PRESETS;
use dua_core::{ContentConfig, ContentStore, Language, TasbihCounter};
use tracing::info;

// === Modules ===

mod content;
mod error;
mod types;

// Re-export public types
pub use content::{MobileContentConfig, MobileUpdateResult};
pub use error::MobileError;
pub use types::{
    MobileAllahName, MobileAuthenticity, MobileCategory, MobileDua, MobileDuaReference,
    MobileFontSize, MobileLanguage, MobileLocalizedDua, MobilePreferences,
    MobilePreferencesPatch, MobileSourceKind, MobileTasbih, MobileTasbihPreset,
    MobileTasbihProgress, MobileTasbihSession, MobileTheme,
};

uniffi::setup_scaffolding!();

// === Standalone functions ===

/// Install a log subscriber writing to stderr.
///
/// `filter` uses `RUST_LOG` syntax, e.g. `"dua_core=debug"`. Returns false
/// if a subscriber was already installed.
#[uniffi::export]
pub fn init_logging(filter: String) -> bool {
    let filter = tracing_subscriber::EnvFilter::try_new(&filter)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}

/// Minimum number of characters a search term needs.
#[uniffi::export]
pub fn min_search_length() -> u32 {
    MIN_SEARCH_LEN as u32
}

/// Built-in tasbih presets.
#[uniffi::export]
pub fn get_tasbih_presets() -> Vec<MobileTasbihPreset> {
    PRESETS.iter().map(MobileTasbihPreset::from).collect()
}

/// Parse a language code such as `ur-PK`.
#[uniffi::export]
pub fn language_from_code(code: String) -> Option<MobileLanguage> {
    Language::from_code(&code).map(Into::into)
}

/// Whether text in `language` is laid out right-to-left.
#[uniffi::export]
pub fn is_rtl(language: MobileLanguage) -> bool {
    Language::from(language).is_rtl()
}

// === Main interface ===

/// Main Dua Companion interface for mobile platforms.
///
/// Every call opens its own storage connection. Mutating calls such as
/// `tasbih_increment` read, modify and write without a lock, so concurrent
/// calls from several host threads can lose updates; drive one instance from
/// a single thread.
#[derive(uniffi::Object)]
pub struct DuaMobile {
    config: ContentConfig,
}

impl DuaMobile {
    /// Opens a store over a fresh storage connection.
    fn open_store(&self) -> Result<ContentStore, MobileError> {
        Ok(ContentStore::open(self.config.clone())?)
    }

    /// Load, mutate and persist the tasbih counter.
    fn with_tasbih<T>(
        &self,
        f: impl FnOnce(&mut TasbihCounter) -> Result<T, MobileError>,
    ) -> Result<T, MobileError> {
        let store = self.open_store()?;
        let mut counter = store.tasbih();
        let result = f(&mut counter)?;
        store.save_tasbih(&counter)?;
        Ok(result)
    }
}

#[uniffi::export]
impl DuaMobile {
    /// Create an instance with default configuration.
    ///
    /// Installs the bundled content on first use.
    #[uniffi::constructor]
    pub fn new(data_dir: String) -> Result<Arc<Self>, MobileError> {
        Self::new_with_config(data_dir, MobileContentConfig::default())
    }

    /// Create an instance with custom content configuration.
    #[uniffi::constructor]
    pub fn new_with_config(
        data_dir: String,
        config: MobileContentConfig,
    ) -> Result<Arc<Self>, MobileError> {
        let config = config.to_core_config(PathBuf::from(&data_dir));
        let instance = DuaMobile { config };

        let store = instance.open_store()?;
        store.ensure_seeded();
        info!(version = store.current_version(), "dua store ready");

        Ok(Arc::new(instance))
    }

    // === Content ===

    pub fn get_all_duas(&self) -> Result<Vec<MobileDua>, MobileError> {
        let store = self.open_store()?;
        Ok(store.all_duas().into_iter().map(Into::into).collect())
    }

    pub fn get_duas_by_category(&self, category_id: String) -> Result<Vec<MobileDua>, MobileError> {
        let store = self.open_store()?;
        Ok(store
            .duas_by_category(&category_id)
            .into_iter()
            .map(Into::into)
            .collect())
    }

    pub fn get_dua(&self, id: String) -> Result<Option<MobileDua>, MobileError> {
        let store = self.open_store()?;
        Ok(store.dua_by_id(&id).map(Into::into))
    }

    /// Title, translation and benefits of a dua in the given language.
    pub fn get_localized_dua(
        &self,
        id: String,
        language: MobileLanguage,
    ) -> Result<Option<MobileLocalizedDua>, MobileError> {
        let store = self.open_store()?;
        Ok(store
            .dua_by_id(&id)
            .map(|d| MobileLocalizedDua::new(&d, language.into())))
    }

    pub fn get_categories(&self) -> Result<Vec<MobileCategory>, MobileError> {
        let store = self.open_store()?;
        Ok(store.categories().into_iter().map(Into::into).collect())
    }

    /// Search duas. Terms shorter than `min_search_length()` return nothing.
    pub fn search(&self, term: String) -> Result<Vec<MobileDua>, MobileError> {
        if !is_searchable(&term) {
            return Ok(Vec::new());
        }
        let store = self.open_store()?;
        Ok(store
            .search(term.trim())
            .into_iter()
            .map(Into::into)
            .collect())
    }

    // === Favorites ===

    pub fn toggle_favorite(&self, id: String) -> Result<bool, MobileError> {
        Ok(self.open_store()?.toggle_favorite(&id)?)
    }

    pub fn add_favorite(&self, id: String) -> Result<(), MobileError> {
        Ok(self.open_store()?.add_favorite(&id)?)
    }

    pub fn remove_favorite(&self, id: String) -> Result<(), MobileError> {
        Ok(self.open_store()?.remove_favorite(&id)?)
    }

    pub fn is_favorite(&self, id: String) -> Result<bool, MobileError> {
        Ok(self.open_store()?.is_favorite(&id))
    }

    pub fn get_favorites(&self) -> Result<Vec<String>, MobileError> {
        Ok(self.open_store()?.favorites())
    }

    pub fn get_favorite_duas(&self) -> Result<Vec<MobileDua>, MobileError> {
        let store = self.open_store()?;
        Ok(store.favorite_duas().into_iter().map(Into::into).collect())
    }

    // === Versioning & updates ===

    pub fn current_version(&self) -> Result<u32, MobileError> {
        Ok(self.open_store()?.current_version())
    }

    pub fn should_check_for_updates(&self) -> Result<bool, MobileError> {
        Ok(self.open_store()?.should_check_for_updates())
    }

    /// Seconds since the UNIX epoch of the last update check, if any.
    pub fn last_update_check(&self) -> Result<Option<u64>, MobileError> {
        Ok(self.open_store()?.last_update_check())
    }

    /// Install a dataset document obtained by the host app.
    pub fn apply_update_json(&self, json: String) -> Result<MobileUpdateResult, MobileError> {
        let store = self.open_store()?;
        Ok(store.apply_update_payload(json.as_bytes())?.into())
    }

    pub fn reset_to_factory(&self) -> Result<(), MobileError> {
        Ok(self.open_store()?.reset_to_factory()?)
    }

    // === Preferences ===

    pub fn get_preferences(&self) -> Result<MobilePreferences, MobileError> {
        Ok(self.open_store()?.preferences().into())
    }

    pub fn save_preferences(&self, preferences: MobilePreferences) -> Result<(), MobileError> {
        Ok(self.open_store()?.save_preferences(&preferences.into())?)
    }

    pub fn update_preferences(
        &self,
        patch: MobilePreferencesPatch,
    ) -> Result<MobilePreferences, MobileError> {
        let store = self.open_store()?;
        Ok(store.update_preferences(&patch.into())?.into())
    }

    // === Recent searches ===

    pub fn add_recent_search(&self, query: String) -> Result<(), MobileError> {
        Ok(self.open_store()?.add_recent_search(&query)?)
    }

    pub fn get_recent_searches(&self) -> Result<Vec<String>, MobileError> {
        Ok(self.open_store()?.recent_searches())
    }

    pub fn clear_recent_searches(&self) -> Result<(), MobileError> {
        Ok(self.open_store()?.clear_recent_searches()?)
    }

    // === Tasbih ===

    pub fn get_tasbih(&self) -> Result<MobileTasbih, MobileError> {
        Ok(self.open_store()?.tasbih().into())
    }

    pub fn tasbih_increment(&self) -> Result<MobileTasbihProgress, MobileError> {
        self.with_tasbih(|c| Ok(c.increment().into()))
    }

    /// End the current session, recording it in history if non-zero.
    pub fn tasbih_reset(&self) -> Result<MobileTasbih, MobileError> {
        self.with_tasbih(|c| {
            c.reset();
            Ok(c.clone().into())
        })
    }

    pub fn tasbih_set_target(&self, target: u32) -> Result<MobileTasbih, MobileError> {
        self.with_tasbih(|c| {
            c.set_target(target)?;
            Ok(c.clone().into())
        })
    }

    pub fn tasbih_select_preset(&self, preset_id: String) -> Result<MobileTasbih, MobileError> {
        self.with_tasbih(|c| {
            c.select_preset(&preset_id)?;
            Ok(c.clone().into())
        })
    }

    pub fn tasbih_clear_history(&self) -> Result<(), MobileError> {
        self.with_tasbih(|c| {
            c.clear_history();
            Ok(())
        })
    }

    // === Names of Allah ===

    /// Store the names list (JSON array). Returns how many were stored.
    pub fn load_names(&self, json: String) -> Result<u32, MobileError> {
        let count = self.open_store()?.load_names(&json)?;
        Ok(u32::try_from(count).unwrap_or(u32::MAX))
    }

    pub fn get_names(&self) -> Result<Vec<MobileAllahName>, MobileError> {
        Ok(self
            .open_store()?
            .names()
            .into_iter()
            .map(Into::into)
            .collect())
    }

    pub fn get_name(&self, number: u32) -> Result<Option<MobileAllahName>, MobileError> {
        Ok(self.open_store()?.name_by_number(number).map(Into::into))
    }

    /// Search names. Terms shorter than `min_search_length()` return nothing.
    pub fn search_names(&self, term: String) -> Result<Vec<MobileAllahName>, MobileError> {
        if !is_searchable(&term) {
            return Ok(Vec::new());
        }
        let names = self.open_store()?.names();
        Ok(filter_names(&names, term.trim())
            .into_iter()
            .cloned()
            .map(Into::into)
            .collect())
    }

    pub fn toggle_name_favorite(&self, number: u32) -> Result<bool, MobileError> {
        Ok(self.open_store()?.toggle_name_favorite(number)?)
    }

    pub fn get_name_favorites(&self) -> Result<Vec<u32>, MobileError> {
        Ok(self.open_store()?.name_favorites())
    }
}

// Remote updates (require content-updates feature)
#[cfg(feature = "content-updates")]
#[uniffi::export]
impl DuaMobile {
    /// Fetch the dataset at `url` (or the configured URL) and install it if
    /// it is newer. Blocks the calling thread.
    pub fn check_for_updates(&self, url: Option<String>) -> Result<MobileUpdateResult, MobileError> {
        let store = self.open_store()?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| MobileError::Internal(e.to_string()))?;

        let url = url.unwrap_or_default();
        let outcome = runtime.block_on(store.check_and_apply_update(&url))?;
        Ok(outcome.into())
    }
}
