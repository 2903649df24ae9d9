//! Dua Companion Core Library
//!
//! Offline-first store for supplications, their categories and the user
//! state around them (favorites, preferences, recent searches, tasbih,
//! names of Allah). Content ships with the app and can be replaced by a
//! newer remote dataset.

pub mod content;
pub mod names;
pub mod preferences;
pub mod search;
pub mod storage;
pub mod tasbih;

pub use content::{
    ContentConfig, ContentError, ContentStore, Dua, DuaCategory, DuaReference, FetchError,
    SourceKind, UpdateOutcome,
};
pub use names::AllahName;
pub use preferences::{FontSize, Language, PreferencesPatch, Theme, UserPreferences};
pub use search::{filter_duas, is_searchable, MIN_SEARCH_LEN};
pub use storage::{Storage, StorageError};
pub use tasbih::{TasbihCounter, TasbihError, TasbihPreset, TasbihProgress, TasbihSession, PRESETS};
