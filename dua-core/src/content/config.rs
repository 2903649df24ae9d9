//! Configuration for the content store and remote updates

use std::path::PathBuf;
use std::time::Duration;

/// Configuration for the content store
#[derive(Debug, Clone)]
pub struct ContentConfig {
    /// Directory holding the local database
    pub storage_path: PathBuf,

    /// Namespace prefixed to every persisted key
    pub namespace: String,

    /// Remote dataset URL used when the caller does not pass one (empty: none)
    pub update_url: String,

    /// Enable/disable remote updates
    pub remote_updates_enabled: bool,

    /// Minimum interval between opportunistic update checks
    pub check_interval: Duration,

    /// HTTP timeout for fetches
    pub timeout: Duration,

    /// Maximum remote dataset size (bytes)
    pub max_content_size: u64,

    /// Proxy URL
    pub proxy_url: Option<String>,

    /// Whether a factory reset also wipes the favorites list
    pub reset_clears_favorites: bool,

    /// Reject update payloads with malformed records, duplicate ids or
    /// dangling category ids
    pub strict_validation: bool,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from("."),
            namespace: "dua".to_string(),
            update_url: String::new(),
            remote_updates_enabled: true,
            check_interval: Duration::from_secs(24 * 3600),
            timeout: Duration::from_secs(30),
            max_content_size: 5 * 1024 * 1024, // 5 MB
            proxy_url: None,
            reset_clears_favorites: false,
            strict_validation: false,
        }
    }
}

impl ContentConfig {
    /// Store the database under `path`
    pub fn with_storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_path = path.into();
        self
    }

    /// Configure the default remote dataset URL
    pub fn with_update_url(mut self, url: impl Into<String>) -> Self {
        self.update_url = url.into();
        self
    }

    /// Configure with custom proxy
    pub fn with_proxy(mut self, proxy_url: String) -> Self {
        self.proxy_url = Some(proxy_url);
        self
    }

    /// Make factory reset clear favorites as well
    pub fn with_reset_clearing_favorites(mut self) -> Self {
        self.reset_clears_favorites = true;
        self
    }

    /// Enable strict validation of update payloads
    pub fn with_strict_validation(mut self) -> Self {
        self.strict_validation = true;
        self
    }

    /// Disable remote updates (use bundled content only)
    pub fn without_remote_updates(mut self) -> Self {
        self.remote_updates_enabled = false;
        self
    }

    /// Path of the SQLite database file.
    pub fn database_path(&self) -> PathBuf {
        self.storage_path.join("dua.db")
    }
}
