//! Mobile bindings for the content update system.
//!
//! Provides UniFFI-compatible types for configuring the store and reporting
//! the result of a remote dataset update.

use std::path::PathBuf;

use dua_core::{ContentConfig, UpdateOutcome};

/// Result of a dataset update check.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Enum)]
pub enum MobileUpdateResult {
    /// Installed dataset is already the newest
    UpToDate { current_version: u32 },
    /// A newer dataset was installed
    Applied {
        version: u32,
        dua_count: u32,
        category_count: u32,
    },
    /// Remote updates are disabled
    Disabled,
}

impl From<UpdateOutcome> for MobileUpdateResult {
    fn from(outcome: UpdateOutcome) -> Self {
        match outcome {
            UpdateOutcome::UpToDate { current_version } => {
                MobileUpdateResult::UpToDate { current_version }
            }
            UpdateOutcome::Applied {
                version,
                dua_count,
                category_count,
            } => MobileUpdateResult::Applied {
                version,
                dua_count: u32::try_from(dua_count).unwrap_or(u32::MAX),
                category_count: u32::try_from(category_count).unwrap_or(u32::MAX),
            },
            UpdateOutcome::Disabled => MobileUpdateResult::Disabled,
        }
    }
}

/// Configuration for the content store.
#[derive(Debug, Clone, uniffi::Record)]
pub struct MobileContentConfig {
    /// Whether remote updates are enabled
    pub remote_updates_enabled: bool,
    /// Dataset URL used when a check is not given one (empty: none)
    pub update_url: String,
    /// Optional proxy URL (e.g. SOCKS5)
    pub proxy_url: Option<String>,
    /// Minimum hours between opportunistic update checks
    pub check_interval_hours: u32,
    /// Whether a factory reset also clears favorites
    pub reset_clears_favorites: bool,
    /// Reject malformed records and dangling categories in updates
    pub strict_validation: bool,
    /// Storage key namespace
    pub namespace: String,
}

impl Default for MobileContentConfig {
    fn default() -> Self {
        let core = ContentConfig::default();
        Self {
            remote_updates_enabled: core.remote_updates_enabled,
            update_url: core.update_url,
            proxy_url: core.proxy_url,
            check_interval_hours: (core.check_interval.as_secs() / 3600) as u32,
            reset_clears_favorites: core.reset_clears_favorites,
            strict_validation: core.strict_validation,
            namespace: core.namespace,
        }
    }
}

impl MobileContentConfig {
    pub fn to_core_config(&self, storage_path: PathBuf) -> ContentConfig {
        let mut config = ContentConfig {
            storage_path,
            update_url: self.update_url.clone(),
            remote_updates_enabled: self.remote_updates_enabled,
            proxy_url: self.proxy_url.clone(),
            check_interval: std::time::Duration::from_secs(
                u64::from(self.check_interval_hours) * 3600,
            ),
            reset_clears_favorites: self.reset_clears_favorites,
            strict_validation: self.strict_validation,
            namespace: self.namespace.clone(),
            ..Default::default()
        };

        // Increase timeout when routed through a proxy
        if self.proxy_url.is_some() {
            config.timeout = std::time::Duration::from_secs(60);
        }

        config
    }
}
