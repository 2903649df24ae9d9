// SPDX-FileCopyrightText: 2026 Dua Companion Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Logical keys of the persisted key-value state.
//!
//! Keys are stored under the configured namespace, e.g. `dua:@favorites`.

pub const FAVORITES: &str = "@favorites";
pub const RECENT_SEARCHES: &str = "@recent_searches";
pub const PREFERENCES: &str = "@preferences";
pub const LOCAL_DUAS: &str = "@local_duas";
pub const LOCAL_CATEGORIES: &str = "@local_categories";
pub const DATA_INITIALIZED: &str = "@data_initialized";
pub const DATA_VERSION: &str = "@data_version";
pub const LAST_UPDATE_CHECK: &str = "@last_update_check";
pub const TASBIH: &str = "@tasbih";
pub const NAMES: &str = "@names";
pub const NAME_FAVORITES: &str = "@name_favorites";

/// Keys wiped by a factory reset. Favorites are handled separately.
pub const CONTENT_KEYS: [&str; 5] = [
    DATA_INITIALIZED,
    LOCAL_DUAS,
    LOCAL_CATEGORIES,
    DATA_VERSION,
    LAST_UPDATE_CHECK,
];
