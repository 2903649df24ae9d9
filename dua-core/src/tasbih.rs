// SPDX-FileCopyrightText: 2026 Dua Companion Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tasbih (tally counter)
//!
//! A manual counter with a target, a selected preset and a bounded history
//! of finished sessions. Persisted by the content store as one JSON value.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::storage::unix_now;

/// Maximum number of finished sessions kept in history.
pub const MAX_HISTORY: usize = 30;

/// Target used by a fresh counter.
pub const DEFAULT_TARGET: u32 = 33;

/// A built-in dhikr preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TasbihPreset {
    pub id: &'static str,
    pub name: &'static str,
    pub name_urdu: &'static str,
    pub count: u32,
}

/// Built-in presets. The last one is a free-form counter.
pub const PRESETS: [TasbihPreset; 5] = [
    TasbihPreset {
        id: "subhanallah",
        name: "SubhanAllah",
        name_urdu: "سبحان اللہ",
        count: 33,
    },
    TasbihPreset {
        id: "alhamdulillah",
        name: "Alhamdulillah",
        name_urdu: "الحمد للہ",
        count: 33,
    },
    TasbihPreset {
        id: "allahuakbar",
        name: "Allahu Akbar",
        name_urdu: "اللہ اکبر",
        count: 33,
    },
    TasbihPreset {
        id: "astaghfirullah",
        name: "Astaghfirullah",
        name_urdu: "استغفر اللہ",
        count: 100,
    },
    TasbihPreset {
        id: "custom",
        name: "Custom",
        name_urdu: "اپنی مرضی",
        count: 99,
    },
];

/// Looks up a built-in preset by id.
pub fn preset(id: &str) -> Option<&'static TasbihPreset> {
    PRESETS.iter().find(|p| p.id == id)
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TasbihError {
    #[error("Target must be greater than zero")]
    ZeroTarget,

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),
}

/// A finished counting session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TasbihSession {
    /// Seconds since the UNIX epoch.
    pub completed_at: u64,
    pub count: u32,
    pub target: u32,
}

/// Result of a single increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TasbihProgress {
    pub count: u32,
    /// True exactly when this increment landed on the target.
    pub target_reached: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TasbihCounter {
    pub count: u32,
    pub target: u32,
    pub preset_id: String,
    /// Newest first.
    pub history: Vec<TasbihSession>,
}

impl Default for TasbihCounter {
    fn default() -> Self {
        Self {
            count: 0,
            target: DEFAULT_TARGET,
            preset_id: PRESETS[0].id.to_string(),
            history: Vec::new(),
        }
    }
}

impl TasbihCounter {
    pub fn increment(&mut self) -> TasbihProgress {
        self.count = self.count.saturating_add(1);
        TasbihProgress {
            count: self.count,
            target_reached: self.count == self.target,
        }
    }

    /// Ends the current session. A non-zero count is recorded in history.
    pub fn reset(&mut self) {
        self.reset_at(unix_now());
    }

    fn reset_at(&mut self, completed_at: u64) {
        if self.count > 0 {
            self.history.insert(
                0,
                TasbihSession {
                    completed_at,
                    count: self.count,
                    target: self.target,
                },
            );
            self.history.truncate(MAX_HISTORY);
        }
        self.count = 0;
    }

    pub fn set_target(&mut self, target: u32) -> Result<(), TasbihError> {
        if target == 0 {
            return Err(TasbihError::ZeroTarget);
        }
        self.target = target;
        Ok(())
    }

    /// Switches to a built-in preset, adopting its target and zeroing the count.
    ///
    /// The abandoned count is not recorded in history.
    pub fn select_preset(&mut self, id: &str) -> Result<(), TasbihError> {
        let preset = preset(id).ok_or_else(|| TasbihError::UnknownPreset(id.to_string()))?;
        self.preset_id = preset.id.to_string();
        self.target = preset.count;
        self.count = 0;
        Ok(())
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// The currently selected preset, if it is still a known one.
    pub fn current_preset(&self) -> Option<&'static TasbihPreset> {
        preset(&self.preset_id)
    }
}
