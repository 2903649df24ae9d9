// SPDX-FileCopyrightText: 2026 Dua Companion Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Bundled content - compiled into the binary
//!
//! The seed document is used on first run and after a factory reset.
//! The default categories are what the UI renders when nothing has been
//! persisted at all.

use super::types::DuaCategory;

/// Seed document shipped with the app (same shape as a remote update).
pub const SEED_JSON: &str = include_str!("../../data/initial-duas.json");

/// Default categories, used when no categories are persisted.
pub fn default_categories() -> Vec<DuaCategory> {
    [
        ("daily", "Daily Life", "روزمرہ کی زندگی", "Everyday supplications", "sun", "#F59E0B"),
        ("sleep", "Sleep & Waking", "سونا اور جاگنا", "Before sleep and upon waking", "moon", "#8B5CF6"),
        ("travel", "Travel", "سفر", "Duas for journeys", "car", "#3B82F6"),
        ("food", "Food & Drink", "کھانا اور پینا", "Before and after meals", "silverware-fork-knife", "#10B981"),
        ("anxiety", "Anxiety & Distress", "پریشانی اور غم", "For peace and calm", "heart", "#EF4444"),
        ("study", "Study & Knowledge", "تعلیم اور علم", "For learning and work", "book", "#6366F1"),
        ("home", "Home & Family", "گھر اور خاندان", "Home and family life", "home", "#EC4899"),
        ("gratitude", "Gratitude & Praise", "شکر اور حمد", "Thankfulness to Allah", "emoticon-happy", "#14B8A6"),
    ]
    .into_iter()
    .zip(1..)
    .map(|((id, name, name_urdu, description, icon, color), order)| DuaCategory {
        id: id.to_string(),
        name: name.to_string(),
        name_arabic: None,
        name_urdu: Some(name_urdu.to_string()),
        description: description.to_string(),
        description_urdu: None,
        icon: icon.to_string(),
        color: color.to_string(),
        dua_count: 0,
        order,
    })
    .collect()
}
