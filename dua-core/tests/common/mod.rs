// SPDX-FileCopyrightText: 2026 Dua Companion Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Common Test Utilities
//!
//! Shared fixtures, a one-shot HTTP stub and proptest strategies.

#![allow(dead_code)]

pub mod fixtures;
pub mod http_stub;
