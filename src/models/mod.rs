// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for API responses and derived reports.

pub mod account;
pub mod content;
pub mod platform;
mod serde_util;
pub mod stats;

pub use account::{Account, StatsIdentity};
pub use content::{NewsBundle, PveInfo, ServiceStatus, StoreCatalog};
pub use platform::{Language, Mode, Platform};
pub use stats::{normalize_stats, FormattedStatsReport, ModeStats, RawStatEntry, StatCounts};
