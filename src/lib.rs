// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Fortnite API client
//!
//! Logs in through the Epic OAuth exchange, keeps the session fresh, and
//! wraps the read-only Fortnite endpoints: account lookup, Battle Royale
//! stats (normalized into a per-mode report), news, store, PVE info and
//! service status.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;

pub use error::{ApiError, Result};
pub use models::{FormattedStatsReport, Language, Platform, StatsIdentity};
pub use services::{Credentials, FortniteClient};
