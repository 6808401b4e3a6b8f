// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Battle Royale stats: raw entries and the formatted report.
//!
//! The stats endpoint returns a flat list of `{name, value}` pairs where
//! the name encodes metric, platform and group size, e.g.
//! `br_placetop1_pc_m0_p2`. [`normalize_stats`] sorts those into a
//! per-mode report and derives ratios from the raw counts.

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::Add;

use crate::models::serde_util::null_as_default;
use crate::models::{Account, Mode, Platform};

/// One entry of the raw stats response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawStatEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub window: String,
    #[serde(default, rename = "ownerType", deserialize_with = "null_as_default")]
    pub owner_type: i64,
}

/// Metric encoded in a raw stat name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Wins,
    Top3,
    Top5,
    Top6,
    Top10,
    Top12,
    Top25,
    Matches,
    Kills,
    Score,
    MinutesPlayed,
}

/// Metric markers in match precedence order.
const METRIC_MARKERS: [(&str, Metric); 11] = [
    ("placetop1", Metric::Wins),
    ("placetop3", Metric::Top3),
    ("placetop5", Metric::Top5),
    ("placetop6", Metric::Top6),
    ("placetop10", Metric::Top10),
    ("placetop12", Metric::Top12),
    ("placetop25", Metric::Top25),
    ("matchesplayed", Metric::Matches),
    ("kills", Metric::Kills),
    ("score", Metric::Score),
    ("minutesplayed", Metric::MinutesPlayed),
];

/// Maps raw stat names to `(mode, metric)` cells for one platform.
#[derive(Debug, Clone)]
pub struct StatClassifier {
    patterns: Vec<(String, Metric)>,
}

impl StatClassifier {
    pub fn new(platform: Platform) -> Self {
        let patterns = METRIC_MARKERS
            .iter()
            .map(|(marker, metric)| (format!("{}_{}", marker, platform.as_str()), *metric))
            .collect();
        Self { patterns }
    }

    /// Classify a stat name. `None` when no metric marker for this
    /// platform appears in it (other platforms, unknown metrics).
    pub fn classify(&self, stat_name: &str) -> Option<(Mode, Metric)> {
        let metric = self
            .patterns
            .iter()
            .find(|(pattern, _)| stat_name.contains(pattern.as_str()))
            .map(|(_, metric)| *metric)?;

        Some((Mode::classify(stat_name), metric))
    }
}

/// Additive counters for one mode (or the lifetime total).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatCounts {
    pub wins: f64,
    pub top3: f64,
    pub top5: f64,
    pub top6: f64,
    pub top10: f64,
    pub top12: f64,
    pub top25: f64,
    pub matches: f64,
    pub kills: f64,
    /// Minutes played
    pub time_played: f64,
    pub score: f64,
}

impl StatCounts {
    fn set(&mut self, metric: Metric, value: f64) {
        let cell = match metric {
            Metric::Wins => &mut self.wins,
            Metric::Top3 => &mut self.top3,
            Metric::Top5 => &mut self.top5,
            Metric::Top6 => &mut self.top6,
            Metric::Top10 => &mut self.top10,
            Metric::Top12 => &mut self.top12,
            Metric::Top25 => &mut self.top25,
            Metric::Matches => &mut self.matches,
            Metric::Kills => &mut self.kills,
            Metric::Score => &mut self.score,
            Metric::MinutesPlayed => &mut self.time_played,
        };
        *cell = value;
    }
}

impl Add for StatCounts {
    type Output = StatCounts;

    fn add(self, other: StatCounts) -> StatCounts {
        StatCounts {
            wins: self.wins + other.wins,
            top3: self.top3 + other.top3,
            top5: self.top5 + other.top5,
            top6: self.top6 + other.top6,
            top10: self.top10 + other.top10,
            top12: self.top12 + other.top12,
            top25: self.top25 + other.top25,
            matches: self.matches + other.matches,
            kills: self.kills + other.kills,
            time_played: self.time_played + other.time_played,
            score: self.score + other.score,
        }
    }
}

impl Sum for StatCounts {
    fn sum<I: Iterator<Item = StatCounts>>(iter: I) -> StatCounts {
        iter.fold(StatCounts::default(), Add::add)
    }
}

/// Counters plus ratios derived from them.
///
/// Only [`ModeStats::from_counts`] computes the derived fields, so they
/// always agree with the counters they sit next to. Ratios over a zero
/// denominator are NaN or infinite, as with any f64 division.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeStats {
    #[serde(flatten)]
    pub counts: StatCounts,
    pub kd_ratio: f64,
    pub win_percentage: f64,
    pub kills_per_match: f64,
    pub kills_per_min: f64,
    pub time_played_formatted: String,
}

impl ModeStats {
    pub fn from_counts(counts: StatCounts) -> Self {
        Self {
            kd_ratio: round2(counts.kills / (counts.matches - counts.wins)),
            win_percentage: round2(counts.wins / counts.matches),
            kills_per_match: round2(counts.kills / counts.matches),
            kills_per_min: round2(counts.kills / counts.time_played),
            time_played_formatted: format_time(counts.time_played),
            counts,
        }
    }
}

/// Zero counters with every ratio left at zero.
impl Default for ModeStats {
    fn default() -> Self {
        Self {
            counts: StatCounts::default(),
            kd_ratio: 0.0,
            win_percentage: 0.0,
            kills_per_match: 0.0,
            kills_per_min: 0.0,
            time_played_formatted: format_time(0.0),
        }
    }
}

/// Per-mode blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModeGroup {
    pub solo: ModeStats,
    pub duo: ModeStats,
    pub squad: ModeStats,
}

impl ModeGroup {
    pub fn get(&self, mode: Mode) -> &ModeStats {
        match mode {
            Mode::Solo => &self.solo,
            Mode::Duo => &self.duo,
            Mode::Squad => &self.squad,
        }
    }
}

/// Which account and platform a report describes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInfo {
    pub account_id: String,
    pub username: String,
    pub platform: String,
}

/// Structured BR stats report.
///
/// `Default` is the zero-value report (empty info, zeroed blocks).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormattedStatsReport {
    pub group: ModeGroup,
    pub info: AccountInfo,
    pub lifetime_stats: ModeStats,
}

/// Build a report from raw stats for one account and platform.
///
/// Entries for other platforms, and entries naming no known metric, are
/// ignored. If two entries land in the same cell the later one wins.
pub fn normalize_stats(
    stats: &[RawStatEntry],
    account: &Account,
    platform: Platform,
) -> FormattedStatsReport {
    let classifier = StatClassifier::new(platform);

    let mut solo = StatCounts::default();
    let mut duo = StatCounts::default();
    let mut squad = StatCounts::default();

    for stat in stats {
        let Some((mode, metric)) = classifier.classify(&stat.name) else {
            continue;
        };

        let counts = match mode {
            Mode::Solo => &mut solo,
            Mode::Duo => &mut duo,
            Mode::Squad => &mut squad,
        };
        counts.set(metric, stat.value);
    }

    let lifetime: StatCounts = [solo, duo, squad].into_iter().sum();

    FormattedStatsReport {
        group: ModeGroup {
            solo: ModeStats::from_counts(solo),
            duo: ModeStats::from_counts(duo),
            squad: ModeStats::from_counts(squad),
        },
        info: AccountInfo {
            account_id: account.id.clone(),
            username: account.display_name.clone(),
            platform: platform.to_string(),
        },
        lifetime_stats: ModeStats::from_counts(lifetime),
    }
}

/// Round half away from zero to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Render minutes as `"Xd Yh Zm"`.
///
/// Zero days and hours are omitted; minutes are always shown.
pub fn format_time(minutes: f64) -> String {
    let days = (minutes / 24.0 / 60.0).floor();
    let hours = ((minutes / 60.0) % 24.0).floor();
    let mins = minutes % 60.0;

    let mut result = String::new();
    if days > 0.0 {
        result.push_str(&format!("{}d ", days));
    }
    if hours > 0.0 {
        result.push_str(&format!("{}h ", hours));
    }
    if mins > 0.0 {
        result.push_str(&format!("{}m", mins));
    } else {
        result.push_str("0m");
    }

    result
}
