// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fixed enumerations used by queries: platform, language and play mode.

use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Platform a player's stats are recorded on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Pc,
    Ps4,
    Xb1,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Pc, Platform::Ps4, Platform::Xb1];

    /// Marker used inside raw stat names (`kills_pc_m0_p2`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Pc => "pc",
            Platform::Ps4 => "ps4",
            Platform::Xb1 => "xb1",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pc" => Ok(Platform::Pc),
            "ps4" => Ok(Platform::Ps4),
            "xb1" => Ok(Platform::Xb1),
            other => Err(ApiError::InvalidPlatform(other.to_string())),
        }
    }
}

/// Content language requested from localized endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
}

impl Language {
    /// Header value sent as `Accept-Language` / `X-EpicGames-Language`.
    pub fn header_value(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr-FR",
        }
    }
}

impl FromStr for Language {
    type Err = std::convert::Infallible;

    /// Unknown languages map to English.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "fr" => Language::Fr,
            _ => Language::En,
        })
    }
}

/// Battle Royale group size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Solo,
    Duo,
    Squad,
}

impl Mode {
    /// Classify a raw stat name by its mode marker.
    ///
    /// `_p2` is solo, then `_p10` is duo; anything else falls back to squad.
    pub fn classify(stat_name: &str) -> Mode {
        if stat_name.contains("_p2") {
            Mode::Solo
        } else if stat_name.contains("_p10") {
            Mode::Duo
        } else {
            Mode::Squad
        }
    }
}
