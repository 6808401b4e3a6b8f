// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Account model returned by the persona lookup endpoint.

use serde::{Deserialize, Serialize};

use crate::models::serde_util::null_as_default;

/// Display name reported when stats are fetched by account ID only.
pub const UNKNOWN_DISPLAY_NAME: &str = "No Username";

/// Epic account identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Epic account ID
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    /// Public display name
    #[serde(default, rename = "displayName", deserialize_with = "null_as_default")]
    pub display_name: String,
}

impl Account {
    /// Account known only by ID.
    pub fn from_id(account_id: impl Into<String>) -> Self {
        Self {
            id: account_id.into(),
            display_name: UNKNOWN_DISPLAY_NAME.to_string(),
        }
    }

    /// The lookup endpoint answers with an empty object for unknown names.
    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
    }
}

/// Which account to fetch stats for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsIdentity {
    /// Resolve the display name through a lookup first.
    Username(String),
    /// Skip the lookup.
    AccountId(String),
}
