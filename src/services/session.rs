// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Credentials and the mutable OAuth session.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::fmt;

/// Static login credentials.
#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    /// Basic credential of the launcher client, used for password and
    /// refresh grants
    pub client_launcher_token: String,
    /// Basic credential of the game client, used for the exchange-code grant
    pub fortnite_client_token: String,
}

impl Credentials {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        client_launcher_token: impl Into<String>,
        fortnite_client_token: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            client_launcher_token: client_launcher_token.into(),
            fortnite_client_token: fortnite_client_token.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("client_launcher_token", &"<redacted>")
            .field("fortnite_client_token", &"<redacted>")
            .finish()
    }
}

/// Access/refresh token pair and the access token's expiry.
///
/// Both tokens are set, or both are empty.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
}

impl SessionTokens {
    /// No tokens, expiring at `now`.
    pub fn empty(now: DateTime<Utc>) -> Self {
        Self {
            access_token: String::new(),
            refresh_token: String::new(),
            expires_at: now,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        !self.access_token.is_empty()
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

impl fmt::Debug for SessionTokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionTokens")
            .field("authenticated", &self.is_authenticated())
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Current session, shared by every query on a client.
///
/// The lock covers only the copy in or out; it is never held across a
/// network call.
pub struct SessionState {
    tokens: RwLock<SessionTokens>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            tokens: RwLock::new(SessionTokens::empty(Utc::now())),
        }
    }

    /// Copy of the current tokens.
    pub fn snapshot(&self) -> SessionTokens {
        self.tokens.read().clone()
    }

    /// Current access token, empty when logged out.
    pub fn access_token(&self) -> String {
        self.tokens.read().access_token.clone()
    }

    /// Replace all three fields at once.
    pub(crate) fn replace(&self, tokens: SessionTokens) {
        *self.tokens.write() = tokens;
    }

    /// Drop both tokens and reset the expiry to `now`.
    pub(crate) fn clear(&self, now: DateTime<Utc>) {
        self.replace(SessionTokens::empty(now));
    }
}
