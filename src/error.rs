// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client error types.

/// Error type returned by every fallible client operation.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Rate limited by the Fortnite API")]
    RateLimited,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid platform: {0} (expected pc, ps4 or xb1)")]
    InvalidPlatform(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// Message used for 401 responses so callers can detect stale tokens.
    pub const TOKEN_ERROR: &'static str = "Access token rejected (401)";

    /// Whether this error indicates the bearer token was rejected or could
    /// not be obtained.
    pub fn is_token_error(&self) -> bool {
        match self {
            ApiError::Auth(_) => true,
            ApiError::Transport(msg) => {
                msg == Self::TOKEN_ERROR
                    || msg.starts_with("HTTP 401")
                    || msg.to_ascii_lowercase().contains("invalid_token")
            }
            _ => false,
        }
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ApiError>;
