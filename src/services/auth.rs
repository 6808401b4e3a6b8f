// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Epic OAuth token exchange.
//!
//! Login is a fixed three-leg sequence:
//! 1. password grant (launcher credential) -> short-lived access token
//! 2. exchange-code request (bearer of leg 1) -> one-time code
//! 3. exchange-code grant (game client credential) -> session tokens
//!
//! Refresh is a single refresh-token grant with the launcher credential.

use crate::error::ApiError;
use crate::services::endpoints::Endpoints;
use crate::services::session::{Credentials, SessionTokens};
use crate::services::transport::{HttpTransport, TransportRequest};
use crate::time_utils::{format_utc_rfc3339, parse_utc_rfc3339};
use serde::Deserialize;
use std::sync::Arc;

/// Steps of the login sequence, for error messages and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthLeg {
    PasswordGrant,
    ExchangeCode,
    ExchangeGrant,
    Refresh,
}

impl AuthLeg {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthLeg::PasswordGrant => "password grant",
            AuthLeg::ExchangeCode => "exchange code request",
            AuthLeg::ExchangeGrant => "exchange code grant",
            AuthLeg::Refresh => "refresh token grant",
        }
    }
}

/// Runs the OAuth exchanges. Holds no session state itself.
#[derive(Clone)]
pub struct AuthEngine {
    transport: Arc<dyn HttpTransport>,
    endpoints: Endpoints,
}

impl AuthEngine {
    pub fn new(transport: Arc<dyn HttpTransport>, endpoints: Endpoints) -> Self {
        Self {
            transport,
            endpoints,
        }
    }

    /// Perform the full login and return the final tokens.
    ///
    /// Any failing leg aborts the sequence; nothing is returned for the
    /// caller to store unless all three legs succeed.
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<SessionTokens, ApiError> {
        let leg = AuthLeg::PasswordGrant;
        let request = TransportRequest::post(self.endpoints.oauth_token())
            .basic_auth(&credentials.client_launcher_token)
            .form(&[
                ("grant_type", "password"),
                ("username", credentials.email.as_str()),
                ("password", credentials.password.as_str()),
                ("includePerms", "true"),
            ]);
        let grant: AccessTokenResponse = self.send_leg(leg, request).await?;
        let bootstrap_token = require_non_empty(leg, "access_token", grant.access_token)?;

        let leg = AuthLeg::ExchangeCode;
        let request =
            TransportRequest::get(self.endpoints.oauth_exchange()).bearer_auth(&bootstrap_token);
        let exchange: ExchangeCodeResponse = self.send_leg(leg, request).await?;
        let code = require_non_empty(leg, "code", exchange.code)?;

        let leg = AuthLeg::ExchangeGrant;
        let request = TransportRequest::post(self.endpoints.oauth_token())
            .basic_auth(&credentials.fortnite_client_token)
            .form(&[
                ("grant_type", "exchange_code"),
                ("exchange_code", code.as_str()),
                ("includePerms", "true"),
                ("token_type", "eg1"),
            ]);
        let tokens: TokenResponse = self.send_leg(leg, request).await?;
        let tokens = tokens.into_session(leg)?;

        tracing::info!(expires_at = %format_utc_rfc3339(tokens.expires_at), "Fortnite login completed");
        Ok(tokens)
    }

    /// Trade a refresh token for a new token set.
    pub async fn refresh(
        &self,
        credentials: &Credentials,
        refresh_token: &str,
    ) -> Result<SessionTokens, ApiError> {
        let leg = AuthLeg::Refresh;
        let request = TransportRequest::post(self.endpoints.oauth_token())
            .basic_auth(&credentials.client_launcher_token)
            .form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", refresh_token),
                ("includePerms", "true"),
            ]);
        let tokens: TokenResponse = self.send_leg(leg, request).await?;
        let tokens = tokens.into_session(leg)?;

        tracing::info!(expires_at = %format_utc_rfc3339(tokens.expires_at), "Access token refreshed");
        Ok(tokens)
    }

    /// Ask the server to invalidate an access token.
    pub async fn kill_session(&self, access_token: &str) -> Result<(), ApiError> {
        let request =
            TransportRequest::delete(self.endpoints.kill_session(access_token)).bearer_auth(access_token);
        self.transport.send(request).await?.error_for_status()?;
        Ok(())
    }

    /// Check an access token against the verify endpoint.
    ///
    /// Returns `Ok(false)` when the server rejects the token.
    pub async fn verify(&self, access_token: &str) -> Result<bool, ApiError> {
        let request = TransportRequest::get(self.endpoints.oauth_verify()).bearer_auth(access_token);
        match self.transport.send(request).await?.error_for_status() {
            Ok(_) => Ok(true),
            Err(e) if e.is_token_error() => Ok(false),
            Err(e) => Err(e),
        }
    }

    async fn send_leg<T: for<'de> Deserialize<'de>>(
        &self,
        leg: AuthLeg,
        request: TransportRequest,
    ) -> Result<T, ApiError> {
        let result = match self.transport.send(request).await {
            Ok(response) => response.json(),
            Err(e) => Err(e),
        };

        result.map_err(|e| {
            tracing::error!(leg = leg.as_str(), error = %e, "Fortnite auth leg failed");
            ApiError::Auth(format!("{} failed: {}", leg.as_str(), e))
        })
    }
}

fn require_non_empty(leg: AuthLeg, field: &str, value: String) -> Result<String, ApiError> {
    if value.is_empty() {
        tracing::error!(leg = leg.as_str(), field, "Fortnite auth leg returned empty value");
        return Err(ApiError::Auth(format!(
            "{} returned an empty {}",
            leg.as_str(),
            field
        )));
    }
    Ok(value)
}

/// Password grant response; only the bootstrap token matters.
#[derive(Debug, Deserialize)]
struct AccessTokenResponse {
    #[serde(default)]
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct ExchangeCodeResponse {
    #[serde(default)]
    code: String,
}

/// Final token set from the exchange-code or refresh grant.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: String,
    #[serde(default)]
    refresh_token: String,
    #[serde(default)]
    expires_at: String,
}

impl TokenResponse {
    fn into_session(self, leg: AuthLeg) -> Result<SessionTokens, ApiError> {
        let access_token = require_non_empty(leg, "access_token", self.access_token)?;
        let refresh_token = require_non_empty(leg, "refresh_token", self.refresh_token)?;
        let expires_at = parse_utc_rfc3339(&self.expires_at).ok_or_else(|| {
            ApiError::Auth(format!(
                "{} returned an invalid expires_at: {:?}",
                leg.as_str(),
                self.expires_at
            ))
        })?;

        Ok(SessionTokens {
            access_token,
            refresh_token,
            expires_at,
        })
    }
}
