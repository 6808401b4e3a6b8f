// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fortnite API client.
//!
//! Handles:
//! - Login through the Epic OAuth exchange
//! - Token refresh when expired (single-flight)
//! - Account lookup and Battle Royale stats
//! - News, store, PVE info and service status
//! - Session termination

use crate::config::Config;
use crate::error::ApiError;
use crate::models::{
    normalize_stats, Account, FormattedStatsReport, Language, NewsBundle, Platform, PveInfo,
    RawStatEntry, ServiceStatus, StatsIdentity, StoreCatalog,
};
use crate::models::content::ServiceStatusEntry;
use crate::services::auth::AuthEngine;
use crate::services::endpoints::Endpoints;
use crate::services::session::{Credentials, SessionState, SessionTokens};
use crate::services::transport::{HttpTransport, ReqwestTransport, TransportRequest};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

const ACCEPT_LANGUAGE: &str = "Accept-Language";
const EPIC_LANGUAGE: &str = "X-EpicGames-Language";

/// Client for the Fortnite web API.
///
/// Cheap to clone; clones share one session.
#[derive(Clone)]
pub struct FortniteClient {
    credentials: Credentials,
    transport: Arc<dyn HttpTransport>,
    endpoints: Endpoints,
    auth: AuthEngine,
    session: Arc<SessionState>,
    /// Serializes login, refresh and termination so only one exchange is in flight.
    refresh_lock: Arc<Mutex<()>>,
    auto_refresh: bool,
}

impl FortniteClient {
    /// Create a client against the production endpoints.
    pub fn new(credentials: Credentials, transport: Arc<dyn HttpTransport>) -> Self {
        let endpoints = Endpoints::production();
        Self {
            credentials,
            auth: AuthEngine::new(transport.clone(), endpoints.clone()),
            transport,
            endpoints,
            session: Arc::new(SessionState::new()),
            refresh_lock: Arc::new(Mutex::new(())),
            auto_refresh: true,
        }
    }

    /// Create a client with a reqwest transport configured from `config`.
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        let transport =
            ReqwestTransport::new(Duration::from_secs(config.http_timeout_secs))?;
        let client = Self::new(config.credentials(), Arc::new(transport))
            .with_auto_refresh(config.auto_refresh);

        Ok(match &config.base_url {
            Some(base_url) => client.with_endpoints(Endpoints::with_base_url(base_url)),
            None => client,
        })
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.auth = AuthEngine::new(self.transport.clone(), endpoints.clone());
        self.endpoints = endpoints;
        self
    }

    /// Whether queries call [`Self::check_and_refresh`] first (default on).
    pub fn with_auto_refresh(mut self, enabled: bool) -> Self {
        self.auto_refresh = enabled;
        self
    }

    /// Copy of the current session tokens.
    pub fn session(&self) -> SessionTokens {
        self.session.snapshot()
    }

    // ─── Session Management ──────────────────────────────────────────────────

    /// Log in and store the resulting session.
    ///
    /// Holds the refresh lock for the whole exchange, so an in-flight
    /// refresh or termination finishes first and cannot overwrite the
    /// new session.
    pub async fn login(&self) -> Result<(), ApiError> {
        let _guard = self.refresh_lock.lock().await;

        let tokens = self.auth.authenticate(&self.credentials).await?;
        self.session.replace(tokens);
        Ok(())
    }

    /// Refresh the access token if it has expired.
    ///
    /// No-op when logged out or when the token is still valid. Concurrent
    /// callers that all observe expiry wait on one refresh and then see
    /// its result.
    pub async fn check_and_refresh(&self) -> Result<(), ApiError> {
        if !needs_refresh(&self.session.snapshot()) {
            return Ok(());
        }

        let _guard = self.refresh_lock.lock().await;

        // Another task may have refreshed (or logged out) while we waited.
        let current = self.session.snapshot();
        if !needs_refresh(&current) {
            return Ok(());
        }

        tracing::info!(expired_at = %current.expires_at, "Access token expired, refreshing");

        let tokens = self
            .auth
            .refresh(&self.credentials, &current.refresh_token)
            .await?;
        self.session.replace(tokens);
        Ok(())
    }

    /// Invalidate the session server-side (best effort) and clear it locally.
    pub async fn terminate_session(&self) {
        let _guard = self.refresh_lock.lock().await;

        let access_token = self.session.access_token();
        if access_token.is_empty() {
            tracing::debug!("No active session to kill");
        } else if let Err(e) = self.auth.kill_session(&access_token).await {
            tracing::warn!(error = %e, "Failed to kill session, clearing local tokens anyway");
        }

        self.session.clear(Utc::now());
        tracing::info!("Fortnite session terminated");
    }

    /// Check with the server whether the current access token is accepted.
    pub async fn verify_session(&self) -> Result<bool, ApiError> {
        let access_token = self.bearer_token().await?;
        if access_token.is_empty() {
            return Ok(false);
        }
        self.auth.verify(&access_token).await
    }

    // ─── Accounts & Stats ────────────────────────────────────────────────────

    /// Look up an account by display name.
    pub async fn lookup(&self, username: &str) -> Result<Account, ApiError> {
        let request = TransportRequest::get(self.endpoints.account_lookup(username))
            .bearer_auth(&self.bearer_token().await?);
        let response = self.transport.send(request).await?;

        if response.status == 404 {
            return Err(ApiError::NotFound(format!("Account {}", username)));
        }

        let account: Account = response.json()?;
        if account.is_empty() {
            return Err(ApiError::NotFound(format!("Account {}", username)));
        }

        tracing::debug!(account_id = %account.id, username, "Account lookup succeeded");
        Ok(account)
    }

    /// Whether the player exists and has stats recorded on `platform`.
    pub async fn check_player_exists(
        &self,
        username: &str,
        platform: Platform,
    ) -> Result<bool, ApiError> {
        let account = match self.lookup(username).await {
            Ok(account) => account,
            Err(ApiError::NotFound(_)) => return Ok(false),
            Err(e) => return Err(e),
        };

        let stats = self.get_raw_stats(&account.id).await?;
        let marker = format!("_{}_", platform);
        Ok(stats.iter().any(|stat| stat.name.contains(&marker)))
    }

    /// Raw all-time BR stat entries for an account.
    pub async fn get_raw_stats(&self, account_id: &str) -> Result<Vec<RawStatEntry>, ApiError> {
        let url = self.endpoints.br_stats(account_id);
        self.get_json(TransportRequest::get(url)).await
    }

    /// Formatted BR stats for one platform.
    pub async fn get_stats(
        &self,
        identity: StatsIdentity,
        platform: Platform,
    ) -> Result<FormattedStatsReport, ApiError> {
        let account = match identity {
            StatsIdentity::Username(username) => self.lookup(&username).await?,
            StatsIdentity::AccountId(account_id) => Account::from_id(account_id),
        };

        let stats = self.get_raw_stats(&account.id).await?;
        tracing::debug!(
            account_id = %account.id,
            %platform,
            entries = stats.len(),
            "Normalizing BR stats"
        );

        Ok(normalize_stats(&stats, &account, platform))
    }

    // ─── Content ─────────────────────────────────────────────────────────────

    /// News for every game mode and the login screen.
    pub async fn get_news(&self, language: Language) -> Result<NewsBundle, ApiError> {
        let request = TransportRequest::get(self.endpoints.news())
            .header(ACCEPT_LANGUAGE, language.header_value());
        self.get_json(request).await
    }

    /// Whether Fortnite is up, and why not if it is down.
    pub async fn check_service_status(&self) -> Result<ServiceStatus, ApiError> {
        let entries: Vec<ServiceStatusEntry> = self
            .get_json(TransportRequest::get(self.endpoints.service_status()))
            .await?;
        Ok(ServiceStatus::from_entries(&entries))
    }

    /// Save the World theaters, missions and mission alerts.
    pub async fn get_pve_info(&self, language: Language) -> Result<PveInfo, ApiError> {
        let request = TransportRequest::get(self.endpoints.pve_info())
            .header(EPIC_LANGUAGE, language.header_value());
        self.get_json(request).await
    }

    /// Items currently in the item shop.
    pub async fn get_store(&self, language: Language) -> Result<StoreCatalog, ApiError> {
        let request = TransportRequest::get(self.endpoints.store())
            .header(EPIC_LANGUAGE, language.header_value());
        self.get_json(request).await
    }

    // ─── Helpers ─────────────────────────────────────────────────────────────

    /// Access token to present, refreshing first when enabled.
    async fn bearer_token(&self) -> Result<String, ApiError> {
        if self.auto_refresh {
            self.check_and_refresh().await?;
        }
        Ok(self.session.access_token())
    }

    /// Authenticated request with a JSON response.
    async fn get_json<T: for<'de> Deserialize<'de>>(
        &self,
        request: TransportRequest,
    ) -> Result<T, ApiError> {
        let request = request.bearer_auth(&self.bearer_token().await?);
        self.transport.send(request).await?.json()
    }
}

fn needs_refresh(tokens: &SessionTokens) -> bool {
    tokens.is_authenticated() && tokens.is_expired_at(Utc::now())
}
