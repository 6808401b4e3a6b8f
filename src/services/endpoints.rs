// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Endpoint URLs for the Epic account, persona, content, status and
//! Fortnite game services.

/// Base URLs of the services the client talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub account_service: String,
    pub persona_service: String,
    pub fortnite_service: String,
    pub content_service: String,
    pub lightswitch_service: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::production()
    }
}

impl Endpoints {
    pub fn production() -> Self {
        Self {
            account_service: "https://account-public-service-prod03.ol.epicgames.com".to_string(),
            persona_service: "https://persona-public-service-prod06.ol.epicgames.com".to_string(),
            fortnite_service: "https://fortnite-public-service-prod11.ol.epicgames.com".to_string(),
            content_service: "https://fortnitecontent-website-prod07.ol.epicgames.com".to_string(),
            lightswitch_service: "https://lightswitch-public-service-prod06.ol.epicgames.com"
                .to_string(),
        }
    }

    /// Route every service to one host (local mock servers).
    pub fn with_base_url(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/').to_string();
        Self {
            account_service: base.clone(),
            persona_service: base.clone(),
            fortnite_service: base.clone(),
            content_service: base.clone(),
            lightswitch_service: base,
        }
    }

    // ─── OAuth ───────────────────────────────────────────────────────────────

    pub fn oauth_token(&self) -> String {
        format!("{}/account/api/oauth/token", self.account_service)
    }

    pub fn oauth_exchange(&self) -> String {
        format!("{}/account/api/oauth/exchange", self.account_service)
    }

    pub fn oauth_verify(&self) -> String {
        format!(
            "{}/account/api/oauth/verify?includePerms=true",
            self.account_service
        )
    }

    pub fn kill_session(&self, access_token: &str) -> String {
        format!(
            "{}/account/api/oauth/sessions/kill/{}",
            self.account_service,
            urlencoding::encode(access_token)
        )
    }

    // ─── Queries ─────────────────────────────────────────────────────────────

    pub fn account_lookup(&self, username: &str) -> String {
        format!(
            "{}/persona/api/public/account/lookup?q={}",
            self.persona_service,
            urlencoding::encode(username)
        )
    }

    pub fn br_stats(&self, account_id: &str) -> String {
        format!(
            "{}/fortnite/api/stats/accountId/{}/bulk/window/alltime",
            self.fortnite_service,
            urlencoding::encode(account_id)
        )
    }

    pub fn service_status(&self) -> String {
        format!(
            "{}/lightswitch/api/service/bulk/status?serviceId=Fortnite",
            self.lightswitch_service
        )
    }

    pub fn news(&self) -> String {
        format!(
            "{}/content/api/pages/fortnite-game",
            self.content_service
        )
    }

    pub fn pve_info(&self) -> String {
        format!("{}/fortnite/api/game/v2/world/info", self.fortnite_service)
    }

    pub fn store(&self) -> String {
        format!(
            "{}/fortnite/api/storefront/v2/catalog",
            self.fortnite_service
        )
    }
}
