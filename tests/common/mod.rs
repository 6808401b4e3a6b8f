// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use async_trait::async_trait;
use fortnite_api::config::Config;
use fortnite_api::services::{
    Endpoints, FortniteClient, HttpTransport, TransportRequest, TransportResponse,
};
use fortnite_api::ApiError;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

/// Base URL used by offline clients; nothing listens here.
#[allow(dead_code)]
pub const TEST_BASE_URL: &str = "http://fortnite.test";

/// Expiry far in the future.
#[allow(dead_code)]
pub const FUTURE_EXPIRY: &str = "2099-01-01T00:00:00.000Z";

/// Expiry already in the past.
#[allow(dead_code)]
pub const PAST_EXPIRY: &str = "2001-01-01T00:00:00.000Z";

/// Transport that answers from a queue and records every request.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<(Option<Duration>, Result<TransportResponse, ApiError>)>>,
    requests: Mutex<Vec<TransportRequest>>,
}

#[allow(dead_code)]
impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_json(&self, status: u16, body: serde_json::Value) {
        self.responses
            .lock()
            .push_back((None, Ok(TransportResponse::new(status, body.to_string()))));
    }

    /// Queue a JSON response that is only delivered after `delay`.
    pub fn push_json_after(&self, delay: Duration, status: u16, body: serde_json::Value) {
        self.responses
            .lock()
            .push_back((Some(delay), Ok(TransportResponse::new(status, body.to_string()))));
    }

    pub fn push_status(&self, status: u16, body: &str) {
        self.responses
            .lock()
            .push_back((None, Ok(TransportResponse::new(status, body.to_string()))));
    }

    pub fn push_error(&self, error: ApiError) {
        self.responses.lock().push_back((None, Err(error)));
    }

    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().len()
    }

    pub fn last_request(&self) -> TransportRequest {
        self.requests
            .lock()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, ApiError> {
        self.requests.lock().push(request);
        let next = self.responses.lock().pop_front();
        match next {
            Some((delay, response)) => {
                if let Some(delay) = delay {
                    tokio::time::sleep(delay).await;
                }
                response
            }
            None => Err(ApiError::Transport("no scripted response".to_string())),
        }
    }
}

/// Queue the three successful login legs.
#[allow(dead_code)]
pub fn script_login(transport: &ScriptedTransport, expires_at: &str) {
    transport.push_json(200, serde_json::json!({ "access_token": "bootstrap-token" }));
    transport.push_json(200, serde_json::json!({ "code": "exchange-code-123" }));
    transport.push_json(
        200,
        serde_json::json!({
            "access_token": "session-access",
            "refresh_token": "session-refresh",
            "expires_at": expires_at,
        }),
    );
}

/// Queue a successful refresh grant.
#[allow(dead_code)]
pub fn script_refresh(transport: &ScriptedTransport, access_token: &str, expires_at: &str) {
    transport.push_json(
        200,
        serde_json::json!({
            "access_token": access_token,
            "refresh_token": format!("{}-refresh", access_token),
            "expires_at": expires_at,
        }),
    );
}

/// Offline client wired to a scripted transport.
#[allow(dead_code)]
pub fn test_client(transport: Arc<ScriptedTransport>) -> FortniteClient {
    let config = Config::test_default();
    FortniteClient::new(config.credentials(), transport)
        .with_endpoints(Endpoints::with_base_url(TEST_BASE_URL))
}

/// Client that has already logged in with the given expiry.
#[allow(dead_code)]
pub async fn logged_in_client(
    transport: Arc<ScriptedTransport>,
    expires_at: &str,
) -> FortniteClient {
    script_login(&transport, expires_at);
    let client = test_client(transport);
    client.login().await.expect("scripted login should succeed");
    client
}
