// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Login, refresh and session termination tests.
//!
//! These tests verify that:
//! 1. The three login legs run in order with the right credentials
//! 2. A failing leg leaves the session untouched
//! 3. Refresh happens only after expiry, exactly once
//! 4. Termination always clears the session

use chrono::Utc;
use fortnite_api::services::session::SessionTokens;
use fortnite_api::ApiError;
use reqwest::Method;
use std::time::Duration;

mod common;
use common::{
    logged_in_client, script_login, script_refresh, test_client, ScriptedTransport,
    FUTURE_EXPIRY, PAST_EXPIRY,
};

#[tokio::test]
async fn test_login_runs_three_legs_in_order() {
    let transport = ScriptedTransport::new();
    script_login(&transport, FUTURE_EXPIRY);
    let client = test_client(transport.clone());

    client.login().await.expect("login should succeed");

    let requests = transport.requests();
    assert_eq!(requests.len(), 3);

    // Leg 1: password grant with the launcher credential
    let leg1 = &requests[0];
    assert_eq!(leg1.method, Method::POST);
    assert!(leg1.url.ends_with("/account/api/oauth/token"));
    assert_eq!(leg1.header_value("Authorization"), Some("basic test_launcher_token"));
    assert_eq!(leg1.form_value("grant_type"), Some("password"));
    assert_eq!(leg1.form_value("username"), Some("player@example.com"));
    assert_eq!(leg1.form_value("password"), Some("test_password"));
    assert_eq!(leg1.form_value("includePerms"), Some("true"));

    // Leg 2: exchange code with the bootstrap bearer token
    let leg2 = &requests[1];
    assert_eq!(leg2.method, Method::GET);
    assert!(leg2.url.ends_with("/account/api/oauth/exchange"));
    assert_eq!(leg2.header_value("Authorization"), Some("bearer bootstrap-token"));

    // Leg 3: exchange-code grant with the game client credential
    let leg3 = &requests[2];
    assert_eq!(leg3.method, Method::POST);
    assert_eq!(leg3.header_value("Authorization"), Some("basic test_client_token"));
    assert_eq!(leg3.form_value("grant_type"), Some("exchange_code"));
    assert_eq!(leg3.form_value("exchange_code"), Some("exchange-code-123"));
    assert_eq!(leg3.form_value("token_type"), Some("eg1"));
}

#[tokio::test]
async fn test_login_populates_session() {
    let transport = ScriptedTransport::new();
    let client = logged_in_client(transport, FUTURE_EXPIRY).await;

    let session = client.session();
    assert_eq!(session.access_token, "session-access");
    assert_eq!(session.refresh_token, "session-refresh");
    assert!(session.expires_at > Utc::now());
}

#[tokio::test]
async fn test_failure_at_leg_two_leaves_session_empty() {
    let transport = ScriptedTransport::new();
    transport.push_json(200, serde_json::json!({ "access_token": "bootstrap-token" }));
    transport.push_status(500, "exchange unavailable");
    let client = test_client(transport.clone());

    let err = client.login().await.unwrap_err();

    assert!(matches!(err, ApiError::Auth(ref msg) if msg.contains("exchange code request")));
    assert_eq!(transport.call_count(), 2, "leg 3 must not run");

    let session = client.session();
    assert!(session.access_token.is_empty());
    assert!(session.refresh_token.is_empty());
}

#[tokio::test]
async fn test_empty_bootstrap_token_aborts_login() {
    let transport = ScriptedTransport::new();
    transport.push_json(200, serde_json::json!({ "access_token": "" }));
    let client = test_client(transport.clone());

    let err = client.login().await.unwrap_err();

    assert!(matches!(err, ApiError::Auth(ref msg) if msg.contains("empty access_token")));
    assert_eq!(transport.call_count(), 1);
    assert!(!client.session().is_authenticated());
}

#[tokio::test]
async fn test_transport_error_at_leg_three_is_auth_error() {
    let transport = ScriptedTransport::new();
    transport.push_json(200, serde_json::json!({ "access_token": "bootstrap-token" }));
    transport.push_json(200, serde_json::json!({ "code": "exchange-code-123" }));
    transport.push_error(ApiError::Transport("connection reset".to_string()));
    let client = test_client(transport);

    let err = client.login().await.unwrap_err();

    assert!(matches!(err, ApiError::Auth(ref msg) if msg.contains("connection reset")));
    assert!(!client.session().is_authenticated());
}

#[tokio::test]
async fn test_missing_refresh_token_aborts_login() {
    let transport = ScriptedTransport::new();
    transport.push_json(200, serde_json::json!({ "access_token": "bootstrap-token" }));
    transport.push_json(200, serde_json::json!({ "code": "exchange-code-123" }));
    transport.push_json(
        200,
        serde_json::json!({ "access_token": "session-access", "expires_at": FUTURE_EXPIRY }),
    );
    let client = test_client(transport);

    let err = client.login().await.unwrap_err();

    assert!(matches!(err, ApiError::Auth(ref msg) if msg.contains("refresh_token")));
    assert!(!client.session().is_authenticated());
}

#[tokio::test]
async fn test_invalid_expiry_aborts_login() {
    let transport = ScriptedTransport::new();
    script_login(&transport, "not-a-date");
    let client = test_client(transport);

    let err = client.login().await.unwrap_err();

    assert!(matches!(err, ApiError::Auth(ref msg) if msg.contains("expires_at")));
    assert!(!client.session().is_authenticated());
}

#[tokio::test]
async fn test_check_and_refresh_without_session_is_noop() {
    let transport = ScriptedTransport::new();
    let client = test_client(transport.clone());

    client.check_and_refresh().await.expect("no-op should succeed");

    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn test_check_and_refresh_before_expiry_makes_no_calls() {
    let transport = ScriptedTransport::new();
    let client = logged_in_client(transport.clone(), FUTURE_EXPIRY).await;
    let before = client.session();

    client.check_and_refresh().await.expect("no-op should succeed");

    assert_eq!(transport.call_count(), 3, "only the login legs");
    assert!(client.session() == before);
}

#[tokio::test]
async fn test_check_and_refresh_after_expiry_refreshes_once() {
    let transport = ScriptedTransport::new();
    let client = logged_in_client(transport.clone(), PAST_EXPIRY).await;
    script_refresh(&transport, "fresh-access", FUTURE_EXPIRY);

    client.check_and_refresh().await.expect("refresh should succeed");

    assert_eq!(transport.call_count(), 4);
    let refresh = transport.last_request();
    assert_eq!(refresh.method, Method::POST);
    assert_eq!(refresh.header_value("Authorization"), Some("basic test_launcher_token"));
    assert_eq!(refresh.form_value("grant_type"), Some("refresh_token"));
    assert_eq!(refresh.form_value("refresh_token"), Some("session-refresh"));

    let session = client.session();
    assert_eq!(session.access_token, "fresh-access");
    assert_eq!(session.refresh_token, "fresh-access-refresh");
    assert!(session.expires_at > Utc::now());

    // Token is valid again: nothing more to do
    client.check_and_refresh().await.expect("no-op should succeed");
    assert_eq!(transport.call_count(), 4);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_refresh_is_single_flight() {
    let transport = ScriptedTransport::new();
    let client = logged_in_client(transport.clone(), PAST_EXPIRY).await;
    // Exactly one refresh response; a second refresh would fail.
    script_refresh(&transport, "fresh-access", FUTURE_EXPIRY);

    let mut handles = Vec::new();
    for _ in 0..8 {
        let client = client.clone();
        handles.push(tokio::spawn(async move { client.check_and_refresh().await }));
    }

    for handle in handles {
        handle
            .await
            .expect("Task join failed")
            .expect("Refresh failed");
    }

    assert_eq!(transport.call_count(), 4, "three login legs plus one refresh");
    assert_eq!(client.session().access_token, "fresh-access");
}

#[tokio::test]
async fn test_login_waits_for_in_flight_refresh() {
    let transport = ScriptedTransport::new();
    let client = logged_in_client(transport.clone(), PAST_EXPIRY).await;

    // Slow refresh built from the old session
    transport.push_json_after(
        Duration::from_millis(300),
        200,
        serde_json::json!({
            "access_token": "refreshed-old",
            "refresh_token": "refreshed-old-refresh",
            "expires_at": FUTURE_EXPIRY,
        }),
    );
    // Second login
    transport.push_json(200, serde_json::json!({ "access_token": "bootstrap-token" }));
    transport.push_json(200, serde_json::json!({ "code": "exchange-code-456" }));
    transport.push_json(
        200,
        serde_json::json!({
            "access_token": "second-login",
            "refresh_token": "second-login-refresh",
            "expires_at": FUTURE_EXPIRY,
        }),
    );

    let refresher = client.clone();
    let refresh = tokio::spawn(async move { refresher.check_and_refresh().await });
    tokio::time::sleep(Duration::from_millis(50)).await;

    client.login().await.expect("second login should succeed");
    assert_eq!(client.session().access_token, "second-login");

    refresh
        .await
        .expect("Task join failed")
        .expect("Refresh failed");

    let requests = transport.requests();
    assert_eq!(requests.len(), 7);
    assert_eq!(requests[3].form_value("grant_type"), Some("refresh_token"));
    assert_eq!(requests[6].form_value("exchange_code"), Some("exchange-code-456"));

    let session = client.session();
    assert_eq!(session.access_token, "second-login");
    assert_eq!(session.refresh_token, "second-login-refresh");
}

#[tokio::test]
async fn test_terminate_waits_for_in_flight_login() {
    let transport = ScriptedTransport::new();
    let client = test_client(transport.clone());

    transport.push_json_after(
        Duration::from_millis(200),
        200,
        serde_json::json!({ "access_token": "bootstrap-token" }),
    );
    transport.push_json(200, serde_json::json!({ "code": "exchange-code-123" }));
    transport.push_json(
        200,
        serde_json::json!({
            "access_token": "session-access",
            "refresh_token": "session-refresh",
            "expires_at": FUTURE_EXPIRY,
        }),
    );
    transport.push_status(204, "");

    let login_client = client.clone();
    let login = tokio::spawn(async move { login_client.login().await });
    tokio::time::sleep(Duration::from_millis(50)).await;

    client.terminate_session().await;
    login
        .await
        .expect("Task join failed")
        .expect("Login failed");

    // Terminate ran after the login and killed the session it created
    let kill = transport.last_request();
    assert_eq!(kill.method, Method::DELETE);
    assert!(kill.url.ends_with("/sessions/kill/session-access"));
    assert!(!client.session().is_authenticated());
}

#[tokio::test]
async fn test_failed_refresh_keeps_previous_tokens() {
    let transport = ScriptedTransport::new();
    let client = logged_in_client(transport.clone(), PAST_EXPIRY).await;
    transport.push_status(400, r#"{"errorCode":"errors.com.epicgames.account.auth_token.invalid_refresh_token"}"#);

    let err = client.check_and_refresh().await.unwrap_err();

    assert!(matches!(err, ApiError::Auth(_)));
    let session = client.session();
    assert_eq!(session.access_token, "session-access");
    assert_eq!(session.refresh_token, "session-refresh");
}

#[tokio::test]
async fn test_terminate_session_clears_tokens() {
    let transport = ScriptedTransport::new();
    let client = logged_in_client(transport.clone(), FUTURE_EXPIRY).await;
    transport.push_status(204, "");

    let before = Utc::now();
    client.terminate_session().await;

    let kill = transport.last_request();
    assert_eq!(kill.method, Method::DELETE);
    assert!(kill.url.ends_with("/account/api/oauth/sessions/kill/session-access"));
    assert_eq!(kill.header_value("Authorization"), Some("bearer session-access"));

    let session = client.session();
    assert!(!session.is_authenticated());
    assert!(session.refresh_token.is_empty());
    assert!(session.expires_at >= before && session.expires_at <= Utc::now());
}

#[tokio::test]
async fn test_terminate_session_swallows_failures() {
    let transport = ScriptedTransport::new();
    let client = logged_in_client(transport.clone(), FUTURE_EXPIRY).await;
    transport.push_error(ApiError::Transport("connection refused".to_string()));

    client.terminate_session().await;

    assert_eq!(transport.call_count(), 4);
    assert!(!client.session().is_authenticated());
}

#[tokio::test]
async fn test_terminate_without_session_skips_request() {
    let transport = ScriptedTransport::new();
    let client = test_client(transport.clone());

    client.terminate_session().await;

    assert_eq!(transport.call_count(), 0);
    assert!(client.session() == SessionTokens::empty(client.session().expires_at));
}
