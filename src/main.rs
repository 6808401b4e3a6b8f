// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fortnite stats lookup
//!
//! Logs in with the credentials from the environment, prints a player's
//! formatted Battle Royale stats (or the current BR news) as JSON, then
//! ends the session.
//!
//! Usage: `fortnite-stats <username> [pc|ps4|xb1]` or `fortnite-stats --news`

use fortnite_api::{config::Config, ApiError, FortniteClient, Platform, StatsIdentity};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "usage: fortnite-stats <username> [pc|ps4|xb1] | fortnite-stats --news";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let mut args = std::env::args().skip(1);
    let target = args.next().ok_or(USAGE)?;
    let platform: Platform = args.next().as_deref().unwrap_or("pc").parse()?;

    let config = Config::from_env()?;
    let client = FortniteClient::from_config(&config)?;
    client.login().await?;

    match client.check_service_status().await {
        Ok(status) if !status.up => {
            tracing::warn!(message = %status.message, "Fortnite services are down")
        }
        Ok(_) => {}
        Err(e) => tracing::warn!(error = %e, "Failed to check service status"),
    }

    let result = if target == "--news" {
        tracing::info!(language = ?config.language, "Fetching Fortnite news");
        client
            .get_news(config.language)
            .await
            .and_then(|news| to_json(&news))
    } else {
        tracing::info!(username = %target, %platform, "Fetching Fortnite stats");
        client
            .get_stats(StatsIdentity::Username(target), platform)
            .await
            .and_then(|report| to_json(&report))
    };

    // Always release the session, even when the query failed.
    client.terminate_session().await;

    println!("{}", result?);
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string_pretty(value).map_err(|e| ApiError::Internal(e.into()))
}

/// Initialize structured JSON logging on stderr.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("fortnite_api=debug,info")),
        )
        .with(format)
        .init();
}
