// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Garmin-Relay API Server
//!
//! Relays Garmin Connect activities as grouped, stable views and compiles
//! client-authored workouts into Garmin's workout format.

use garmin_relay::{
    config::Config,
    services::{GarminClient, InMemoryCooldownStore},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging()?;

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting Garmin-Relay API");

    let connect = GarminClient::new(
        config.garmin_api_url.clone(),
        config.garmin_token_url.clone(),
        config.request_timeout,
    )?;
    tracing::info!(base_url = %config.garmin_api_url, "Garmin Connect client initialized");

    let login_cooldown = InMemoryCooldownStore::new(config.login_cooldown);
    tracing::info!(
        cooldown_secs = config.login_cooldown.as_secs(),
        "Login cooldown store initialized"
    );

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        connect: Arc::new(connect),
        login_cooldown: Arc::new(login_cooldown),
    });

    // Build router
    let app = garmin_relay::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("garmin_relay=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
