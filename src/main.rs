// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! MetaMatic agent server
//!
//! Serves the agent invocation endpoint and the activity API on top of
//! either the Strava API or recorded fixtures.

use metamatic::{agent::SessionStore, clients, config::Config, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, mode = ?config.client_mode, "Starting MetaMatic");

    let client = clients::create_client(&config)?;

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        client,
        sessions: SessionStore::new(),
    });

    // Build router
    let app = metamatic::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("metamatic=debug,info"));

    tracing_subscriber::registry().with(filter).with(format).init();
}
