// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Deck Game API Server
//!
//! Tracks a gamified household fitness log: workouts earn points, and
//! playing cards drawn from a real deck add weekly bonuses.

use deck_game::{
    config::Config,
    db::StoreDb,
    services::{CardService, WorkoutService},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Deck Game API");

    // Initialize the record store client
    let db = StoreDb::new(&config.store_url, &config.store_api_key)
        .expect("Failed to initialize record store client");

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        cards: CardService::new(db.clone()),
        workouts: WorkoutService::new(db.clone()),
        db,
    });

    // Build router
    let app = deck_game::routes::create_router(state);

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

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("deck_game=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
