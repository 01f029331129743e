// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use deck_game::config::Config;
use deck_game::db::StoreDb;
use deck_game::routes::create_router;
use deck_game::services::{CardService, WorkoutService};
use deck_game::AppState;
use std::sync::Arc;

/// Create a mock store connection (offline).
#[allow(dead_code)]
pub fn test_db_offline() -> StoreDb {
    StoreDb::new_mock()
}

/// Create a test app with an offline mock store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let db = test_db_offline();

    let state = Arc::new(AppState {
        config,
        cards: CardService::new(db.clone()),
        workouts: WorkoutService::new(db.clone()),
        db,
    });

    (create_router(state.clone()), state)
}
