// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Deck Game: a gamified household fitness log.
//!
//! This crate provides the backend API for logging workouts, managing the
//! weekly playing-card bonus pool, and computing the monthly dashboard.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::StoreDb;
use services::{CardService, WorkoutService};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: StoreDb,
    pub cards: CardService,
    pub workouts: WorkoutService,
}
