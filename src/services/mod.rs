// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod cards;
pub mod workouts;

pub use cards::CardService;
pub use workouts::{LogWorkout, WorkoutService};
