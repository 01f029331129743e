// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod card;
pub mod person;
pub mod stats;
pub mod workout;

pub use card::{card_name, CardStatus, NewWeeklyCard, Rank, Suit, WeeklyCard, WEEK_CARD_LIMIT};
pub use person::{NewPerson, Person};
pub use stats::{DashboardStats, DailyPoints, LeaderboardEntry, MONTHLY_GOAL_POINTS};
pub use workout::{join_names, total_points, NewWorkout, Workout};
