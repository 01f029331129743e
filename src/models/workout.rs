// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout log model and point arithmetic.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Total points for a workout: one base point per participant plus the
/// consumed card's bonus (0 without a card).
///
/// Callers refuse submissions with zero participants before computing.
pub fn total_points(num_people: u32, bonus: u32) -> u32 {
    num_people + bonus
}

/// Join participant names the way they are stored, e.g. "Alice, Bob".
pub fn join_names(names: &[String]) -> String {
    names.join(", ")
}

/// Stored workout record.
///
/// Point fields are snapshots taken at logging time; later card edits do
/// not change past workouts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    pub id: i64,
    pub date: NaiveDate,
    /// Comma-joined participant names
    pub persons: String,
    pub activity: String,
    pub num_people: u32,
    /// Name of the consumed card, if any (by value, not foreign key)
    pub card_used: Option<String>,
    pub bonus_points: u32,
    pub total_points: u32,
    pub notes: Option<String>,
}

impl Workout {
    /// Split the stored `persons` string back into trimmed names.
    pub fn participant_names(&self) -> Vec<&str> {
        self.persons
            .split(',')
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .collect()
    }
}

/// Insert record for a logged workout (the store assigns the id).
#[derive(Debug, Clone, Serialize)]
pub struct NewWorkout {
    pub date: NaiveDate,
    pub persons: String,
    pub activity: String,
    pub num_people: u32,
    pub card_used: Option<String>,
    pub bonus_points: u32,
    pub total_points: u32,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_points_without_card() {
        // Alice and Bob, no card
        assert_eq!(total_points(2, 0), 2);
    }

    #[test]
    fn test_total_points_with_ace_bonus() {
        // Alice and Bob with "A of Spades" (+5)
        assert_eq!(total_points(2, 5), 7);
    }

    #[test]
    fn test_join_names() {
        let names = vec!["Alice".to_string(), "Bob".to_string()];
        assert_eq!(join_names(&names), "Alice, Bob");
        assert_eq!(join_names(&["Solo".to_string()]), "Solo");
    }

    #[test]
    fn test_participant_names_trims_whitespace() {
        let workout = Workout {
            id: 1,
            date: NaiveDate::from_ymd_opt(2026, 8, 5).unwrap(),
            persons: "Alice,  Bob , Carol".to_string(),
            activity: "Gym".to_string(),
            num_people: 3,
            card_used: None,
            bonus_points: 0,
            total_points: 3,
            notes: None,
        };
        assert_eq!(workout.participant_names(), vec!["Alice", "Bob", "Carol"]);
    }
}
