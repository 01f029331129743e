// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout logging service.
//!
//! Handles the core workflow:
//! 1. Presence-check the submission
//! 2. Resolve the optional card against this week's available pool
//! 3. Compute and snapshot the point total
//! 4. Insert the workout, then flip the card to Claimed
//!
//! The two writes in step 4 are not transactional at the store. If the
//! insert lands and the card update fails, the caller gets a
//! `PartialWrite` error so the half-applied state is distinguishable
//! from a clean failure.

use crate::db::StoreDb;
use crate::error::{AppError, Result};
use crate::models::{join_names, total_points, CardStatus, NewWorkout, WeeklyCard, Workout};
use crate::time_utils::week_start;
use chrono::NaiveDate;

/// A request to log one workout.
#[derive(Debug, Clone)]
pub struct LogWorkout {
    pub date: NaiveDate,
    pub participants: Vec<String>,
    pub activity: String,
    /// Card name to consume, e.g. "A of Spades"
    pub card_used: Option<String>,
    pub notes: Option<String>,
}

/// Logs workouts and consumes cards from the weekly pool.
#[derive(Clone)]
pub struct WorkoutService {
    db: StoreDb,
}

impl WorkoutService {
    pub fn new(db: StoreDb) -> Self {
        Self { db }
    }

    /// Log a workout, consuming the referenced card if it is available
    /// this week.
    ///
    /// A card name that matches nothing in the current week's available
    /// pool logs a cardless workout instead of failing.
    pub async fn log(&self, request: LogWorkout, today: NaiveDate) -> Result<Workout> {
        let participants: Vec<String> = request
            .participants
            .iter()
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .collect();
        if participants.is_empty() {
            return Err(AppError::BadRequest(
                "At least one participant is required".to_string(),
            ));
        }

        let activity = request.activity.trim();
        if activity.is_empty() {
            return Err(AppError::BadRequest(
                "Activity must not be empty".to_string(),
            ));
        }

        let card = match request.card_used.as_deref() {
            Some(name) => self.find_available_card(name, today).await?,
            None => None,
        };

        let bonus = card.as_ref().map(|c| c.bonus_points).unwrap_or(0);
        let num_people = participants.len() as u32;
        let record = NewWorkout {
            date: request.date,
            persons: join_names(&participants),
            activity: activity.to_string(),
            num_people,
            card_used: card.as_ref().map(|c| c.card_name.clone()),
            bonus_points: bonus,
            total_points: total_points(num_people, bonus),
            notes: request
                .notes
                .as_deref()
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(String::from),
        };

        let created = self.db.insert_workout(&record).await?;

        // Second half of the dual write: mark the card as claimed by the
        // whole participant list.
        if let Some(card) = card {
            let claimed_by = join_names(&participants);
            if let Err(err) = self
                .db
                .set_card_status(card.id, CardStatus::Claimed, Some(&claimed_by))
                .await
            {
                tracing::error!(
                    workout_id = created.id,
                    card = %card.card_name,
                    error = %err,
                    "Workout saved but card claim failed"
                );
                return Err(AppError::PartialWrite(format!(
                    "Workout {} was saved but card '{}' could not be claimed",
                    created.id, card.card_name
                )));
            }
        }

        tracing::info!(
            workout_id = created.id,
            points = created.total_points,
            "Workout logged"
        );
        Ok(created)
    }

    /// Delete a single history entry. Cards referenced by name are left
    /// untouched.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.db.delete_workout(id).await
    }

    /// Look the card name up among this week's available cards.
    async fn find_available_card(
        &self,
        name: &str,
        today: NaiveDate,
    ) -> Result<Option<WeeklyCard>> {
        let cards = self.db.cards_for_week(week_start(today)).await?;
        Ok(cards
            .into_iter()
            .find(|c| c.card_name == name && c.status == CardStatus::Available))
    }
}
