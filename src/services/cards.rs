// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Weekly card lifecycle service.
//!
//! Cards move between two states, `Available` and `Claimed`; deletion
//! removes the record outright. Each week's pool holds at most
//! [`WEEK_CARD_LIMIT`] cards with unique names, checked locally before
//! any write is issued.

use crate::db::StoreDb;
use crate::error::{AppError, Result};
use crate::models::{
    card_name, CardStatus, NewWeeklyCard, Rank, Suit, WeeklyCard, WEEK_CARD_LIMIT,
};
use chrono::NaiveDate;

/// Manages the weekly card pool.
#[derive(Clone)]
pub struct CardService {
    db: StoreDb,
}

impl CardService {
    pub fn new(db: StoreDb) -> Self {
        Self { db }
    }

    /// Draw a card into the given week's pool.
    ///
    /// Fails with `WeekFull` or `DuplicateCard` before writing anything,
    /// so a rejected draw never mutates existing cards.
    pub async fn draw(&self, week: NaiveDate, suit: Suit, value: Rank) -> Result<WeeklyCard> {
        let existing = self.db.cards_for_week(week).await?;
        ensure_can_draw(&existing, &card_name(value, suit))?;

        let created = self
            .db
            .insert_card(&NewWeeklyCard::drawn(week, suit, value))
            .await?;
        tracing::info!(card = %created.card_name, week = %week, "Card drawn");
        Ok(created)
    }

    /// Claim a card for a player.
    pub async fn claim(&self, id: i64, claimant: &str) -> Result<WeeklyCard> {
        let claimant = claimant.trim();
        if claimant.is_empty() {
            return Err(AppError::BadRequest(
                "Claimant name must not be empty".to_string(),
            ));
        }

        let card = self.require_card(id).await?;
        card.ensure_available()?;

        let updated = self
            .db
            .set_card_status(id, CardStatus::Claimed, Some(claimant))
            .await?;
        tracing::info!(card = %updated.card_name, claimed_by = claimant, "Card claimed");
        Ok(updated)
    }

    /// Release a claimed card back into the available pool.
    ///
    /// The prior claimant is not retained.
    pub async fn unclaim(&self, id: i64) -> Result<WeeklyCard> {
        let card = self.require_card(id).await?;
        card.ensure_claimed()?;

        let updated = self
            .db
            .set_card_status(id, CardStatus::Available, None)
            .await?;
        tracing::info!(card = %updated.card_name, "Card released");
        Ok(updated)
    }

    /// Remove a single card regardless of its state.
    pub async fn remove(&self, id: i64) -> Result<()> {
        self.db.delete_card(id).await
    }

    /// Delete every card in a week's pool, claimed or not.
    pub async fn clear_week(&self, week: NaiveDate) -> Result<()> {
        self.db.delete_cards_for_week(week).await?;
        tracing::info!(week = %week, "Week cleared");
        Ok(())
    }

    async fn require_card(&self, id: i64) -> Result<WeeklyCard> {
        self.db
            .get_card(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Card {} not found", id)))
    }
}

/// Reject a draw that would overfill the week or duplicate a card name.
fn ensure_can_draw(existing: &[WeeklyCard], name: &str) -> Result<()> {
    if existing.len() >= WEEK_CARD_LIMIT {
        return Err(AppError::WeekFull);
    }
    if existing.iter().any(|c| c.card_name == name) {
        return Err(AppError::DuplicateCard(name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn week() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 3).unwrap()
    }

    fn make_card(id: i64, suit: Suit, value: Rank) -> WeeklyCard {
        let new = NewWeeklyCard::drawn(week(), suit, value);
        WeeklyCard {
            id,
            week_start_date: new.week_start_date,
            card_name: new.card_name,
            suit: new.suit,
            value: new.value,
            bonus_points: new.bonus_points,
            status: new.status,
            claimed_by: new.claimed_by,
        }
    }

    #[test]
    fn test_draw_allowed_into_partial_week() {
        let existing = vec![
            make_card(1, Suit::Spades, Rank::Two),
            make_card(2, Suit::Hearts, Rank::Ace),
        ];
        assert!(ensure_can_draw(&existing, "K of Clubs").is_ok());
    }

    #[test]
    fn test_eighth_card_rejected_as_week_full() {
        let existing: Vec<WeeklyCard> = Rank::ALL[..7]
            .iter()
            .enumerate()
            .map(|(i, &rank)| make_card(i as i64, Suit::Spades, rank))
            .collect();

        let err = ensure_can_draw(&existing, "A of Hearts").unwrap_err();
        assert!(matches!(err, AppError::WeekFull));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let existing = vec![make_card(1, Suit::Spades, Rank::Ace)];

        let err = ensure_can_draw(&existing, "A of Spades").unwrap_err();
        assert!(matches!(err, AppError::DuplicateCard(name) if name == "A of Spades"));
    }

    #[test]
    fn test_same_rank_different_suit_allowed() {
        let existing = vec![make_card(1, Suit::Spades, Rank::Ace)];
        assert!(ensure_can_draw(&existing, "A of Hearts").is_ok());
    }
}
