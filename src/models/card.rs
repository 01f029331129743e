// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Weekly card model and the bonus-point scoring rules.
//!
//! Cards are entered from a real physical deck, so the domain is closed:
//! four suits, thirteen ranks. The bonus tier is fixed by rank at draw
//! time and snapshotted onto workouts that consume the card.

use crate::error::AppError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum cards a single week's pool may hold.
pub const WEEK_CARD_LIMIT: usize = 7;

/// Playing-card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Clubs,
    Diamonds,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Clubs, Suit::Diamonds];

    pub fn as_str(self) -> &'static str {
        match self {
            Suit::Spades => "Spades",
            Suit::Hearts => "Hearts",
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
        }
    }

    /// Unicode symbol for display.
    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Spades => "♠",
            Suit::Hearts => "♥",
            Suit::Clubs => "♣",
            Suit::Diamonds => "♦",
        }
    }

    /// What kind of workout the suit stands for.
    pub fn meaning(self) -> &'static str {
        match self {
            Suit::Spades => "Strength",
            Suit::Hearts => "Cardio / Movement",
            Suit::Clubs => "Wild (Any)",
            Suit::Diamonds => "Group / Social",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Suit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Spades" => Ok(Suit::Spades),
            "Hearts" => Ok(Suit::Hearts),
            "Clubs" => Ok(Suit::Clubs),
            "Diamonds" => Ok(Suit::Diamonds),
            other => Err(AppError::BadRequest(format!("Unknown suit: {}", other))),
        }
    }
}

/// Playing-card rank, serialized as the card face string ("2".."10", "J",
/// "Q", "K", "A").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "J")]
    Jack,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "K")]
    King,
    #[serde(rename = "A")]
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    /// Bonus points awarded for claiming a card of this rank.
    ///
    /// Low cards (2-5) earn 1, mid cards (6-10) earn 2, face cards earn 3
    /// and an ace earns 5.
    pub fn bonus_points(self) -> u32 {
        match self {
            Rank::Two | Rank::Three | Rank::Four | Rank::Five => 1,
            Rank::Six | Rank::Seven | Rank::Eight | Rank::Nine | Rank::Ten => 2,
            Rank::Jack | Rank::Queen | Rank::King => 3,
            Rank::Ace => 5,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rank {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rank::ALL
            .iter()
            .find(|r| r.as_str() == s)
            .copied()
            .ok_or_else(|| AppError::BadRequest(format!("Unknown card value: {}", s)))
    }
}

/// Display name for a card, e.g. "A of Spades".
///
/// Workouts reference cards by this name, so the format is part of the
/// stored data.
pub fn card_name(value: Rank, suit: Suit) -> String {
    format!("{} of {}", value, suit)
}

/// Claim state of a weekly card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardStatus {
    Available,
    Claimed,
}

/// Stored weekly card record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyCard {
    pub id: i64,
    /// Monday of the week this card belongs to
    pub week_start_date: NaiveDate,
    /// Denormalized "{value} of {suit}" name workouts reference
    pub card_name: String,
    pub suit: Suit,
    pub value: Rank,
    /// Fixed at draw time from the rank
    pub bonus_points: u32,
    pub status: CardStatus,
    /// Set iff status is Claimed
    pub claimed_by: Option<String>,
}

impl WeeklyCard {
    /// Guard for operations that need an unclaimed card.
    pub fn ensure_available(&self) -> Result<(), AppError> {
        match self.status {
            CardStatus::Available => Ok(()),
            CardStatus::Claimed => Err(AppError::InvalidCardState(format!(
                "'{}' is already claimed",
                self.card_name
            ))),
        }
    }

    /// Guard for operations that need a claimed card.
    pub fn ensure_claimed(&self) -> Result<(), AppError> {
        match self.status {
            CardStatus::Claimed => Ok(()),
            CardStatus::Available => Err(AppError::InvalidCardState(format!(
                "'{}' is not claimed",
                self.card_name
            ))),
        }
    }
}

/// Insert record for a freshly drawn card (the store assigns the id).
#[derive(Debug, Clone, Serialize)]
pub struct NewWeeklyCard {
    pub week_start_date: NaiveDate,
    pub card_name: String,
    pub suit: Suit,
    pub value: Rank,
    pub bonus_points: u32,
    pub status: CardStatus,
    pub claimed_by: Option<String>,
}

impl NewWeeklyCard {
    /// Build the record for a draw: Available, bonus derived from rank.
    pub fn drawn(week_start_date: NaiveDate, suit: Suit, value: Rank) -> Self {
        Self {
            week_start_date,
            card_name: card_name(value, suit),
            suit,
            value,
            bonus_points: value.bonus_points(),
            status: CardStatus::Available,
            claimed_by: None,
        }
    }
}
