//! Dashboard aggregates computed from the raw workout list.
//!
//! Everything here is a single synchronous pass over the in-memory
//! collections; the store is only consulted for the raw rows.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use crate::models::{CardStatus, Person, Suit, WeeklyCard, Workout};
use crate::time_utils::{days_left_in_month, same_month};

/// Fixed household goal, in points per calendar month.
pub const MONTHLY_GOAL_POINTS: f64 = 100.0;

/// One row of the leaderboard, points rounded to one decimal.
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub points: f64,
}

/// One point of the cumulative time series: the running total as of
/// `date`. One entry per distinct workout date, ascending.
#[derive(Debug, Clone, Serialize)]
pub struct DailyPoints {
    pub date: NaiveDate,
    pub points: u32,
}

/// Aggregates for the current calendar month, plus a few all-time counts
/// the dashboard header shows.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    // ─── Monthly Goal ────────────────────────────────────────────
    /// Sum of all credited per-person points this month
    pub total_points: f64,
    /// Percent of the monthly goal reached, clamped at 100
    pub goal_progress: f64,
    /// Days remaining in the month
    pub days_left: u32,

    // ─── Quick Stats ─────────────────────────────────────────────
    /// Workouts logged this month
    pub month_workouts: u32,
    /// Unclaimed cards across all weeks
    pub cards_available: u32,
    /// All cards across all weeks
    pub cards_total: u32,
    /// Registered players
    pub players: u32,

    // ─── Breakdowns ──────────────────────────────────────────────
    /// Per-player monthly points, sorted descending
    pub leaderboard: Vec<LeaderboardEntry>,
    /// Cumulative points over the month's workout dates
    pub cumulative: Vec<DailyPoints>,
    /// How often each suit was used this month (all four always present)
    pub suit_counts: HashMap<Suit, u32>,
}

impl DashboardStats {
    /// Compute all dashboard aggregates for the month containing `today`.
    pub fn compute(
        workouts: &[Workout],
        people: &[Person],
        cards: &[WeeklyCard],
        today: NaiveDate,
    ) -> Self {
        let month_workouts: Vec<&Workout> = workouts
            .iter()
            .filter(|w| same_month(w.date, today))
            .collect();

        // Each workout's total is split evenly across its listed
        // participants, but only names present in the people list are
        // credited. The divisor stays the full participant count, so a
        // share belonging to an unrecognized name is simply lost.
        let mut points_by_person: HashMap<&str, f64> =
            people.iter().map(|p| (p.name.as_str(), 0.0)).collect();
        for workout in &month_workouts {
            let names = workout.participant_names();
            if names.is_empty() {
                continue;
            }
            let share = f64::from(workout.total_points) / names.len() as f64;
            for name in names {
                if let Some(points) = points_by_person.get_mut(name) {
                    *points += share;
                }
            }
        }

        let total_points: f64 = points_by_person.values().sum();
        let goal_progress = (total_points / MONTHLY_GOAL_POINTS * 100.0).min(100.0);

        // Cumulative series: per-date sums in ascending date order, then
        // a running total. BTreeMap gives the ordering for free.
        let mut points_by_date: BTreeMap<NaiveDate, u32> = BTreeMap::new();
        for workout in &month_workouts {
            *points_by_date.entry(workout.date).or_insert(0) += workout.total_points;
        }
        let mut running = 0;
        let cumulative: Vec<DailyPoints> = points_by_date
            .into_iter()
            .map(|(date, points)| {
                running += points;
                DailyPoints {
                    date,
                    points: running,
                }
            })
            .collect();

        // Suit usage, parsed from the card-name snapshot ("A of Spades").
        // Unknown or unparseable suits are ignored.
        let mut suit_counts: HashMap<Suit, u32> = Suit::ALL.iter().map(|&s| (s, 0)).collect();
        for workout in &month_workouts {
            let Some(card_used) = &workout.card_used else {
                continue;
            };
            let Some(raw_suit) = card_used.split(" of ").nth(1) else {
                continue;
            };
            if let Ok(suit) = raw_suit.parse::<Suit>() {
                if let Some(count) = suit_counts.get_mut(&suit) {
                    *count += 1;
                }
            }
        }

        // Leaderboard in people-list order, so ties keep input order
        // (sort_by is stable).
        let mut leaderboard: Vec<LeaderboardEntry> = people
            .iter()
            .map(|p| LeaderboardEntry {
                name: p.name.clone(),
                points: round_tenth(points_by_person.get(p.name.as_str()).copied().unwrap_or(0.0)),
            })
            .collect();
        leaderboard.sort_by(|a, b| {
            b.points
                .partial_cmp(&a.points)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let cards_available = cards
            .iter()
            .filter(|c| c.status == CardStatus::Available)
            .count() as u32;

        Self {
            total_points,
            goal_progress,
            days_left: days_left_in_month(today),
            month_workouts: month_workouts.len() as u32,
            cards_available,
            cards_total: cards.len() as u32,
            players: people.len() as u32,
            leaderboard,
            cumulative,
            suit_counts,
        }
    }
}

fn round_tenth(points: f64) -> f64 {
    (points * 10.0).round() / 10.0
}
