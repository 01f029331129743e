// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API routes: one handler per user action.
//!
//! The frontend re-fetches the collections it shows after every
//! mutation, so mutating handlers return only the affected record (or
//! nothing) rather than fresh listings.

use crate::error::{AppError, Result};
use crate::models::{DashboardStats, NewPerson, Person, Rank, Suit, WeeklyCard, Workout};
use crate::services::LogWorkout;
use crate::time_utils::week_start;
use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/dashboard", get(get_dashboard))
        .route("/api/deck", get(get_deck))
        .route("/api/people", get(list_people).post(add_person))
        .route("/api/people/{id}", delete(remove_person))
        .route(
            "/api/cards",
            get(list_cards).post(draw_card).delete(clear_week),
        )
        .route("/api/cards/{id}", delete(remove_card))
        .route("/api/cards/{id}/claim", post(claim_card))
        .route("/api/cards/{id}/unclaim", post(unclaim_card))
        .route("/api/workouts", get(list_workouts).post(log_workout))
        .route("/api/workouts/{id}", delete(remove_workout))
}

/// The reference date for "this week" and "this month".
fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

// ─── Dashboard ───────────────────────────────────────────────

/// Compute the monthly dashboard from the full collections.
async fn get_dashboard(State(state): State<Arc<AppState>>) -> Result<Json<DashboardStats>> {
    let (workouts, people, cards) = tokio::try_join!(
        state.db.list_workouts(),
        state.db.list_people(),
        state.db.list_cards(),
    )?;

    Ok(Json(DashboardStats::compute(
        &workouts,
        &people,
        &cards,
        today(),
    )))
}

// ─── Deck Reference ──────────────────────────────────────────

#[derive(Serialize)]
pub struct SuitInfo {
    pub name: Suit,
    pub symbol: &'static str,
    pub meaning: &'static str,
}

#[derive(Serialize)]
pub struct RankInfo {
    pub value: Rank,
    pub bonus_points: u32,
}

#[derive(Serialize)]
pub struct DeckResponse {
    pub suits: Vec<SuitInfo>,
    pub ranks: Vec<RankInfo>,
    pub week_card_limit: usize,
}

/// Static deck reference data for pickers and legends.
async fn get_deck() -> Json<DeckResponse> {
    Json(DeckResponse {
        suits: Suit::ALL
            .into_iter()
            .map(|s| SuitInfo {
                name: s,
                symbol: s.symbol(),
                meaning: s.meaning(),
            })
            .collect(),
        ranks: Rank::ALL
            .into_iter()
            .map(|r| RankInfo {
                value: r,
                bonus_points: r.bonus_points(),
            })
            .collect(),
        week_card_limit: crate::models::WEEK_CARD_LIMIT,
    })
}

// ─── People ──────────────────────────────────────────────────

async fn list_people(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Person>>> {
    Ok(Json(state.db.list_people().await?))
}

#[derive(Deserialize)]
struct AddPersonRequest {
    name: String,
}

async fn add_person(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AddPersonRequest>,
) -> Result<Json<Person>> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest(
            "Player name must not be empty".to_string(),
        ));
    }

    let person = state
        .db
        .insert_person(&NewPerson {
            name: name.to_string(),
        })
        .await?;
    tracing::info!(name = %person.name, "Player added");
    Ok(Json(person))
}

async fn remove_person(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    state.db.delete_person(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ─── Weekly Cards ────────────────────────────────────────────

#[derive(Deserialize)]
struct CardsQuery {
    /// Week to scope to; any date is normalized to its Monday
    week: Option<NaiveDate>,
}

async fn list_cards(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CardsQuery>,
) -> Result<Json<Vec<WeeklyCard>>> {
    let cards = match params.week {
        Some(week) => state.db.cards_for_week(week_start(week)).await?,
        None => state.db.list_cards().await?,
    };
    Ok(Json(cards))
}

#[derive(Deserialize)]
struct DrawCardRequest {
    suit: String,
    value: String,
    /// Defaults to the current week
    week_start_date: Option<NaiveDate>,
}

async fn draw_card(
    State(state): State<Arc<AppState>>,
    Json(request): Json<DrawCardRequest>,
) -> Result<Json<WeeklyCard>> {
    let suit: Suit = request.suit.parse()?;
    let value: Rank = request.value.parse()?;
    let week = week_start(request.week_start_date.unwrap_or_else(today));

    let card = state.cards.draw(week, suit, value).await?;
    Ok(Json(card))
}

#[derive(Deserialize)]
struct ClaimRequest {
    person: String,
}

async fn claim_card(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(request): Json<ClaimRequest>,
) -> Result<Json<WeeklyCard>> {
    let card = state.cards.claim(id, &request.person).await?;
    Ok(Json(card))
}

async fn unclaim_card(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<WeeklyCard>> {
    let card = state.cards.unclaim(id).await?;
    Ok(Json(card))
}

async fn remove_card(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    state.cards.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Clear one week's pool (the current week unless `week` is given).
async fn clear_week(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CardsQuery>,
) -> Result<StatusCode> {
    let week = week_start(params.week.unwrap_or_else(today));
    state.cards.clear_week(week).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ─── Workouts ────────────────────────────────────────────────

async fn list_workouts(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Workout>>> {
    Ok(Json(state.db.list_workouts().await?))
}

#[derive(Deserialize)]
struct LogWorkoutRequest {
    /// Defaults to today
    date: Option<NaiveDate>,
    participants: Vec<String>,
    activity: String,
    card_used: Option<String>,
    notes: Option<String>,
}

async fn log_workout(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LogWorkoutRequest>,
) -> Result<Json<Workout>> {
    let today = today();
    let workout = state
        .workouts
        .log(
            LogWorkout {
                date: request.date.unwrap_or(today),
                participants: request.participants,
                activity: request.activity,
                card_used: request.card_used,
                notes: request.notes,
            },
            today,
        )
        .await?;
    Ok(Json(workout))
}

async fn remove_workout(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    state.workouts.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
