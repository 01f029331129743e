// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Hosted record store client with typed operations.
//!
//! The store exposes one REST route per collection with a PostgREST
//! dialect: `col=eq.value` filters, `order=` ordering, and a
//! `Prefer: return=representation` header to read written rows back.
//!
//! Provides high-level operations for:
//! - People (player roster)
//! - Workouts (the append-only log)
//! - Weekly cards (the bonus pool)

use crate::db::collections;
use crate::error::AppError;
use crate::models::{
    CardStatus, NewPerson, NewWeeklyCard, NewWorkout, Person, WeeklyCard, Workout,
};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Record store client.
#[derive(Clone)]
pub struct StoreDb {
    client: Option<RestClient>,
}

impl StoreDb {
    /// Create a new store client for a hosted endpoint.
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::Store(format!("Failed to build HTTP client: {}", e)))?;

        tracing::info!(url = base_url, "Record store client ready");

        Ok(Self {
            client: Some(RestClient {
                http,
                base_url: base_url.trim_end_matches('/').to_string(),
                api_key: api_key.to_string(),
            }),
        })
    }

    /// Create a mock store client for testing (offline mode).
    ///
    /// All store operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    /// Helper to get the client or return an error if offline.
    fn get_client(&self) -> Result<&RestClient, AppError> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Store("Store not connected (offline mode)".to_string()))
    }

    // ─── People Operations ───────────────────────────────────────

    /// List all players, sorted by name.
    pub async fn list_people(&self) -> Result<Vec<Person>, AppError> {
        self.get_client()?
            .select(collections::PEOPLE, &[], Some("name.asc"))
            .await
    }

    /// Add a player.
    pub async fn insert_person(&self, person: &NewPerson) -> Result<Person, AppError> {
        self.get_client()?.insert(collections::PEOPLE, person).await
    }

    /// Remove a player. Workouts and cards referencing the name stay as
    /// they are.
    pub async fn delete_person(&self, id: i64) -> Result<(), AppError> {
        self.get_client()?
            .delete(collections::PEOPLE, &[eq("id", id)])
            .await
    }

    // ─── Workout Operations ──────────────────────────────────────

    /// List the full workout history, newest first.
    pub async fn list_workouts(&self) -> Result<Vec<Workout>, AppError> {
        self.get_client()?
            .select(collections::WORKOUTS, &[], Some("date.desc,id.desc"))
            .await
    }

    /// Store a logged workout.
    pub async fn insert_workout(&self, workout: &NewWorkout) -> Result<Workout, AppError> {
        self.get_client()?
            .insert(collections::WORKOUTS, workout)
            .await
    }

    /// Delete a single history entry.
    pub async fn delete_workout(&self, id: i64) -> Result<(), AppError> {
        self.get_client()?
            .delete(collections::WORKOUTS, &[eq("id", id)])
            .await
    }

    // ─── Weekly Card Operations ──────────────────────────────────

    /// List all cards across all weeks, in draw order.
    pub async fn list_cards(&self) -> Result<Vec<WeeklyCard>, AppError> {
        self.get_client()?
            .select(collections::WEEKLY_CARDS, &[], Some("id.asc"))
            .await
    }

    /// List one week's cards, in draw order.
    pub async fn cards_for_week(&self, week: NaiveDate) -> Result<Vec<WeeklyCard>, AppError> {
        self.get_client()?
            .select(
                collections::WEEKLY_CARDS,
                &[eq("week_start_date", week)],
                Some("id.asc"),
            )
            .await
    }

    /// Get a card by id.
    pub async fn get_card(&self, id: i64) -> Result<Option<WeeklyCard>, AppError> {
        let mut rows: Vec<WeeklyCard> = self
            .get_client()?
            .select(collections::WEEKLY_CARDS, &[eq("id", id)], None)
            .await?;
        if rows.is_empty() {
            Ok(None)
        } else {
            Ok(Some(rows.remove(0)))
        }
    }

    /// Store a freshly drawn card.
    pub async fn insert_card(&self, card: &NewWeeklyCard) -> Result<WeeklyCard, AppError> {
        self.get_client()?
            .insert(collections::WEEKLY_CARDS, card)
            .await
    }

    /// Flip a card's claim state.
    ///
    /// `claimed_by` must be `Some` when claiming and `None` when
    /// releasing, keeping the status/claimant invariant in the store.
    pub async fn set_card_status(
        &self,
        id: i64,
        status: CardStatus,
        claimed_by: Option<&str>,
    ) -> Result<WeeklyCard, AppError> {
        let patch = serde_json::json!({
            "status": status,
            "claimed_by": claimed_by,
        });

        let mut rows: Vec<WeeklyCard> = self
            .get_client()?
            .update(collections::WEEKLY_CARDS, &patch, &[eq("id", id)])
            .await?;
        if rows.is_empty() {
            return Err(AppError::NotFound(format!("Card {} not found", id)));
        }
        Ok(rows.remove(0))
    }

    /// Delete a single card.
    pub async fn delete_card(&self, id: i64) -> Result<(), AppError> {
        self.get_client()?
            .delete(collections::WEEKLY_CARDS, &[eq("id", id)])
            .await
    }

    /// Delete every card belonging to a week.
    pub async fn delete_cards_for_week(&self, week: NaiveDate) -> Result<(), AppError> {
        self.get_client()?
            .delete(collections::WEEKLY_CARDS, &[eq("week_start_date", week)])
            .await
    }
}

/// Build an equality filter pair, e.g. `("id", "eq.5")`.
fn eq(column: &str, value: impl ToString) -> (String, String) {
    (column.to_string(), format!("eq.{}", value.to_string()))
}

/// Low-level REST client the typed operations sit on.
#[derive(Clone)]
struct RestClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RestClient {
    fn request(&self, method: reqwest::Method, collection: &str) -> reqwest::RequestBuilder {
        let url = format!("{}/rest/v1/{}", self.base_url, collection);
        self.http
            .request(method, url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    async fn select<T: DeserializeOwned>(
        &self,
        collection: &str,
        filters: &[(String, String)],
        order: Option<&str>,
    ) -> Result<Vec<T>, AppError> {
        let mut request = self.request(reqwest::Method::GET, collection).query(filters);
        if let Some(order) = order {
            request = request.query(&[("order", order)]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Store(e.to_string()))?;
        read_json(response).await
    }

    async fn insert<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        collection: &str,
        record: &B,
    ) -> Result<T, AppError> {
        let response = self
            .request(reqwest::Method::POST, collection)
            .header("Prefer", "return=representation")
            .json(record)
            .send()
            .await
            .map_err(|e| AppError::Store(e.to_string()))?;

        // The store answers inserts with an array of created rows.
        let mut rows: Vec<T> = read_json(response).await?;
        if rows.is_empty() {
            return Err(AppError::Store(format!(
                "Insert into '{}' returned no rows",
                collection
            )));
        }
        Ok(rows.remove(0))
    }

    async fn update<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        collection: &str,
        patch: &B,
        filters: &[(String, String)],
    ) -> Result<Vec<T>, AppError> {
        let response = self
            .request(reqwest::Method::PATCH, collection)
            .query(filters)
            .header("Prefer", "return=representation")
            .json(patch)
            .send()
            .await
            .map_err(|e| AppError::Store(e.to_string()))?;

        read_json(response).await
    }

    async fn delete(&self, collection: &str, filters: &[(String, String)]) -> Result<(), AppError> {
        let response = self
            .request(reqwest::Method::DELETE, collection)
            .query(filters)
            .send()
            .await
            .map_err(|e| AppError::Store(e.to_string()))?;

        check_response(response).await?;
        Ok(())
    }
}

/// Check response status and deserialize the JSON body.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, AppError> {
    let response = check_response(response).await?;
    response
        .json()
        .await
        .map_err(|e| AppError::Store(format!("Invalid store response: {}", e)))
}

/// Check response status and return an error if not successful.
async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, AppError> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(AppError::Store(format!("Store returned {}: {}", status, body)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eq_filter_format() {
        assert_eq!(eq("id", 5), ("id".to_string(), "eq.5".to_string()));

        let week = NaiveDate::from_ymd_opt(2026, 8, 3).unwrap();
        assert_eq!(
            eq("week_start_date", week),
            ("week_start_date".to_string(), "eq.2026-08-03".to_string())
        );
    }

    #[tokio::test]
    async fn test_offline_mock_rejects_operations() {
        let db = StoreDb::new_mock();
        let err = db.list_people().await.unwrap_err();
        assert!(matches!(err, AppError::Store(_)));
    }
}
