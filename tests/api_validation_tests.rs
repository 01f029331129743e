// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API input validation tests.
//!
//! Presence checks and card-string parsing run before any store
//! traffic, so all of these pass against the offline mock store.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;

mod common;

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_workout_without_participants_rejected() {
    let (app, _state) = common::create_test_app();

    let body = json!({
        "participants": [],
        "activity": "Gym session",
    });
    let response = app.oneshot(post_json("/api/workouts", body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_workout_with_blank_participants_rejected() {
    let (app, _state) = common::create_test_app();

    let body = json!({
        "participants": ["  ", ""],
        "activity": "Gym session",
    });
    let response = app.oneshot(post_json("/api/workouts", body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_workout_without_activity_rejected() {
    let (app, _state) = common::create_test_app();

    let body = json!({
        "participants": ["Alice"],
        "activity": "   ",
    });
    let response = app.oneshot(post_json("/api/workouts", body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_draw_with_unknown_suit_rejected() {
    let (app, _state) = common::create_test_app();

    let body = json!({ "suit": "Stars", "value": "A" });
    let response = app.oneshot(post_json("/api/cards", body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_draw_with_unknown_value_rejected() {
    let (app, _state) = common::create_test_app();

    let body = json!({ "suit": "Spades", "value": "11" });
    let response = app.oneshot(post_json("/api/cards", body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_empty_player_name_rejected() {
    let (app, _state) = common::create_test_app();

    let body = json!({ "name": "   " });
    let response = app.oneshot(post_json("/api/people", body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_claim_with_empty_person_rejected() {
    let (app, _state) = common::create_test_app();

    let body = json!({ "person": "" });
    let response = app
        .oneshot(post_json("/api/cards/1/claim", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_invalid_week_query_rejected() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/cards?week=not-a-date")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
