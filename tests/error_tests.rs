// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::http::StatusCode;
use axum::response::IntoResponse;
use deck_game::error::AppError;

#[test]
fn test_conflict_errors_map_to_409() {
    let status = AppError::DuplicateCard("A of Spades".to_string())
        .into_response()
        .status();
    assert_eq!(status, StatusCode::CONFLICT);

    assert_eq!(AppError::WeekFull.into_response().status(), StatusCode::CONFLICT);

    let status = AppError::InvalidCardState("already claimed".to_string())
        .into_response()
        .status();
    assert_eq!(status, StatusCode::CONFLICT);
}

#[test]
fn test_client_errors_map_to_4xx() {
    let status = AppError::NotFound("Card 1".to_string())
        .into_response()
        .status();
    assert_eq!(status, StatusCode::NOT_FOUND);

    let status = AppError::BadRequest("missing name".to_string())
        .into_response()
        .status();
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[test]
fn test_store_errors_map_to_500() {
    let status = AppError::Store("connection refused".to_string())
        .into_response()
        .status();
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let status = AppError::PartialWrite("workout saved, card not claimed".to_string())
        .into_response()
        .status();
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
