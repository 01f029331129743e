// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Card '{0}' is already in this week's pool")]
    DuplicateCard(String),

    #[error("This week's card pool is full")]
    WeekFull,

    #[error("Invalid card state: {0}")]
    InvalidCardState(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Record store error: {0}")]
    Store(String),

    #[error("Partial write: {0}")]
    PartialWrite(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::DuplicateCard(name) => {
                (StatusCode::CONFLICT, "duplicate_card", Some(name.clone()))
            }
            AppError::WeekFull => (StatusCode::CONFLICT, "week_full", None),
            AppError::InvalidCardState(msg) => {
                (StatusCode::CONFLICT, "invalid_card_state", Some(msg.clone()))
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", Some(msg.clone())),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "bad_request", Some(msg.clone()))
            }
            AppError::Store(msg) => {
                tracing::error!(error = %msg, "Record store error");
                (StatusCode::INTERNAL_SERVER_ERROR, "store_error", None)
            }
            AppError::PartialWrite(msg) => {
                tracing::error!(error = %msg, "Partial write left the store inconsistent");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "partial_write",
                    Some(msg.clone()),
                )
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", None)
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
