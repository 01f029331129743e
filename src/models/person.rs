// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Player model.

use serde::{Deserialize, Serialize};

/// Stored player record.
///
/// Workouts and cards reference players by name, not id, so deleting a
/// person leaves those records untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub id: i64,
    pub name: String,
}

/// Insert record for a new player (the store assigns the id).
#[derive(Debug, Clone, Serialize)]
pub struct NewPerson {
    pub name: String,
}
