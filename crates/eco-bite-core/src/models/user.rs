// ABOUTME: Session-local user profile with points, streak, and pledges
// ABOUTME: Created at login and discarded at logout; never persisted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eco-Bite Contributors

use serde::{Deserialize, Serialize};

use crate::constants::session;

/// Profile of the person using the current session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Name entered at login, kept as typed
    pub username: String,
    /// Reward points
    pub points: u32,
    /// Consecutive-day streak
    pub streak: u32,
    /// Personal pledges, in the order they were added
    pub pledges: Vec<String>,
}

impl UserProfile {
    /// Fresh profile with the starting points and streak
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            points: session::INITIAL_POINTS,
            streak: session::INITIAL_STREAK,
            pledges: Vec::new(),
        }
    }
}
