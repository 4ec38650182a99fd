// ABOUTME: Explicit session state (language and optional profile) with pure transitions
// ABOUTME: Login, logout, language switch, pledges, and quiz rewards each produce a new Session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eco-Bite Contributors

//! # Session
//!
//! The whole of the per-user state lives in one [`Session`] value owned by the
//! caller. [`Session::apply`] never mutates: it returns the next session or
//! explains why the action was refused, leaving the current one untouched.

use eco_bite_core::constants::session::{PLEDGE_REWARD, QUIZ_CORRECT_REWARD};
use eco_bite_core::models::{Language, UserProfile};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Something a user does that changes the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionAction {
    /// Start a session under a display name
    Login {
        /// Name as typed
        username: String,
    },
    /// End the session and discard the profile
    Logout,
    /// Switch the display language
    SetLanguage {
        /// New language
        language: Language,
    },
    /// Add a personal pledge
    AddPledge {
        /// Pledge text as typed
        text: String,
    },
    /// A trivia question was answered
    QuizAnswered {
        /// Whether the answer was right
        correct: bool,
    },
}

/// Why an action was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Login name is blank
    #[error("username must not be empty")]
    EmptyUsername,
    /// The action needs a logged-in profile
    #[error("no user is logged in")]
    NotLoggedIn,
    /// Pledge text is blank
    #[error("pledge must not be empty")]
    EmptyPledge,
}

/// Per-user state for one run of the app
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Session {
    /// Active display and prompt language
    pub language: Language,
    /// Profile of the logged-in user, if any
    pub user: Option<UserProfile>,
}

impl Session {
    /// Logged-out session in the given language
    #[must_use]
    pub const fn new(language: Language) -> Self {
        Self {
            language,
            user: None,
        }
    }

    /// Whether a profile is present
    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Compute the session that follows `action`
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] when the action is refused; the caller keeps
    /// its current session.
    pub fn apply(&self, action: SessionAction) -> Result<Self, SessionError> {
        let mut next = self.clone();
        match action {
            SessionAction::Login { username } => {
                if username.trim().is_empty() {
                    return Err(SessionError::EmptyUsername);
                }
                next.user = Some(UserProfile::new(username));
            }
            SessionAction::Logout => next.user = None,
            SessionAction::SetLanguage { language } => next.language = language,
            SessionAction::AddPledge { text } => {
                let user = next.user.as_mut().ok_or(SessionError::NotLoggedIn)?;
                if text.trim().is_empty() {
                    return Err(SessionError::EmptyPledge);
                }
                user.pledges.push(text);
                user.points = user.points.saturating_add(PLEDGE_REWARD);
            }
            SessionAction::QuizAnswered { correct } => {
                let user = next.user.as_mut().ok_or(SessionError::NotLoggedIn)?;
                if correct {
                    user.points = user.points.saturating_add(QUIZ_CORRECT_REWARD);
                }
            }
        }

        debug!(
            logged_in = next.is_logged_in(),
            language = %next.language,
            points = next.user.as_ref().map_or(0, |u| u.points),
            "session updated"
        );
        Ok(next)
    }
}
