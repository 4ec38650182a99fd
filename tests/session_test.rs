// ABOUTME: Tests for session transitions: login, pledges, quiz rewards, language, logout
// ABOUTME: Every transition is pure, so each test checks both the new and the untouched session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eco-Bite Contributors

#![allow(missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use eco_bite::session::{Session, SessionAction, SessionError};
use eco_bite_core::models::Language;

fn logged_in(name: &str) -> Session {
    Session::default()
        .apply(SessionAction::Login {
            username: name.to_owned(),
        })
        .unwrap()
}

// ============================================================================
// Login And Logout
// ============================================================================

#[test]
fn test_default_session_is_indonesian_and_logged_out() {
    let session = Session::default();
    assert_eq!(session.language, Language::Id);
    assert!(!session.is_logged_in());
}

#[test]
fn test_login_creates_starting_profile() {
    let session = logged_in("  Sari ");
    let user = session.user.as_ref().unwrap();

    assert_eq!(user.username, "  Sari ");
    assert_eq!(user.points, 50);
    assert_eq!(user.streak, 3);
    assert!(user.pledges.is_empty());
}

#[test]
fn test_blank_login_is_refused() {
    let session = Session::new(Language::En);
    let result = session.apply(SessionAction::Login {
        username: " \t ".to_owned(),
    });
    assert_eq!(result, Err(SessionError::EmptyUsername));
    assert!(!session.is_logged_in());
}

#[test]
fn test_logout_discards_profile_but_keeps_language() {
    let session = logged_in("Budi")
        .apply(SessionAction::SetLanguage {
            language: Language::En,
        })
        .unwrap();

    let after = session.apply(SessionAction::Logout).unwrap();
    assert!(!after.is_logged_in());
    assert_eq!(after.language, Language::En);

    // Logging back in starts over
    let again = after
        .apply(SessionAction::Login {
            username: "Budi".to_owned(),
        })
        .unwrap();
    assert_eq!(again.user.unwrap().points, 50);
}

// ============================================================================
// Pledges
// ============================================================================

#[test]
fn test_pledge_awards_points_and_keeps_order() {
    let session = logged_in("Ayu");
    let session = session
        .apply(SessionAction::AddPledge {
            text: "Bring a lunch box".to_owned(),
        })
        .unwrap()
        .apply(SessionAction::AddPledge {
            text: "Freeze leftovers".to_owned(),
        })
        .unwrap();

    let user = session.user.unwrap();
    assert_eq!(user.points, 70);
    assert_eq!(user.pledges, vec!["Bring a lunch box", "Freeze leftovers"]);
}

#[test]
fn test_blank_pledge_is_refused() {
    let session = logged_in("Ayu");
    let result = session.apply(SessionAction::AddPledge {
        text: "   ".to_owned(),
    });
    assert_eq!(result, Err(SessionError::EmptyPledge));
    assert_eq!(session.user.unwrap().points, 50);
}

#[test]
fn test_pledge_requires_login() {
    let result = Session::default().apply(SessionAction::AddPledge {
        text: "Eat everything".to_owned(),
    });
    assert_eq!(result, Err(SessionError::NotLoggedIn));

    // Login is checked before the text
    let result = Session::default().apply(SessionAction::AddPledge {
        text: String::new(),
    });
    assert_eq!(result, Err(SessionError::NotLoggedIn));
}

// ============================================================================
// Quiz Rewards
// ============================================================================

#[test]
fn test_correct_answer_awards_points() {
    let session = logged_in("Dewi")
        .apply(SessionAction::QuizAnswered { correct: true })
        .unwrap();
    assert_eq!(session.user.unwrap().points, 70);
}

#[test]
fn test_wrong_answer_changes_nothing() {
    let before = logged_in("Dewi");
    let after = before
        .apply(SessionAction::QuizAnswered { correct: false })
        .unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_quiz_reward_requires_login() {
    let result = Session::new(Language::En).apply(SessionAction::QuizAnswered { correct: true });
    assert_eq!(result, Err(SessionError::NotLoggedIn));
}

#[test]
fn test_points_saturate() {
    let mut session = logged_in("Max");
    if let Some(user) = session.user.as_mut() {
        user.points = u32::MAX - 5;
    }
    let session = session
        .apply(SessionAction::QuizAnswered { correct: true })
        .unwrap();
    assert_eq!(session.user.unwrap().points, u32::MAX);
}

// ============================================================================
// Language And Serialization
// ============================================================================

#[test]
fn test_language_switch_works_logged_out() {
    let session = Session::default()
        .apply(SessionAction::SetLanguage {
            language: Language::En,
        })
        .unwrap();
    assert_eq!(session.language, Language::En);
    assert!(!session.is_logged_in());
}

#[test]
fn test_actions_use_tagged_json() {
    let action: SessionAction =
        serde_json::from_str(r#"{"type": "set_language", "language": "en"}"#).unwrap();
    assert_eq!(
        action,
        SessionAction::SetLanguage {
            language: Language::En
        }
    );

    let json = serde_json::to_value(SessionAction::QuizAnswered { correct: true }).unwrap();
    assert_eq!(json["type"], "quiz_answered");
    assert_eq!(json["correct"], true);
}
