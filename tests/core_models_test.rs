// ABOUTME: Tests for core error codes and domain models shared across crates
// ABOUTME: Covers language parsing, model serialization, and error display
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eco-Bite Contributors

#![allow(missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use eco_bite_core::errors::{AppError, ErrorCode};
use eco_bite_core::models::{Language, QuizQuestion, UserProfile, WasteCategory, WasteInputs};
use serde_json::json;

// ============================================================================
// Language
// ============================================================================

#[test]
fn test_language_parsing() {
    assert_eq!("en".parse::<Language>().unwrap(), Language::En);
    assert_eq!(" ID ".parse::<Language>().unwrap(), Language::Id);
    assert_eq!("bahasa".parse::<Language>().unwrap(), Language::Id);

    let err = "fr".parse::<Language>().unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(err.message.contains("'fr'"));
}

#[test]
fn test_language_defaults_to_indonesian() {
    assert_eq!(Language::default(), Language::Id);
    assert_eq!(Language::En.to_string(), "en");
    assert_eq!(serde_json::to_value(Language::Id).unwrap(), json!("id"));
}

// ============================================================================
// Models
// ============================================================================

#[test]
fn test_quiz_question_uses_camel_case() {
    let question: QuizQuestion = serde_json::from_value(json!({
        "question": "Q?",
        "options": ["a", "b"],
        "correctIndex": 1,
        "explanation": "E"
    }))
    .unwrap();
    assert_eq!(question.correct_option(), Some("b"));

    let out = serde_json::to_value(&question).unwrap();
    assert_eq!(out["correctIndex"], 1);
}

#[test]
fn test_new_profile_starting_values() {
    let profile = UserProfile::new("Rina");
    assert_eq!(profile.points, 50);
    assert_eq!(profile.streak, 3);
    assert!(profile.pledges.is_empty());
}

#[test]
fn test_waste_inputs_by_category() {
    let inputs = WasteInputs::default()
        .with_units(WasteCategory::Dairy, 2)
        .with_units(WasteCategory::Fruit, 1);

    assert_eq!(inputs.units(WasteCategory::Dairy), 2);
    assert_eq!(inputs.units(WasteCategory::Bread), 0);
    assert!(WasteInputs::default().is_empty());
    assert_eq!(
        WasteCategory::ALL.map(|c| c.key()),
        ["bread", "fruit", "dairy", "meat"]
    );
}

#[test]
fn test_waste_inputs_sum_saturates() {
    let total = WasteInputs::new(u32::MAX, 1, 0, 0) + WasteInputs::new(1, 1, 0, 0);
    assert_eq!(total, WasteInputs::new(u32::MAX, 2, 0, 0));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_error_display_and_classification() {
    let err = AppError::external_unavailable("gemini", "connection refused");
    assert_eq!(err.code, ErrorCode::ExternalServiceUnavailable);
    assert!(err.code.is_external());
    assert_eq!(
        err.to_string(),
        "An external service is currently unavailable: gemini: connection refused"
    );

    assert!(!ErrorCode::ConfigMissing.is_external());
}

#[test]
fn test_json_errors_convert() {
    let parse_err = serde_json::from_str::<QuizQuestion>("{").unwrap_err();
    let err: AppError = parse_err.into();
    assert_eq!(err.code, ErrorCode::SerializationError);
    assert!(err.source.is_some());
}

#[test]
fn test_error_codes_serialize_and_classify() {
    let cases = [
        (ErrorCode::InvalidInput, "INVALID_INPUT", false),
        (ErrorCode::ExternalServiceError, "EXTERNAL_SERVICE_ERROR", true),
        (ErrorCode::ExternalServiceUnavailable, "EXTERNAL_SERVICE_UNAVAILABLE", true),
        (ErrorCode::ExternalAuthFailed, "EXTERNAL_AUTH_FAILED", true),
        (ErrorCode::ExternalRateLimited, "EXTERNAL_RATE_LIMITED", true),
        (ErrorCode::ConfigMissing, "CONFIG_MISSING", false),
        (ErrorCode::ConfigInvalid, "CONFIG_INVALID", false),
        (ErrorCode::SerializationError, "SERIALIZATION_ERROR", false),
    ];

    for (code, name, external) in cases {
        assert_eq!(serde_json::to_value(code).unwrap(), json!(name));
        assert_eq!(code.is_external(), external, "{name}");
        assert!(!code.description().is_empty());
    }
}
