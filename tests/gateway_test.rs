// ABOUTME: Tests for the AI content gateway against the offline fake provider
// ABOUTME: Covers decoding, schema enforcement, timeouts, cancellation, and request phases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eco-Bite Contributors

#![allow(missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::Arc;
use std::time::Duration;

use eco_bite::config::GatewayConfig;
use eco_bite::gateway::decode::{decode_quiz_question, decode_recipe};
use eco_bite::gateway::{
    CancellationToken, ContentGateway, DecodeError, GatewayOutcome, RequestPhase,
};
use eco_bite::llm::schema::{quiz_schema, recipe_schema, SchemaViolation};
use eco_bite::llm::FakeProvider;
use eco_bite_core::models::{Language, QuizQuestion, Recipe};
use tokio::time::sleep;

const RECIPE_JSON: &str = r#"{
    "title": "Banana Bread Pancakes",
    "emoji": "🥞",
    "ingredients": ["2 ripe bananas", "1 cup stale bread crumbs", "1 egg"],
    "steps": ["Mash the bananas.", "Mix everything.", "Fry small pancakes."]
}"#;

const QUIZ_JSON: &str = r#"{
    "question": "Which food group has the largest carbon footprint per kilogram?",
    "options": ["Bread", "Fruit", "Meat", "Dairy"],
    "correctIndex": 2,
    "explanation": "Meat production emits far more greenhouse gas than plant foods."
}"#;

/// Gateway over a shared fake so tests can inspect what was sent
fn gateway_with(provider: FakeProvider) -> (ContentGateway, Arc<FakeProvider>) {
    let provider = Arc::new(provider);
    let config = GatewayConfig::default().with_timeout(Duration::from_secs(5));
    let gateway = ContentGateway::new(provider.clone(), &config);
    (gateway, provider)
}

fn quiz_with_index(index: i64) -> String {
    format!(
        r#"{{"question": "Q?", "options": ["a", "b", "c"], "correctIndex": {index}, "explanation": "e"}}"#
    )
}

// ============================================================================
// Successful Requests
// ============================================================================

#[tokio::test]
async fn test_recipe_succeeds_and_sends_one_request() {
    let (gateway, provider) =
        gateway_with(FakeProvider::new().with_response("leftovers", RECIPE_JSON));

    let outcome = gateway
        .request_recipe("2 bananas, stale bread", Language::En, &CancellationToken::new())
        .await;

    let recipe = outcome.into_option().unwrap();
    assert_eq!(recipe.title, "Banana Bread Pancakes");
    assert_eq!(recipe.emoji, "🥞");
    assert_eq!(recipe.ingredients.len(), 3);
    assert_eq!(recipe.steps.len(), 3);
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn test_recipe_request_carries_prompt_schema_and_model() {
    let (gateway, provider) =
        gateway_with(FakeProvider::new().with_default_response(RECIPE_JSON));

    gateway
        .request_recipe("nasi sisa, telur", Language::Id, &CancellationToken::new())
        .await;

    let requests = provider.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert!(request.prompt.contains("sisa bahan ini: nasi sisa, telur."));
    assert!(request.prompt.contains("remaja atau dewasa muda"));
    assert_eq!(request.response_schema, Some(recipe_schema()));
    assert_eq!(request.model.as_deref(), Some("gemini-2.5-flash"));
}

#[tokio::test]
async fn test_quiz_question_succeeds() {
    let (gateway, provider) =
        gateway_with(FakeProvider::new().with_response("trivia question", QUIZ_JSON));

    let outcome = gateway
        .request_quiz_question(Language::En, &CancellationToken::new())
        .await;

    assert!(outcome.is_succeeded());
    let question = outcome.value().unwrap();
    assert_eq!(question.options.len(), 4);
    assert_eq!(question.correct_index, 2);
    assert_eq!(question.correct_option(), Some("Meat"));
    assert_eq!(
        provider.requests()[0].response_schema,
        Some(quiz_schema())
    );
}

#[tokio::test]
async fn test_quiz_prompt_follows_language() {
    let (gateway, provider) = gateway_with(FakeProvider::new().with_default_response(QUIZ_JSON));

    gateway.quiz_question(Language::En).await.unwrap();
    gateway.quiz_question(Language::Id).await.unwrap();

    let prompts: Vec<String> = provider.requests().into_iter().map(|r| r.prompt).collect();
    assert!(prompts[0].starts_with("Generate a fun trivia question"));
    assert!(prompts[1].starts_with("Buatlah pertanyaan trivia"));
}

#[tokio::test]
async fn test_offline_content_answers_both_languages() {
    let (gateway, _provider) = gateway_with(FakeProvider::with_offline_content());

    for language in Language::ALL {
        let recipe = gateway.recipe("rice, bread", language).await;
        assert!(recipe.is_some(), "recipe in {language}");

        let question = gateway.quiz_question(language).await.unwrap();
        assert!(question.correct_index < question.options.len());
    }
}

// ============================================================================
// Failures Collapse To An Outcome
// ============================================================================

#[tokio::test]
async fn test_transport_error_fails() {
    let (gateway, provider) = gateway_with(FakeProvider::failing("connection reset"));

    let outcome = gateway
        .request_recipe("carrots", Language::En, &CancellationToken::new())
        .await;

    assert_eq!(outcome, GatewayOutcome::Failed);
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn test_empty_or_blank_answer_fails() {
    let (gateway, _) = gateway_with(FakeProvider::new().with_empty_response("trivia"));
    assert_eq!(
        gateway
            .request_quiz_question(Language::En, &CancellationToken::new())
            .await,
        GatewayOutcome::Failed
    );

    let (gateway, _) = gateway_with(FakeProvider::new().with_default_response("  \n "));
    assert!(gateway.quiz_question(Language::Id).await.is_none());
}

#[tokio::test]
async fn test_malformed_json_fails() {
    let (gateway, _) = gateway_with(FakeProvider::new().with_default_response("{\"title\": "));
    assert!(gateway.recipe("eggs", Language::En).await.is_none());
}

#[tokio::test]
async fn test_schema_mismatch_fails() {
    let missing_steps = r#"{"title": "Soup", "emoji": "🍲", "ingredients": ["water"]}"#;
    let (gateway, _) = gateway_with(FakeProvider::new().with_default_response(missing_steps));
    assert!(gateway.recipe("water", Language::En).await.is_none());

    let string_index =
        r#"{"question": "Q?", "options": ["a"], "correctIndex": "0", "explanation": "e"}"#;
    let (gateway, _) = gateway_with(FakeProvider::new().with_default_response(string_index));
    assert!(gateway.quiz_question(Language::En).await.is_none());
}

#[tokio::test]
async fn test_correct_index_out_of_range_fails() {
    for index in [3, 17, -1] {
        let (gateway, _) =
            gateway_with(FakeProvider::new().with_default_response(&quiz_with_index(index)));
        assert!(
            gateway.quiz_question(Language::En).await.is_none(),
            "index {index}"
        );
    }
}

// ============================================================================
// Timeout And Cancellation
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_slow_provider_times_out() {
    let (gateway, provider) = gateway_with(
        FakeProvider::new()
            .with_default_response(QUIZ_JSON)
            .with_delay(Duration::from_secs(60)),
    );

    let outcome = gateway
        .request_quiz_question(Language::En, &CancellationToken::new())
        .await;

    assert_eq!(outcome, GatewayOutcome::TimedOut);
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_answer_inside_timeout_succeeds() {
    let (gateway, _) = gateway_with(
        FakeProvider::new()
            .with_default_response(RECIPE_JSON)
            .with_delay(Duration::from_secs(2)),
    );

    assert!(gateway.recipe("bananas", Language::En).await.is_some());
}

#[tokio::test]
async fn test_cancelled_token_sends_nothing() {
    let (gateway, provider) =
        gateway_with(FakeProvider::new().with_default_response(RECIPE_JSON));
    let token = CancellationToken::new();
    token.cancel();

    let outcome = gateway.request_recipe("bread", Language::En, &token).await;

    assert_eq!(outcome, GatewayOutcome::Cancelled);
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_cancel_while_in_flight() {
    let (gateway, provider) = gateway_with(
        FakeProvider::new()
            .with_default_response(QUIZ_JSON)
            .with_delay(Duration::from_secs(3)),
    );
    let token = CancellationToken::new();

    let (outcome, ()) = tokio::join!(
        gateway.request_quiz_question(Language::Id, &token),
        async {
            sleep(Duration::from_secs(1)).await;
            token.cancel();
        }
    );

    assert_eq!(outcome, GatewayOutcome::Cancelled);
    assert_eq!(provider.call_count(), 1);
}

#[test]
fn test_outcome_collapses_to_option() {
    assert_eq!(GatewayOutcome::Succeeded(7).into_option(), Some(7));
    assert_eq!(GatewayOutcome::<i32>::Failed.into_option(), None);
    assert_eq!(GatewayOutcome::<i32>::TimedOut.into_option(), None);
    assert_eq!(GatewayOutcome::<i32>::Cancelled.into_option(), None);
    assert_eq!(GatewayOutcome::<i32>::TimedOut.label(), "timed_out");
}

// ============================================================================
// Decoding
// ============================================================================

#[test]
fn test_decode_recipe_ignores_surrounding_whitespace_and_extra_fields() {
    let text = r#"
        {"title": "Toast", "emoji": "🍞", "ingredients": [], "steps": ["Toast it."], "servings": 2}
    "#;
    let recipe: Recipe = decode_recipe(text).unwrap();
    assert_eq!(recipe.title, "Toast");
    assert!(recipe.ingredients.is_empty());
}

#[test]
fn test_decode_errors_name_the_problem() {
    assert!(matches!(
        decode_recipe("not json"),
        Err(DecodeError::InvalidJson(_))
    ));

    let err = decode_recipe(r#"{"title": "T", "emoji": null, "ingredients": [], "steps": []}"#)
        .unwrap_err();
    assert!(matches!(
        err,
        DecodeError::Schema(SchemaViolation::MissingField { ref path }) if path == "emoji"
    ));

    let err = decode_quiz_question(&quiz_with_index(-2)).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::CorrectIndexOutOfRange {
            index: -2,
            option_count: 3
        }
    ));
}

#[test]
fn test_decode_quiz_question_in_range() {
    let question: QuizQuestion = decode_quiz_question(&quiz_with_index(0)).unwrap();
    assert_eq!(question.correct_option(), Some("a"));
}

// ============================================================================
// Request Phase
// ============================================================================

#[test]
fn test_phase_refuses_overlapping_requests() {
    let mut phase: RequestPhase<u8> = RequestPhase::default();
    assert_eq!(phase, RequestPhase::Idle);

    assert!(phase.begin());
    assert!(phase.is_requesting());
    assert!(!phase.begin());

    assert!(phase.finish(GatewayOutcome::Succeeded(4)));
    assert_eq!(phase.value(), Some(&4));
}

#[test]
fn test_phase_ignores_outcome_without_request() {
    let mut phase: RequestPhase<u8> = RequestPhase::default();
    assert!(!phase.finish(GatewayOutcome::Succeeded(1)));
    assert_eq!(phase, RequestPhase::Idle);

    assert!(phase.begin());
    phase.reset();
    assert!(!phase.finish(GatewayOutcome::Failed));
    assert_eq!(phase, RequestPhase::Idle);
}

#[test]
fn test_phase_records_every_terminal_state() {
    let cases = [
        (GatewayOutcome::Failed, RequestPhase::Failed),
        (GatewayOutcome::TimedOut, RequestPhase::TimedOut),
        (GatewayOutcome::Cancelled, RequestPhase::Cancelled),
    ];
    for (outcome, expected) in cases {
        let mut phase: RequestPhase<u8> = RequestPhase::default();
        phase.begin();
        phase.finish(outcome);
        assert_eq!(phase, expected);
        assert!(phase.value().is_none());
        // A new request may start after any terminal state
        assert!(phase.begin());
    }
}
