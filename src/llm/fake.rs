// ABOUTME: Deterministic offline provider answering prompts from registered substrings
// ABOUTME: Used by tests and by the CLI --offline mode; can also fail, stall, or go silent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eco-Bite Contributors

//! Fake LLM provider.
//!
//! Responses are matched by checking whether the prompt contains a registered
//! substring (case-insensitive, first registration wins). Requests are
//! recorded so callers can assert on what was sent.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use eco_bite_core::errors::AppError;
use tokio::time::sleep;

use super::{GenerationRequest, GenerationResponse, LlmCapabilities, LlmProvider};

const FAKE_MODEL: &str = "fake-model";

/// What the fake does when a rule matches
#[derive(Debug, Clone, PartialEq, Eq)]
enum FakeReply {
    Text(String),
    Empty,
    Fail(String),
}

/// A fake LLM provider
#[derive(Debug, Default)]
pub struct FakeProvider {
    rules: Vec<(String, FakeReply)>,
    fallback: Option<FakeReply>,
    delay: Option<Duration>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl FakeProvider {
    /// Provider with no registered responses; unmatched prompts fail
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer prompts containing `prompt_contains` with `response`
    #[must_use]
    pub fn with_response(mut self, prompt_contains: &str, response: &str) -> Self {
        self.rules.push((
            prompt_contains.to_lowercase(),
            FakeReply::Text(response.to_owned()),
        ));
        self
    }

    /// Answer prompts containing `prompt_contains` with no text at all
    #[must_use]
    pub fn with_empty_response(mut self, prompt_contains: &str) -> Self {
        self.rules.push((prompt_contains.to_lowercase(), FakeReply::Empty));
        self
    }

    /// Answer every unmatched prompt with `response`
    #[must_use]
    pub fn with_default_response(mut self, response: &str) -> Self {
        self.fallback = Some(FakeReply::Text(response.to_owned()));
        self
    }

    /// Fail every unmatched prompt with a transport error
    #[must_use]
    pub fn failing(message: &str) -> Self {
        Self {
            fallback: Some(FakeReply::Fail(message.to_owned())),
            ..Self::default()
        }
    }

    /// Sleep before answering (exercises timeouts and cancellation)
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Canned English and Indonesian recipes and trivia for offline use
    #[must_use]
    pub fn with_offline_content() -> Self {
        Self::new()
            .with_response(
                "leftovers",
                r#"{
                    "title": "Crispy Bread Crumb Fried Rice",
                    "emoji": "🍳",
                    "ingredients": ["2 cups leftover rice", "1 cup stale bread, crumbled", "1 egg", "Soy sauce"],
                    "steps": ["Toast the bread crumbs in a dry pan.", "Scramble the egg, add rice and soy sauce.", "Fold in the crumbs and serve hot."]
                }"#,
            )
            .with_response(
                "sisa bahan",
                r#"{
                    "title": "Nasi Goreng Remah Roti",
                    "emoji": "🍳",
                    "ingredients": ["2 piring nasi sisa", "1 lembar roti tawar, diremas", "1 butir telur", "Kecap manis"],
                    "steps": ["Sangrai remah roti sampai renyah.", "Orak-arik telur, masukkan nasi dan kecap.", "Taburi remah roti lalu sajikan hangat."]
                }"#,
            )
            .with_response(
                "trivia question",
                r#"{
                    "question": "Roughly how much of all food produced worldwide is lost or wasted?",
                    "options": ["One tenth", "One third", "One half", "Two thirds"],
                    "correctIndex": 1,
                    "explanation": "About one third of food produced for people is lost or wasted every year."
                }"#,
            )
            .with_response(
                "pertanyaan trivia",
                r#"{
                    "question": "Kira-kira berapa bagian dari seluruh makanan yang diproduksi di dunia terbuang?",
                    "options": ["Sepersepuluh", "Sepertiga", "Setengah", "Dua pertiga"],
                    "correctIndex": 1,
                    "explanation": "Sekitar sepertiga makanan yang diproduksi untuk manusia hilang atau terbuang setiap tahun."
                }"#,
            )
    }

    /// Requests received so far, oldest first
    #[must_use]
    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of requests received so far
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn reply_for(&self, prompt: &str) -> Option<&FakeReply> {
        let prompt_lower = prompt.to_lowercase();
        self.rules
            .iter()
            .find(|(pattern, _)| prompt_lower.contains(pattern.as_str()))
            .map(|(_, reply)| reply)
            .or(self.fallback.as_ref())
    }
}

#[async_trait]
impl LlmProvider for FakeProvider {
    fn name(&self) -> &'static str {
        "fake"
    }

    fn display_name(&self) -> &'static str {
        "Offline Fake"
    }

    fn capabilities(&self) -> LlmCapabilities {
        LlmCapabilities::structured()
    }

    fn default_model(&self) -> &str {
        FAKE_MODEL
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse, AppError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());

        if let Some(delay) = self.delay {
            sleep(delay).await;
        }

        let model = request.model.as_deref().unwrap_or(FAKE_MODEL);
        match self.reply_for(&request.prompt) {
            Some(FakeReply::Text(text)) => Ok(GenerationResponse::text(text.clone(), model)),
            Some(FakeReply::Empty) => Ok(GenerationResponse::empty(model)),
            Some(FakeReply::Fail(message)) => {
                Err(AppError::external_unavailable("fake", message.clone()))
            }
            None => {
                let preview: String = request.prompt.chars().take(100).collect();
                Err(AppError::external_service(
                    "fake",
                    format!("no response configured for prompt (first 100 chars): {preview}"),
                ))
            }
        }
    }
}
