// ABOUTME: AI content gateway issuing one structured request per recipe or trivia question
// ABOUTME: Bounds each call with a timeout, honours cancellation, and folds failures into outcomes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eco-Bite Contributors

//! # AI Content Gateway
//!
//! Every gateway call builds a prompt for the active language, declares the
//! response schema, sends exactly one request through an [`LlmProvider`] and
//! decodes the answer exactly once. Callers never see errors: a call ends in
//! a [`GatewayOutcome`], and the cause of any failure is logged.
//!
//! There is no retry, backoff, queueing or deduplication. Callers that must
//! not issue overlapping requests track that themselves with [`RequestPhase`].

mod cancellation;
/// Schema-checked decoding of model answers
pub mod decode;
mod phase;

pub use cancellation::CancellationToken;
pub use decode::DecodeError;
pub use phase::RequestPhase;

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use eco_bite_core::errors::AppError;
use eco_bite_core::models::{Language, QuizQuestion, Recipe};
use thiserror::Error;
use tokio::time::timeout;
use tracing::{info, instrument, warn};

use crate::config::GatewayConfig;
use crate::llm::schema::{quiz_schema, recipe_schema};
use crate::llm::{create_provider, prompts, GenerationRequest, LlmProvider};

/// Terminal state of one gateway call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayOutcome<T> {
    /// The model answered and the answer decoded
    Succeeded(T),
    /// Transport error, empty answer, or undecodable answer
    Failed,
    /// No answer within the configured timeout
    TimedOut,
    /// The caller cancelled before an answer arrived
    Cancelled,
}

impl<T> GatewayOutcome<T> {
    /// Collapse to the value, discarding why there is none
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Succeeded(value) => Some(value),
            Self::Failed | Self::TimedOut | Self::Cancelled => None,
        }
    }

    /// Whether the call produced a value
    #[must_use]
    pub const fn is_succeeded(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }

    /// Borrow the value, if any
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Succeeded(value) => Some(value),
            Self::Failed | Self::TimedOut | Self::Cancelled => None,
        }
    }

    /// Short name for logs
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Succeeded(_) => "succeeded",
            Self::Failed => "failed",
            Self::TimedOut => "timed_out",
            Self::Cancelled => "cancelled",
        }
    }
}

/// Why a call ended in [`GatewayOutcome::Failed`]
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The provider could not be reached or answered with an error
    #[error("provider error: {0}")]
    Transport(#[source] AppError),
    /// The provider answered without any text
    #[error("provider returned an empty response")]
    EmptyResponse,
    /// The answer could not be decoded
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Gateway to the generative AI service
#[derive(Clone)]
pub struct ContentGateway {
    provider: Arc<dyn LlmProvider>,
    model: String,
    request_timeout: Duration,
}

impl ContentGateway {
    /// Gateway over an existing provider
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>, config: &GatewayConfig) -> Self {
        Self {
            provider,
            model: config.model.clone(),
            request_timeout: config.request_timeout,
        }
    }

    /// Gateway over the provider selected by `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the provider cannot be created (missing API key).
    pub fn from_config(config: &GatewayConfig) -> Result<Self, AppError> {
        Ok(Self::new(create_provider(config)?, config))
    }

    /// Provider answering the requests
    #[must_use]
    pub fn provider(&self) -> &dyn LlmProvider {
        self.provider.as_ref()
    }

    /// Per-call timeout
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Ask for a recipe that uses the given leftovers
    ///
    /// The ingredient text is sent as typed; callers refuse blank text before
    /// calling.
    #[instrument(skip(self, ingredients, cancel), fields(language = %language))]
    pub async fn request_recipe(
        &self,
        ingredients: &str,
        language: Language,
        cancel: &CancellationToken,
    ) -> GatewayOutcome<Recipe> {
        let request = GenerationRequest::new(prompts::recipe_prompt(ingredients, language))
            .with_model(self.model.as_str())
            .with_response_schema(recipe_schema());
        self.run("recipe", &request, cancel, decode::decode_recipe)
            .await
    }

    /// Ask for a trivia question about food waste
    #[instrument(skip(self, cancel), fields(language = %language))]
    pub async fn request_quiz_question(
        &self,
        language: Language,
        cancel: &CancellationToken,
    ) -> GatewayOutcome<QuizQuestion> {
        let request = GenerationRequest::new(prompts::quiz_prompt(language))
            .with_model(self.model.as_str())
            .with_response_schema(quiz_schema());
        self.run("quiz", &request, cancel, decode::decode_quiz_question)
            .await
    }

    /// Recipe or `None`, for callers that do not cancel
    pub async fn recipe(&self, ingredients: &str, language: Language) -> Option<Recipe> {
        self.request_recipe(ingredients, language, &CancellationToken::new())
            .await
            .into_option()
    }

    /// Trivia question or `None`, for callers that do not cancel
    pub async fn quiz_question(&self, language: Language) -> Option<QuizQuestion> {
        self.request_quiz_question(language, &CancellationToken::new())
            .await
            .into_option()
    }

    async fn run<T>(
        &self,
        operation: &'static str,
        request: &GenerationRequest,
        cancel: &CancellationToken,
        decode: fn(&str) -> Result<T, DecodeError>,
    ) -> GatewayOutcome<T> {
        if cancel.is_cancelled() {
            info!(operation, "request cancelled before it was sent");
            return GatewayOutcome::Cancelled;
        }

        let started = Instant::now();
        let outcome = tokio::select! {
            biased;
            () = cancel.cancelled() => GatewayOutcome::Cancelled,
            result = self.bounded(operation, self.attempt(request, decode)) => result,
        };

        info!(
            operation,
            outcome = outcome.label(),
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "AI request finished"
        );
        outcome
    }

    async fn bounded<T>(
        &self,
        operation: &'static str,
        call: impl Future<Output = Result<T, GatewayError>>,
    ) -> GatewayOutcome<T> {
        match timeout(self.request_timeout, call).await {
            Err(_elapsed) => {
                warn!(
                    operation,
                    timeout_secs = self.request_timeout.as_secs(),
                    "AI request timed out"
                );
                GatewayOutcome::TimedOut
            }
            Ok(Ok(value)) => GatewayOutcome::Succeeded(value),
            Ok(Err(error)) => {
                warn!(
                    operation,
                    provider = self.provider.name(),
                    error = %error,
                    "AI request failed"
                );
                GatewayOutcome::Failed
            }
        }
    }

    async fn attempt<T>(
        &self,
        request: &GenerationRequest,
        decode: fn(&str) -> Result<T, DecodeError>,
    ) -> Result<T, GatewayError> {
        let response = self
            .provider
            .generate(request)
            .await
            .map_err(GatewayError::Transport)?;
        let text = response
            .text
            .filter(|text| !text.trim().is_empty())
            .ok_or(GatewayError::EmptyResponse)?;
        Ok(decode(&text)?)
    }
}

impl Debug for ContentGateway {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ContentGateway")
            .field("provider", &self.provider.name())
            .field("model", &self.model)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
