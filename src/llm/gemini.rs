// ABOUTME: Google Gemini provider producing schema-constrained JSON via generateContent
// ABOUTME: Maps HTTP and quota failures to AppError and never logs the API key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eco-Bite Contributors

//! # Gemini Provider
//!
//! Implementation of the `LlmProvider` trait for Google's Gemini models.
//!
//! ## Configuration
//!
//! Set `GEMINI_API_KEY` (or the legacy `API_KEY`) with a key from
//! Google AI Studio.
//!
//! ## Example
//!
//! ```rust,no_run
//! use eco_bite::llm::{GeminiProvider, GenerationRequest, LlmProvider};
//! use eco_bite_core::errors::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let provider = GeminiProvider::from_env()?;
//!     let request = GenerationRequest::new("Name one way to reuse stale bread");
//!     let response = provider.generate(&request).await?;
//!     println!("{}", response.text.unwrap_or_default());
//!     Ok(())
//! }
//! ```

use std::env;
use std::fmt::{Debug, Formatter, Result as FmtResult};

use async_trait::async_trait;
use eco_bite_core::constants::ai::{DEFAULT_MODEL, JSON_MIME_TYPE};
use eco_bite_core::errors::{AppError, ErrorCode};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument, warn};

use super::{
    GenerationRequest, GenerationResponse, LlmCapabilities, LlmProvider, ResponseSchema,
    TokenUsage,
};

/// Environment variable for the Gemini API key
const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Older variable name, still honoured when the primary one is unset
const LEGACY_API_KEY_ENV: &str = "API_KEY";

/// Base URL for the Gemini API
const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Header carrying the API key; keeps the key out of URLs and error messages
const API_KEY_HEADER: &str = "x-goog-api-key";

const SERVICE_NAME: &str = "Gemini";

// ============================================================================
// API Request/Response Types
// ============================================================================

/// Gemini API request structure
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent>,
    generation_config: GenerationConfig<'a>,
}

/// Content structure for Gemini API
#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<ContentPart>,
}

impl GeminiContent {
    fn user(text: &str) -> Self {
        Self {
            role: Some("user".to_owned()),
            parts: vec![ContentPart {
                text: Some(text.to_owned()),
            }],
        }
    }
}

/// Part of content; non-text parts deserialize with `text: None`
#[derive(Debug, Serialize, Deserialize)]
struct ContentPart {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

/// Generation configuration
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    candidate_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<&'a ResponseSchema>,
}

/// Gemini API response structure
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    candidates: Option<Vec<Candidate>>,
    usage_metadata: Option<UsageMetadata>,
    prompt_feedback: Option<PromptFeedback>,
    error: Option<GeminiError>,
}

/// Response candidate
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<GeminiContent>,
    finish_reason: Option<String>,
}

/// Set when the prompt itself was rejected
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

/// Usage metadata from Gemini API response
#[derive(Debug, Deserialize)]
struct UsageMetadata {
    #[serde(rename = "promptTokenCount")]
    prompt: Option<u32>,
    #[serde(rename = "candidatesTokenCount")]
    candidates: Option<u32>,
    #[serde(rename = "totalTokenCount")]
    total: Option<u32>,
}

/// API error response from Gemini
#[derive(Debug, Deserialize)]
struct GeminiError {
    message: String,
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Google Gemini LLM provider
pub struct GeminiProvider {
    api_key: String,
    client: Client,
    default_model: String,
    base_url: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider with an API key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            client: Client::new(),
            default_model: DEFAULT_MODEL.to_owned(),
            base_url: API_BASE_URL.to_owned(),
        }
    }

    /// Create a provider from `GEMINI_API_KEY`, falling back to `API_KEY`
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_MISSING` if neither variable holds a non-blank key.
    pub fn from_env() -> Result<Self, AppError> {
        [GEMINI_API_KEY_ENV, LEGACY_API_KEY_ENV]
            .iter()
            .find_map(|name| env::var(name).ok().filter(|key| !key.trim().is_empty()))
            .map(Self::new)
            .ok_or_else(|| {
                AppError::config_missing(format!(
                    "{GEMINI_API_KEY_ENV} environment variable not set"
                ))
            })
    }

    /// Set a custom default model
    #[must_use]
    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    /// Point the provider at a different API root (proxies, regional endpoints)
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    /// Build the API URL for a model and method
    fn build_url(&self, model: &str, method: &str) -> String {
        format!("{}/models/{model}:{method}", self.base_url)
    }

    /// Build a Gemini API request from a `GenerationRequest`
    fn build_gemini_request(request: &GenerationRequest) -> GeminiRequest<'_> {
        let schema = request.response_schema.as_ref();
        GeminiRequest {
            contents: vec![GeminiContent::user(&request.prompt)],
            generation_config: GenerationConfig {
                candidate_count: 1,
                response_mime_type: schema.map(|_| JSON_MIME_TYPE),
                response_schema: schema,
            },
        }
    }

    /// Concatenate the text parts of the first candidate
    fn extract_text(response: &GeminiResponse) -> Option<String> {
        response
            .candidates
            .as_ref()
            .and_then(|c| c.first())
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|part| part.text.as_deref())
                    .collect::<String>()
            })
    }

    fn finish_reason(response: &GeminiResponse) -> Option<String> {
        response
            .candidates
            .as_ref()
            .and_then(|c| c.first())
            .and_then(|c| c.finish_reason.clone())
            .or_else(|| {
                response
                    .prompt_feedback
                    .as_ref()
                    .and_then(|f| f.block_reason.clone())
            })
    }

    /// Convert usage metadata to our token usage format
    fn convert_usage(metadata: &UsageMetadata) -> TokenUsage {
        TokenUsage {
            prompt_tokens: metadata.prompt.unwrap_or(0),
            completion_tokens: metadata.candidates.unwrap_or(0),
            total_tokens: metadata.total.unwrap_or(0),
        }
    }

    /// Map API error status to appropriate error type
    fn map_api_error(status: u16, response_text: &str) -> AppError {
        let message = serde_json::from_str::<GeminiResponse>(response_text)
            .ok()
            .and_then(|r| r.error)
            .map_or_else(|| response_text.to_owned(), |e| e.message);

        match status {
            429 => AppError::new(
                ErrorCode::ExternalRateLimited,
                Self::extract_quota_message(&message),
            ),
            401 | 403 => AppError::new(
                ErrorCode::ExternalAuthFailed,
                format!("{SERVICE_NAME} rejected the API key: {message}"),
            ),
            500..=599 => AppError::external_unavailable(
                SERVICE_NAME,
                format!("server error ({status}): {message}"),
            ),
            _ => AppError::external_service(
                SERVICE_NAME,
                format!("API error ({status}): {message}"),
            ),
        }
    }

    /// Extract a user-friendly quota message from a Gemini error
    ///
    /// Gemini phrases the wait as `Please retry in 6.406453963s.`
    fn extract_quota_message(message: &str) -> String {
        const RETRY_PREFIX: &str = "Please retry in ";

        let seconds = message
            .find(RETRY_PREFIX)
            .map(|pos| &message[pos + RETRY_PREFIX.len()..])
            .and_then(|rest| rest.split_once('s'))
            .and_then(|(value, _)| value.parse::<f64>().ok())
            .filter(|secs| secs.is_finite() && *secs >= 0.0);

        match seconds {
            Some(secs) => {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let secs = secs.ceil() as u64;
                format!("AI service quota exceeded. Please try again in {secs} seconds.")
            }
            None => "AI service quota exceeded. Please wait a moment and try again.".to_owned(),
        }
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn display_name(&self) -> &'static str {
        "Google Gemini"
    }

    fn capabilities(&self) -> LlmCapabilities {
        LlmCapabilities::structured()
    }

    fn default_model(&self) -> &str {
        &self.default_model
    }

    #[instrument(skip(self, request), fields(model = %request.model.as_deref().unwrap_or(&self.default_model)))]
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse, AppError> {
        let model = request.model.as_deref().unwrap_or(&self.default_model);
        let url = self.build_url(model, "generateContent");
        let gemini_request = Self::build_gemini_request(request);

        debug!(
            structured = request.response_schema.is_some(),
            "Sending request to Gemini API"
        );

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&gemini_request)
            .send()
            .await
            .map_err(|e| {
                AppError::external_unavailable(SERVICE_NAME, format!("HTTP request failed: {e}"))
                    .with_source(e)
            })?;

        let status = response.status();
        let response_text = response.text().await.map_err(|e| {
            AppError::external_unavailable(SERVICE_NAME, format!("failed to read response: {e}"))
                .with_source(e)
        })?;

        if !status.is_success() {
            error!(status = %status, "Gemini API error");
            return Err(Self::map_api_error(status.as_u16(), &response_text));
        }

        let gemini_response: GeminiResponse =
            serde_json::from_str(&response_text).map_err(|e| {
                error!(error = %e, "Failed to parse Gemini response envelope");
                AppError::serialization(format!("failed to parse Gemini response: {e}"))
                    .with_source(e)
            })?;

        if let Some(error) = gemini_response.error {
            return Err(AppError::external_service(SERVICE_NAME, error.message));
        }

        let text = Self::extract_text(&gemini_response);
        let finish_reason = Self::finish_reason(&gemini_response);
        if text.is_none() {
            warn!(finish_reason = ?finish_reason, "Gemini returned no text");
        }

        debug!("Received Gemini response");

        Ok(GenerationResponse {
            text,
            model: model.to_owned(),
            usage: gemini_response
                .usage_metadata
                .as_ref()
                .map(Self::convert_usage),
            finish_reason,
        })
    }
}

impl Debug for GeminiProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("GeminiProvider")
            .field("default_model", &self.default_model)
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}
