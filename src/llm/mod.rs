// ABOUTME: LLM provider abstraction for structured content generation
// ABOUTME: Defines the provider contract, request/response types, and capability flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eco-Bite Contributors

//! # LLM Provider Interface
//!
//! Every AI backend implements [`LlmProvider`]: it receives a single prompt,
//! optionally constrained by a [`ResponseSchema`], and returns the raw text
//! the model produced. Decoding that text into domain types happens in the
//! gateway, never in a provider.
//!
//! ## Key Concepts
//!
//! - **`LlmCapabilities`**: Bitflags describing provider features
//! - **`LlmProvider`**: Async trait for one-shot generation
//! - **`GenerationRequest`**: Prompt, model, and response schema
//!
//! ## Example: Using a Provider
//!
//! ```rust,no_run
//! use eco_bite::llm::{GenerationRequest, LlmProvider};
//! use eco_bite::llm::schema::quiz_schema;
//!
//! async fn example(provider: &dyn LlmProvider) {
//!     let request = GenerationRequest::new("Ask me about composting")
//!         .with_response_schema(quiz_schema());
//!     let response = provider.generate(&request).await;
//! }
//! ```

mod fake;
mod gemini;
pub mod prompts;
mod provider;
pub mod schema;

pub use fake::FakeProvider;
pub use gemini::GeminiProvider;
pub use provider::create_provider;
pub use schema::ResponseSchema;

use async_trait::async_trait;
use eco_bite_core::errors::AppError;
use serde::{Deserialize, Serialize};

// ============================================================================
// Capability Flags
// ============================================================================

bitflags::bitflags! {
    /// LLM provider capability flags
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct LlmCapabilities: u8 {
        /// Provider honours a response schema (JSON mode)
        const JSON_MODE = 0b0000_0001;
    }
}

impl LlmCapabilities {
    /// Capabilities of a provider that can produce schema-constrained JSON
    #[must_use]
    pub const fn structured() -> Self {
        Self::JSON_MODE
    }

    /// Check if JSON mode is supported
    #[must_use]
    pub const fn supports_json_mode(&self) -> bool {
        self.contains(Self::JSON_MODE)
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// A single generation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Prompt sent as the user turn
    pub prompt: String,
    /// Model identifier (provider default when `None`)
    pub model: Option<String>,
    /// Schema the answer must follow; `None` means free text
    pub response_schema: Option<ResponseSchema>,
}

impl GenerationRequest {
    /// Create a request for a prompt
    #[must_use]
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: None,
            response_schema: None,
        }
    }

    /// Set the model to use
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Constrain the answer to a JSON schema
    #[must_use]
    pub fn with_response_schema(mut self, schema: ResponseSchema) -> Self {
        self.response_schema = Some(schema);
        self
    }
}

/// Response from a generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResponse {
    /// Generated text; `None` when the model produced nothing
    pub text: Option<String>,
    /// Model used for generation
    pub model: String,
    /// Token usage statistics
    pub usage: Option<TokenUsage>,
    /// Finish reason (stop, length, safety block, etc.)
    pub finish_reason: Option<String>,
}

impl GenerationResponse {
    /// Response carrying text
    #[must_use]
    pub fn text(text: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            model: model.into(),
            usage: None,
            finish_reason: Some("STOP".to_owned()),
        }
    }

    /// Response with no text at all
    #[must_use]
    pub fn empty(model: impl Into<String>) -> Self {
        Self {
            text: None,
            model: model.into(),
            usage: None,
            finish_reason: None,
        }
    }
}

/// Token usage statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Number of tokens in the prompt
    pub prompt_tokens: u32,
    /// Number of tokens in the completion
    pub completion_tokens: u32,
    /// Total tokens used
    pub total_tokens: u32,
}

// ============================================================================
// Provider Trait
// ============================================================================

/// LLM provider trait for one-shot generation
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Unique provider identifier (e.g., "gemini", "fake")
    fn name(&self) -> &'static str;

    /// Human-readable display name for the provider
    fn display_name(&self) -> &'static str;

    /// Provider capabilities
    fn capabilities(&self) -> LlmCapabilities;

    /// Default model to use if not specified in request
    fn default_model(&self) -> &str;

    /// Generate a response for a request
    ///
    /// Transport and API failures are errors; a reply without text is a
    /// successful response whose `text` is `None`.
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse, AppError>;
}
