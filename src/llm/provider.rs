// ABOUTME: Provider factory turning gateway configuration into a concrete LLM backend
// ABOUTME: Gemini reads its key from the environment; the fake needs no credentials
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eco-Bite Contributors

use std::sync::Arc;

use eco_bite_core::errors::AppError;
use tracing::{debug, info};

use super::{FakeProvider, GeminiProvider, LlmProvider};
use crate::config::{GatewayConfig, ProviderKind};

/// Create the provider selected by `config`
///
/// # Errors
///
/// Returns `CONFIG_MISSING` when Gemini is selected and no API key is set.
pub fn create_provider(config: &GatewayConfig) -> Result<Arc<dyn LlmProvider>, AppError> {
    info!(
        "Initializing LLM provider: {} (set {} to change)",
        config.provider,
        ProviderKind::ENV_VAR
    );

    let provider: Arc<dyn LlmProvider> = match config.provider {
        ProviderKind::Gemini => {
            Arc::new(GeminiProvider::from_env()?.with_default_model(config.model.clone()))
        }
        ProviderKind::Fake => Arc::new(FakeProvider::with_offline_content()),
    };

    debug!(
        "Provider {} initialized with model: {}",
        provider.display_name(),
        provider.default_model()
    );
    Ok(provider)
}
