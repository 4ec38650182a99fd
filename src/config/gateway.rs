// ABOUTME: AI gateway configuration loaded from environment variables
// ABOUTME: Provider selection, model identifier, and the per-request timeout bound
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eco-Bite Contributors

use std::env;
use std::time::Duration;

use eco_bite_core::constants::ai::{DEFAULT_MODEL, DEFAULT_REQUEST_TIMEOUT_SECS};
use eco_bite_core::errors::{AppError, AppResult};
use tracing::debug;

use super::types::ProviderKind;

/// Settings for the AI content gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Backend answering the requests
    pub provider: ProviderKind,
    /// Model identifier sent with every request
    pub model: String,
    /// Upper bound on a single request before it is reported as timed out
    pub request_timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::default(),
            model: DEFAULT_MODEL.to_owned(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl GatewayConfig {
    /// Environment variable overriding the model identifier
    pub const MODEL_ENV_VAR: &'static str = "ECO_BITE_LLM_MODEL";

    /// Environment variable overriding the request timeout, in whole seconds
    pub const TIMEOUT_ENV_VAR: &'static str = "ECO_BITE_AI_TIMEOUT_SECS";

    /// Load configuration from the environment, falling back to defaults
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_INVALID` if the timeout is not a positive integer.
    pub fn from_env() -> AppResult<Self> {
        let model = match env::var(Self::MODEL_ENV_VAR) {
            Ok(model) if !model.trim().is_empty() => model.trim().to_owned(),
            _ => DEFAULT_MODEL.to_owned(),
        };

        let request_timeout = match env::var(Self::TIMEOUT_ENV_VAR) {
            Ok(raw) => Self::parse_timeout(&raw)?,
            Err(_) => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        let config = Self {
            provider: ProviderKind::from_env(),
            model,
            request_timeout,
        };
        debug!(
            provider = %config.provider,
            model = %config.model,
            timeout_secs = config.request_timeout.as_secs(),
            "Loaded gateway configuration"
        );
        Ok(config)
    }

    /// Override the provider
    #[must_use]
    pub const fn with_provider(mut self, provider: ProviderKind) -> Self {
        self.provider = provider;
        self
    }

    /// Override the request timeout
    #[must_use]
    pub const fn with_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    fn parse_timeout(raw: &str) -> AppResult<Duration> {
        match raw.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
            _ => Err(AppError::config_invalid(format!(
                "{} must be a positive number of seconds, got '{raw}'",
                Self::TIMEOUT_ENV_VAR
            ))),
        }
    }
}
