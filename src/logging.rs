// ABOUTME: Logging configuration and structured logging setup for observability and debugging
// ABOUTME: Configures log level, output format, and noise reduction for the HTTP stack
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eco-Bite Contributors

//! Structured logging configuration
//!
//! Logs go to stderr so command output on stdout stays clean.

use anyhow::{Context, Result};
use std::env;
use std::io;
use tracing::{info, Level};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::{Environment, LogLevel};

/// Service name attached to startup logs
pub const SERVICE_NAME: &str = "eco-bite";

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: LogLevel,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include span open/close events
    pub include_spans: bool,
    /// Deployment environment
    pub environment: Environment,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Full single-line format with targets and locations for development
    Pretty,
    /// Compact format for interactive terminals
    Compact,
}

impl LogFormat {
    /// Parse from string, defaulting to compact
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            _ => Self::Compact,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Warn,
            format: LogFormat::Compact,
            include_location: false,
            include_spans: false,
            environment: Environment::Development,
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    ///
    /// Reads `RUST_LOG` (level), `LOG_FORMAT` (json|pretty|compact),
    /// `ENVIRONMENT`, `LOG_INCLUDE_LOCATION` and `LOG_INCLUDE_SPANS`.
    #[must_use]
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        let is_production = environment.is_production();

        Self {
            level: env::var("RUST_LOG")
                .map(|s| LogLevel::from_str_or_default(&s))
                .unwrap_or(LogLevel::Warn),
            format: env::var("LOG_FORMAT").map_or_else(
                |_| {
                    if is_production {
                        LogFormat::Json
                    } else {
                        LogFormat::Compact
                    }
                },
                |s| LogFormat::from_str_or_default(&s),
            ),
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_spans: env::var("LOG_INCLUDE_SPANS").is_ok(),
            environment,
        }
    }

    /// Override the level (used by the CLI `--verbose` flag)
    #[must_use]
    pub const fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Build the filter: `RUST_LOG` directives if set, plus our noise reduction
    fn env_filter(&self) -> EnvFilter {
        let base = env::var("RUST_LOG").map_or_else(
            |_| EnvFilter::new(self.level.to_string()),
            |directive| EnvFilter::new(&directive),
        );

        base.add_directive(
            "hyper=warn"
                .parse()
                .unwrap_or_else(|_| Level::WARN.into()),
        )
        .add_directive(
            "reqwest=warn"
                .parse()
                .unwrap_or_else(|_| Level::WARN.into()),
        )
        .add_directive(
            format!("eco_bite={}", self.level)
                .parse()
                .unwrap_or_else(|_| self.level.to_tracing_level().into()),
        )
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());
        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        match self.format {
            LogFormat::Json => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(true)
                        .with_writer(io::stderr)
                        .with_span_events(span_events)
                        .json(),
                )
                .try_init(),
            LogFormat::Pretty => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(true)
                        .with_writer(io::stderr)
                        .with_span_events(span_events),
                )
                .try_init(),
            LogFormat::Compact => registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_target(false)
                        .with_writer(io::stderr)
                        .with_span_events(FmtSpan::NONE),
                )
                .try_init(),
        }
        .context("failed to install tracing subscriber")?;

        info!(
            service.name = SERVICE_NAME,
            service.version = env!("CARGO_PKG_VERSION"),
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "Logging initialized"
        );
        Ok(())
    }
}
