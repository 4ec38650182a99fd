// ABOUTME: Main library entry point for the Eco-Bite food-waste awareness toolkit
// ABOUTME: Wires the AI content gateway, session state, bilingual text, config, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eco-Bite Contributors

#![deny(unsafe_code)]

//! # Eco-Bite
//!
//! Core of a food-waste awareness app for young people: it estimates the
//! money and CO2 cost of wasted food and asks a generative AI service for
//! leftover recipes and trivia questions.
//!
//! ## Architecture
//!
//! - **`eco_bite_core`**: Error types, domain models, fixed coefficients
//! - **`eco_bite_intelligence`**: Impact estimator, input coercion, quiz rounds
//! - **gateway**: One structured AI request per call, bounded and cancellable
//! - **llm**: Provider trait with Gemini and offline implementations
//! - **session**: Explicit per-user state with pure transitions
//! - **i18n**: English and Indonesian text
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use eco_bite::config::GatewayConfig;
//! use eco_bite::gateway::ContentGateway;
//! use eco_bite::intelligence::{estimate_impact, format_money};
//! use eco_bite_core::errors::AppResult;
//! use eco_bite_core::models::{Language, WasteInputs};
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let impact = estimate_impact(&WasteInputs::new(2, 0, 0, 1));
//!     println!("{}", format_money(impact.monetary_loss, Language::En));
//!
//!     let gateway = ContentGateway::from_config(&GatewayConfig::from_env()?)?;
//!     if let Some(recipe) = gateway.recipe("stale bread, 2 eggs", Language::En).await {
//!         println!("{} {}", recipe.emoji, recipe.title);
//!     }
//!     Ok(())
//! }
//! ```

/// Environment-driven configuration
pub mod config;

/// AI content gateway
pub mod gateway;

/// English and Indonesian UI text and tips
pub mod i18n;

/// LLM provider abstraction
pub mod llm;

/// Structured logging setup
pub mod logging;

/// Session state and transitions
pub mod session;

pub use eco_bite_core as core;
pub use eco_bite_intelligence as intelligence;
