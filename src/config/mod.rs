// ABOUTME: Configuration module; environment variables are the only configuration source
// ABOUTME: Exposes gateway settings and the lenient enum parsers they rely on
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eco-Bite Contributors
//! Configuration for Eco-Bite
//!
//! - **types**: `LogLevel`, `Environment`, `ProviderKind`
//! - **gateway**: `GatewayConfig` (model, timeout, provider)

/// AI gateway settings
pub mod gateway;
/// Shared configuration enums
pub mod types;

pub use gateway::GatewayConfig;
pub use types::{Environment, LogLevel, ProviderKind};
