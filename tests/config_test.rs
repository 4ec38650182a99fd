// ABOUTME: Tests for environment-driven configuration of the gateway, provider, and logging
// ABOUTME: Env-mutating tests run serially so they cannot observe each other's variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eco-Bite Contributors

#![allow(missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::env;
use std::time::Duration;

use eco_bite::config::{Environment, GatewayConfig, LogLevel, ProviderKind};
use eco_bite::gateway::ContentGateway;
use eco_bite::llm::GeminiProvider;
use eco_bite::logging::{LogFormat, LoggingConfig};
use eco_bite_core::errors::ErrorCode;
use serial_test::serial;

const GATEWAY_VARS: [&str; 5] = [
    GatewayConfig::MODEL_ENV_VAR,
    GatewayConfig::TIMEOUT_ENV_VAR,
    ProviderKind::ENV_VAR,
    "GEMINI_API_KEY",
    "API_KEY",
];

fn clear_gateway_env() {
    for name in GATEWAY_VARS {
        env::remove_var(name);
    }
}

// ============================================================================
// Parsing Helpers
// ============================================================================

#[test]
fn test_log_level_parsing() {
    assert_eq!(LogLevel::from_str_or_default("error"), LogLevel::Error);
    assert_eq!(LogLevel::from_str_or_default("WARN"), LogLevel::Warn);
    assert_eq!(LogLevel::from_str_or_default("Debug"), LogLevel::Debug);
    assert_eq!(LogLevel::from_str_or_default("nonsense"), LogLevel::Info);
    assert_eq!(LogLevel::Trace.to_string(), "trace");
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str_or_default("JSON"), LogFormat::Json);
    assert_eq!(LogFormat::from_str_or_default("pretty"), LogFormat::Pretty);
    assert_eq!(LogFormat::from_str_or_default("whatever"), LogFormat::Compact);
}

#[test]
fn test_provider_kind_parsing() {
    assert_eq!(ProviderKind::from_str_or_default("fake"), ProviderKind::Fake);
    assert_eq!(ProviderKind::from_str_or_default("OFFLINE"), ProviderKind::Fake);
    assert_eq!(ProviderKind::from_str_or_default("gemini"), ProviderKind::Gemini);
    assert_eq!(ProviderKind::from_str_or_default(""), ProviderKind::Gemini);
    assert_eq!(ProviderKind::Fake.to_string(), "fake");
}

#[test]
fn test_environment_parsing() {
    assert!(Environment::from_str_or_default("prod").is_production());
    assert_eq!(
        Environment::from_str_or_default("PRODUCTION"),
        Environment::Production
    );
    assert_eq!(Environment::Production.to_string(), "production");
    assert_eq!(
        Environment::from_str_or_default("test"),
        Environment::Development
    );
    assert_eq!(
        Environment::from_str_or_default("anything"),
        Environment::Development
    );
}

// ============================================================================
// Gateway Configuration
// ============================================================================

#[test]
#[serial]
fn test_gateway_defaults() {
    clear_gateway_env();

    let config = GatewayConfig::from_env().unwrap();
    assert_eq!(config, GatewayConfig::default());
    assert_eq!(config.provider, ProviderKind::Gemini);
    assert_eq!(config.model, "gemini-2.5-flash");
    assert_eq!(config.request_timeout, Duration::from_secs(30));
}

#[test]
#[serial]
fn test_gateway_overrides() {
    clear_gateway_env();
    env::set_var(GatewayConfig::MODEL_ENV_VAR, " gemini-2.5-pro ");
    env::set_var(GatewayConfig::TIMEOUT_ENV_VAR, "12");
    env::set_var(ProviderKind::ENV_VAR, "fake");

    let config = GatewayConfig::from_env().unwrap();
    clear_gateway_env();

    assert_eq!(config.model, "gemini-2.5-pro");
    assert_eq!(config.request_timeout, Duration::from_secs(12));
    assert_eq!(config.provider, ProviderKind::Fake);
}

#[test]
#[serial]
fn test_gateway_rejects_bad_timeout() {
    for raw in ["0", "-3", "soon", "1.5"] {
        clear_gateway_env();
        env::set_var(GatewayConfig::TIMEOUT_ENV_VAR, raw);

        let err = GatewayConfig::from_env().unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalid, "{raw}");
    }
    clear_gateway_env();
}

#[test]
#[serial]
fn test_blank_model_falls_back_to_default() {
    clear_gateway_env();
    env::set_var(GatewayConfig::MODEL_ENV_VAR, "   ");

    let config = GatewayConfig::from_env().unwrap();
    clear_gateway_env();
    assert_eq!(config.model, "gemini-2.5-flash");
}

// ============================================================================
// Provider Selection
// ============================================================================

#[test]
#[serial]
fn test_gemini_requires_api_key() {
    clear_gateway_env();

    let err = GeminiProvider::from_env().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigMissing);

    let err = ContentGateway::from_config(&GatewayConfig::default()).unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigMissing);
}

#[test]
#[serial]
fn test_gemini_key_fallback_variable() {
    clear_gateway_env();
    env::set_var("API_KEY", "legacy-key");

    let gateway = ContentGateway::from_config(&GatewayConfig::default());
    clear_gateway_env();

    let gateway = gateway.unwrap();
    assert_eq!(gateway.provider().name(), "gemini");
    assert!(!format!("{gateway:?}").contains("legacy-key"));
}

#[test]
#[serial]
fn test_fake_provider_needs_no_key() {
    clear_gateway_env();
    let config = GatewayConfig::default()
        .with_provider(ProviderKind::Fake)
        .with_timeout(Duration::from_secs(3));

    let gateway = ContentGateway::from_config(&config).unwrap();
    assert_eq!(gateway.provider().name(), "fake");
    assert_eq!(gateway.request_timeout(), Duration::from_secs(3));
    assert!(gateway.provider().capabilities().supports_json_mode());
}

// ============================================================================
// Logging Configuration
// ============================================================================

#[test]
#[serial]
fn test_logging_from_env() {
    env::remove_var("RUST_LOG");
    env::remove_var("LOG_FORMAT");
    env::set_var(Environment::ENV_VAR, "production");

    let config = LoggingConfig::from_env();
    env::remove_var(Environment::ENV_VAR);

    assert_eq!(config.level, LogLevel::Warn);
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
    assert!(config.environment.is_production());

    let config = LoggingConfig::from_env().with_level(LogLevel::Debug);
    assert_eq!(config.level, LogLevel::Debug);
    assert_eq!(config.format, LogFormat::Compact);
}
