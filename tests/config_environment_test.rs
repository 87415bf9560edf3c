// ABOUTME: Integration tests for environment-based configuration loading
// ABOUTME: Covers server config defaults, overrides, and the fatal missing-credential path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Buddy Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutrition_buddy::config::{Environment, ServerConfig};
use nutrition_buddy::errors::ErrorCode;
use nutrition_buddy::llm::{GeminiProvider, LlmProvider};

use serial_test::serial;
use std::env;

// Env-var tests share process-global state, hence #[serial].

#[test]
#[serial]
fn test_server_config_defaults() {
    env::remove_var("HTTP_PORT");
    env::remove_var("ENVIRONMENT");
    env::remove_var("CORS_ALLOWED_ORIGINS");

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.http_port, 3000);
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.cors_allowed_origins, "*");
}

#[test]
#[serial]
fn test_server_config_overrides() {
    env::set_var("HTTP_PORT", "8080");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("CORS_ALLOWED_ORIGINS", "https://app.example.com");

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.http_port, 8080);
    assert!(config.environment.is_production());
    assert_eq!(config.cors_allowed_origins, "https://app.example.com");

    env::remove_var("HTTP_PORT");
    env::remove_var("ENVIRONMENT");
    env::remove_var("CORS_ALLOWED_ORIGINS");
}

#[test]
#[serial]
fn test_server_config_rejects_invalid_port() {
    env::set_var("HTTP_PORT", "not-a-port");

    let error = ServerConfig::from_env().unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigError);

    env::remove_var("HTTP_PORT");
}

#[test]
#[serial]
fn test_gemini_provider_requires_api_key() {
    env::remove_var("GEMINI_API_KEY");

    let error = GeminiProvider::from_env().unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigMissing);
    assert!(error.message.contains("GEMINI_API_KEY"));
}

#[test]
#[serial]
fn test_gemini_provider_from_env_with_model_override() {
    env::set_var("GEMINI_API_KEY", "test-key");
    env::set_var("GEMINI_MODEL", "gemini-1.5-pro");

    let provider = GeminiProvider::from_env().unwrap();
    assert_eq!(provider.name(), "gemini");
    assert_eq!(provider.default_model(), "gemini-1.5-pro");

    env::remove_var("GEMINI_MODEL");
    env::remove_var("GEMINI_API_KEY");
}

#[test]
#[serial]
fn test_gemini_provider_default_model() {
    env::set_var("GEMINI_API_KEY", "test-key");
    env::remove_var("GEMINI_MODEL");

    let provider = GeminiProvider::from_env().unwrap();
    assert_eq!(provider.default_model(), "gemini-1.5-flash");

    env::remove_var("GEMINI_API_KEY");
}
