// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Buddy Contributors

//! Environment-based configuration management
//!
//! All configuration is read from environment variables once at startup.
//! There is no configuration file; the knowledge base is compiled in and
//! the only required setting is the Gemini API credential, which is read
//! by the LLM provider itself.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;

/// Default HTTP port when `HTTP_PORT` is not set
const DEFAULT_HTTP_PORT: u16 = 3000;

/// Environment type for logging and CORS defaults
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Server configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port the HTTP server binds to
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Comma-separated allowed CORS origins, or "*" for any
    pub cors_allowed_origins: String,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Reads `HTTP_PORT` (default 3000), `ENVIRONMENT`, and
    /// `CORS_ALLOWED_ORIGINS` (default "*").
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `HTTP_PORT` is set but is not a
    /// valid port number.
    pub fn from_env() -> AppResult<Self> {
        let http_port = match env::var("HTTP_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|e| {
                AppError::config(format!("invalid HTTP_PORT value {raw:?}: {e}"))
            })?,
            Err(_) => DEFAULT_HTTP_PORT,
        };

        let environment = env::var("ENVIRONMENT")
            .map(|v| Environment::from_str_or_default(&v))
            .unwrap_or_default();

        let cors_allowed_origins =
            env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_owned());

        Ok(Self {
            http_port,
            environment,
            cors_allowed_origins,
        })
    }

    /// One-line configuration summary for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "http_port={} environment={} cors_allowed_origins={}",
            self.http_port, self.environment, self.cors_allowed_origins
        )
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: DEFAULT_HTTP_PORT,
            environment: Environment::Development,
            cors_allowed_origins: "*".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            Environment::from_str_or_default("prod"),
            Environment::Production
        );
        assert_eq!(
            Environment::from_str_or_default("TESTING"),
            Environment::Testing
        );
        assert_eq!(
            Environment::from_str_or_default("anything-else"),
            Environment::Development
        );
        assert!(Environment::Production.is_production());
        assert!(!Environment::Development.is_production());
    }

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.http_port, 3000);
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.cors_allowed_origins, "*");
    }
}
