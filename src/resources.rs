// ABOUTME: Centralized resource container for dependency injection
// ABOUTME: Holds the LLM provider and configuration shared across request handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Buddy Contributors

//! # Server Resources Module
//!
//! Centralized resource container for dependency injection. The LLM provider
//! is constructed once at startup and shared behind an `Arc`, which keeps the
//! request handlers testable: integration tests inject a fake provider here
//! instead of reaching the network.

use crate::config::ServerConfig;
use crate::llm::LlmProvider;
use std::sync::Arc;

/// Shared resources for all request handlers
#[derive(Clone)]
pub struct ServerResources {
    /// The generative-text provider, bound at startup
    pub llm: Arc<dyn LlmProvider>,
    /// Server configuration loaded from the environment
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Create new server resources with proper Arc sharing
    #[must_use]
    pub fn new(llm: Arc<dyn LlmProvider>, config: ServerConfig) -> Self {
        Self {
            llm,
            config: Arc::new(config),
        }
    }
}
