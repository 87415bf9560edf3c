// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides a fake LLM provider and server resource construction helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Buddy Contributors

#![allow(dead_code)]

//! Shared test utilities for `nutrition_buddy`
//!
//! Provides common setup to reduce duplication across integration tests,
//! most importantly a fake `LlmProvider` that records the prompts it
//! receives and can be switched into a failing mode.

use async_trait::async_trait;
use nutrition_buddy::config::ServerConfig;
use nutrition_buddy::errors::AppError;
use nutrition_buddy::llm::{ChatRequest, ChatResponse, LlmProvider};
use nutrition_buddy::resources::ServerResources;
use std::sync::{Arc, Mutex, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_test_writer()
            .init();
    });
}

/// Fake generative-text provider for tests
///
/// Returns a canned reply and records every prompt it receives. With
/// `failing()` it errors on every call instead, for fallback-path tests.
pub struct FakeLlmProvider {
    reply: String,
    fail: bool,
    prompts: Mutex<Vec<String>>,
}

impl FakeLlmProvider {
    /// Provider that answers every request with `reply`
    pub fn with_reply(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.to_owned(),
            fail: false,
            prompts: Mutex::new(Vec::new()),
        })
    }

    /// Provider that fails every request
    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: String::new(),
            fail: true,
            prompts: Mutex::new(Vec::new()),
        })
    }

    /// Number of completion calls received
    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    /// The most recent prompt received, if any
    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl LlmProvider for FakeLlmProvider {
    fn name(&self) -> &'static str {
        "fake"
    }

    fn display_name(&self) -> &'static str {
        "Fake LLM"
    }

    fn default_model(&self) -> &str {
        "fake-model"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        let prompt = request
            .messages
            .last()
            .map(|m| m.content.clone())
            .unwrap_or_default();
        self.prompts.lock().unwrap().push(prompt);

        if self.fail {
            return Err(AppError::external_service("fake", "injected failure"));
        }

        Ok(ChatResponse {
            content: self.reply.clone(),
            model: "fake-model".to_owned(),
            usage: None,
            finish_reason: Some("stop".to_owned()),
        })
    }

    async fn health_check(&self) -> Result<bool, AppError> {
        Ok(!self.fail)
    }
}

/// Build server resources around the given provider with default config
pub fn create_test_resources(provider: Arc<FakeLlmProvider>) -> Arc<ServerResources> {
    init_test_logging();
    Arc::new(ServerResources::new(provider, ServerConfig::default()))
}
