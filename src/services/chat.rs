// ABOUTME: Chat orchestration domain service from user text to final reply
// ABOUTME: Runs matching, aggregation, prompt assembly, and LLM dispatch with fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Buddy Contributors

//! Chat orchestration for meal-analysis requests.
//!
//! Business rules:
//! - A blank message never reaches the LLM; the user gets a prompting reply.
//! - The nutrition summary is computed locally and embedded in the prompt,
//!   including the fixed no-foods message when nothing matched.
//! - Any provider failure is absorbed here: logged for operators, converted
//!   to a fixed apology string. The HTTP surface always answers 200.

use crate::aggregator::build_nutrition_summary;
use crate::llm::{build_meal_prompt, ChatMessage, ChatRequest, LlmProvider};
use crate::matcher::analyze_food_text;
use tracing::{debug, error};

/// Reply for an empty or blank user message
pub const EMPTY_MESSAGE_REPLY: &str = "Please tell me what you ate so I can help.";

/// Reply when the generative-text service fails for any reason
pub const LLM_FAILURE_REPLY: &str =
    "There was a problem talking to the AI server. Please try again later.";

/// Produce the assistant reply for one user message
///
/// This is the whole request pipeline: match foods, aggregate nutrition,
/// build the prompt, ask the provider, trim the answer. It cannot fail;
/// every error path collapses into a user-safe reply string.
pub async fn respond_to_message(provider: &dyn LlmProvider, message: &str) -> String {
    let message = message.trim();
    if message.is_empty() {
        return EMPTY_MESSAGE_REPLY.to_owned();
    }

    let items = analyze_food_text(message);
    debug!(matched = items.len(), "analyzed meal text");

    let summary = build_nutrition_summary(&items);
    let prompt = build_meal_prompt(message, &summary);

    let request = ChatRequest::new(vec![ChatMessage::user(prompt)]);

    match provider.complete(&request).await {
        Ok(response) => response.content.trim().to_owned(),
        Err(e) => {
            error!(provider = provider.name(), error = %e, "LLM request failed");
            LLM_FAILURE_REPLY.to_owned()
        }
    }
}
