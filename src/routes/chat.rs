// ABOUTME: Chat route handler for meal-analysis requests
// ABOUTME: Accepts a free-text message and returns the assistant reply, always HTTP 200
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Buddy Contributors

//! Chat route for meal analysis
//!
//! One endpoint: `POST /api/chat` with `{"message": "..."}` returning
//! `{"reply": "..."}`. Business-logic conditions (blank message, no foods
//! found, provider failure) never surface as error statuses; the handler
//! answers 200 with an appropriate reply string in every case.

use crate::resources::ServerResources;
use crate::services::chat::respond_to_message;
use axum::{
    extract::State,
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Request body for the chat endpoint
#[derive(Debug, Deserialize)]
pub struct ChatMessageRequest {
    /// Free-text meal description; missing field is treated as empty
    #[serde(default)]
    pub message: String,
}

/// Response body for the chat endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatReplyResponse {
    /// Assistant reply text
    pub reply: String,
}

/// Chat routes handler
pub struct ChatRoutes;

impl ChatRoutes {
    /// Create all chat routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/chat", post(Self::chat))
            .with_state(resources)
    }

    /// Handle one meal-analysis chat request
    async fn chat(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<ChatMessageRequest>,
    ) -> Json<ChatReplyResponse> {
        info!(message_len = request.message.len(), "chat request received");

        let reply = respond_to_message(resources.llm.as_ref(), &request.message).await;

        Json(ChatReplyResponse { reply })
    }
}
