// ABOUTME: Static landing page route serving the embedded chat UI
// ABOUTME: Provides GET / with a single-page HTML client for the chat API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Buddy Contributors

//! Landing page route
//!
//! The chat UI is a single HTML page compiled into the binary; there is no
//! separate template or static-file directory to deploy.

use axum::{response::Html, routing::get, Router};

/// Landing page compiled into the binary
const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// Page routes implementation
pub struct PageRoutes;

impl PageRoutes {
    /// Create the landing page route
    pub fn routes() -> Router {
        async fn index() -> Html<&'static str> {
            Html(INDEX_HTML)
        }

        Router::new().route("/", get(index))
    }
}
