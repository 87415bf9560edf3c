// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Provides system health and readiness endpoints for monitoring infrastructure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Buddy Contributors

//! Health check routes for service monitoring
//!
//! `/health` reports liveness; `/ready` additionally probes the configured
//! LLM provider so load balancers can see credential or network problems.

use crate::resources::ServerResources;
use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/health", get(Self::health))
            .route("/ready", get(Self::ready))
            .with_state(resources)
    }

    async fn health(State(resources): State<Arc<ServerResources>>) -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "status": "healthy",
            "service": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "provider": resources.llm.name(),
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }

    async fn ready(State(resources): State<Arc<ServerResources>>) -> Json<serde_json::Value> {
        let provider_ok = resources.llm.health_check().await.unwrap_or(false);

        Json(serde_json::json!({
            "status": if provider_ok { "ready" } else { "degraded" },
            "provider": resources.llm.name(),
            "provider_reachable": provider_ok,
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }
}
