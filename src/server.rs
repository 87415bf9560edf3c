// ABOUTME: HTTP router assembly and server lifecycle management
// ABOUTME: Wires routes, middleware layers, and graceful shutdown handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Buddy Contributors

//! # Server assembly
//!
//! Builds the axum router from the per-domain route modules, applies the
//! shared middleware stack (request tracing, CORS, timeout), and runs the
//! listener until ctrl-c.

use crate::errors::{AppError, AppResult};
use crate::resources::ServerResources;
use crate::routes::{ChatRoutes, HealthRoutes, PageRoutes};
use axum::Router;
use http::{HeaderValue, Method};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Upper bound for one request, dominated by the LLM call
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Configure CORS from the comma-separated origin list in the config
///
/// An empty value or "*" allows any origin (development mode); otherwise
/// only the listed origins are permitted.
fn setup_cors(resources: &ServerResources) -> CorsLayer {
    let allowed = &resources.config.cors_allowed_origins;

    let allow_origin = if allowed.is_empty() || allowed == "*" {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = allowed
            .split(',')
            .filter_map(|s| {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    HeaderValue::from_str(trimmed).ok()
                }
            })
            .collect();

        if origins.is_empty() {
            AllowOrigin::any()
        } else {
            AllowOrigin::list(origins)
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers([http::header::CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
}

/// Build the full application router
#[must_use]
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources);

    Router::new()
        .merge(PageRoutes::routes())
        .merge(HealthRoutes::routes(resources.clone()))
        .merge(ChatRoutes::routes(resources))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(cors)
}

/// Bind the listener and serve until ctrl-c
///
/// # Errors
///
/// Returns an error if the port cannot be bound or the server fails while
/// running.
pub async fn serve(resources: Arc<ServerResources>) -> AppResult<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], resources.config.http_port));
    let app = build_router(resources);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::internal(format!("failed to bind {addr}: {e}")))?;

    info!("Nutrition Buddy server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("server error: {e}")))?;

    info!("Server shut down");
    Ok(())
}

/// Resolve when ctrl-c is received
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to install ctrl-c handler");
    }
}
