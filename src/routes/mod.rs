// ABOUTME: Route module organization for Nutrition Buddy HTTP endpoints
// ABOUTME: Provides route definitions organized by domain with thin handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Buddy Contributors

//! Route module for the Nutrition Buddy server
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the service layer.

/// Chat endpoint for meal-analysis requests
pub mod chat;

/// Health check and readiness routes
pub mod health;

/// Static landing page route
pub mod pages;

pub use chat::ChatRoutes;
pub use health::HealthRoutes;
pub use pages::PageRoutes;
