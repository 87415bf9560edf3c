// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: Keeps route handlers thin and the meal pipeline independently testable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Buddy Contributors

//! Domain service layer
//!
//! Business logic extracted from route handlers so the HTTP layer stays a
//! thin shell. The chat pipeline here is the only service; it is exercised
//! directly by integration tests with a fake provider.

/// Meal-analysis chat pipeline: match, aggregate, prompt, dispatch
pub mod chat;
