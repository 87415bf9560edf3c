// ABOUTME: Main library entry point for the Nutrition Buddy meal analysis backend
// ABOUTME: Provides food matching, nutrition aggregation, and LLM-backed chat replies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Buddy Contributors

#![deny(unsafe_code)]

//! # Nutrition Buddy Server
//!
//! A small web backend that reads free-text meal descriptions, matches known
//! food names against a fixed nutrient table, computes approximate nutrition
//! totals, and asks Google Gemini for a friendly plain-language explanation.
//!
//! ## Architecture
//!
//! The server follows a modular architecture:
//! - **Knowledge**: the immutable food-to-nutrient lookup table
//! - **Matcher**: food name and quantity detection in user text
//! - **Aggregator**: per-item and total nutrient computation and formatting
//! - **LLM**: provider abstraction with a Gemini implementation
//! - **Services**: request orchestration from user text to final reply
//! - **Routes**: thin axum handlers over the service layer
//!
//! ## Quick Start
//!
//! 1. Export `GEMINI_API_KEY` with a Google AI Studio key
//! 2. Start the server with `nutrition-buddy-server`
//! 3. POST `{"message": "I ate 2 chapatis and 1 dal"}` to `/api/chat`
//!
//! ## Example Usage
//!
//! ```rust
//! use nutrition_buddy::aggregator::build_nutrition_summary;
//! use nutrition_buddy::matcher::analyze_food_text;
//!
//! let items = analyze_food_text("I ate 2 chapatis and 1 dal");
//! let summary = build_nutrition_summary(&items);
//! assert!(summary.contains("420 kcal"));
//! ```

/// Nutrition summary computation and report formatting
pub mod aggregator;

/// Environment-based server configuration
pub mod config;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Immutable food-to-nutrient knowledge base
pub mod knowledge;

/// LLM provider abstraction for AI chat integration
pub mod llm;

/// Production logging and structured output
pub mod logging;

/// Food name and quantity detection in free text
pub mod matcher;

/// Centralized resource container for dependency injection
pub mod resources;

/// `HTTP` routes for chat, health, and the landing page
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;

/// Domain service layer between routes and providers
pub mod services;
