// ABOUTME: Food name and quantity detection over free-text meal descriptions
// ABOUTME: Scans the knowledge base in table order with substring and regex matching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Buddy Contributors

//! # Food Matcher
//!
//! Detects known foods and their quantities in arbitrary user text.
//!
//! Matching is a case-insensitive substring scan over the knowledge base in
//! table order. A quantity is recognized only as a number immediately before
//! the food name ("2 chapatis"); spelled-out numbers, trailing numbers, and
//! compound quantities are out of scope and default to 1.
//!
//! Known limitation: a food name embedded in a longer word still matches
//! ("applesauce" contains "apple"). See DESIGN.md.

use crate::knowledge::{NutrientRecord, FOOD_TABLE};
use regex::Regex;
use std::sync::OnceLock;

/// A detected food occurrence with its inferred quantity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchedItem {
    /// Food name, always a key of the knowledge base
    pub name: &'static str,
    /// Serving count, always >= 1
    pub quantity: u32,
    /// The food's nutrient data
    pub record: &'static NutrientRecord,
}

/// Quantity patterns, one per table entry, compiled once per process
///
/// Pattern shape: one or more digits, optional whitespace, the food name,
/// optional trailing "s". Applied to lowercased input only.
fn quantity_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        FOOD_TABLE
            .iter()
            .map(|(name, _)| {
                let pattern = format!(r"(\d+)\s*{}s?", regex::escape(name));
                // Table names are fixed valid literals; this cannot fail.
                Regex::new(&pattern).unwrap_or_else(|e| {
                    unreachable!("invalid quantity pattern for {name}: {e}")
                })
            })
            .collect()
    })
}

/// Detect known foods and quantities in the user's text
///
/// Returns one `MatchedItem` per knowledge-base entry whose name occurs in
/// the lowercased text, in table order, regardless of how many times the
/// name appears. Text with no recognizable foods yields an empty vector;
/// this function never fails.
#[must_use]
pub fn analyze_food_text(text: &str) -> Vec<MatchedItem> {
    let lower = text.to_lowercase();
    let patterns = quantity_patterns();

    FOOD_TABLE
        .iter()
        .zip(patterns)
        .filter(|((name, _), _)| lower.contains(name))
        .map(|((name, record), pattern)| {
            let quantity = pattern
                .captures(&lower)
                .and_then(|caps| caps[1].parse::<u32>().ok())
                // Absent or overflowing digit runs both fall back to 1.
                .unwrap_or(1);

            MatchedItem {
                name: *name,
                quantity: quantity.max(1),
                record,
            }
        })
        .collect()
}
