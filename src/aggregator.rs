// ABOUTME: Nutrition aggregation over matched food items with display formatting
// ABOUTME: Computes per-item and total nutrient values and renders the breakdown report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Buddy Contributors

//! # Nutrition Aggregator
//!
//! Turns a sequence of matched items into a human-readable breakdown string:
//! one line per item plus a totals block. Totals accumulate the exact
//! unrounded per-item values; rounding happens only at display time, so
//! multiple items cannot compound rounding error.
//!
//! The returned string is opaque to downstream consumers: it is embedded
//! verbatim in the LLM prompt and never re-parsed.

use crate::matcher::MatchedItem;
use std::fmt::Write as _;

/// Fixed reply when no knowledge-base food was found in the text
pub const NO_FOODS_MESSAGE: &str = "I could not detect any known foods from the text.";

/// Running nutrient totals for one request
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NutritionTotals {
    /// Total energy in kilocalories
    pub calories: f64,
    /// Total protein in grams
    pub protein: f64,
    /// Total carbohydrates in grams
    pub carbs: f64,
    /// Total fat in grams
    pub fat: f64,
    /// Total dietary fiber in grams
    pub fiber: f64,
}

impl NutritionTotals {
    /// Accumulate one item's exact (unrounded) scaled values
    fn add(&mut self, item: &MatchedItem) {
        let quantity = f64::from(item.quantity);
        self.calories += item.record.calories * quantity;
        self.protein += item.record.protein * quantity;
        self.carbs += item.record.carbs * quantity;
        self.fat += item.record.fat * quantity;
        self.fiber += item.record.fiber * quantity;
    }
}

/// Build the human-readable nutrition summary for a set of matched items
///
/// An empty input produces the fixed [`NO_FOODS_MESSAGE`], never an empty
/// string or a zero-valued totals block.
#[must_use]
// Safe: displayed calorie values are small positive numbers
#[allow(clippy::cast_possible_truncation)]
pub fn build_nutrition_summary(items: &[MatchedItem]) -> String {
    if items.is_empty() {
        return NO_FOODS_MESSAGE.to_owned();
    }

    let mut totals = NutritionTotals::default();
    let mut lines = String::new();

    for item in items {
        let quantity = f64::from(item.quantity);
        let calories = item.record.calories * quantity;
        let protein = item.record.protein * quantity;
        let carbs = item.record.carbs * quantity;
        let fat = item.record.fat * quantity;
        let fiber = item.record.fiber * quantity;

        totals.add(item);

        // Infallible: writing into a String cannot fail.
        let _ = writeln!(
            lines,
            "{} x {}: ~{} kcal (protein: {protein:.1} g, carbs: {carbs:.1} g, \
             fat: {fat:.1} g, fiber: {fiber:.1} g)",
            item.quantity,
            item.name,
            calories.round() as i64,
        );
    }

    format!(
        "Nutrition breakdown:\n{lines}\n\
         Total approximate values:\n\
         - Calories: {} kcal\n\
         - Protein: {:.1} g\n\
         - Carbohydrates: {:.1} g\n\
         - Fat: {:.1} g\n\
         - Fiber: {:.1} g",
        totals.calories.round() as i64,
        totals.protein,
        totals.carbs,
        totals.fat,
        totals.fiber,
    )
}
