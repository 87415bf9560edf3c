// ABOUTME: Immutable food-to-nutrient knowledge base compiled into the binary
// ABOUTME: Provides ordered iteration and name lookup over static nutrient records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Buddy Contributors

//! # Food Knowledge Base
//!
//! A fixed table mapping food names to approximate per-serving nutrient data.
//! The table is a compile-time constant: loaded once, never mutated, safe for
//! unlimited concurrent readers. Iteration order is the declaration order,
//! which downstream matching relies on for deterministic output.
//!
//! Values are static approximations for a friendly chat assistant, not
//! verified nutrition-science data.

/// Approximate nutrient data for one typical serving of a food
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutrientRecord {
    /// Energy in kilocalories
    pub calories: f64,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fat in grams
    pub fat: f64,
    /// Dietary fiber in grams
    pub fiber: f64,
    /// Short free-text note shown to the LLM for context
    pub notes: &'static str,
}

/// The full knowledge base, ordered by declaration
///
/// Matching iterates this slice front to back, so entry order is part of
/// the observable behavior (matched items come out in table order).
pub static FOOD_TABLE: &[(&str, NutrientRecord)] = &[
    (
        "apple",
        NutrientRecord {
            calories: 95.0,
            protein: 0.5,
            carbs: 25.0,
            fat: 0.3,
            fiber: 4.4,
            notes: "Apples provide fiber and vitamin C. Good for digestion.",
        },
    ),
    (
        "banana",
        NutrientRecord {
            calories: 105.0,
            protein: 1.3,
            carbs: 27.0,
            fat: 0.3,
            fiber: 3.1,
            notes: "Bananas give quick energy and potassium. Good before exercise.",
        },
    ),
    (
        "orange",
        NutrientRecord {
            calories: 62.0,
            protein: 1.2,
            carbs: 15.0,
            fat: 0.2,
            fiber: 3.1,
            notes: "Oranges are rich in vitamin C and support immunity.",
        },
    ),
    (
        "rice",
        NutrientRecord {
            calories: 200.0,
            protein: 4.3,
            carbs: 45.0,
            fat: 0.4,
            fiber: 0.6,
            notes: "Rice gives carbohydrates for energy. Best with vegetables and protein.",
        },
    ),
    (
        "chapati",
        NutrientRecord {
            calories: 120.0,
            protein: 3.5,
            carbs: 18.0,
            fat: 3.7,
            fiber: 2.0,
            notes: "Chapati (roti) from wheat gives carbs and some fiber.",
        },
    ),
    (
        "dal",
        NutrientRecord {
            calories: 180.0,
            protein: 9.0,
            carbs: 26.0,
            fat: 3.0,
            fiber: 7.0,
            notes: "Dal provides plant-based protein and good fiber.",
        },
    ),
    (
        "paneer",
        NutrientRecord {
            calories: 265.0,
            protein: 18.0,
            carbs: 6.0,
            fat: 20.0,
            fiber: 0.0,
            notes: "Paneer is high in protein and fat. Good in moderation.",
        },
    ),
    (
        "milk",
        NutrientRecord {
            calories: 103.0,
            protein: 8.0,
            carbs: 12.0,
            fat: 2.4,
            fiber: 0.0,
            notes: "Milk provides protein and calcium. Good for bones.",
        },
    ),
    (
        "egg",
        NutrientRecord {
            calories: 78.0,
            protein: 6.3,
            carbs: 0.6,
            fat: 5.3,
            fiber: 0.0,
            notes: "Eggs are rich in protein and healthy fats.",
        },
    ),
    (
        "almond",
        NutrientRecord {
            calories: 7.0,
            protein: 0.3,
            carbs: 0.2,
            fat: 0.6,
            fiber: 0.3,
            notes: "Almonds provide healthy fats and vitamin E.",
        },
    ),
    (
        "salad",
        NutrientRecord {
            calories: 50.0,
            protein: 2.0,
            carbs: 10.0,
            fat: 0.5,
            fiber: 3.0,
            notes: "Vegetable salad is low in calories and high in fiber.",
        },
    ),
    (
        "pizza",
        NutrientRecord {
            calories: 285.0,
            protein: 12.0,
            carbs: 36.0,
            fat: 10.0,
            fiber: 2.0,
            notes: "Pizza is usually high in calories, refined flour and fats.",
        },
    ),
    (
        "burger",
        NutrientRecord {
            calories: 300.0,
            protein: 13.0,
            carbs: 30.0,
            fat: 14.0,
            fiber: 1.5,
            notes: "Burgers can have a lot of fats and refined carbs.",
        },
    ),
    (
        "fries",
        NutrientRecord {
            calories: 180.0,
            protein: 2.0,
            carbs: 22.0,
            fat: 9.0,
            fiber: 2.0,
            notes: "Fries are deep fried and high in unhealthy fats.",
        },
    ),
    (
        "soda",
        NutrientRecord {
            calories: 140.0,
            protein: 0.0,
            carbs: 39.0,
            fat: 0.0,
            fiber: 0.0,
            notes: "Soda has a lot of sugar and almost no nutrients.",
        },
    ),
];

/// Look up a food by exact (lowercase) name
#[must_use]
pub fn lookup(name: &str) -> Option<&'static NutrientRecord> {
    FOOD_TABLE
        .iter()
        .find(|(food_name, _)| *food_name == name)
        .map(|(_, record)| record)
}
