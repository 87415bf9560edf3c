// ABOUTME: Prompt assembly for LLM interactions, persona loaded at compile time
// ABOUTME: Builds the meal-analysis prompt embedding user text and the nutrition report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Buddy Contributors

//! # Prompts
//!
//! The assistant persona and response instructions live in a markdown file
//! loaded at compile time; the per-request prompt is plain string
//! interpolation around it. There is deliberately no templating engine:
//! the prompt has exactly one shape.

/// Nutrition Buddy persona and response instructions
pub const NUTRITION_SYSTEM_PROMPT: &str = include_str!("nutrition_system.md");

/// Build the full prompt for one meal-analysis request
///
/// Embeds the user's message and the nutrition summary verbatim, then asks
/// for the meal characterization, a plain-language explanation, and one to
/// three improvement tips.
#[must_use]
pub fn build_meal_prompt(user_message: &str, nutrition_summary: &str) -> String {
    format!(
        "{NUTRITION_SYSTEM_PROMPT}\n\
         User message:\n\
         \"{user_message}\"\n\n\
         Approximate nutrition summary (may not be perfect):\n\
         {nutrition_summary}\n\n\
         Now respond to the user in friendly, simple English.\n\
         Explain what this meal is like (light / moderate / heavy, balanced or not).\n\
         Then give a short explanation of the nutrition, and finally give 1-3 easy tips to improve the meal.\n\
         Avoid technical terms and keep it easy to read.\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_inputs_verbatim() {
        let prompt = build_meal_prompt("I ate 2 chapatis", "Nutrition breakdown:\n2 x chapati");

        assert!(prompt.contains("\"I ate 2 chapatis\""));
        assert!(prompt.contains("Nutrition breakdown:\n2 x chapati"));
    }

    #[test]
    fn test_prompt_carries_persona_and_instructions() {
        let prompt = build_meal_prompt("rice", "summary");

        assert!(prompt.contains("Nutrition Buddy"));
        assert!(prompt.contains("pizza, burger, fries, soda"));
        assert!(prompt.contains("not a doctor"));
        assert!(prompt.contains("light / moderate / heavy"));
        assert!(prompt.contains("1-3 easy tips"));
    }
}
