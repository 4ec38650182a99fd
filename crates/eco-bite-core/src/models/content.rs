// ABOUTME: Content types produced by the AI gateway
// ABOUTME: Recipe suggestions and trivia questions, serialized in the AI wire shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eco-Bite Contributors

use serde::{Deserialize, Serialize};

/// Leftover recipe suggested by the AI service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Recipe name
    pub title: String,
    /// Single glyph decorating the recipe card
    pub emoji: String,
    /// Ingredient lines, in order
    pub ingredients: Vec<String>,
    /// Preparation steps, in order
    pub steps: Vec<String>,
}

/// Multiple-choice trivia question about food waste
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    /// Question text
    pub question: String,
    /// Answer options, in display order
    pub options: Vec<String>,
    /// Index of the correct entry in `options`
    pub correct_index: usize,
    /// Explanation shown after answering
    pub explanation: String,
}

impl QuizQuestion {
    /// Text of the correct option, if the index is in range
    #[must_use]
    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.correct_index).map(String::as_str)
    }
}
