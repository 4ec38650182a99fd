// ABOUTME: Prompt templates for recipe and trivia generation in English and Indonesian
// ABOUTME: The active language picks the template; user text is interpolated verbatim
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eco-Bite Contributors

//! # Prompts
//!
//! The prompt language decides the language of the generated content, so
//! each template exists once per [`Language`].

use eco_bite_core::models::Language;

/// Recipe prompt for a list of leftovers
///
/// The ingredient text is passed through as typed.
#[must_use]
pub fn recipe_prompt(ingredients: &str, language: Language) -> String {
    match language {
        Language::En => format!(
            "Create a fun, simple, and tasty recipe using these leftovers: {ingredients}. \
             The recipe should be suitable for teenagers or young adults."
        ),
        Language::Id => format!(
            "Buatlah resep yang seru, sederhana, dan enak menggunakan sisa bahan ini: {ingredients}. \
             Resepnya harus cocok untuk remaja atau dewasa muda."
        ),
    }
}

/// Trivia prompt about food waste and sustainability
#[must_use]
pub const fn quiz_prompt(language: Language) -> &'static str {
    match language {
        Language::En => {
            "Generate a fun trivia question about food waste, recycling, or sustainability for teenagers."
        }
        Language::Id => {
            "Buatlah pertanyaan trivia yang seru tentang sampah makanan, daur ulang, atau keberlanjutan untuk remaja."
        }
    }
}
