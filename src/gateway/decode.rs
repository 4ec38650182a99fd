// ABOUTME: Schema-checked decoding of AI JSON into recipes and trivia questions
// ABOUTME: Fails closed on malformed JSON, missing or mistyped fields, and bad answer indices
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eco-Bite Contributors

use eco_bite_core::models::{QuizQuestion, Recipe};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::llm::schema::{quiz_schema, recipe_schema, ResponseSchema, SchemaViolation};

/// Why a model answer could not be turned into content
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The text is not JSON at all
    #[error("response is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),
    /// The JSON does not follow the response schema
    #[error("response does not match schema: {0}")]
    Schema(#[from] SchemaViolation),
    /// The JSON follows the schema but a value is out of range for the model type
    #[error("response has an out-of-range value: {0}")]
    Shape(#[source] serde_json::Error),
    /// `correctIndex` does not name one of the options
    #[error("correctIndex {index} does not name one of {option_count} options")]
    CorrectIndexOutOfRange {
        /// Index reported by the model
        index: i64,
        /// Number of options in the question
        option_count: usize,
    },
}

/// Quiz question as it arrives; the index is signed until checked
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawQuizQuestion {
    question: String,
    options: Vec<String>,
    correct_index: i64,
    explanation: String,
}

fn parse_checked(text: &str, schema: &ResponseSchema) -> Result<Value, DecodeError> {
    let value: Value = serde_json::from_str(text.trim()).map_err(DecodeError::InvalidJson)?;
    schema.validate(&value)?;
    Ok(value)
}

/// Decode a recipe answer
///
/// # Errors
///
/// Returns a [`DecodeError`] if the text is not JSON or does not match the
/// recipe schema.
pub fn decode_recipe(text: &str) -> Result<Recipe, DecodeError> {
    let value = parse_checked(text, &recipe_schema())?;
    serde_json::from_value(value).map_err(DecodeError::Shape)
}

/// Decode a trivia answer
///
/// # Errors
///
/// Returns a [`DecodeError`] if the text is not JSON, does not match the quiz
/// schema, or `correctIndex` is outside `options`. A question without options
/// always fails this last check.
pub fn decode_quiz_question(text: &str) -> Result<QuizQuestion, DecodeError> {
    let value = parse_checked(text, &quiz_schema())?;
    let raw: RawQuizQuestion = serde_json::from_value(value).map_err(DecodeError::Shape)?;

    let option_count = raw.options.len();
    let correct_index = usize::try_from(raw.correct_index)
        .ok()
        .filter(|&index| index < option_count)
        .ok_or(DecodeError::CorrectIndexOutOfRange {
            index: raw.correct_index,
            option_count,
        })?;

    Ok(QuizQuestion {
        question: raw.question,
        options: raw.options,
        correct_index,
        explanation: raw.explanation,
    })
}
