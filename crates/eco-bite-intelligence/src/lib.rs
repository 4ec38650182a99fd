// ABOUTME: Pure food-waste logic for Eco-Bite with no I/O
// ABOUTME: Impact estimation, collector-side entry coercion, and quiz round evaluation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eco-Bite Contributors

#![deny(unsafe_code)]

//! # Eco-Bite Intelligence
//!
//! Deterministic logic that sits between user input and the views:
//!
//! - **impact**: Fixed-rate monetary and CO2 estimator over four food groups
//! - **input**: Coercion of raw form entries before they reach the estimator or gateway
//! - **quiz**: Answer evaluation and option highlighting for a single trivia round

/// Waste impact estimator
pub mod impact;

/// Collector-side input coercion
pub mod input;

/// Trivia round evaluation
pub mod quiz;

pub use impact::{
    estimate_breakdown, estimate_impact, format_co2, format_money, CategoryImpact,
    ImpactBreakdown, ImpactResult,
};
pub use input::{coerce_waste_count, record_entry, IngredientsText};
pub use quiz::{option_label, AnswerFeedback, OptionHighlight, QuizError, QuizRound};
