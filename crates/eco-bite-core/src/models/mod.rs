// ABOUTME: Core data models for the Eco-Bite toolkit
// ABOUTME: Re-exports Language, WasteInputs, Recipe, QuizQuestion, and UserProfile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eco-Bite Contributors

//! # Data Models
//!
//! Plain data shared between the estimator, the AI gateway, and the session.
//!
//! ## Core Models
//!
//! - `Language`: The two supported locales
//! - `WasteCategory` / `WasteInputs`: Counts of wasted 100 g units
//! - `Recipe` / `QuizQuestion`: Content produced by the AI gateway
//! - `UserProfile`: Session-local points, streak, and pledges

mod content;
mod language;
mod user;
mod waste;

pub use content::{QuizQuestion, Recipe};
pub use language::Language;
pub use user::UserProfile;
pub use waste::{WasteCategory, WasteInputs};
