// ABOUTME: Core types and constants for the Eco-Bite food-waste awareness toolkit
// ABOUTME: Foundation crate with error handling, domain models, and fixed coefficients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eco-Bite Contributors

#![deny(unsafe_code)]

//! # Eco-Bite Core
//!
//! Foundation crate providing shared types and constants for Eco-Bite.
//! This crate changes rarely, so the logic and application crates can build
//! on it without pulling in the HTTP stack.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Impact coefficients, session rewards, model defaults
//! - **models**: Languages, waste inputs, and AI-generated content types

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`Language`, `WasteInputs`, `Recipe`, `QuizQuestion`, ...)
pub mod models;
