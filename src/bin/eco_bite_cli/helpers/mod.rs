// ABOUTME: Re-exports helper modules for the eco-bite CLI
// ABOUTME: Provides display formatting and answer-choice parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eco-Bite Contributors

pub mod choice;
pub mod display;
