// ABOUTME: Re-exports command modules for the eco-bite CLI
// ABOUTME: Impact estimation, AI content, daily tips, and the interactive session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eco-Bite Contributors

pub mod content;
pub mod impact;
pub mod play;
pub mod tip;
