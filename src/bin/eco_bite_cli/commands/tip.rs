// ABOUTME: Tip command printing one random food-waste tip
// ABOUTME: Uses the thread-local RNG; tests pick tips with a seeded one instead
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eco-Bite Contributors

use eco_bite::i18n::daily_tip;
use eco_bite_core::models::Language;

/// Print a random tip
pub fn run(language: Language) {
    println!("{}", daily_tip(language, &mut rand::thread_rng()));
}
