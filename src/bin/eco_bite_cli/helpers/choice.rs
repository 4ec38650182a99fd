// ABOUTME: Parses a typed quiz answer ("b", "B", "2") into an option index
// ABOUTME: Letters are the displayed labels; numbers are one-based
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eco-Bite Contributors

use eco_bite::intelligence::option_label;

/// Index named by `input`, if it names one of `option_count` options
pub fn parse_choice(input: &str, option_count: usize) -> Option<usize> {
    let input = input.trim();

    if let Ok(number) = input.parse::<usize>() {
        return number.checked_sub(1).filter(|&index| index < option_count);
    }

    let mut chars = input.chars();
    let letter = chars.next()?.to_ascii_uppercase();
    if chars.next().is_some() {
        return None;
    }
    (0..option_count).find(|&index| option_label(index) == Some(letter))
}
