// ABOUTME: Collector-side coercion of raw form entries before they reach the core
// ABOUTME: Waste counts become non-negative integers; blank ingredient text is refused
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eco-Bite Contributors

//! Input boundary
//!
//! The estimator and the AI gateway perform no validation of their own.
//! Everything typed by a user passes through here first.

use eco_bite_core::models::{WasteCategory, WasteInputs};
use serde::{Deserialize, Serialize};

/// Coerce a raw waste-count entry into a unit count
///
/// Reads an optional sign followed by leading decimal digits, ignoring
/// surrounding whitespace and anything after the digits (`"3.7"` is 3,
/// `"12abc"` is 12). Empty, non-numeric and negative entries become 0.
/// Values beyond `u32::MAX` saturate.
#[must_use]
pub fn coerce_waste_count(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 || negative {
        return 0;
    }

    unsigned[..digits_len].bytes().fold(0_u32, |acc, digit| {
        acc.saturating_mul(10)
            .saturating_add(u32::from(digit - b'0'))
    })
}

/// Store a raw entry for a category after coercion, returning the stored count
pub fn record_entry(inputs: &mut WasteInputs, category: WasteCategory, raw: &str) -> u32 {
    let units = coerce_waste_count(raw);
    inputs.set_units(category, units);
    units
}

/// Free-text ingredient list that is known to be non-blank
///
/// The text is kept exactly as typed; only the blank check trims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientsText(String);

impl IngredientsText {
    /// Accept the text unless it is empty after trimming whitespace
    #[must_use]
    pub fn parse(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    /// Borrow the text as typed
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take ownership of the text
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for IngredientsText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_prefix_parsing() {
        assert_eq!(coerce_waste_count("7"), 7);
        assert_eq!(coerce_waste_count("  42  "), 42);
        assert_eq!(coerce_waste_count("+5"), 5);
        assert_eq!(coerce_waste_count("3.7"), 3);
        assert_eq!(coerce_waste_count("12abc"), 12);
        assert_eq!(coerce_waste_count("007"), 7);
    }

    #[test]
    fn test_unusable_entries_become_zero() {
        assert_eq!(coerce_waste_count(""), 0);
        assert_eq!(coerce_waste_count("   "), 0);
        assert_eq!(coerce_waste_count("abc"), 0);
        assert_eq!(coerce_waste_count("-4"), 0);
        assert_eq!(coerce_waste_count("-"), 0);
        assert_eq!(coerce_waste_count(".5"), 0);
    }

    #[test]
    fn test_huge_entries_saturate() {
        assert_eq!(coerce_waste_count("99999999999999999999"), u32::MAX);
    }
}
