// ABOUTME: Impact command: coerces raw per-category entries and prints the estimate
// ABOUTME: Entries are strings so "3.7" or "abc" behave as they would in a form field
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eco-Bite Contributors

use eco_bite::intelligence::{estimate_breakdown, record_entry};
use eco_bite_core::models::{Language, WasteCategory, WasteInputs};
use tracing::debug;

use crate::helpers::display::display_impact;

/// Raw form entries, one per food group
pub struct RawEntries {
    pub bread: String,
    pub fruit: String,
    pub dairy: String,
    pub meat: String,
}

impl RawEntries {
    fn entry(&self, category: WasteCategory) -> &str {
        match category {
            WasteCategory::Bread => &self.bread,
            WasteCategory::Fruit => &self.fruit,
            WasteCategory::Dairy => &self.dairy,
            WasteCategory::Meat => &self.meat,
        }
    }
}

/// Estimate and print the impact of the entered waste
pub fn run(entries: &RawEntries, language: Language, detailed: bool) {
    let mut inputs = WasteInputs::default();
    for category in WasteCategory::ALL {
        let raw = entries.entry(category);
        let units = record_entry(&mut inputs, category, raw);
        debug!(category = category.key(), raw, units, "entry coerced");
    }

    display_impact(&estimate_breakdown(&inputs), language, detailed);
}
