// ABOUTME: Waste categories and per-category unit counts entered by the user
// ABOUTME: WasteInputs holds non-negative counts of 100 g units for four food groups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eco-Bite Contributors

use serde::{Deserialize, Serialize};
use std::ops::Add;

use crate::constants::impact;

/// Food group tracked by the waste calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WasteCategory {
    /// Bread and grains
    Bread,
    /// Fruit and vegetables
    Fruit,
    /// Dairy products
    Dairy,
    /// Meat and protein
    Meat,
}

impl WasteCategory {
    /// Every category, in display order
    pub const ALL: [Self; 4] = [Self::Bread, Self::Fruit, Self::Dairy, Self::Meat];

    /// Stable lowercase key
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Bread => "bread",
            Self::Fruit => "fruit",
            Self::Dairy => "dairy",
            Self::Meat => "meat",
        }
    }

    /// Monetary loss for one 100 g unit
    #[must_use]
    pub const fn cost_per_unit(&self) -> u64 {
        match self {
            Self::Bread => impact::BREAD_COST_PER_UNIT,
            Self::Fruit => impact::FRUIT_COST_PER_UNIT,
            Self::Dairy => impact::DAIRY_COST_PER_UNIT,
            Self::Meat => impact::MEAT_COST_PER_UNIT,
        }
    }

    /// CO2 equivalent for one 100 g unit, in hundredths of a kilogram
    #[must_use]
    pub const fn co2_hundredths_per_unit(&self) -> u64 {
        match self {
            Self::Bread => impact::BREAD_CO2_HUNDREDTHS_PER_UNIT,
            Self::Fruit => impact::FRUIT_CO2_HUNDREDTHS_PER_UNIT,
            Self::Dairy => impact::DAIRY_CO2_HUNDREDTHS_PER_UNIT,
            Self::Meat => impact::MEAT_CO2_HUNDREDTHS_PER_UNIT,
        }
    }
}

/// Wasted quantities, one count of 100 g units per category
///
/// Counts are unsigned, so the non-negative invariant holds by construction.
/// Entry coercion from raw text happens at the collector boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WasteInputs {
    /// Bread/grain units
    pub bread: u32,
    /// Fruit/vegetable units
    pub fruit: u32,
    /// Dairy units
    pub dairy: u32,
    /// Meat/protein units
    pub meat: u32,
}

impl WasteInputs {
    /// Create inputs from explicit counts
    #[must_use]
    pub const fn new(bread: u32, fruit: u32, dairy: u32, meat: u32) -> Self {
        Self {
            bread,
            fruit,
            dairy,
            meat,
        }
    }

    /// Units recorded for a category
    #[must_use]
    pub const fn units(&self, category: WasteCategory) -> u32 {
        match category {
            WasteCategory::Bread => self.bread,
            WasteCategory::Fruit => self.fruit,
            WasteCategory::Dairy => self.dairy,
            WasteCategory::Meat => self.meat,
        }
    }

    /// Replace the units for a category
    pub fn set_units(&mut self, category: WasteCategory, units: u32) {
        match category {
            WasteCategory::Bread => self.bread = units,
            WasteCategory::Fruit => self.fruit = units,
            WasteCategory::Dairy => self.dairy = units,
            WasteCategory::Meat => self.meat = units,
        }
    }

    /// Builder-style variant of [`Self::set_units`]
    #[must_use]
    pub fn with_units(mut self, category: WasteCategory, units: u32) -> Self {
        self.set_units(category, units);
        self
    }

    /// Whether every count is zero
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bread == 0 && self.fruit == 0 && self.dairy == 0 && self.meat == 0
    }
}

impl Add for WasteInputs {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            bread: self.bread.saturating_add(rhs.bread),
            fruit: self.fruit.saturating_add(rhs.fruit),
            dairy: self.dairy.saturating_add(rhs.dairy),
            meat: self.meat.saturating_add(rhs.meat),
        }
    }
}
