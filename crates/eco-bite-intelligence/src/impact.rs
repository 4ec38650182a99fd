// ABOUTME: Fixed-rate estimator mapping wasted food units to money lost and CO2 emitted
// ABOUTME: Linear over four categories, computed in exact integer arithmetic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eco-Bite Contributors

//! # Waste Impact Estimator
//!
//! `monetary_loss = Σ units × cost_per_unit` and
//! `co2 = Σ units × co2_per_unit` over bread, fruit, dairy and meat.
//!
//! Every CO2 coefficient is a whole number of hundredths of a kilogram
//! (0.06, 0.04, 0.20, 1.50), so the sum is kept as integer hundredths.
//! Rounding to two decimals is therefore exact; if a coefficient with more
//! precision were ever added, the rounding mode would be half-to-even.

use eco_bite_core::constants::impact::CURRENCY_PREFIX;
use eco_bite_core::models::{Language, WasteCategory, WasteInputs};
use serde::{Deserialize, Serialize};
use std::ops::Add;

/// Estimated impact of a set of waste inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImpactResult {
    /// Money lost, in the smallest local currency unit
    pub monetary_loss: u64,
    /// CO2 equivalent, in hundredths of a kilogram
    pub co2_hundredths: u64,
}

impl ImpactResult {
    /// No waste, no impact
    pub const ZERO: Self = Self {
        monetary_loss: 0,
        co2_hundredths: 0,
    };

    /// CO2 equivalent in kilograms, two decimal places
    #[must_use]
    pub fn co2_kg(&self) -> f64 {
        self.co2_hundredths as f64 / 100.0
    }
}

impl Add for ImpactResult {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            monetary_loss: self.monetary_loss + rhs.monetary_loss,
            co2_hundredths: self.co2_hundredths + rhs.co2_hundredths,
        }
    }
}

/// Impact attributable to one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryImpact {
    /// Food group
    pub category: WasteCategory,
    /// Units of 100 g wasted
    pub units: u32,
    /// Money lost for this category
    pub monetary_loss: u64,
    /// CO2 equivalent for this category, in hundredths of a kilogram
    pub co2_hundredths: u64,
}

impl CategoryImpact {
    /// Apply the category's coefficients to a unit count
    #[must_use]
    pub fn for_units(category: WasteCategory, units: u32) -> Self {
        let units_wide = u64::from(units);
        Self {
            category,
            units,
            monetary_loss: units_wide * category.cost_per_unit(),
            co2_hundredths: units_wide * category.co2_hundredths_per_unit(),
        }
    }

    /// Impact without the category label
    #[must_use]
    pub const fn result(&self) -> ImpactResult {
        ImpactResult {
            monetary_loss: self.monetary_loss,
            co2_hundredths: self.co2_hundredths,
        }
    }
}

/// Per-category impact together with the total
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactBreakdown {
    /// One entry per category, in `WasteCategory::ALL` order
    pub categories: Vec<CategoryImpact>,
    /// Sum over all categories
    pub total: ImpactResult,
}

impl ImpactBreakdown {
    /// Category contributing the most CO2, if anything was wasted
    #[must_use]
    pub fn largest_co2_source(&self) -> Option<&CategoryImpact> {
        self.categories
            .iter()
            .filter(|c| c.co2_hundredths > 0)
            .max_by_key(|c| c.co2_hundredths)
    }
}

/// Estimate the monetary loss and CO2 equivalent of wasted food
///
/// Total over its input domain and free of side effects.
#[must_use]
pub fn estimate_impact(inputs: &WasteInputs) -> ImpactResult {
    WasteCategory::ALL
        .iter()
        .map(|&category| CategoryImpact::for_units(category, inputs.units(category)).result())
        .fold(ImpactResult::ZERO, Add::add)
}

/// Estimate the impact of each category separately
#[must_use]
pub fn estimate_breakdown(inputs: &WasteInputs) -> ImpactBreakdown {
    let categories: Vec<CategoryImpact> = WasteCategory::ALL
        .iter()
        .map(|&category| CategoryImpact::for_units(category, inputs.units(category)))
        .collect();
    let total = categories
        .iter()
        .map(CategoryImpact::result)
        .fold(ImpactResult::ZERO, Add::add);

    ImpactBreakdown { categories, total }
}

/// Render a monetary amount with locale digit grouping, e.g. `Rp 29,000`
#[must_use]
pub fn format_money(amount: u64, language: Language) -> String {
    let separator = match language {
        Language::En => ',',
        Language::Id => '.',
    };

    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            grouped.push(separator);
        }
        grouped.push(ch);
    }

    format!("{CURRENCY_PREFIX} {grouped}")
}

/// Render the CO2 equivalent with two decimals, e.g. `1.96 kg`
#[must_use]
pub fn format_co2(result: &ImpactResult) -> String {
    format!(
        "{}.{:02} kg",
        result.co2_hundredths / 100,
        result.co2_hundredths % 100
    )
}
