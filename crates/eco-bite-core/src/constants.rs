// ABOUTME: Constants module grouped by domain for the Eco-Bite toolkit
// ABOUTME: Impact coefficients, session rewards, and AI model defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eco-Bite Contributors

//! Constants module
//!
//! Values here are fixed at compile time and are not configurable at runtime.

/// Per-unit coefficients for the waste impact estimator
///
/// One unit is 100 grams of a food category. Money is expressed in the
/// smallest local currency unit (Rupiah), CO2 in hundredths of a kilogram so
/// the estimator can sum it exactly.
pub mod impact {
    /// Grams of food represented by one input unit
    pub const GRAMS_PER_UNIT: u32 = 100;

    /// Bread/grains: cost per unit
    pub const BREAD_COST_PER_UNIT: u64 = 2_000;
    /// Fruit/vegetables: cost per unit
    pub const FRUIT_COST_PER_UNIT: u64 = 3_000;
    /// Dairy: cost per unit
    pub const DAIRY_COST_PER_UNIT: u64 = 5_000;
    /// Meat/protein: cost per unit
    pub const MEAT_COST_PER_UNIT: u64 = 12_000;

    /// Bread/grains: 0.06 kg `CO2e` per unit
    pub const BREAD_CO2_HUNDREDTHS_PER_UNIT: u64 = 6;
    /// Fruit/vegetables: 0.04 kg `CO2e` per unit
    pub const FRUIT_CO2_HUNDREDTHS_PER_UNIT: u64 = 4;
    /// Dairy: 0.20 kg `CO2e` per unit
    pub const DAIRY_CO2_HUNDREDTHS_PER_UNIT: u64 = 20;
    /// Meat/protein: 1.50 kg `CO2e` per unit
    pub const MEAT_CO2_HUNDREDTHS_PER_UNIT: u64 = 150;

    /// Currency prefix shown before monetary amounts
    pub const CURRENCY_PREFIX: &str = "Rp";
}

/// Points and streak values for the in-memory session
pub mod session {
    /// Points granted on login
    pub const INITIAL_POINTS: u32 = 50;
    /// Streak (days) granted on login
    pub const INITIAL_STREAK: u32 = 3;
    /// Points awarded for a correct quiz answer
    pub const QUIZ_CORRECT_REWARD: u32 = 20;
    /// Points awarded for adding a pledge
    pub const PLEDGE_REWARD: u32 = 10;
}

/// Defaults for the generative AI service
pub mod ai {
    /// Default model identifier
    pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
    /// Default upper bound for a single request, in seconds
    pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
    /// MIME type requested for structured output
    pub const JSON_MIME_TYPE: &str = "application/json";
}
