// ABOUTME: Supported interface and prompt languages
// ABOUTME: English and Indonesian, with lenient parsing from user input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eco-Bite Contributors

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use crate::errors::AppError;

/// Language used for labels and for AI prompt wording
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    En,
    /// Bahasa Indonesia (the default locale)
    #[default]
    Id,
}

impl Language {
    /// Every supported language
    pub const ALL: [Self; 2] = [Self::En, Self::Id];

    /// Two-letter code
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Id => "id",
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "id" | "indonesian" | "bahasa" => Ok(Self::Id),
            other => Err(AppError::invalid_input(format!(
                "unsupported language '{other}' (expected 'en' or 'id')"
            ))),
        }
    }
}
