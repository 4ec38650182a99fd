// ABOUTME: Eco-Bite CLI - food-waste impact, leftover recipes, trivia, and tips from the terminal
// ABOUTME: Parses arguments, initializes logging and the AI gateway, and dispatches commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eco-Bite Contributors
//!
//! Usage:
//! ```bash
//! # Estimate the cost of this week's waste
//! eco-bite impact --bread 2 --meat 1 --lang en --breakdown
//!
//! # Remix leftovers into a recipe
//! eco-bite recipe "2 carrots, stale bread, half a lemon" --lang en
//!
//! # Trivia, answering straight away
//! eco-bite quiz --answer B
//!
//! # Interactive session without network access
//! eco-bite --offline play
//! ```

mod commands;
mod helpers;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use eco_bite::config::{GatewayConfig, LogLevel, ProviderKind};
use eco_bite::gateway::ContentGateway;
use eco_bite::logging::LoggingConfig;
use eco_bite_core::models::Language;
use tracing::debug;

use commands::impact::RawEntries;

#[derive(Parser)]
#[command(
    name = "eco-bite",
    about = "Eco-Bite food-waste companion",
    long_about = "Estimate what wasted food costs, turn leftovers into recipes, and learn with food-waste trivia."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Language for labels and AI content (en or id)
    #[arg(long, short = 'l', global = true, default_value_t = Language::default())]
    lang: Language,

    /// Use canned offline content instead of the AI service
    #[arg(long, global = true)]
    offline: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Estimate money lost and CO2 emitted by wasted food (units of 100 g)
    Impact {
        /// Bread and grains
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        bread: String,

        /// Fruit and vegetables
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        fruit: String,

        /// Dairy
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        dairy: String,

        /// Meat and protein
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        meat: String,

        /// Show the per-category table
        #[arg(long, short = 'b')]
        breakdown: bool,
    },

    /// Create a recipe from leftover ingredients
    Recipe {
        /// Free-text list of ingredients
        ingredients: String,
    },

    /// Get a food-waste trivia question
    Quiz {
        /// Answer immediately (A, B, ... or 1, 2, ...)
        #[arg(long, short = 'a')]
        answer: Option<String>,
    },

    /// Show a random food-waste tip
    Tip,

    /// Start an interactive session on stdin
    Play,
}

fn build_gateway(offline: bool) -> Result<ContentGateway> {
    let mut config = GatewayConfig::from_env().context("invalid gateway configuration")?;
    if offline {
        config = config.with_provider(ProviderKind::Fake);
    }
    debug!(provider = %config.provider, model = %config.model, "building gateway");
    ContentGateway::from_config(&config).context("could not set up the AI provider")
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level(LogLevel::Debug);
    }
    logging.init()?;

    match cli.command {
        Command::Impact {
            bread,
            fruit,
            dairy,
            meat,
            breakdown,
        } => {
            let entries = RawEntries {
                bread,
                fruit,
                dairy,
                meat,
            };
            commands::impact::run(&entries, cli.lang, breakdown);
        }
        Command::Recipe { ingredients } => {
            let gateway = build_gateway(cli.offline)?;
            commands::content::recipe(&gateway, ingredients, cli.lang).await?;
        }
        Command::Quiz { answer } => {
            let gateway = build_gateway(cli.offline)?;
            commands::content::quiz(&gateway, answer.as_deref(), cli.lang).await?;
        }
        Command::Tip => commands::tip::run(cli.lang),
        Command::Play => {
            let gateway = build_gateway(cli.offline)?;
            commands::play::run(&gateway, cli.lang).await?;
        }
    }

    Ok(())
}
