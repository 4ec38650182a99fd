// ABOUTME: Recipe and quiz commands backed by the AI content gateway
// ABOUTME: Ctrl-C cancels the in-flight request instead of killing the process mid-output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eco-Bite Contributors

use anyhow::{bail, Result};
use eco_bite::gateway::{CancellationToken, ContentGateway, GatewayOutcome};
use eco_bite::i18n::translations;
use eco_bite::intelligence::{IngredientsText, QuizRound};
use eco_bite_core::models::Language;
use tokio::signal::ctrl_c;
use tracing::info;

use crate::helpers::choice::parse_choice;
use crate::helpers::display::{display_quiz, display_recipe, display_unavailable};

/// Token cancelled when the user presses Ctrl-C
pub fn cancel_on_ctrl_c() -> CancellationToken {
    let cancel = CancellationToken::new();
    let watcher = cancel.clone();
    tokio::spawn(async move {
        if ctrl_c().await.is_ok() {
            info!("interrupt received, cancelling request");
            watcher.cancel();
        }
    });
    cancel
}

/// Ask for a recipe using the given leftovers
///
/// # Errors
///
/// Returns an error if the ingredient text is blank; nothing is sent then.
pub async fn recipe(
    gateway: &ContentGateway,
    ingredients: String,
    language: Language,
) -> Result<()> {
    let Some(ingredients) = IngredientsText::parse(ingredients) else {
        bail!(
            "ingredients must not be empty ({})",
            translations(language).ingredients_placeholder
        );
    };

    eprintln!("{}", translations(language).loading);
    let cancel = cancel_on_ctrl_c();
    match gateway
        .request_recipe(ingredients.as_str(), language, &cancel)
        .await
    {
        GatewayOutcome::Succeeded(recipe) => display_recipe(&recipe, language),
        GatewayOutcome::Cancelled => eprintln!("cancelled"),
        GatewayOutcome::Failed | GatewayOutcome::TimedOut => display_unavailable(language),
    }
    Ok(())
}

/// Ask for a trivia question and, if given, judge an answer
///
/// # Errors
///
/// Returns an error if `answer` does not name one of the options.
pub async fn quiz(
    gateway: &ContentGateway,
    answer: Option<&str>,
    language: Language,
) -> Result<()> {
    eprintln!("{}", translations(language).loading);
    let cancel = cancel_on_ctrl_c();
    let question = match gateway.request_quiz_question(language, &cancel).await {
        GatewayOutcome::Succeeded(question) => question,
        GatewayOutcome::Cancelled => {
            eprintln!("cancelled");
            return Ok(());
        }
        GatewayOutcome::Failed | GatewayOutcome::TimedOut => {
            display_unavailable(language);
            return Ok(());
        }
    };

    let mut round = QuizRound::new(question);
    if let Some(answer) = answer {
        let option_count = round.question().options.len();
        let Some(index) = parse_choice(answer, option_count) else {
            display_quiz(&round, language);
            bail!("'{answer}' is not one of the {option_count} options");
        };
        round.answer(index)?;
    }

    display_quiz(&round, language);
    Ok(())
}
