// ABOUTME: Output formatting helpers for the eco-bite CLI
// ABOUTME: Renders impact results, recipes, trivia questions, and session status on stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eco-Bite Contributors

use eco_bite::i18n::translations;
use eco_bite::intelligence::{
    format_co2, format_money, option_label, ImpactBreakdown, OptionHighlight, QuizRound,
};
use eco_bite::session::Session;
use eco_bite_core::constants::impact::GRAMS_PER_UNIT;
use eco_bite_core::models::{Language, Recipe};

/// Display the impact totals, optionally with the per-category table
pub fn display_impact(breakdown: &ImpactBreakdown, language: Language, detailed: bool) {
    let text = translations(language);
    println!("\n{}", text.waste_title);
    println!("{}", "=".repeat(50));

    if detailed {
        for category in &breakdown.categories {
            println!(
                "   {:<16} {:>4} x {GRAMS_PER_UNIT} g   {:>14}   {:>9}",
                text.category_label(category.category),
                category.units,
                format_money(category.monetary_loss, language),
                format_co2(&category.result()),
            );
        }
        println!("{}", "-".repeat(50));
    }

    println!(
        "   {}: {}",
        text.money_lost,
        format_money(breakdown.total.monetary_loss, language)
    );
    println!("   {}: {}", text.co2_emitted, format_co2(&breakdown.total));

    if detailed {
        if let Some(largest) = breakdown.largest_co2_source() {
            println!(
                "   CO2 hotspot: {}",
                text.category_label(largest.category)
            );
        }
    }
}

/// Display a generated recipe card
pub fn display_recipe(recipe: &Recipe, language: Language) {
    let text = translations(language);
    println!("\n{} {}", recipe.emoji, recipe.title);
    println!("{}", "=".repeat(50));
    for ingredient in &recipe.ingredients {
        println!("   • {ingredient}");
    }
    println!();
    for (step, instruction) in recipe.steps.iter().enumerate() {
        println!("   {}. {instruction}", step + 1);
    }
    println!("\n{}", text.recipe_description);
}

/// Display a trivia question with markers reflecting the answer state
pub fn display_quiz(round: &QuizRound, language: Language) {
    let text = translations(language);
    let question = round.question();
    println!("\n{}", text.quiz_title);
    println!("{}", "=".repeat(50));
    println!("{}", question.question);

    for (index, option) in question.options.iter().enumerate() {
        let label = option_label(index).map_or_else(|| (index + 1).to_string(), String::from);
        let marker = match round.highlight(index) {
            OptionHighlight::Selectable | OptionHighlight::Dimmed => " ",
            OptionHighlight::Success => "✓",
            OptionHighlight::Failure => "✗",
        };
        println!("  {marker} {label}) {option}");
    }

    if let Some(feedback) = round.feedback() {
        let verdict = match (feedback.is_correct(), language) {
            (true, Language::En) => "Correct!",
            (true, Language::Id) => "Benar!",
            (false, Language::En) => "Not quite.",
            (false, Language::Id) => "Kurang tepat.",
        };
        println!("\n{verdict} {}", question.explanation);
    }
}

/// Display the logged-in profile and pledges
pub fn display_session(session: &Session) {
    let text = translations(session.language);
    let Some(user) = &session.user else {
        println!("{} ({})", text.welcome, session.language);
        return;
    };

    println!("\n{} {}", text.dashboard, user.username);
    println!("{}", "=".repeat(50));
    println!("   {}: {}", text.points, user.points);
    println!("   {}: {}", text.streak, user.streak);
    if !user.pledges.is_empty() {
        println!("   {}", text.pledge_title);
        for pledge in &user.pledges {
            println!("     - {pledge}");
        }
    }
}

/// Display the notice shown when the AI service gave nothing usable
pub fn display_unavailable(language: Language) {
    match language {
        Language::En => println!("The AI helper could not answer right now. Please try again."),
        Language::Id => println!("Asisten AI belum bisa menjawab sekarang. Coba lagi, ya."),
    }
}
