// ABOUTME: Line-driven interactive session: login, pledges, trivia, recipes, language switch
// ABOUTME: Each line is one action applied to an explicit Session value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eco-Bite Contributors

use anyhow::Result;
use eco_bite::gateway::{CancellationToken, ContentGateway, GatewayOutcome, RequestPhase};
use eco_bite::i18n::translations;
use eco_bite::intelligence::{IngredientsText, QuizRound};
use eco_bite::session::{Session, SessionAction};
use eco_bite_core::models::{Language, QuizQuestion};
use tokio::io::{stdin, AsyncBufReadExt, BufReader};
use tracing::debug;

use super::tip;
use crate::helpers::choice::parse_choice;
use crate::helpers::display::{display_quiz, display_recipe, display_session, display_unavailable};

const HELP: &str = "\
commands:
  login <name>      start a session
  logout            end the session
  lang en|id        switch language
  pledge <text>     add a pledge (+10 points)
  quiz              get a trivia question
  answer <A..>      answer it (+20 points when right)
  recipe <items>    remix leftovers into a recipe
  tip               show a tip
  status            show points, streak, and pledges
  quit              leave";

/// Mutable state of one interactive run
struct Play<'a> {
    gateway: &'a ContentGateway,
    session: Session,
    question: RequestPhase<QuizQuestion>,
    round: Option<QuizRound>,
}

impl Play<'_> {
    fn apply(&mut self, action: SessionAction) {
        match self.session.apply(action) {
            Ok(next) => {
                self.session = next;
                display_session(&self.session);
            }
            Err(e) => eprintln!("{e}"),
        }
    }

    async fn ask_question(&mut self) {
        if !self.question.begin() {
            return;
        }
        self.round = None;
        eprintln!("{}", translations(self.session.language).loading);
        let outcome = self
            .gateway
            .request_quiz_question(self.session.language, &CancellationToken::new())
            .await;
        self.question.finish(outcome);

        match self.question.value() {
            Some(question) => {
                let round = QuizRound::new(question.clone());
                display_quiz(&round, self.session.language);
                self.round = Some(round);
            }
            None => display_unavailable(self.session.language),
        }
    }

    fn answer(&mut self, choice: &str) {
        let language = self.session.language;
        let Some(round) = self.round.as_mut() else {
            eprintln!("ask for a question first with `quiz`");
            return;
        };
        let Some(index) = parse_choice(choice, round.question().options.len()) else {
            eprintln!("'{choice}' is not one of the options");
            return;
        };

        match round.answer(index) {
            Ok(feedback) => {
                display_quiz(round, language);
                if self.session.is_logged_in() {
                    self.apply(SessionAction::QuizAnswered {
                        correct: feedback.is_correct(),
                    });
                }
            }
            Err(e) => eprintln!("{e}"),
        }
    }

    async fn recipe(&self, ingredients: &str) {
        let language = self.session.language;
        let Some(ingredients) = IngredientsText::parse(ingredients) else {
            eprintln!("{}", translations(language).ingredients_placeholder);
            return;
        };

        eprintln!("{}", translations(language).loading);
        match self
            .gateway
            .request_recipe(ingredients.as_str(), language, &CancellationToken::new())
            .await
        {
            GatewayOutcome::Succeeded(recipe) => display_recipe(&recipe, language),
            GatewayOutcome::Failed | GatewayOutcome::TimedOut | GatewayOutcome::Cancelled => {
                display_unavailable(language);
            }
        }
    }
}

/// Run the interactive session until `quit` or end of input
///
/// # Errors
///
/// Returns an error if stdin cannot be read.
pub async fn run(gateway: &ContentGateway, language: Language) -> Result<()> {
    let mut play = Play {
        gateway,
        session: Session::new(language),
        question: RequestPhase::default(),
        round: None,
    };

    println!("{} {}", translations(language).welcome, translations(language).subtitle);
    println!("{HELP}");

    let mut lines = BufReader::new(stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();
        debug!(command, "play command");

        match command {
            "" => {}
            "quit" | "exit" => break,
            "help" => println!("{HELP}"),
            "login" => play.apply(SessionAction::Login {
                username: rest.to_owned(),
            }),
            "logout" => play.apply(SessionAction::Logout),
            "lang" => match rest.parse::<Language>() {
                Ok(language) => play.apply(SessionAction::SetLanguage { language }),
                Err(e) => eprintln!("{e}"),
            },
            "pledge" => play.apply(SessionAction::AddPledge {
                text: rest.to_owned(),
            }),
            "quiz" => play.ask_question().await,
            "answer" => play.answer(rest),
            "recipe" => play.recipe(rest).await,
            "tip" => tip::run(play.session.language),
            "status" => display_session(&play.session),
            other => eprintln!("unknown command '{other}', try `help`"),
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use eco_bite::config::GatewayConfig;
    use eco_bite::llm::FakeProvider;

    use super::*;

    fn stale_question() -> QuizQuestion {
        QuizQuestion {
            question: "Old question?".to_owned(),
            options: vec!["A1".to_owned(), "B1".to_owned()],
            correct_index: 1,
            explanation: "Old.".to_owned(),
        }
    }

    fn logged_in(language: Language) -> Session {
        Session::new(language)
            .apply(SessionAction::Login {
                username: "Rina".to_owned(),
            })
            .unwrap()
    }

    fn points(play: &Play<'_>) -> u32 {
        play.session.user.as_ref().unwrap().points
    }

    #[tokio::test]
    async fn test_failed_fetch_discards_previous_round() {
        let gateway = ContentGateway::new(
            Arc::new(FakeProvider::failing("offline")),
            &GatewayConfig::default(),
        );
        let mut play = Play {
            gateway: &gateway,
            session: logged_in(Language::En),
            question: RequestPhase::default(),
            round: Some(QuizRound::new(stale_question())),
        };

        play.ask_question().await;
        assert!(play.round.is_none());

        // The old question's correct option no longer scores
        play.answer("B");
        assert_eq!(points(&play), 50);
    }

    #[tokio::test]
    async fn test_successful_fetch_replaces_round() {
        let gateway = ContentGateway::new(
            Arc::new(FakeProvider::with_offline_content()),
            &GatewayConfig::default(),
        );
        let mut play = Play {
            gateway: &gateway,
            session: logged_in(Language::En),
            question: RequestPhase::default(),
            round: Some(QuizRound::new(stale_question())),
        };

        play.ask_question().await;
        let round = play.round.as_ref().unwrap();
        assert_ne!(round.question(), &stale_question());
        assert!(!round.is_answered());

        play.answer("B");
        assert_eq!(points(&play), 70);
    }
}
