// ABOUTME: Single trivia round: answer once, then highlight correct and wrong options
// ABOUTME: Pure state so the view only renders what this module decides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eco-Bite Contributors

//! Trivia round evaluation

use eco_bite_core::models::QuizQuestion;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors when answering a round
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// The round already has an answer
    #[error("question has already been answered")]
    AlreadyAnswered,
    /// The selected index does not name an option
    #[error("option {index} does not exist (question has {option_count} options)")]
    InvalidOption {
        /// Selected index
        index: usize,
        /// Number of options in the question
        option_count: usize,
    },
}

/// Result of answering a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerFeedback {
    /// The selected option was the correct one
    Correct,
    /// The selected option was wrong
    Incorrect,
}

impl AnswerFeedback {
    /// Whether the answer earns the quiz reward
    #[must_use]
    pub const fn is_correct(&self) -> bool {
        matches!(self, Self::Correct)
    }
}

/// How an option should be rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionHighlight {
    /// Not answered yet; the option can be chosen
    Selectable,
    /// The correct option, after answering
    Success,
    /// The option that was chosen and was wrong
    Failure,
    /// Any other option, after answering
    Dimmed,
}

/// One question and, once given, the answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizRound {
    question: QuizQuestion,
    selected: Option<usize>,
}

impl QuizRound {
    /// Start a round for a question
    #[must_use]
    pub const fn new(question: QuizQuestion) -> Self {
        Self {
            question,
            selected: None,
        }
    }

    /// The question being asked
    #[must_use]
    pub const fn question(&self) -> &QuizQuestion {
        &self.question
    }

    /// Selected option, if answered
    #[must_use]
    pub const fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Whether an answer has been recorded
    #[must_use]
    pub const fn is_answered(&self) -> bool {
        self.selected.is_some()
    }

    /// Feedback for the recorded answer
    #[must_use]
    pub fn feedback(&self) -> Option<AnswerFeedback> {
        self.selected.map(|index| self.judge(index))
    }

    /// Record an answer; a round accepts exactly one
    ///
    /// # Errors
    ///
    /// Returns `AlreadyAnswered` on a second answer and `InvalidOption` when
    /// `index` is outside the option list.
    pub fn answer(&mut self, index: usize) -> Result<AnswerFeedback, QuizError> {
        if self.selected.is_some() {
            return Err(QuizError::AlreadyAnswered);
        }
        let option_count = self.question.options.len();
        if index >= option_count {
            return Err(QuizError::InvalidOption {
                index,
                option_count,
            });
        }

        self.selected = Some(index);
        let feedback = self.judge(index);
        debug!(index, ?feedback, "quiz answer recorded");
        Ok(feedback)
    }

    /// Highlight for the option at `index`
    #[must_use]
    pub fn highlight(&self, index: usize) -> OptionHighlight {
        match self.selected {
            None => OptionHighlight::Selectable,
            Some(_) if index == self.question.correct_index => OptionHighlight::Success,
            Some(selected) if index == selected => OptionHighlight::Failure,
            Some(_) => OptionHighlight::Dimmed,
        }
    }

    fn judge(&self, index: usize) -> AnswerFeedback {
        if index == self.question.correct_index {
            AnswerFeedback::Correct
        } else {
            AnswerFeedback::Incorrect
        }
    }
}

/// Letter shown before an option (`A`, `B`, ...), for the first 26 options
#[must_use]
pub fn option_label(index: usize) -> Option<char> {
    u8::try_from(index)
        .ok()
        .filter(|&i| i < 26)
        .map(|i| char::from(b'A' + i))
}
