// src/session.rs

use crate::model::{OptionStatus, QuestionRecord, QuestionSet};
use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Uniform pick with replacement; the same record may come up twice in a row.
pub fn pick_question<R: Rng + ?Sized>(
    questions: &QuestionSet,
    rng: &mut R,
) -> Option<QuestionRecord> {
    questions.as_slice().choose(rng).cloned()
}

/// State of one quiz run. Every transition returns the next value
/// instead of touching fields in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub started: bool,
    pub current_question: Option<QuestionRecord>,
    pub selected_option: Option<String>,
    pub revealed: bool,
}

impl SessionState {
    pub fn started(next: Option<QuestionRecord>) -> Self {
        Self {
            started: true,
            current_question: next,
            selected_option: None,
            revealed: false,
        }
    }

    /// Ignored once revealed or when there is nothing to answer.
    /// The option is not checked against the list; a stray value just
    /// grades as incorrect.
    pub fn select_option(&self, option: &str) -> Self {
        if self.revealed || self.current_question.is_none() {
            return self.clone();
        }
        Self {
            selected_option: Some(option.to_owned()),
            revealed: true,
            ..self.clone()
        }
    }

    pub fn advance(&self, next: Option<QuestionRecord>) -> Self {
        Self {
            started: self.started,
            current_question: next,
            selected_option: None,
            revealed: false,
        }
    }

    pub fn is_correct(&self) -> bool {
        match (&self.current_question, &self.selected_option) {
            (Some(q), Some(selected)) => self.revealed && *selected == q.answer,
            _ => false,
        }
    }

    pub fn option_status(&self, option: &str) -> OptionStatus {
        if !self.revealed {
            return OptionStatus::Neutral;
        }
        let Some(q) = &self.current_question else {
            return OptionStatus::Neutral;
        };
        if option == q.answer {
            OptionStatus::Correct
        } else if self.selected_option.as_deref() == Some(option) {
            OptionStatus::Incorrect
        } else {
            OptionStatus::Neutral
        }
    }
}

/// Owns the session state and the random source used to draw questions.
#[derive(Debug, Clone)]
pub struct QuizSession<R = StdRng> {
    state: SessionState,
    rng: R,
}

impl<R: Rng> QuizSession<R> {
    pub fn new(rng: R) -> Self {
        Self {
            state: SessionState::default(),
            rng,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn start(&mut self, questions: &QuestionSet) -> &SessionState {
        let next = pick_question(questions, &mut self.rng);
        self.state = SessionState::started(next);
        &self.state
    }

    pub fn select_option(&mut self, option: &str) -> &SessionState {
        self.state = self.state.select_option(option);
        &self.state
    }

    pub fn advance(&mut self, questions: &QuestionSet) -> &SessionState {
        let next = pick_question(questions, &mut self.rng);
        self.state = self.state.advance(next);
        &self.state
    }

    pub fn is_correct(&self) -> bool {
        self.state.is_correct()
    }

    pub fn option_status(&self, option: &str) -> OptionStatus {
        self.state.option_status(option)
    }
}
