use super::*;
use crate::model::{QuestionRecord, Screen};

impl QuizApp {
    pub fn screen(&self) -> Screen {
        let state = self.session.state();
        if !state.started {
            return Screen::Start;
        }
        if state.current_question.is_some() {
            Screen::Quiz
        } else if self.is_loading() {
            Screen::Loading
        } else {
            Screen::NoQuestions
        }
    }

    pub fn current_question(&self) -> Option<&QuestionRecord> {
        self.session.state().current_question.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.load == LoadStatus::Loading
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn load_error(&self) -> Option<&str> {
        match &self.load {
            LoadStatus::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
}
