use super::*;

impl QuizApp {
    /// "Start" button. The bank must have finished loading first; starting
    /// while the load is in flight leaves the run without a question.
    pub fn start_quiz(&mut self) {
        let state = self.session.start(&self.questions);
        match &state.current_question {
            Some(q) => log::debug!("Quiz started on {:?}", q.question),
            None => log::debug!("Quiz started with no questions available"),
        }
    }

    /// Click on an option. Ignored once the answer is showing.
    pub fn choose_option(&mut self, option: &str) {
        let was_revealed = self.session.state().revealed;
        if self.session.select_option(option).revealed && !was_revealed {
            log::debug!(
                "Selected {:?}: {}",
                option,
                if self.session.is_correct() { "correct" } else { "incorrect" }
            );
        }
    }

    /// "Next Question" button.
    pub fn next_question(&mut self) {
        let state = self.session.advance(&self.questions);
        if let Some(q) = &state.current_question {
            log::debug!("Next question {:?}", q.question);
        }
    }
}
