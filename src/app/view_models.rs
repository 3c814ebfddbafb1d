use super::*;

impl QuizApp {
    /// Everything the quiz screen draws; `None` when there is no question.
    pub fn quiz_view(&self) -> Option<QuizView> {
        let state = self.session.state();
        let question = state.current_question.as_ref()?;

        let options = question
            .options
            .iter()
            .map(|option| OptionRow {
                label: option.clone(),
                status: state.option_status(option),
                enabled: !state.revealed,
            })
            .collect();

        let feedback = state.revealed.then(|| {
            FeedbackView::new(state.is_correct(), &question.answer, &question.explanation)
        });

        Some(QuizView {
            prompt: question.question.clone(),
            options,
            feedback,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OptionStatus, QuestionRecord};
    use crate::view_models::{CORRECT_HEADLINE, INCORRECT_HEADLINE};

    fn started() -> QuizApp {
        let mut app = QuizApp::with_questions(
            QuestionSet::new(vec![QuestionRecord::new("Q1", ["A", "B"], "A", "E1")]),
            StdRng::seed_from_u64(11),
        );
        app.start_quiz();
        app
    }

    fn statuses(view: &QuizView) -> Vec<(String, OptionStatus, bool)> {
        view.options
            .iter()
            .map(|r| (r.label.clone(), r.status, r.enabled))
            .collect()
    }

    #[test]
    fn unanswered_question_has_neutral_enabled_rows() {
        let view = started().quiz_view().unwrap();
        assert_eq!(view.prompt, "Q1");
        assert!(view.feedback.is_none());
        assert_eq!(
            statuses(&view),
            vec![
                ("A".to_string(), OptionStatus::Neutral, true),
                ("B".to_string(), OptionStatus::Neutral, true),
            ]
        );
    }

    #[test]
    fn wrong_answer_view() {
        let mut app = started();
        app.choose_option("B");
        let view = app.quiz_view().unwrap();
        assert_eq!(
            statuses(&view),
            vec![
                ("A".to_string(), OptionStatus::Correct, false),
                ("B".to_string(), OptionStatus::Incorrect, false),
            ]
        );
        let feedback = view.feedback.unwrap();
        assert!(!feedback.correct);
        assert_eq!(feedback.headline, INCORRECT_HEADLINE);
        assert_eq!(feedback.correct_answer, "A");
        assert_eq!(feedback.explanation, "E1");
    }

    #[test]
    fn right_answer_view() {
        let mut app = started();
        app.choose_option("A");
        let view = app.quiz_view().unwrap();
        assert_eq!(view.options[0].status, OptionStatus::Correct);
        assert_eq!(view.options[1].status, OptionStatus::Neutral);
        let feedback = view.feedback.unwrap();
        assert!(feedback.correct);
        assert_eq!(feedback.headline, CORRECT_HEADLINE);
    }

    #[test]
    fn not_started_has_no_view() {
        let app = QuizApp::with_questions(QuestionSet::default(), StdRng::seed_from_u64(0));
        assert!(app.quiz_view().is_none());
    }
}
