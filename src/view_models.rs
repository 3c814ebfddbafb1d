// src/view_models.rs

use crate::model::OptionStatus;

pub const CORRECT_HEADLINE: &str = "Correct!";
pub const INCORRECT_HEADLINE: &str = "Incorrect. The correct answer was:";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionRow {
    pub label: String,
    pub status: OptionStatus,
    pub enabled: bool, // false once the answer is revealed
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackView {
    pub correct: bool,
    pub headline: &'static str,
    pub correct_answer: String,
    pub explanation: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizView {
    pub prompt: String,
    pub options: Vec<OptionRow>,
    pub feedback: Option<FeedbackView>,
}

impl FeedbackView {
    pub fn new(correct: bool, correct_answer: &str, explanation: &str) -> Self {
        Self {
            correct,
            headline: if correct {
                CORRECT_HEADLINE
            } else {
                INCORRECT_HEADLINE
            },
            correct_answer: correct_answer.to_string(),
            explanation: explanation.to_string(),
        }
    }

    pub fn explanation_label(&self) -> String {
        format!("Explanation: {}", self.explanation)
    }
}

impl OptionRow {
    pub fn label(&self) -> String {
        match self.status {
            OptionStatus::Neutral => self.label.clone(),
            OptionStatus::Correct => format!("✅ {}", self.label),
            OptionStatus::Incorrect => format!("❌ {}", self.label),
        }
    }
}
