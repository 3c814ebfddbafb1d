use serde::{Deserialize, Serialize};

/// One multiple-choice question: prompt, options in display order,
/// the correct option and the explanation shown after answering.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String, // must be one of `options`
    pub explanation: String,
}

impl QuestionRecord {
    pub fn new(
        question: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
        answer: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            options: options.into_iter().map(Into::into).collect(),
            answer: answer.into(),
            explanation: explanation.into(),
        }
    }

    /// False when the record can never be answered correctly.
    pub fn answer_in_options(&self) -> bool {
        self.options.iter().any(|o| o == &self.answer)
    }
}

/// The loaded question bank. Never mutated after loading; may be empty.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct QuestionSet {
    questions: Vec<QuestionRecord>,
}

impl QuestionSet {
    pub fn new(questions: Vec<QuestionRecord>) -> Self {
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QuestionRecord> {
        self.questions.iter()
    }

    pub fn as_slice(&self) -> &[QuestionRecord] {
        &self.questions
    }

    pub fn contains(&self, record: &QuestionRecord) -> bool {
        self.questions.contains(record)
    }
}

impl From<Vec<QuestionRecord>> for QuestionSet {
    fn from(questions: Vec<QuestionRecord>) -> Self {
        Self::new(questions)
    }
}

impl<'a> IntoIterator for &'a QuestionSet {
    type Item = &'a QuestionRecord;
    type IntoIter = std::slice::Iter<'a, QuestionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}

/// How an option should be painted once feedback is (or isn't) showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum OptionStatus {
    #[default]
    Neutral,
    Correct,
    Incorrect,
}

/// Which view the UI layer should draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Start,
    Quiz,
    Loading,
    NoQuestions,
}
