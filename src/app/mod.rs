use crate::config::QuizConfig;
use crate::data::LoadError;
use crate::model::QuestionSet;
use crate::session::QuizSession;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::mpsc::Receiver;

// Submodules
pub mod actions;
pub mod loading;
pub mod queries;
pub mod view_models;

pub use crate::view_models::{FeedbackView, OptionRow, QuizView};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed(String),
}

pub struct QuizApp {
    pub questions: QuestionSet,
    pub load: LoadStatus,
    pub session: QuizSession<StdRng>,
    pub config: QuizConfig,
    load_rx: Option<Receiver<Result<QuestionSet, LoadError>>>,
}

impl QuizApp {
    /// Starts the app and kicks off the question load in the background.
    pub fn new(ctx: &egui::Context, config: QuizConfig) -> Self {
        let mut app = Self {
            questions: QuestionSet::default(),
            load: LoadStatus::Loading,
            session: QuizSession::new(StdRng::from_entropy()),
            config,
            load_rx: None,
        };
        app.spawn_question_load(ctx);
        app
    }

    /// Already-loaded app; no background work.
    pub fn with_questions(questions: QuestionSet, rng: StdRng) -> Self {
        Self {
            questions,
            load: LoadStatus::Ready,
            session: QuizSession::new(rng),
            config: QuizConfig::default(),
            load_rx: None,
        }
    }
}
