use super::*;
use std::sync::mpsc::{Sender, TryRecvError, channel};

impl QuizApp {
    pub fn spawn_question_load(&mut self, ctx: &egui::Context) {
        if self.load_rx.is_some() {
            return;
        }
        let (tx, rx) = channel();
        self.load_rx = Some(rx);
        self.load = LoadStatus::Loading;

        let source = self.config.source.clone();
        let ctx = ctx.clone();
        log::info!("Loading questions from {source}");

        #[cfg(not(target_arch = "wasm32"))]
        std::thread::spawn(move || {
            let result = crate::data::load_questions(&source);
            deliver(&tx, &ctx, result);
        });

        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(async move {
            let result = crate::data::fetch_questions(&source.to_string()).await;
            deliver(&tx, &ctx, result);
        });
    }

    /// Called once per frame; picks up the load result when it lands.
    /// A loader that dies without sending counts as a failed load.
    pub fn poll_question_load(&mut self) {
        let Some(rx) = self.load_rx.as_ref() else {
            return;
        };
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => Err(LoadError::WorkerGone),
        };
        self.load_rx = None;
        self.finish_load(result);
    }

    pub(crate) fn finish_load(&mut self, result: Result<QuestionSet, LoadError>) {
        match result {
            Ok(questions) => {
                log::info!("Loaded {} questions", questions.len());
                self.questions = questions;
                self.load = LoadStatus::Ready;
            }
            Err(err) => {
                // degrades to the "no questions" screen
                log::error!("Could not fetch questions: {err}");
                self.questions = QuestionSet::default();
                self.load = LoadStatus::Failed(err.to_string());
            }
        }
    }
}

fn deliver(
    tx: &Sender<Result<QuestionSet, LoadError>>,
    ctx: &egui::Context,
    result: Result<QuestionSet, LoadError>,
) {
    if tx.send(result).is_err() {
        log::debug!("Question load finished after the app was dropped");
    }
    ctx.request_repaint();
}
