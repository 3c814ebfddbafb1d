mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::Screen;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.poll_question_load();

        top_panel(ctx);
        bottom_panel(ctx);

        match self.screen() {
            Screen::Start => views::start::ui_start(self, ctx),
            Screen::Quiz => views::quiz::ui_quiz(self, ctx),
            Screen::Loading | Screen::NoQuestions => views::empty::ui_no_questions(self, ctx),
        }
    }
}
