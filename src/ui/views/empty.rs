use crate::QuizApp;
use crate::ui::layout::centered_panel;
use egui::{Color32, Context, RichText, Spinner};

pub fn ui_no_questions(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 140.0, 480.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.label("Loading questions or no questions available...");
            ui.add_space(12.0);
            if app.is_loading() {
                ui.add(Spinner::new());
            } else if let Some(err) = app.load_error() {
                ui.label(RichText::new(err).small().color(Color32::LIGHT_RED));
            }
        });
    });
}
