use crate::QuizApp;
use crate::ui::helpers::big_button;
use crate::ui::layout::centered_panel;
use egui::{Context, RichText};

pub fn ui_start(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 160.0, 420.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(10.0);
            // the bank has to be there before a question can be drawn
            let ready = !app.is_loading();
            if big_button(ui, "Start Lipincott Quiz", 300.0, 44.0, ready) {
                app.start_quiz();
            }
            ui.add_space(8.0);
            if ready {
                ui.label(format!("{} questions available", app.question_count()));
            } else {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(RichText::new("Loading questions…").weak());
                });
            }
        });
    });
}
