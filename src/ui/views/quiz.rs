use crate::QuizApp;
use crate::ui::helpers::{big_button, option_button};
use crate::ui::layout::centered_panel;
use crate::view_models::FeedbackView;
use egui::{Color32, RichText, ScrollArea, Ui};

pub fn ui_quiz(app: &mut QuizApp, ctx: &egui::Context) {
    let Some(view) = app.quiz_view() else {
        return;
    };

    let mut chosen: Option<String> = None;
    let mut next = false;

    centered_panel(ctx, 420.0, 650.0, |ui| {
        let panel_width = ui.available_width();

        ScrollArea::vertical()
            .id_salt("prompt")
            .max_height(150.0)
            .show(ui, |ui| {
                ui.label(RichText::new(&view.prompt).size(18.0));
            });
        ui.add_space(12.0);

        for row in &view.options {
            if option_button(ui, row, panel_width) {
                chosen = Some(row.label.clone());
            }
            ui.add_space(4.0);
        }

        if let Some(feedback) = &view.feedback {
            ui.add_space(12.0);
            ui.separator();
            feedback_section(ui, feedback);
            ui.add_space(10.0);
            next = big_button(ui, "Next Question", panel_width, 36.0, true);
        }
    });

    if let Some(option) = chosen {
        app.choose_option(&option);
    }
    if next {
        app.next_question();
    }
}

fn feedback_section(ui: &mut Ui, feedback: &FeedbackView) {
    let colour = if feedback.correct {
        Color32::from_rgb(102, 187, 106)
    } else {
        Color32::from_rgb(239, 83, 80)
    };
    ui.label(RichText::new(feedback.headline).heading().color(colour));
    ui.label(RichText::new(&feedback.correct_answer).strong());
    ui.add_space(6.0);
    ScrollArea::vertical()
        .id_salt("explanation")
        .max_height(120.0)
        .show(ui, |ui| {
            ui.label(feedback.explanation_label());
        });
}
