// src/ui/helpers.rs
use crate::model::OptionStatus;
use crate::view_models::OptionRow;
use egui::{Button, Color32, RichText, Ui, Vec2};

pub fn big_button(ui: &mut Ui, label: &str, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

fn status_fill(status: OptionStatus) -> Option<Color32> {
    match status {
        OptionStatus::Neutral => None,
        OptionStatus::Correct => Some(Color32::from_rgb(46, 125, 50)),
        OptionStatus::Incorrect => Some(Color32::from_rgb(183, 28, 28)),
    }
}

/// One answer button. Coloured by status; disabled once revealed.
pub fn option_button(ui: &mut Ui, row: &OptionRow, width: f32) -> bool {
    let button = match status_fill(row.status) {
        Some(fill) => Button::new(RichText::new(row.label()).color(Color32::WHITE).strong()).fill(fill),
        None => Button::new(row.label()),
    };
    ui.add_enabled(row.enabled, button.min_size(Vec2::new(width, 36.0)))
        .clicked()
}
