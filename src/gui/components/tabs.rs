// src/gui/components/tabs.rs
//
// Renders the report tabs. The switch itself (output path, table reload)
// lives in App::switch_to.

use eframe::egui;
use crate::gui::{app::App, router};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut clicked: Option<usize> = None;

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let cur = app.current_index();
        ui.add_enabled_ui(!app.running, |ui| {
            for (idx, page) in router::all_pages().iter().enumerate() {
                let selected = idx == cur;
                let label = egui::RichText::new(page.title()).strong();
                if ui.selectable_label(selected, label).clicked() && !selected {
                    clicked = Some(idx);
                }
            }
        });
    });

    if let Some(idx) = clicked {
        app.switch_to(idx);
    }

    let hint = app.current_page().hint();
    if !hint.is_empty() {
        ui.label(egui::RichText::new(hint).small().weak());
    }
}
