// src/gui/components/input_bar.rs
//
// One path field per input file of the current report, the "Procesar"
// button, and whatever the page adds (history, server inventory).

use eframe::egui;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let page = app.current_page();
    let kind = page.kind();
    let exts = kind.accepted_exts().join(", ");

    let fields = app
        .inputs
        .entry(kind)
        .or_insert_with(|| vec![s!(); kind.input_count()]);
    fields.resize(kind.input_count(), s!());

    egui::Grid::new(("inputs", kind.key()))
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            for (label, text) in page.input_labels().iter().zip(fields.iter_mut()) {
                ui.label(*label);
                ui.add(
                    egui::TextEdit::singleline(text)
                        .hint_text(format!("ruta ({exts})"))
                        .font(egui::TextStyle::Monospace)
                        .desired_width(420.0),
                );
                ui.end_row();
            }
        });

    let ready = app
        .inputs
        .get(&kind)
        .is_some_and(|v| v.iter().all(|p| !p.trim().is_empty()));

    ui.horizontal(|ui| {
        let red = egui::Color32::from_rgb(220, 30, 30);
        let process = ui.add_enabled(
            ready && !app.running,
            egui::Button::new(egui::RichText::new("PROCESAR").color(egui::Color32::BLACK).strong())
                .fill(red),
        );
        if process.clicked() {
            actions::process(app);
        }
    });

    page.draw_controls(ui, app);
}
