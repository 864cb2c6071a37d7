// src/gui/pages/comparacion.rs
use eframe::egui;

use crate::config::options::ReportKind;
use crate::config::settings::Settings;
use crate::gui::{actions, app::App};
use crate::sheet::Cell;
use crate::specs::comparacion::{self, HEADERS};

pub struct ComparacionPage;
pub static PAGE: ComparacionPage = ComparacionPage;

impl super::Page for ComparacionPage {
    fn kind(&self) -> ReportKind { ReportKind::Comparacion }

    fn input_labels(&self) -> &'static [&'static str] {
        &["Resumen de producción:", "Requerimientos:"]
    }

    fn hint(&self) -> &'static str {
        "Filas sin tiempo medido se omiten. Diferencias sobre el umbral se marcan en rojo."
    }

    fn default_headers(&self) -> &'static [&'static str] { &HEADERS }

    fn numeric_columns(&self) -> &'static [usize] { &[3, 4, 5, 6] }

    fn row_color(&self, row: &[Cell], settings: &Settings) -> Option<egui::Color32> {
        comparacion::row_is_flagged(row, settings.comparison.threshold_percent)
            .then_some(egui::Color32::from_rgb(0xDC, 0x30, 0x30))
    }

    fn draw_controls(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.horizontal(|ui| {
            ui.label("Historial:");

            let current = app.state.gui.history_date.clone();
            let shown = if current.is_empty() { s!("(resultado actual)") } else { current.clone() };
            let mut picked: Option<String> = None;

            egui::ComboBox::from_id_salt("history_date")
                .selected_text(shown)
                .width(200.0)
                .show_ui(ui, |ui| {
                    if ui.selectable_label(current.is_empty(), "(resultado actual)").clicked() {
                        picked = Some(s!());
                    }
                    for d in &app.history_dates {
                        if ui.selectable_label(*d == current, d.as_str()).clicked() {
                            picked = Some(d.clone());
                        }
                    }
                });

            if ui.add_enabled(!app.running, egui::Button::new("Actualizar fechas")).clicked() {
                actions::load_history_dates(app);
            }

            if let Some(date) = picked {
                if date != current {
                    actions::show_history(app, &date);
                }
            }
        });
    }
}
