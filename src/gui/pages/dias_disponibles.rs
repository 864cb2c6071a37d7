// src/gui/pages/dias_disponibles.rs
use eframe::egui;

use crate::config::options::ReportKind;
use crate::config::settings::Settings;
use crate::gui::{actions, app::App};
use crate::sheet::Cell;
use crate::specs::dias_disponibles::HEADERS;

pub struct DiasDisponiblesPage;
pub static PAGE: DiasDisponiblesPage = DiasDisponiblesPage;

const DAYS_COL: usize = 5;

impl super::Page for DiasDisponiblesPage {
    fn kind(&self) -> ReportKind { ReportKind::DiasDisponibles }

    fn input_labels(&self) -> &'static [&'static str] { &["Inventario (Excel/CSV):"] }

    fn hint(&self) -> &'static str {
        "Dos filas por producto. Descripciones terminadas en X usan 15 días, el resto 30."
    }

    fn default_headers(&self) -> &'static [&'static str] { &HEADERS }

    fn numeric_columns(&self) -> &'static [usize] { &[2, 3, 4, 5] }

    // Out of stock
    fn row_color(&self, row: &[Cell], _settings: &Settings) -> Option<egui::Color32> {
        let days = row.get(DAYS_COL)?.as_number()?;
        (days <= 0.0).then_some(egui::Color32::from_rgb(0xDC, 0x61, 0x49))
    }

    fn draw_controls(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.horizontal(|ui| {
            if ui.add_enabled(!app.running, egui::Button::new("Ver inventario del servidor")).clicked() {
                actions::inventory(app);
            }
        });
    }
}
