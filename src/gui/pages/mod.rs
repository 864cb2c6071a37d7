// src/gui/pages/mod.rs
use eframe::egui;

use crate::config::options::ReportKind;
use crate::config::settings::Settings;
use crate::gui::app::App;
use crate::sheet::Cell;

pub mod comparacion;
pub mod dias_disponibles;
pub mod mano_de_obra;
pub mod resumen;

/// One tab per report.
pub trait Page: Send + Sync + 'static {
    fn kind(&self) -> ReportKind;

    fn title(&self) -> &'static str {
        self.kind().label()
    }

    /// Labels of the input path fields, one per input file.
    fn input_labels(&self) -> &'static [&'static str];

    /// One-line hint shown under the inputs.
    fn hint(&self) -> &'static str {
        ""
    }

    /// Headers shown before anything was processed.
    fn default_headers(&self) -> &'static [&'static str];

    /// Columns drawn centered as numbers.
    fn numeric_columns(&self) -> &'static [usize] {
        &[]
    }

    /// Optional text colour for a data row.
    fn row_color(&self, _row: &[Cell], _settings: &Settings) -> Option<egui::Color32> {
        None
    }

    /// Page-specific controls above the table.
    fn draw_controls(&self, _ui: &mut egui::Ui, _app: &mut App) {}
}
