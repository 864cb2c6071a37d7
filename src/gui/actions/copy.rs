// src/gui/actions/copy.rs
use eframe::egui;
use crate::{csv, gui::app::App};

/// Copy what the table shows (filtered, sorted, all pages) as TSV.
pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.view.visible_len() == 0 {
        app.status("Nada que copiar");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let sheet = app.view.visible_sheet();
    logf!("Copy: report={}, rows={}", app.current_kind().key(), sheet.data_len());

    ui_ctx.copy_text(csv::to_delimited_string(&sheet, b'\t'));
    app.status(format!("{} fila(s) copiadas", sheet.data_len()));
}
