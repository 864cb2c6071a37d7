// src/gui/actions/export.rs
use crate::{file, gui::app::App};

/// Write the whole current report (not just the filtered view) to the output path.
pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    app.apply_out_path();

    let kind = app.current_kind();
    let status_msg = match app.reports.get(&kind) {
        None => {
            logd!("Export: Clicked, but there's no report for {}", kind.key());
            s!("Nada que exportar")
        }
        Some(report) => {
            let export = &app.state.options.export;
            logf!(
                "Export: Begin report={}, rows={}, format={:?}",
                kind.key(),
                report.sheet.data_len(),
                export.format
            );
            match file::export(export, &report.sheet) {
                Ok(path) => {
                    logf!("Export: OK → {}", path.display());
                    format!("Exportado: {}", path.display())
                }
                Err(e) => {
                    loge!("Export: Error: {e}");
                    format!("Error al exportar: {e}")
                }
            }
        }
    };

    app.status(status_msg);
}
