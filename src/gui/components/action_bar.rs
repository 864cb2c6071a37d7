// src/gui/components/action_bar.rs

use std::path::{Path, PathBuf};

use eframe::egui::{self, widgets::Spinner};
use crate::{
    config::options::ExportFormat,
    gui::{actions, app::{App, today}},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let kind = app.current_kind();

    // --- Format ---
    {
        let export = &mut app.state.options.export;
        let prev_fmt = export.format;
        let mut fmt = prev_fmt;

        ui.horizontal(|ui| {
            ui.label("Formato:");
            ui.selectable_value(&mut fmt, ExportFormat::Xlsx, "XLSX");
            ui.selectable_value(&mut fmt, ExportFormat::Csv, "CSV");
            ui.selectable_value(&mut fmt, ExportFormat::Tsv, "TSV");
        });

        if fmt != prev_fmt {
            export.format = fmt;
            logf!("UI: Export format → {:?}", export.format);

            // Untouched default path follows the new extension.
            if !app.out_path_dirty && export.is_default_for(kind, &today()) {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
                logd!("UI: out_path_text refreshed to match format (default path)");
            }
        }
    }

    // --- Output field ---
    let mut open_folder_clicked = false;
    ui.horizontal(|ui| {
        ui.label("Salida:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace)
                .desired_width(420.0))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }

        if ui.button("📁").on_hover_text("Abrir carpeta de salida").clicked() {
            open_folder_clicked = true;
        }
    });

    if open_folder_clicked {
        open_output_folder(app);
    }

    // --- Actions: Export / Copy / Upload ---
    let has_rows = app.current_report().is_some_and(|r| r.sheet.data_len() > 0);
    ui.horizontal(|ui| {
        if ui.add_enabled(has_rows, egui::Button::new("Exportar")).clicked() {
            actions::export(app);
        }

        if ui.add_enabled(app.view.visible_len() > 0, egui::Button::new("Copiar")).clicked() {
            actions::copy(app, ui.ctx());
        }

        if kind.uploadable() {
            let upload = ui
                .add_enabled(has_rows && app.logged_in && !app.running, egui::Button::new("Subir al servidor"))
                .on_disabled_hover_text("Requiere datos procesados y sesión iniciada");
            if upload.clicked() {
                actions::upload(app);
            }
        }

        if app.running {
            ui.add(Spinner::new().size(16.0));
        }

        ui.label(app.status_text());
    });
}

/// Open the output folder in the system file explorer.
fn open_output_folder(app: &App) {
    let path = app.state.options.export.out_path();
    let folder = nearest_existing_dir(path.parent().unwrap_or(Path::new(".")));

    let absolute = match std::fs::canonicalize(&folder) {
        Ok(p) => p,
        Err(e) => {
            loge!("Cannot resolve folder path: {e}");
            app.status(format!("No se pudo resolver la carpeta: {e}"));
            return;
        }
    };

    match open_in_explorer(&absolute) {
        Ok(()) => logf!("Opened folder: {}", absolute.display()),
        Err(e) => {
            loge!("Failed to open folder: {e}");
            app.status(format!("No se pudo abrir la carpeta: {e}"));
        }
    }
}

/// Walk up until a directory exists; "." when none does.
fn nearest_existing_dir(path: &Path) -> PathBuf {
    path.ancestors()
        .find(|p| !p.as_os_str().is_empty() && p.is_dir())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn open_in_explorer(path: &Path) -> std::io::Result<()> {
    #[cfg(target_os = "windows")]
    let program = "explorer";
    #[cfg(target_os = "macos")]
    let program = "open";
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    let program = "xdg-open";

    std::process::Command::new(program).arg(path).spawn().map(|_| ())
}
