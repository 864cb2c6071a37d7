// src/gui/actions/process.rs
use std::path::PathBuf;

use crate::{
    gui::{app::App, progress::GuiProgress},
    runner::{self, RunParams},
};

pub fn process(app: &mut App) {
    let kind = app.current_kind();
    let inputs: Vec<PathBuf> = app
        .inputs
        .get(&kind)
        .map(|v| v.iter().map(|p| PathBuf::from(p.trim())).collect())
        .unwrap_or_default();

    logf!("Process: Begin report={} inputs={:?}", kind.key(), inputs);

    let params = RunParams {
        kind,
        inputs,
        export: None,
        upload: false,
        store: Some(app.store.clone()),
    };

    app.running = true;
    let mut prog = GuiProgress::new(app.status.clone());

    // → Runs on the UI thread; inputs are single local files ←
    let result = runner::run(&params, &app.settings, None, Some(&mut prog));
    app.running = false;

    match result {
        Ok(summary) => {
            let rows = summary.report.sheet.data_len();
            logf!("Process: OK report={}, rows={}", kind.key(), rows);
            if kind == crate::config::options::ReportKind::Comparacion {
                app.state.gui.history_date.clear();
            }
            super::install_report(app, summary.report);
            app.status(format!("{}: {rows} fila(s)", kind.label()));
        }
        Err(e) => {
            // GuiProgress already put the message on the status line
            loge!("Process: Error report={}: {e}", kind.key());
        }
    }
}
