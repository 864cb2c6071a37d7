// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{process, export, ...}.

mod copy;     // src/gui/actions/copy.rs
mod export;   // src/gui/actions/export.rs
mod process;  // src/gui/actions/process.rs
mod remote;   // src/gui/actions/remote.rs

pub use copy::copy;
pub use export::export;
pub use process::process;
pub use remote::{inventory, load_history_dates, login, logout, show_history, upload};

use crate::{config::options::ReportKind, gui::app::App, runner::Report};

/// Install a fresh report for its tab and show it when that tab is active.
pub(super) fn install_report(app: &mut App, report: Report) {
    let kind: ReportKind = report.kind;
    app.reports.insert(kind, report);
    if app.current_kind() == kind {
        app.rebuild_view();
    }
}
