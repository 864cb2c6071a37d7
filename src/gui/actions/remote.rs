// src/gui/actions/remote.rs
//
// Everything that talks to the backend: session, upload, server inventory
// and comparison history. Calls are blocking and short; the UI waits.

use crate::{
    backend::{Backend, HttpBackend},
    error::{ReportError, Result},
    gui::app::App,
    runner,
};

/// Run `f` against the configured backend; an expired session logs out.
fn with_backend<T>(app: &mut App, what: &str, f: impl FnOnce(&dyn Backend) -> Result<T>) -> Option<T> {
    app.running = true;
    let result = app.backend().and_then(|b| f(&b));
    app.running = false;

    match result {
        Ok(v) => Some(v),
        Err(e) => {
            loge!("{what}: {e}");
            if matches!(e, ReportError::NotAuthenticated | ReportError::Backend { status: 401, .. }) {
                if let Err(e) = app.store.clear_token() {
                    logw!("Store: {e}");
                }
                app.logged_in = false;
            }
            app.status(format!("Error: {e}"));
            None
        }
    }
}

pub fn login(app: &mut App) {
    let user = app.login_user.trim().to_string();
    if user.is_empty() || app.login_password.is_empty() {
        app.status("Usuario y contraseña requeridos");
        return;
    }

    app.running = true;
    let result = HttpBackend::login(&app.settings.api.base_url, &user, &app.login_password)
        .and_then(|token| app.store.save_token(&token));
    app.running = false;
    app.login_password.clear();

    match result {
        Ok(()) => {
            app.logged_in = true;
            app.status(format!("Sesión iniciada como {user}"));
        }
        Err(e) => {
            loge!("Login: {e}");
            app.status(format!("Error al iniciar sesión: {e}"));
        }
    }
}

pub fn logout(app: &mut App) {
    if let Err(e) = app.store.clear_token() {
        logw!("Store: {e}");
    }
    app.logged_in = false;
    app.history_dates.clear();
    logf!("Session: logged out");
    app.status("Sesión cerrada");
}

/// Push the current report's payload (inventory or comparison run).
pub fn upload(app: &mut App) {
    let kind = app.current_kind();
    let Some(report) = app.reports.get(&kind).cloned() else {
        app.status("Nada que subir");
        return;
    };

    if let Some(tag) = with_backend(app, "Upload", |b| runner::upload(&report, b)) {
        logf!("Upload: OK report={} tag={tag}", kind.key());
        app.status(format!("Subido ({tag})"));
    }
}

/// Replace the inventory tab with what the server holds.
pub fn inventory(app: &mut App) {
    if let Some(report) = with_backend(app, "Inventory", runner::inventory) {
        let n = report.sheet.data_len();
        super::install_report(app, report);
        app.status(format!("Inventario del servidor: {n} producto(s)"));
    }
}

pub fn load_history_dates(app: &mut App) {
    if let Some(dates) = with_backend(app, "History", |b| b.comparison_dates()) {
        logf!("History: {} date(s)", dates.len());
        app.status(format!("{} comparación(es) guardadas", dates.len()));
        app.history_dates = dates;
    }
}

/// Show a stored comparison run; an empty date goes back to the cached result.
pub fn show_history(app: &mut App, fecha: &str) {
    let kind = crate::config::options::ReportKind::Comparacion;

    if fecha.is_empty() {
        app.state.gui.history_date.clear();
        match app.store.load_sheet(kind) {
            Ok(Some(sheet)) => super::install_report(app, runner::Report::from_cached(kind, sheet)),
            Ok(None) => {
                app.reports.remove(&kind);
                app.rebuild_view();
            }
            Err(e) => loge!("Cache: {e}"),
        }
        app.status("Resultado actual");
        return;
    }

    if let Some(report) = with_backend(app, "History", |b| runner::history(b, fecha)) {
        app.state.gui.history_date = s!(fecha);
        let n = report.sheet.data_len();
        super::install_report(app, report);
        app.status(format!("Comparación {fecha}: {n} fila(s)"));
    }
}
