// src/gui/app.rs
use std::{
    collections::HashMap,
    error::Error,
    sync::{Arc, Mutex},
};

use chrono::Local;
use eframe::egui;

use crate::{
    backend::HttpBackend,
    config::{
        consts::FILE_DATE_FORMAT,
        options::ReportKind,
        settings::Settings,
        state::AppState,
    },
    error::Result,
    runner::Report,
    sheet::Sheet,
    store::Store,
};

use super::{pages::Page, router, table_model::TableView};

pub fn run(options: eframe::NativeOptions) -> std::result::Result<(), Box<dyn Error>> {
    let settings = Settings::load_or_default();
    eframe::run_native(
        "Reportes de Producción",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(AppState::default(), settings, Store::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub settings: Settings,
    pub store: Store,

    // input path fields per report
    pub inputs: HashMap<ReportKind, Vec<String>>,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // last built report per kind + what the table shows for the current one
    pub reports: HashMap<ReportKind, Report>,
    pub view: TableView,

    // status line (progress writes here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,

    // comparison history
    pub history_dates: Vec<String>,

    // session
    pub login_user: String,
    pub login_password: String,
    pub logged_in: bool,
}

pub fn today() -> String {
    Local::now().format(FILE_DATE_FORMAT).to_string()
}

impl App {
    pub fn new(mut state: AppState, settings: Settings, store: Store) -> Self {
        let mut status = s!("Listo");

        // Reports cached by a previous session
        let mut reports: HashMap<ReportKind, Report> = HashMap::new();
        for kind in ReportKind::ALL {
            match store.load_sheet(kind) {
                Ok(Some(sheet)) if !sheet.is_empty() => {
                    logf!("Cache: loaded {} ({} rows)", kind.key(), sheet.data_len());
                    reports.insert(kind, Report::from_cached(kind, sheet));
                    status = s!("Datos locales cargados");
                }
                Ok(_) => logd!("Cache: nothing for {}", kind.key()),
                Err(e) => loge!("Cache: {} unreadable: {e}", kind.key()),
            }
        }

        let inputs = ReportKind::ALL
            .into_iter()
            .map(|k| (k, vec![s!(); k.input_count()]))
            .collect();

        let kind = router::all_pages()[state.gui.current_page_index].kind();
        state.options.report = kind;
        state.options.export.set_default_for(kind, &today());
        let out_path_text = state.options.export.out_path().to_string_lossy().into_owned();

        let logged_in = store.load_token().is_some();
        logf!("Init: page={}, api={}, session={}", kind.key(), settings.api.base_url, logged_in);

        let mut app = Self {
            state,
            settings,
            store,
            inputs,
            out_path_text,
            out_path_dirty: false,
            reports,
            view: TableView::default(),
            status: Arc::new(Mutex::new(status)),
            running: false,
            history_dates: Vec::new(),
            login_user: s!(),
            login_password: s!(),
            logged_in,
        };
        app.rebuild_view();
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn current_kind(&self) -> ReportKind { self.current_page().kind() }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page { router::all_pages()[self.current_index()] }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap_or_else(|p| p.into_inner()) = msg.into();
    }

    pub fn status_text(&self) -> String {
        self.status.lock().unwrap_or_else(|p| p.into_inner()).clone()
    }

    pub fn current_report(&self) -> Option<&Report> {
        self.reports.get(&self.current_kind())
    }

    /// Table shows the current page's report, or its default headers.
    pub fn rebuild_view(&mut self) {
        let filter = s!(self.view.filter());
        match self.reports.get(&self.current_kind()) {
            Some(report) => self.view.load(&report.sheet),
            None => self.view.load(&Sheet::with_headers(self.current_page().default_headers())),
        }
        self.view.set_filter(&filter);
    }

    /// Switch tab; a default output path follows the new report's default name.
    pub fn switch_to(&mut self, idx: usize) {
        let prev = self.current_kind();
        self.state.gui.current_page_index = idx;
        let kind = self.current_kind();
        self.state.options.report = kind;
        logf!("UI: Tab switch {} → {}", prev.key(), kind.key());

        let export = &mut self.state.options.export;
        if !self.out_path_dirty && export.is_default_for(prev, &today()) {
            export.set_default_for(kind, &today());
            self.out_path_text = export.out_path().to_string_lossy().into_owned();
        }
        self.state.gui.history_date.clear();
        self.rebuild_view();
    }

    /// Push the output text field into ExportOptions when the user edited it.
    pub fn apply_out_path(&mut self) {
        if self.out_path_dirty {
            self.state.options.export.set_path(&self.out_path_text);
            self.out_path_text = self.state.options.export.out_path().to_string_lossy().into_owned();
            self.out_path_dirty = false;
        }
    }

    pub fn backend(&self) -> Result<HttpBackend> {
        HttpBackend::new(&self.settings.api.base_url, self.store.load_token())
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("session").show(ctx, |ui| {
            crate::gui::components::session_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::tabs::draw(ui, self);

            ui.separator();

            crate::gui::components::input_bar::draw(ui, self);

            ui.separator();

            crate::gui::components::action_bar::draw(ui, self);

            ui.separator();

            crate::gui::components::data_table::draw(ui, self);
        });
    }
}
