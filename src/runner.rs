// src/runner.rs
//
// One linear pipeline per user action: read input(s) -> build the report ->
// export -> cache -> (optionally) upload. Nothing is written unless the
// report was built completely.

use std::fs;
use std::path::{Path, PathBuf};

use crate::backend::Backend;
use crate::config::options::{ExportOptions, ReportKind};
use crate::config::settings::Settings;
use crate::error::{ReportError, Result};
use crate::progress::Progress;
use crate::sheet::Sheet;
use crate::specs::comparacion::{self, ReconciliationRow};
use crate::specs::dias_disponibles::{self, InventoryRecord};
use crate::specs::mano_de_obra::{self, LayoutRules};
use crate::specs::resumen;
use crate::store::Store;
use crate::workbook;

/// What a report can push to the backend.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Payload {
    #[default]
    None,
    Inventory(Vec<InventoryRecord>),
    Comparison(Vec<ReconciliationRow>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub kind: ReportKind,
    pub sheet: Sheet,
    pub payload: Payload,
}

impl Report {
    /// Rebuild from a cached sheet; uploadable kinds get their payload back.
    pub fn from_cached(kind: ReportKind, sheet: Sheet) -> Self {
        let payload = match kind {
            ReportKind::DiasDisponibles => Payload::Inventory(dias_disponibles::records_from_sheet(&sheet)),
            ReportKind::Comparacion => Payload::Comparison(comparacion::rows_from_sheet(&sheet)),
            _ => Payload::None,
        };
        Self { kind, sheet, payload }
    }
}

/// Everything one run needs besides settings and collaborators.
#[derive(Clone, Debug)]
pub struct RunParams {
    pub kind: ReportKind,
    pub inputs: Vec<PathBuf>,
    /// Write the sheet here when set.
    pub export: Option<ExportOptions>,
    /// Push the payload to the backend after export.
    pub upload: bool,
    /// Cache the sheet for the next GUI start.
    pub store: Option<Store>,
}

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub report: Report,
    pub file_written: Option<PathBuf>,
    /// Tag of the stored comparison run, or `"inventario"` for inventory.
    pub uploaded: Option<String>,
}

fn check_inputs(kind: ReportKind, inputs: &[PathBuf]) -> Result<()> {
    if inputs.len() != kind.input_count() {
        return Err(ReportError::UnsupportedInput(format!(
            "{} necesita {} archivo(s), recibió {}",
            kind.label(),
            kind.input_count(),
            inputs.len()
        )));
    }
    for p in inputs {
        let ext = p
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        if !kind.accepted_exts().contains(&ext.as_str()) {
            return Err(ReportError::UnsupportedInput(p.display().to_string()));
        }
    }
    Ok(())
}

fn read_html(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Build a report from input files. Structural problems are errors.
pub fn process(kind: ReportKind, inputs: &[PathBuf], settings: &Settings) -> Result<Report> {
    check_inputs(kind, inputs)?;
    logf!("Process: {} <- {:?}", kind.label(), inputs);

    let report = match kind {
        ReportKind::ManoDeObra => {
            let rules = LayoutRules::from_settings(&settings.layout)?;
            let sheet = mano_de_obra::mano_de_obra_from_html(&read_html(&inputs[0])?, &rules)?;
            Report { kind, sheet, payload: Payload::None }
        }
        ReportKind::Resumen => {
            let rules = LayoutRules::from_settings(&settings.layout)?;
            let sheet = resumen::resumen_from_html(&read_html(&inputs[0])?, &rules)?;
            Report { kind, sheet, payload: Payload::None }
        }
        ReportKind::DiasDisponibles => {
            let rows = workbook::read_table(&inputs[0])?;
            // Sheet and upload come from the same records.
            let records = dias_disponibles::consolidate(&rows)
                .map_err(|e| ReportError::Structural(e.to_string()))?;
            logf!("Días disponibles: {} product(s)", records.len());
            let sheet = dias_disponibles::records_to_sheet(&records);
            Report { kind, sheet, payload: Payload::Inventory(records) }
        }
        ReportKind::Comparacion => {
            let summary = workbook::read_table(&inputs[0])?;
            let requirements = workbook::read_table(&inputs[1])?;
            let rows = comparacion::reconcile_sources(&summary, &requirements, &settings.comparison);
            let sheet = comparacion::to_sheet(&rows);
            Report { kind, sheet, payload: Payload::Comparison(rows) }
        }
    };
    Ok(report)
}

/// Push a report's payload. Returns the tag it was stored under.
pub fn upload(report: &Report, backend: &dyn Backend) -> Result<String> {
    match &report.payload {
        Payload::Inventory(records) => {
            backend.replace_inventory(records)?;
            Ok(s!("inventario"))
        }
        Payload::Comparison(rows) => {
            let fecha = comparacion::stamp_now();
            backend.append_comparison(&fecha, rows)?;
            Ok(fecha)
        }
        Payload::None => Err(ReportError::UnsupportedInput(format!(
            "{} no se puede subir",
            report.kind.label()
        ))),
    }
}

/// Top-level runner.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    params: &RunParams,
    settings: &Settings,
    backend: Option<&dyn Backend>,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let steps = 1 + params.export.is_some() as usize + params.upload as usize;
    if let Some(p) = progress.as_deref_mut() {
        p.begin(steps);
    }

    let result = run_steps(params, settings, backend, progress.as_deref_mut());
    if let Err(e) = &result {
        loge!("Run: {} failed: {e}", params.kind.label());
        if let Some(p) = progress.as_deref_mut() {
            p.log(&e.to_string());
        }
    }
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    result
}

fn run_steps<'p>(
    params: &RunParams,
    settings: &Settings,
    backend: Option<&dyn Backend>,
    mut progress: Option<&mut (dyn Progress + 'p)>,
) -> Result<RunSummary> {
    let report = process(params.kind, &params.inputs, settings)?;
    if let Some(p) = progress.as_deref_mut() {
        p.step_done(&format!("{}: {} fila(s)", report.kind.label(), report.sheet.data_len()));
    }

    let file_written = match &params.export {
        Some(export) => {
            let path = crate::file::export(export, &report.sheet)?;
            if let Some(p) = progress.as_deref_mut() {
                p.step_done(&format!("Exportado: {}", path.display()));
            }
            Some(path)
        }
        None => None,
    };

    if let Some(store) = &params.store {
        if let Err(e) = store.save_sheet(report.kind, &report.sheet) {
            logw!("Store: {e}");
        }
    }

    let uploaded = if params.upload {
        let backend = backend.ok_or(ReportError::NotAuthenticated)?;
        let tag = upload(&report, backend)?;
        if let Some(p) = progress.as_deref_mut() {
            p.step_done(&format!("Subido: {tag}"));
        }
        Some(tag)
    } else {
        None
    };

    Ok(RunSummary { report, file_written, uploaded })
}

/// Stored comparison run, with differences recomputed.
pub fn history(backend: &dyn Backend, fecha: &str) -> Result<Report> {
    let records = backend.comparison_at(fecha)?;
    let rows = comparacion::recompute_history(&records);
    logf!("History: {fecha} -> {} row(s)", rows.len());
    Ok(Report {
        kind: ReportKind::Comparacion,
        sheet: comparacion::to_sheet(&rows),
        payload: Payload::Comparison(rows),
    })
}

/// Stored inventory as a days-available sheet.
pub fn inventory(backend: &dyn Backend) -> Result<Report> {
    let records = backend.list_inventory()?;
    Ok(Report {
        kind: ReportKind::DiasDisponibles,
        sheet: dias_disponibles::records_to_sheet(&records),
        payload: Payload::Inventory(records),
    })
}
