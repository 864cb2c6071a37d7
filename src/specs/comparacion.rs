// src/specs/comparacion.rs
//
// Reconciliation of a production summary against a requirements table.
//
// Summary columns: code, description, type, people, measured time.
// Requirements: product code and required units at configurable columns.

use std::collections::HashMap;

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::config::consts::STAMP_FORMAT;
use crate::config::settings::ComparisonSettings;
use crate::core::numeric::{parse_locale_number, round_half_up};
use crate::sheet::{Cell, Sheet};

pub const HEADERS: [&str; 7] = [
    "Código",
    "Descripción",
    "Tipo",
    "Personas",
    "Tiempo Medido",
    "Unidades Requeridas",
    "Diferencia (%)",
];

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconciliationRow {
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "tipo")]
    pub kind: String,
    #[serde(rename = "cantidad_personas")]
    pub people_count: f64,
    #[serde(rename = "tiempo_medido")]
    pub measured_time: f64,
    #[serde(rename = "unidades_requeridas")]
    pub required_units: f64,
    #[serde(rename = "diferencia_porcentaje")]
    pub diff_percent: Option<f64>,
}

/// A reconciliation row as stored on the backend, tagged with its run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRecord {
    #[serde(default)]
    pub fecha: String,
    #[serde(flatten)]
    pub row: ReconciliationRow,
}

impl ReconciliationRow {
    pub fn to_row(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.code),
            Cell::text(&self.description),
            Cell::text(&self.kind),
            Cell::number(self.people_count),
            Cell::number(self.measured_time),
            Cell::number(self.required_units),
            self.diff_percent
                .map(|d| Cell::number(round_half_up(d * 100.0) / 100.0))
                .unwrap_or(Cell::Empty),
        ]
    }

    /// Rebuild from a rendered row; the difference is recomputed.
    pub fn from_row(row: &[Cell]) -> Option<Self> {
        let code = cell_text(row, 0);
        if code.is_empty() {
            return None;
        }
        let measured_time = cell_number(row, 4);
        let required_units = cell_number(row, 5);
        Some(Self {
            code,
            description: cell_text(row, 1),
            kind: cell_text(row, 2),
            people_count: cell_number(row, 3),
            measured_time,
            required_units,
            diff_percent: diff_percent(required_units, measured_time),
        })
    }
}

fn cell_text(row: &[Cell], idx: usize) -> String {
    row.get(idx).map(|c| s!(c.as_text().trim())).unwrap_or_default()
}

/// Numeric cell; text goes through the locale-tolerant parser, junk is 0.
fn cell_number(row: &[Cell], idx: usize) -> f64 {
    match row.get(idx) {
        Some(Cell::Number(n)) => *n,
        Some(Cell::Text(t)) => parse_locale_number(t).unwrap_or(0.0),
        _ => 0.0,
    }
}

/// `(required - measured) / required * 100`; `None` when nothing is required.
pub fn diff_percent(required_units: f64, measured_time: f64) -> Option<f64> {
    (required_units != 0.0).then(|| (required_units - measured_time) / required_units * 100.0)
}

pub fn is_flagged(row: &ReconciliationRow, threshold: f64) -> bool {
    row.diff_percent.is_some_and(|d| d > threshold)
}

/// Flag for a rendered row. The shown difference is rounded, so it is
/// recomputed from the measured and required columns.
pub fn row_is_flagged(row: &[Cell], threshold: f64) -> bool {
    ReconciliationRow::from_row(row).is_some_and(|r| is_flagged(&r, threshold))
}

/// Code -> required units. The first row for a code wins; later rows with the
/// same code are ignored, not summed.
pub fn build_requirements_lookup(
    rows: &[Vec<Cell>],
    code_col: usize,
    units_col: usize,
) -> HashMap<String, f64> {
    let mut lookup = HashMap::new();
    let mut duplicates = 0usize;
    for row in rows {
        let code = cell_text(row, code_col);
        if code.is_empty() {
            continue;
        }
        let units = cell_number(row, units_col);
        if lookup.contains_key(&code) {
            duplicates += 1;
        }
        lookup.entry(code).or_insert(units);
    }
    if duplicates > 0 {
        logd!("Comparación: {duplicates} duplicate requirement code(s) ignored");
    }
    lookup
}

/// Join summary rows against the lookup. Rows without a measured time are
/// dropped; codes missing from the lookup get 0 required units.
pub fn reconcile(summary: &[Vec<Cell>], lookup: &HashMap<String, f64>) -> Vec<ReconciliationRow> {
    summary
        .iter()
        .filter_map(|row| {
            let measured_time = cell_number(row, 4);
            if measured_time == 0.0 {
                return None;
            }
            let code = cell_text(row, 0);
            let required_units = lookup.get(&code).copied().unwrap_or(0.0);
            Some(ReconciliationRow {
                description: cell_text(row, 1),
                kind: cell_text(row, 2),
                people_count: cell_number(row, 3),
                measured_time,
                required_units,
                diff_percent: diff_percent(required_units, measured_time),
                code,
            })
        })
        .collect()
}

/// Both sources as read from disk, boilerplate rows included.
pub fn reconcile_sources(
    summary: &[Vec<Cell>],
    requirements: &[Vec<Cell>],
    cfg: &ComparisonSettings,
) -> Vec<ReconciliationRow> {
    let summary = summary.get(cfg.summary_skip_rows..).unwrap_or(&[]);
    let requirements = requirements.get(cfg.requirements_skip_rows..).unwrap_or(&[]);
    let lookup =
        build_requirements_lookup(requirements, cfg.requirements_code_col, cfg.requirements_units_col);
    let rows = reconcile(summary, &lookup);
    let flagged = rows.iter().filter(|r| is_flagged(r, cfg.threshold_percent)).count();
    logf!(
        "Comparación: {} row(s), {} requirement code(s), {flagged} over {}%",
        rows.len(),
        lookup.len(),
        cfg.threshold_percent
    );
    rows
}

/// Stored rows with the difference recomputed (same x100 scale as live runs).
pub fn recompute_history(records: &[ComparisonRecord]) -> Vec<ReconciliationRow> {
    records
        .iter()
        .map(|rec| ReconciliationRow {
            diff_percent: diff_percent(rec.row.required_units, rec.row.measured_time),
            ..rec.row.clone()
        })
        .collect()
}

pub fn to_sheet(rows: &[ReconciliationRow]) -> Sheet {
    let mut sheet = Sheet::with_headers(&HEADERS);
    for r in rows {
        sheet.push(r.to_row());
    }
    sheet
}

pub fn rows_from_sheet(sheet: &Sheet) -> Vec<ReconciliationRow> {
    sheet.data().iter().filter_map(|r| ReconciliationRow::from_row(r)).collect()
}

/// Tag for a comparison run, local time.
pub fn stamp_now() -> String {
    Local::now().format(STAMP_FORMAT).to_string()
}
