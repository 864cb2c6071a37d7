// src/specs/dias_disponibles.rs
//
// Days-of-stock report from the inventory export.
//
// The export spends two physical rows on each product:
//   row i:   Description = product code, Available / Minimum / Reorder
//   row i+1: Description = human-readable description
// Row 0 is boilerplate; the header row is found by its "Description" cell.

use serde::{Deserialize, Deserializer, Serialize};

use crate::config::consts::*;
use crate::core::numeric::{parse_locale_number, round_half_up};
use crate::error::{ReportError, Result};
use crate::sheet::{Cell, Sheet};

pub const HEADERS: [&str; 6] = [
    "Código",
    "Descripción",
    "Disponible",
    "Mínimo",
    "Reorder",
    "Días Disponibles",
];

/// One consolidated product. Field names on the wire follow the backend.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryRecord {
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "disponible", deserialize_with = "de_rounded")]
    pub available: i64,
    #[serde(rename = "minimo", deserialize_with = "de_rounded")]
    pub minimum: i64,
    #[serde(deserialize_with = "de_rounded")]
    pub reorder: i64,
    #[serde(rename = "dias_disponibles", deserialize_with = "de_rounded")]
    pub days_available: i64,
}

// The backend stores these as numeric columns; accept `90` and `90.0` alike.
fn de_rounded<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<i64, D::Error> {
    let v = Option::<f64>::deserialize(d)?.unwrap_or(0.0);
    Ok(round_half_up(v) as i64)
}

impl InventoryRecord {
    pub fn to_row(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.code),
            Cell::text(&self.description),
            Cell::from(self.available),
            Cell::from(self.minimum),
            Cell::from(self.reorder),
            Cell::from(self.days_available),
        ]
    }

    /// Inverse of `to_row`, for sheets reloaded from the local cache.
    /// Like `consolidate`, only a row with neither code nor description is skipped.
    pub fn from_row(row: &[Cell]) -> Option<Self> {
        let code = text_cell(row, 0);
        let description = text_cell(row, 1);
        if code.is_empty() && description.is_empty() {
            return None;
        }
        Some(Self {
            code,
            description,
            available: int_cell(row.get(2)),
            minimum: int_cell(row.get(3)),
            reorder: int_cell(row.get(4)),
            days_available: int_cell(row.get(5)),
        })
    }
}

/// Days of stock. Descriptions ending in `X` use the 15-day multiplier.
pub fn days_available(available: i64, minimum: i64, description: &str) -> i64 {
    if minimum <= 0 {
        return 0;
    }
    let multiplier = if description.trim().to_uppercase().ends_with('X') {
        DAYS_MULTIPLIER_X
    } else {
        DAYS_MULTIPLIER
    };
    round_half_up(available as f64 / minimum as f64 * multiplier) as i64
}

/// Cell coerced to an integer; blanks and text that is not a number give 0.
fn int_cell(cell: Option<&Cell>) -> i64 {
    let v = match cell {
        Some(Cell::Number(n)) => *n,
        Some(Cell::Text(t)) => parse_locale_number(t).unwrap_or(0.0),
        _ => 0.0,
    };
    round_half_up(v) as i64
}

fn text_cell(row: &[Cell], idx: usize) -> String {
    row.get(idx).map(|c| s!(c.as_text().trim())).unwrap_or_default()
}

fn find_column(header: &[Cell], name: &str) -> Result<usize> {
    header
        .iter()
        .position(|c| c.as_text().trim() == name)
        .ok_or_else(|| ReportError::MissingColumn { column: s!(name) })
}

/// Pair up product rows, drop leftovers and sort by description then days.
pub fn consolidate(rows: &[Vec<Cell>]) -> Result<Vec<InventoryRecord>> {
    if rows.len() < 2 {
        return Err(ReportError::InsufficientData);
    }
    let body = &rows[1..];
    let header_idx = body
        .iter()
        .position(|r| r.iter().any(|c| c.as_text().trim() == INVENTORY_ANCHOR))
        .ok_or_else(|| ReportError::HeaderNotFound { anchor: s!(INVENTORY_ANCHOR) })?;

    let header = &body[header_idx];
    let desc_col = find_column(header, COL_DESCRIPTION)?;
    let avail_col = find_column(header, COL_AVAILABLE)?;
    let min_col = find_column(header, COL_MINIMUM)?;
    let reorder_col = find_column(header, COL_REORDER)?;

    let data = &body[header_idx + 1..];
    let mut records = Vec::with_capacity(data.len() / 2);
    for pair in data.chunks_exact(2) {
        let (main, desc_row) = (&pair[0], &pair[1]);
        let code = text_cell(main, desc_col);
        let description = text_cell(desc_row, desc_col);

        if code.is_empty() && description.is_empty() {
            continue;
        }
        if description == SENTINEL_DESCRIPTION || code == SENTINEL_CODE {
            continue;
        }

        let available = int_cell(main.get(avail_col));
        let minimum = int_cell(main.get(min_col));
        let reorder = int_cell(main.get(reorder_col));
        records.push(InventoryRecord {
            days_available: days_available(available, minimum, &description),
            code,
            description,
            available,
            minimum,
            reorder,
        });
    }
    if data.len() % 2 == 1 {
        logd!("Días disponibles: trailing unpaired row ignored");
    }

    records.sort_by(|a, b| {
        a.description
            .cmp(&b.description)
            .then(a.days_available.cmp(&b.days_available))
    });
    Ok(records)
}

pub fn records_to_sheet(records: &[InventoryRecord]) -> Sheet {
    let mut sheet = Sheet::with_headers(&HEADERS);
    for r in records {
        sheet.push(r.to_row());
    }
    sheet
}

/// Data rows of a rendered report back into records.
pub fn records_from_sheet(sheet: &Sheet) -> Vec<InventoryRecord> {
    sheet.data().iter().filter_map(|r| InventoryRecord::from_row(r)).collect()
}

/// Render `consolidate` as a sheet. Structural problems come back as the
/// `[["Error"], [message]]` sentinel; zero valid records give the header alone.
pub fn process_dias_disponibles(rows: &[Vec<Cell>]) -> Sheet {
    match consolidate(rows) {
        Ok(records) => {
            if records.is_empty() {
                logw!("Días disponibles: no valid rows");
            } else {
                logf!("Días disponibles: {} product(s)", records.len());
            }
            records_to_sheet(&records)
        }
        Err(e) => {
            loge!("Días disponibles: {e}");
            Sheet::error_sentinel(e.to_string())
        }
    }
}
