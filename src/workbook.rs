// src/workbook.rs
//
// Spreadsheet cell-grid I/O: first sheet in, single `Reporte` sheet out.

use std::path::Path;

use calamine::{Data, Range, Reader, open_workbook_auto};

use crate::config::consts::SHEET_NAME;
use crate::error::{ReportError, Result};
use crate::sheet::{Cell, Sheet};

const WORKBOOK_EXTS: [&str; 4] = ["xlsx", "xlsm", "xls", "ods"];

fn ext_of(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default()
}

/// Rows of the first sheet (workbooks) or of the whole file (CSV/TSV).
pub fn read_table(path: &Path) -> Result<Vec<Vec<Cell>>> {
    let ext = ext_of(path);
    match ext.as_str() {
        "csv" => crate::csv::read_rows(path, b','),
        "tsv" => crate::csv::read_rows(path, b'\t'),
        e if WORKBOOK_EXTS.contains(&e) => read_first_sheet(path),
        _ => Err(ReportError::UnsupportedInput(path.display().to_string())),
    }
}

/// First worksheet, padded so row/column indices match the sheet's own
/// coordinates even when the used range does not start at A1.
pub fn read_first_sheet(path: &Path) -> Result<Vec<Vec<Cell>>> {
    let mut wb = open_workbook_auto(path)?;
    let range = wb.worksheet_range_at(0).ok_or(ReportError::InsufficientData)??;
    let rows = range_to_rows(&range);
    logd!("Workbook: {} row(s) from {}", rows.len(), path.display());
    Ok(rows)
}

fn range_to_rows(range: &Range<Data>) -> Vec<Vec<Cell>> {
    let Some((row0, col0)) = range.start() else {
        return Vec::new();
    };
    let mut rows: Vec<Vec<Cell>> = vec![Vec::new(); row0 as usize];
    for r in range.rows() {
        let mut row = vec![Cell::Empty; col0 as usize];
        row.extend(r.iter().map(data_to_cell));
        rows.push(row);
    }
    rows
}

fn data_to_cell(v: &Data) -> Cell {
    match v {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::text(if *b { "TRUE" } else { "FALSE" }),
        Data::DateTime(serial) => Cell::Number(serial.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(e) => Cell::Text(format!("#ERROR:{e:?}")),
    }
}

/// Write `sheet` as a one-sheet workbook named `Reporte`.
pub fn write_xlsx(sheet: &Sheet, path: &Path) -> Result<()> {
    let mut book = umya_spreadsheet::new_file_empty_worksheet();
    let ws = book
        .new_sheet(SHEET_NAME)
        .map_err(|e| ReportError::WorkbookWrite(s!(e)))?;

    for (r, row) in sheet.rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            let coord = ((c + 1) as u32, (r + 1) as u32);
            match cell {
                Cell::Empty => {}
                Cell::Text(t) => {
                    ws.get_cell_mut(coord).set_value(t.as_str());
                }
                Cell::Number(n) => {
                    ws.get_cell_mut(coord).set_value_number(*n);
                }
            }
        }
    }

    umya_spreadsheet::writer::xlsx::write(&book, path)
        .map_err(|e| ReportError::WorkbookWrite(e.to_string()))?;
    logd!("Workbook: wrote {} row(s) to {}", sheet.rows.len(), path.display());
    Ok(())
}
