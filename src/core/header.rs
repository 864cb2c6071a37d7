// src/core/header.rs
//
// Table reconstruction, pass two: find the header row and bind cells to
// columns by horizontal distance.

use super::grid::LogicalRow;
use crate::error::{ReportError, Result};

/// One header cell: its label and the offset data cells are measured against.
/// A header cell without an offset still names a column, but nothing binds to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: String,
    pub anchor: Option<i64>,
}

/// The header row and everything below it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkingTable {
    /// Index of the header row in the full document.
    pub start: usize,
    pub columns: Vec<ColumnSpec>,
    /// `rows[0]` is the header row.
    pub rows: Vec<LogicalRow>,
}

impl WorkingTable {
    pub fn data_rows(&self) -> &[LogicalRow] {
        self.rows.get(1..).unwrap_or(&[])
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }
}

/// First row holding a cell whose trimmed text starts with `anchor`.
/// Rows above it are preamble and are dropped.
pub fn locate_header(rows: Vec<LogicalRow>, anchor: &str) -> Result<WorkingTable> {
    let start = rows
        .iter()
        .position(|r| r.cells.iter().any(|c| c.trimmed().starts_with(anchor)))
        .ok_or_else(|| ReportError::HeaderNotFound { anchor: s!(anchor) })?;

    let rows: Vec<LogicalRow> = rows.into_iter().skip(start).collect();
    let columns = rows[0]
        .cells
        .iter()
        .map(|c| ColumnSpec { name: s!(c.trimmed()), anchor: c.left })
        .collect();

    logd!("Header: row {start}, {} data row(s)", rows.len() - 1);
    Ok(WorkingTable { start, columns, rows })
}

/// Column whose anchor is closest to `left`; the first column wins a tie.
pub fn nearest_column(columns: &[ColumnSpec], left: i64) -> Option<usize> {
    let mut best: Option<(usize, i64)> = None;
    for (i, col) in columns.iter().enumerate() {
        let Some(anchor) = col.anchor else { continue };
        let diff = (left - anchor).abs();
        if best.is_none_or(|(_, d)| diff < d) {
            best = Some((i, diff));
        }
    }
    best.map(|(i, _)| i)
}
