// src/sheet.rs
//
// Array-of-arrays table handed between the processors, the workbook writer
// and the GUI table.

use std::fmt;

/// One raw cell value, as read from a workbook or produced by a processor.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Text(String),
    Number(f64),
}

impl Cell {
    pub fn text(s: impl Into<String>) -> Self {
        Cell::Text(s.into())
    }

    pub fn number(n: f64) -> Self {
        Cell::Number(n)
    }

    /// Display text. Integral numbers print without a fraction (`90`, not `90.0`).
    pub fn as_text(&self) -> String {
        match self {
            Cell::Empty => s!(),
            Cell::Text(t) => t.clone(),
            Cell::Number(n) => format_number(*n),
        }
    }

    /// Numeric coercion; text must parse completely after trimming.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Empty => None,
            Cell::Number(n) => Some(*n),
            Cell::Text(t) => t.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        }
    }

    /// Empty, or text that is blank after trimming.
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(t) => t.trim().is_empty(),
            Cell::Number(_) => false,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s!(s))
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

impl From<i64> for Cell {
    fn from(n: i64) -> Self {
        Cell::Number(n as f64)
    }
}

fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        // also folds -0 into "0"
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

const ERROR_TAG: &str = "Error";

/// Rows of cells; row 0 is the header row when the sheet has one.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Sheet {
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    pub fn with_headers(headers: &[&str]) -> Self {
        Self { rows: vec![headers.iter().map(|h| Cell::text(*h)).collect()] }
    }

    /// Build from plain strings (CSV cache, clipboard, tests).
    pub fn from_strings(rows: Vec<Vec<String>>) -> Self {
        Self {
            rows: rows
                .into_iter()
                .map(|r| r.into_iter().map(Cell::Text).collect())
                .collect(),
        }
    }

    /// The two-row `[["Error"], [message]]` shape processors return instead of
    /// failing when the input is structurally wrong.
    pub fn error_sentinel(message: impl Into<String>) -> Self {
        Self { rows: vec![vec![Cell::text(ERROR_TAG)], vec![Cell::text(message)]] }
    }

    pub fn is_error_sentinel(&self) -> bool {
        self.rows.len() == 2
            && self.rows[0].len() == 1
            && self.rows[1].len() == 1
            && self.rows[0][0] == Cell::text(ERROR_TAG)
    }

    pub fn error_message(&self) -> Option<String> {
        self.is_error_sentinel().then(|| self.rows[1][0].as_text())
    }

    pub fn push(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn headers(&self) -> Option<Vec<String>> {
        self.rows.first().map(|r| r.iter().map(Cell::as_text).collect())
    }

    /// Rows after the header row.
    pub fn data(&self) -> &[Vec<Cell>] {
        self.rows.get(1..).unwrap_or(&[])
    }

    pub fn data_len(&self) -> usize {
        self.data().len()
    }
}
