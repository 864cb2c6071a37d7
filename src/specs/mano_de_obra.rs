// src/specs/mano_de_obra.rs
//
// Labor report from the positioned-HTML export.
//
// Output columns: the header row's labels minus the second one (the group
// description, only used to spot marker rows). Column 0 always carries the
// active group code.

use regex::Regex;

use crate::config::consts::ZERO_QUANTITY;
use crate::config::settings::LayoutSettings;
use crate::core::numeric::normalize_quantity;
use crate::core::{
    CellSource, ColumnSpec, LogicalRow, PositionedCell, WorkingTable, build_rows, locate_header,
    nearest_column,
};
use crate::core::html::HtmlCellSource;
use crate::error::Result;
use crate::sheet::{Cell, Sheet};

/// Layout conventions, compiled once per run.
#[derive(Clone, Debug)]
pub struct LayoutRules {
    pub header_anchor: String,
    pub split_offset: i64,
    pub marker: Regex,
    pub quantity_header: String,
}

impl LayoutRules {
    pub fn from_settings(cfg: &LayoutSettings) -> Result<Self> {
        Ok(Self {
            header_anchor: cfg.header_anchor.clone(),
            split_offset: cfg.split_offset,
            marker: Regex::new(&cfg.marker_pattern)?,
            quantity_header: cfg.quantity_header.clone(),
        })
    }

    pub fn standard() -> Result<Self> {
        Self::from_settings(&LayoutSettings::default())
    }

    /// Group code when `row` opens a new group: first cell matches the marker
    /// pattern and the second (description) is not blank.
    pub fn marker_code<'r>(&self, row: &'r LogicalRow) -> Option<&'r str> {
        let code = row.text_at(0);
        let description = row.text_at(1);
        (!code.is_empty() && self.marker.is_match(code) && !description.is_empty()).then_some(code)
    }
}

/// Geometry passes up to the working table.
pub fn extract_table<S: CellSource + ?Sized>(source: &S, rules: &LayoutRules) -> Result<WorkingTable> {
    locate_header(build_rows(source), &rules.header_anchor)
}

/// Parse, extract and build the labor sheet in one go.
pub fn mano_de_obra_from_html(html: &str, rules: &LayoutRules) -> Result<Sheet> {
    let source = HtmlCellSource::parse(html);
    let table = extract_table(&source, rules)?;
    Ok(process_mano_de_obra(&table, rules))
}

/// Running state of the row fold.
#[derive(Default)]
struct GroupState {
    group: String,
    rows: Vec<Vec<String>>,
}

struct Binder<'a> {
    columns: &'a [ColumnSpec],
    quantity: Option<usize>,
}

impl Binder<'_> {
    /// Put every fragment cell in its nearest column.
    fn bind(&self, fragment: &[PositionedCell]) -> Vec<String> {
        let mut out = vec![s!(); self.columns.len()];
        for cell in fragment {
            let Some(idx) = cell.left.and_then(|left| nearest_column(self.columns, left)) else {
                continue;
            };
            if Some(idx) == self.quantity {
                out[idx] = normalize_quantity(&cell.text);
                continue;
            }
            let text = cell.trimmed();
            if text.is_empty() {
                continue;
            }
            if out[idx].is_empty() {
                out[idx] = s!(text);
            } else {
                out[idx].push(' ');
                out[idx].push_str(text);
            }
        }
        out
    }

    fn accepts(&self, row: &[String]) -> bool {
        row.iter().enumerate().any(|(i, v)| {
            !v.is_empty() && !(Some(i) == self.quantity && v == ZERO_QUANTITY)
        })
    }
}

impl GroupState {
    fn emit(&mut self, binder: &Binder<'_>, fragment: &[PositionedCell]) {
        let mut row = binder.bind(fragment);
        if !binder.accepts(&row) {
            return;
        }
        if let Some(first) = row.first_mut() {
            first.clone_from(&self.group);
        }
        self.rows.push(row);
    }

    fn step(mut self, row: &LogicalRow, binder: &Binder<'_>, rules: &LayoutRules) -> Self {
        if let Some(code) = rules.marker_code(row) {
            self.group = s!(code);
            if row.cells.len() > 2 {
                self.emit(binder, &row.cells[2..]);
            }
            return self;
        }

        match row.cells.iter().position(|c| c.left.is_some_and(|l| l >= rules.split_offset)) {
            Some(split) if split > 0 => {
                let (first, second) = row.cells.split_at(split);
                self.emit(binder, first);
                self.emit(binder, second);
            }
            _ => self.emit(binder, &row.cells),
        }
        self
    }
}

/// Rebuild the labor rows under the working table's header.
pub fn process_mano_de_obra(table: &WorkingTable, rules: &LayoutRules) -> Sheet {
    let binder = Binder {
        columns: &table.columns,
        quantity: table.column_index(&rules.quantity_header),
    };

    let state = table
        .data_rows()
        .iter()
        .fold(GroupState::default(), |acc, row| acc.step(row, &binder, rules));

    let mut rows = Vec::with_capacity(state.rows.len() + 1);
    rows.push(table.column_names());
    rows.extend(state.rows);
    for row in &mut rows {
        if row.len() > 1 {
            row.remove(1);
        }
    }

    logf!("Mano de obra: {} row(s)", rows.len() - 1);
    Sheet::new(
        rows.into_iter()
            .map(|r| r.into_iter().map(Cell::Text).collect())
            .collect(),
    )
}
