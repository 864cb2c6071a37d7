// src/gui/table_model.rs
//! TableView: what the GUI table shows of a report sheet.
//!
//! - Wraps the sheet's headers + data rows (never mutated).
//! - Quick filter: case-insensitive substring match over every cell.
//! - Click-to-sort per column: numeric when both cells are numbers,
//!   text otherwise; clicking the same column again flips the direction.
//! - Pagination over the filtered, sorted rows.
//!
//! No egui in here, so the view logic can be tested headless.

use std::cmp::Ordering;

use crate::config::consts::PAGE_SIZE;
use crate::core::sanitize::normalize_ws;
use crate::sheet::{Cell, Sheet};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

#[derive(Clone, Debug)]
pub struct TableView {
    pub headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
    filter: String,
    sort: Option<(usize, SortDir)>,
    page: usize,
    page_size: usize,
    /// Filtered + sorted row indices, rebuilt on every change.
    visible: Vec<usize>,
}

impl Default for TableView {
    fn default() -> Self {
        Self::with_page_size(PAGE_SIZE)
    }
}

impl TableView {
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            headers: Vec::new(),
            rows: Vec::new(),
            filter: s!(),
            sort: None,
            page: 0,
            page_size: page_size.max(1),
            visible: Vec::new(),
        }
    }

    pub fn from_sheet(sheet: &Sheet) -> Self {
        let mut view = Self::default();
        view.load(sheet);
        view
    }

    /// Swap in a new sheet; filter text is kept, sort and page reset.
    pub fn load(&mut self, sheet: &Sheet) {
        self.headers = sheet.headers().unwrap_or_default();
        self.rows = sheet.data().to_vec();
        self.sort = None;
        self.page = 0;
        self.rebuild();
    }

    pub fn clear(&mut self) {
        self.load(&Sheet::default());
    }

    pub fn ncols(&self) -> usize {
        self.headers.len().max(self.rows.iter().map(Vec::len).max().unwrap_or(0))
    }

    pub fn total_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn set_filter(&mut self, text: &str) {
        let text = normalize_ws(text).to_lowercase();
        if text != self.filter {
            self.filter = text;
            self.page = 0;
            self.rebuild();
        }
    }

    pub fn sort(&self) -> Option<(usize, SortDir)> {
        self.sort
    }

    pub fn toggle_sort(&mut self, col: usize) {
        self.sort = match self.sort {
            Some((c, SortDir::Asc)) if c == col => Some((col, SortDir::Desc)),
            _ => Some((col, SortDir::Asc)),
        };
        self.rebuild();
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_count(&self) -> usize {
        self.visible.len().div_ceil(self.page_size).max(1)
    }

    pub fn next_page(&mut self) {
        if self.page + 1 < self.page_count() {
            self.page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    /// Rows on the current page, in display order.
    pub fn page_rows(&self) -> Vec<&[Cell]> {
        self.visible
            .iter()
            .skip(self.page * self.page_size)
            .take(self.page_size)
            .filter_map(|&i| self.rows.get(i).map(Vec::as_slice))
            .collect()
    }

    /// Header + every filtered row in display order (Copy / Export).
    pub fn visible_sheet(&self) -> Sheet {
        let mut rows = Vec::with_capacity(self.visible.len() + 1);
        rows.push(self.headers.iter().map(|h| Cell::text(h.as_str())).collect());
        rows.extend(self.visible.iter().filter_map(|&i| self.rows.get(i).cloned()));
        Sheet::new(rows)
    }

    fn matches(&self, row: &[Cell]) -> bool {
        self.filter.is_empty()
            || row.iter().any(|c| c.as_text().to_lowercase().contains(&self.filter))
    }

    fn rebuild(&mut self) {
        let mut visible: Vec<usize> = (0..self.rows.len())
            .filter(|&i| self.matches(&self.rows[i]))
            .collect();

        if let Some((col, dir)) = self.sort {
            visible.sort_by(|&a, &b| {
                let ord = compare_cells(self.rows[a].get(col), self.rows[b].get(col));
                match dir {
                    SortDir::Asc => ord,
                    SortDir::Desc => ord.reverse(),
                }
            });
        }
        self.visible = visible;
        if self.page >= self.page_count() {
            self.page = self.page_count() - 1;
        }
    }
}

/// Numbers by value when both sides are numeric, text otherwise.
pub fn compare_cells(a: Option<&Cell>, b: Option<&Cell>) -> Ordering {
    let (a, b) = (a.cloned().unwrap_or_default(), b.cloned().unwrap_or_default());
    match (a.as_number(), b.as_number()) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a.as_text().to_lowercase().cmp(&b.as_text().to_lowercase()),
    }
}
