// src/core/html.rs
//
// Positioned-HTML exports: every text fragment is a `<div>` with inline
// `top`/`left` offsets. This is the only place that touches markup.

use scraper::{Html, Selector};

use super::grid::{CellSource, PositionedCell, parse_int_prefix};

/// Fragments of a positioned-HTML document, in document order.
#[derive(Clone, Debug, Default)]
pub struct HtmlCellSource {
    cells: Vec<PositionedCell>,
}

impl HtmlCellSource {
    /// Divs without a `top` are dropped. A `left` with no integer value gives
    /// an unplaced cell: it still counts as a header label or a row position.
    pub fn parse(html: &str) -> Self {
        let doc = Html::parse_document(html);
        let Ok(sel) = Selector::parse("div") else {
            return Self::default();
        };

        let mut cells = Vec::new();
        let mut unplaced = 0usize;
        for div in doc.select(&sel) {
            let style = div.value().attr("style").unwrap_or("");
            let Some(top) = style_value(style, "top").filter(|t| !t.is_empty()) else {
                continue;
            };
            let text: String = div.text().collect();
            match style_value(style, "left").and_then(parse_int_prefix) {
                Some(left) => cells.push(PositionedCell::new(left, top, text)),
                None => {
                    unplaced += 1;
                    cells.push(PositionedCell::unplaced(top, text));
                }
            }
        }
        if unplaced > 0 {
            logd!("Html: {unplaced} positioned div(s) without a usable left offset");
        }
        logd!("Html: {} positioned cell(s)", cells.len());
        Self { cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl CellSource for HtmlCellSource {
    fn cells(&self) -> Vec<PositionedCell> {
        self.cells.clone()
    }
}

/// Value of one declaration in an inline style (`"top: 10px; left:5px"`).
/// Property names are case-insensitive; the last declaration wins.
pub fn style_value<'a>(style: &'a str, prop: &str) -> Option<&'a str> {
    style
        .split(';')
        .filter_map(|decl| decl.split_once(':'))
        .filter(|(k, _)| k.trim().eq_ignore_ascii_case(prop))
        .map(|(_, v)| v.trim())
        .last()
}
