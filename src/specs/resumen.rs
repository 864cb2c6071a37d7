// src/specs/resumen.rs
//
// Group summary from the positioned-HTML export: how many rows follow each
// marker row.

use std::collections::HashMap;

use super::mano_de_obra::{LayoutRules, extract_table};
use crate::core::WorkingTable;
use crate::core::html::HtmlCellSource;
use crate::error::Result;
use crate::sheet::{Cell, Sheet};

pub const HEADERS: [&str; 2] = ["Grupo (M)", "Cantidad de Filas de Datos"];

/// `(group, row count)` in first-seen order. Rows before the first marker are
/// not counted; a marker seen again keeps adding to its count.
pub fn count_groups(table: &WorkingTable, rules: &LayoutRules) -> Vec<(String, usize)> {
    let mut order: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut current: Option<usize> = None;

    for row in table.data_rows() {
        if let Some(code) = rules.marker_code(row) {
            let i = *index.entry(s!(code)).or_insert_with(|| {
                order.push((s!(code), 0));
                order.len() - 1
            });
            current = Some(i);
        } else if let Some(i) = current {
            order[i].1 += 1;
        }
    }
    order
}

pub fn process_resumen(table: &WorkingTable, rules: &LayoutRules) -> Sheet {
    let mut sheet = Sheet::with_headers(&HEADERS);
    for (group, count) in count_groups(table, rules) {
        sheet.push(vec![Cell::Text(group), Cell::Number(count as f64)]);
    }
    logf!("Resumen: {} group(s)", sheet.data_len());
    sheet
}

pub fn resumen_from_html(html: &str, rules: &LayoutRules) -> Result<Sheet> {
    let source = HtmlCellSource::parse(html);
    let table = extract_table(&source, rules)?;
    Ok(process_resumen(&table, rules))
}
