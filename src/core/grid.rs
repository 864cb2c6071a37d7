// src/core/grid.rs
//
// Table reconstruction, pass one: group positioned text fragments into
// reading-order rows. No markup knowledge here; fragments come from a
// `CellSource`.

use std::collections::HashMap;

/// A text fragment and the offsets it was drawn at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PositionedCell {
    /// Horizontal offset (px); `None` when the source gave no integer.
    pub left: Option<i64>,
    /// Vertical offset key, verbatim from the source (e.g. `"100px"`).
    pub top: String,
    /// Raw text, untrimmed.
    pub text: String,
}

impl PositionedCell {
    pub fn new(left: i64, top: impl Into<String>, text: impl Into<String>) -> Self {
        Self { left: Some(left), top: top.into(), text: text.into() }
    }

    /// A fragment with no usable horizontal offset.
    pub fn unplaced(top: impl Into<String>, text: impl Into<String>) -> Self {
        Self { left: None, top: top.into(), text: text.into() }
    }

    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }
}

/// All fragments sharing one vertical key, left to right.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogicalRow {
    pub top: String,
    pub cells: Vec<PositionedCell>,
}

impl LogicalRow {
    /// Trimmed text of cell `i`, `""` when the row is shorter.
    pub fn text_at(&self, i: usize) -> &str {
        self.cells.get(i).map(PositionedCell::trimmed).unwrap_or("")
    }
}

/// Anything that can hand out positioned fragments in document order.
pub trait CellSource {
    fn cells(&self) -> Vec<PositionedCell>;
}

impl CellSource for [PositionedCell] {
    fn cells(&self) -> Vec<PositionedCell> {
        self.to_vec()
    }
}

impl CellSource for Vec<PositionedCell> {
    fn cells(&self) -> Vec<PositionedCell> {
        self.clone()
    }
}

/// Group by vertical key, order groups by the key's numeric value and each
/// group's cells by `left`. Keys with the same numeric value keep first-seen
/// order; keys with no numeric value go last, and so do unplaced cells.
pub fn build_rows<S: CellSource + ?Sized>(source: &S) -> Vec<LogicalRow> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<PositionedCell>> = HashMap::new();

    for cell in source.cells() {
        if cell.top.trim().is_empty() {
            continue;
        }
        match groups.get_mut(&cell.top) {
            Some(g) => g.push(cell),
            None => {
                order.push(cell.top.clone());
                groups.insert(cell.top.clone(), vec![cell]);
            }
        }
    }

    // stable: ties keep insertion order
    order.sort_by_key(|top| parse_int_prefix(top).unwrap_or(i64::MAX));

    order
        .into_iter()
        .filter_map(|top| {
            let mut cells = groups.remove(&top)?;
            cells.sort_by_key(|c| c.left.unwrap_or(i64::MAX));
            Some(LogicalRow { top, cells })
        })
        .collect()
}

/// Leading integer of `s` (`"120px"` -> 120, `" -4.5"` -> -4). `None` when
/// no digit follows the optional sign.
pub fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (neg, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let n: i64 = rest[..digits].parse().ok()?;
    Some(if neg { -n } else { n })
}
