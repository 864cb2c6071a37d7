// src/core/mod.rs

pub mod grid;
pub mod header;
pub mod html;
pub mod numeric;
pub mod sanitize;

pub use grid::{CellSource, LogicalRow, PositionedCell, build_rows};
pub use header::{ColumnSpec, WorkingTable, locate_header, nearest_column};
pub use html::HtmlCellSource;
