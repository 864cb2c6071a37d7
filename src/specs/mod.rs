// src/specs/mod.rs
//! # Report "specs"
//!
//! One module per report. Each spec knows the layout convention of the export
//! it reads and turns already-loaded input (positioned HTML text, or rows of
//! workbook cells) into a [`Sheet`](crate::sheet::Sheet).
//!
//! ## What lives here
//! - **Layout rules**: header anchors, marker rows, split offsets, the
//!   two-rows-per-product inventory shape.
//! - **Business rules**: quantity decoding, days-of-stock multipliers,
//!   first-write-wins requirement lookup, variance threshold.
//! - **Shaping** into sheets (headers + rows) and into the records the backend
//!   stores.
//!
//! ## What does **not** live here
//! - Reading files or workbooks (`workbook`, `csv`), writing exports (`file`).
//! - Talking to the backend (`backend`), caching (`store`).
//! - Anything GUI.
//!
//! ## Typical call chain
//! ```text
//! GUI / CLI → runner::process → workbook::read_table / fs::read_to_string
//!                            ↘  specs::<report>::process_*  → Sheet
//!                 file::export / backend (outside of specs)
//! ```
//!
//! ## Conventions
//! - Structural problems (anchor or columns missing) are errors; row-level
//!   junk is coerced to blanks/zeros and the row is kept.
//! - Output column shapes are fixed per report so the GUI table and the
//!   backend payloads can rely on them.
//!
//! ## Testing notes
//! Specs are pure and run offline; geometry can be fed through
//! [`CellSource`](crate::core::CellSource) without any HTML.
pub mod comparacion;
pub mod dias_disponibles;
pub mod mano_de_obra;
pub mod resumen;
