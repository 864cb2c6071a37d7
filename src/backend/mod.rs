// src/backend/mod.rs
//! REST backend collaborator.
//!
//! Only what the reports need: replace the inventory collection, append a
//! comparison run, and read both back. Every call is one request/response,
//! checked for a success status; there are no retries and no partial-success
//! handling.

pub mod http;
pub mod memory;

pub use http::HttpBackend;
pub use memory::MemoryBackend;

use crate::error::Result;
use crate::specs::comparacion::{ComparisonRecord, ReconciliationRow};
use crate::specs::dias_disponibles::InventoryRecord;

pub trait Backend {
    /// Delete every stored inventory record, then bulk-insert `records`.
    fn replace_inventory(&self, records: &[InventoryRecord]) -> Result<()>;

    fn list_inventory(&self) -> Result<Vec<InventoryRecord>>;

    /// Store `rows` tagged with the run timestamp `fecha`.
    fn append_comparison(&self, fecha: &str, rows: &[ReconciliationRow]) -> Result<()>;

    /// Tags of stored comparison runs.
    fn comparison_dates(&self) -> Result<Vec<String>>;

    fn comparison_at(&self, fecha: &str) -> Result<Vec<ComparisonRecord>>;
}
