// src/backend/memory.rs
use std::sync::{Mutex, MutexGuard};

use super::Backend;
use crate::error::Result;
use crate::specs::comparacion::{ComparisonRecord, ReconciliationRow};
use crate::specs::dias_disponibles::InventoryRecord;

/// In-process backend (tests, offline runs).
#[derive(Debug, Default)]
pub struct MemoryBackend {
    inventory: Mutex<Vec<InventoryRecord>>,
    comparisons: Mutex<Vec<ComparisonRecord>>,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn comparison_count(&self) -> usize {
        lock(&self.comparisons).len()
    }
}

impl Backend for MemoryBackend {
    fn replace_inventory(&self, records: &[InventoryRecord]) -> Result<()> {
        let mut inv = lock(&self.inventory);
        inv.clear();
        inv.extend_from_slice(records);
        Ok(())
    }

    fn list_inventory(&self) -> Result<Vec<InventoryRecord>> {
        Ok(lock(&self.inventory).clone())
    }

    fn append_comparison(&self, fecha: &str, rows: &[ReconciliationRow]) -> Result<()> {
        lock(&self.comparisons).extend(
            rows.iter()
                .map(|row| ComparisonRecord { fecha: s!(fecha), row: row.clone() }),
        );
        Ok(())
    }

    /// Distinct tags, newest first.
    fn comparison_dates(&self) -> Result<Vec<String>> {
        let mut dates: Vec<String> = lock(&self.comparisons).iter().map(|c| c.fecha.clone()).collect();
        dates.sort();
        dates.dedup();
        dates.reverse();
        Ok(dates)
    }

    fn comparison_at(&self, fecha: &str) -> Result<Vec<ComparisonRecord>> {
        Ok(lock(&self.comparisons)
            .iter()
            .filter(|c| c.fecha == fecha)
            .cloned()
            .collect())
    }
}
