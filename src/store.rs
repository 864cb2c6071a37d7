// src/store.rs
//
// `.store/` cache: the last sheet built for each report kind, and the
// backend session token.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::consts::{STORE_DIR, TOKEN_FILE};
use crate::config::options::ReportKind;
use crate::error::Result;
use crate::sheet::Sheet;

#[derive(Clone, Debug)]
pub struct Store {
    root: PathBuf,
}

impl Default for Store {
    fn default() -> Self {
        Self::new(STORE_DIR)
    }
}

impl Store {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn sheet_path(&self, kind: ReportKind) -> PathBuf {
        self.root.join(format!("{}.csv", kind.key()))
    }

    fn token_path(&self) -> PathBuf {
        self.root.join(TOKEN_FILE)
    }

    pub fn save_sheet(&self, kind: ReportKind, sheet: &Sheet) -> Result<()> {
        crate::file::ensure_directory(&self.root)?;
        crate::csv::write_file(&self.sheet_path(kind), sheet, b',')?;
        logd!("Store: cached {} ({} rows)", kind.key(), sheet.rows.len());
        Ok(())
    }

    /// Cached sheet, `None` when nothing was cached yet. Everything comes back
    /// as text; numeric columns are re-coerced by whoever reads them.
    pub fn load_sheet(&self, kind: ReportKind) -> Result<Option<Sheet>> {
        let path = self.sheet_path(kind);
        if !path.exists() {
            return Ok(None);
        }
        let rows = crate::csv::read_rows(&path, b',')?;
        Ok(Some(Sheet::new(rows)))
    }

    pub fn save_token(&self, token: &str) -> Result<()> {
        crate::file::ensure_directory(&self.root)?;
        fs::write(self.token_path(), token.trim())?;
        Ok(())
    }

    pub fn load_token(&self) -> Option<String> {
        let t = fs::read_to_string(self.token_path()).ok()?;
        let t = t.trim();
        (!t.is_empty()).then(|| s!(t))
    }

    pub fn clear_token(&self) -> Result<()> {
        match fs::remove_file(self.token_path()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
