// src/file.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::options::{ExportFormat, ExportOptions};
use crate::error::{ReportError, Result};
use crate::sheet::Sheet;

/// Write `sheet` where `export` points, in its format. Returns the path written.
pub fn export(export: &ExportOptions, sheet: &Sheet) -> Result<PathBuf> {
    let path = export.out_path();
    write_sheet(&path, export.format, sheet)?;
    Ok(path)
}

/// Write `sheet` to `path`, creating parent directories as needed.
pub fn write_sheet(path: &Path, format: ExportFormat, sheet: &Sheet) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    match format.delimiter() {
        None => crate::workbook::write_xlsx(sheet, path)?,
        Some(delim) => crate::csv::write_file(path, sheet, delim)?,
    }
    logf!("Export: {} row(s) -> {}", sheet.rows.len(), path.display());
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ReportError::Io(std::io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        ))));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c=='/'||c=='\\' { sep } else { c }).collect()
}
