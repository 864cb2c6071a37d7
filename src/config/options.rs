// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub report: ReportKind,
    pub export: ExportOptions,
}

/// Which report the pipeline builds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ReportKind {
    #[default]
    ManoDeObra,
    Resumen,
    DiasDisponibles,
    Comparacion,
}

impl ReportKind {
    pub const ALL: [ReportKind; 4] = [
        ReportKind::ManoDeObra,
        ReportKind::Resumen,
        ReportKind::DiasDisponibles,
        ReportKind::Comparacion,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ReportKind::ManoDeObra => "Mano de Obra",
            ReportKind::Resumen => "Resumen",
            ReportKind::DiasDisponibles => "Días Disponibles",
            ReportKind::Comparacion => "Comparación",
        }
    }

    /// Stable identifier for cache files and CLI arguments.
    pub fn key(self) -> &'static str {
        match self {
            ReportKind::ManoDeObra => "mano_de_obra",
            ReportKind::Resumen => "resumen",
            ReportKind::DiasDisponibles => "dias_disponibles",
            ReportKind::Comparacion => "comparacion",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        let k = key.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL.into_iter().find(|r| r.key() == k)
    }

    /// File extensions the report accepts as input.
    pub fn accepted_exts(self) -> &'static [&'static str] {
        match self {
            ReportKind::ManoDeObra | ReportKind::Resumen => &["htm", "html"],
            ReportKind::DiasDisponibles | ReportKind::Comparacion => {
                &["xlsx", "xlsm", "xls", "ods", "csv", "tsv"]
            }
        }
    }

    /// Comparison reads a summary and a requirements table.
    pub fn input_count(self) -> usize {
        match self {
            ReportKind::Comparacion => 2,
            _ => 1,
        }
    }

    /// Default output file stem; comparison files carry the date.
    pub fn default_stem(self, date: &str) -> String {
        match self {
            ReportKind::ManoDeObra => s!(FILE_MANO_DE_OBRA),
            ReportKind::Resumen => s!(FILE_RESUMEN),
            ReportKind::DiasDisponibles => s!(FILE_DIAS_DISPONIBLES),
            ReportKind::Comparacion => join!(FILE_COMPARACION_PREFIX, date),
        }
    }

    /// Whether the result can be pushed to the backend.
    pub fn uploadable(self) -> bool {
        matches!(self, ReportKind::DiasDisponibles | ReportKind::Comparacion)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Xlsx,
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
        }
    }

    /// Field separator for delimited formats; `None` for workbooks.
    pub fn delimiter(&self) -> Option<u8> {
        match self {
            ExportFormat::Xlsx => None,
            ExportFormat::Csv => Some(b','),
            ExportFormat::Tsv => Some(b'\t'),
        }
    }

    pub fn from_ext(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "xlsx" => Some(ExportFormat::Xlsx),
            "csv" => Some(ExportFormat::Csv),
            "tsv" => Some(ExportFormat::Tsv),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
}

impl ExportOptions {
    /// Full output path: dir + stem + extension from the format,
    /// unless the user typed an explicit extension.
    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.dir.clone();
        let stem = self.out_path.file_stem.to_string_lossy();
        match &self.out_path.user_ext {
            Some(ext) => path.push(join!(stem.as_ref(), ".", ext)),
            None => path.push(join!(stem.as_ref(), ".", self.format.ext())),
        }
        path
    }

    pub fn current_dir(&self) -> &Path {
        &self.out_path.dir
    }

    pub fn is_default_for(&self, kind: ReportKind, date: &str) -> bool {
        self.out_path.dir == Path::new(DEFAULT_OUT_DIR)
            && self.out_path.file_stem == OsString::from(kind.default_stem(date))
            && self.out_path.user_ext.is_none()
    }

    /// Reset the path to the report's default name under `out/`.
    pub fn set_default_for(&mut self, kind: ReportKind, date: &str) {
        self.out_path = OutputPath {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(kind.default_stem(date)),
            user_ext: None,
        };
    }

    /// Parse GUI/CLI text into dir + stem. A known export extension switches the
    /// format; any other extension is kept verbatim.
    pub fn set_path(&mut self, text: &str) {
        let norm = crate::file::normalize_separators(text.trim());
        let p = Path::new(&norm);
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        self.out_path.user_ext = None;
        if let Some(ext) = p.extension().map(|e| e.to_string_lossy().into_owned()) {
            match ExportFormat::from_ext(&ext) {
                Some(fmt) => self.format = fmt,
                None => self.out_path.user_ext = Some(ext),
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
    user_ext: Option<String>,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(FILE_MANO_DE_OBRA),
            user_ext: None,
        }
    }
}
