// src/error.rs
use thiserror::Error;

/// Everything that can stop a report from being produced or delivered.
///
/// Structural variants (`HeaderNotFound`, `MissingColumn`, `InsufficientData`,
/// `Structural`) are user-facing and terminal: nothing gets written.
/// Row-level problems never show up here; they are normalised to defaults.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("No se pudo encontrar la cabecera \"{anchor}\".")]
    HeaderNotFound { anchor: String },

    #[error("Falta la columna requerida \"{column}\".")]
    MissingColumn { column: String },

    #[error("El archivo no contiene datos suficientes o está vacío.")]
    InsufficientData,

    #[error("{0}")]
    Structural(String),

    #[error("Formato de archivo no soportado: {0}")]
    UnsupportedInput(String),

    #[error("Invalid marker pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Workbook read error: {0}")]
    WorkbookRead(#[from] calamine::Error),

    #[error("Workbook write error: {0}")]
    WorkbookWrite(String),

    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend error ({status}): {message}")]
    Backend { status: u16, message: String },

    #[error("Not logged in (run `login` first)")]
    NotAuthenticated,
}

impl ReportError {
    /// Errors the user caused by picking the wrong file or a malformed export.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            ReportError::HeaderNotFound { .. }
                | ReportError::MissingColumn { .. }
                | ReportError::InsufficientData
                | ReportError::Structural(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
