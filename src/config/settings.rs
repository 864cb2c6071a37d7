// src/config/settings.rs
//
// Runtime knobs, read from `.store/config.toml` when it exists.
// Every field has a default so a partial (or missing) file is fine.

use std::path::{Path, PathBuf};
use std::{env, fs};

use serde::Deserialize;

use super::consts::*;
use crate::error::Result;

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub api: ApiSettings,
    pub layout: LayoutSettings,
    pub comparison: ComparisonSettings,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiSettings {
    pub base_url: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self { base_url: s!(DEFAULT_API_BASE_URL) }
    }
}

/// Positioned-HTML layout conventions of the labor export.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutSettings {
    pub header_anchor: String,
    pub split_offset: i64,
    pub marker_pattern: String,
    pub quantity_header: String,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            header_anchor: s!(HEADER_ANCHOR),
            split_offset: SPLIT_OFFSET,
            marker_pattern: s!(MARKER_PATTERN),
            quantity_header: s!(QUANTITY_HEADER),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ComparisonSettings {
    pub threshold_percent: f64,
    pub summary_skip_rows: usize,
    pub requirements_skip_rows: usize,
    pub requirements_code_col: usize,
    pub requirements_units_col: usize,
}

impl Default for ComparisonSettings {
    fn default() -> Self {
        Self {
            threshold_percent: DIFF_THRESHOLD_PERCENT,
            summary_skip_rows: SUMMARY_SKIP_ROWS,
            requirements_skip_rows: REQUIREMENTS_SKIP_ROWS,
            requirements_code_col: 0,
            requirements_units_col: 1,
        }
    }
}

impl Settings {
    pub fn default_path() -> PathBuf {
        Path::new(STORE_DIR).join(CONFIG_FILE)
    }

    /// Parse TOML text; missing sections and keys fall back to defaults.
    pub fn from_toml(text: &str) -> Result<Self> {
        let mut settings: Settings = toml::from_str(text)?;
        settings.api.base_url = normalize_url(&settings.api.base_url);
        Ok(settings)
    }

    /// Load from `path` if present, then apply the environment override.
    pub fn load(path: &Path) -> Result<Self> {
        let mut settings = if path.exists() {
            let text = fs::read_to_string(path)?;
            let s = Self::from_toml(&text)?;
            logd!("Config: loaded {}", path.display());
            s
        } else {
            logd!("Config: {} not found, using defaults", path.display());
            Self::default()
        };
        if let Ok(url) = env::var(API_URL_ENV) {
            settings.apply_api_url(&url);
        }
        Ok(settings)
    }

    /// `load(default_path())`, logging and falling back to defaults on a broken file.
    pub fn load_or_default() -> Self {
        match Self::load(&Self::default_path()) {
            Ok(s) => s,
            Err(e) => {
                loge!("Config: {e}; using defaults");
                Self::default()
            }
        }
    }

    pub fn apply_api_url(&mut self, url: &str) {
        if !url.trim().is_empty() {
            self.api.base_url = normalize_url(url);
        }
    }
}

/// Add `http://` when the URL carries no scheme; drop trailing slashes.
pub fn normalize_url(url: &str) -> String {
    let url = url.trim().trim_end_matches('/');
    if url.starts_with("http://") || url.starts_with("https://") {
        s!(url)
    } else {
        join!("http://", url)
    }
}
