// src/config/consts.rs

// Backend
pub const DEFAULT_API_BASE_URL: &str = "http://192.168.1.155:8001";
pub const API_URL_ENV: &str = "PROD_REPORT_API_URL";

// Local cache
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const CONFIG_FILE: &str = "config.toml";
pub const TOKEN_FILE: &str = "token";

// Positioned-HTML layout
pub const HEADER_ANCHOR: &str = "Componen";
pub const SPLIT_OFFSET: i64 = 250; // px where a wrapped second row starts
pub const MARKER_PATTERN: &str = r"^M\d+";
pub const QUANTITY_HEADER: &str = "Units Req.";
pub const ZERO_QUANTITY: &str = "0.000";

// Inventory export
pub const INVENTORY_ANCHOR: &str = "Description";
pub const COL_DESCRIPTION: &str = "Description";
pub const COL_AVAILABLE: &str = "Available";
pub const COL_MINIMUM: &str = "Minimum";
pub const COL_REORDER: &str = "Reorder";
pub const SENTINEL_DESCRIPTION: &str = "8:";
pub const SENTINEL_CODE: &str = "Product Number";
pub const DAYS_MULTIPLIER_X: f64 = 15.0;
pub const DAYS_MULTIPLIER: f64 = 30.0;

// Comparison
pub const DIFF_THRESHOLD_PERCENT: f64 = 25.0;
pub const SUMMARY_SKIP_ROWS: usize = 1;
pub const REQUIREMENTS_SKIP_ROWS: usize = 2;
pub const STAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const FILE_DATE_FORMAT: &str = "%Y-%m-%d";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const SHEET_NAME: &str = "Reporte";
pub const FILE_MANO_DE_OBRA: &str = "reporte_mano_de_obra";
pub const FILE_RESUMEN: &str = "reporte_resumen";
pub const FILE_DIAS_DISPONIBLES: &str = "reporte_dias_disponibles";
pub const FILE_COMPARACION_PREFIX: &str = "Comparacion_";

// Table view
pub const PAGE_SIZE: usize = 20;
