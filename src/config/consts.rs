// src/config/consts.rs

// Local store
pub const STORE_DIR: &str = ".store";
pub const STORE_EXT: &str = "json";
pub const STORAGE_KEY: &str = "grid_incremental_csv_v1";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE_PREFIX: &str = "grid_incremental";
pub const DEFAULT_TITLE: &str = "grid";
pub const TITLE_MAX_CHARS: usize = 64;
pub const CSV_EXT: &str = "csv";
pub const BOM: char = '\u{feff}';
