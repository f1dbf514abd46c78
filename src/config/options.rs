// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::consts::*;
use crate::core::sanitize::export_file_name;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub storage: StorageOptions,
    pub capture: CaptureOptions,
    pub export: ExportOptions,
}

/// Where the accumulating buffer lives between actions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageOptions {
    pub dir: PathBuf,
    pub key: String,
}

impl Default for StorageOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(STORE_DIR),
            key: s!(STORAGE_KEY),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaptureOptions {
    /// Collapse whitespace runs in names/cells and drop blank rows
    /// before a snapshot reaches the merger.
    pub flatten_whitespace: bool,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self { flatten_whitespace: true }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    /// Prefix the written file with a UTF-8 byte-order mark.
    pub bom: bool,
    pub prefix: String,
    out_path: OutputPath,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            bom: true,
            prefix: s!(DEFAULT_FILE_PREFIX),
            out_path: OutputPath::default(),
        }
    }
}

impl ExportOptions {
    /// Final file path. Without an explicit file name the name is derived
    /// from `title` (see `export_file_name`).
    pub fn out_path(&self, title: &str) -> PathBuf {
        let name = match &self.out_path.file_name {
            Some(n) => n.clone(),
            None => OsString::from(export_file_name(&self.prefix, title)),
        };
        self.out_path.dir.join(name)
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_path.dir
    }

    /// Parse user text into dir + optional file name.
    /// Empty text resets to the default directory; a trailing separator or an
    /// existing directory selects a directory and keeps the derived name.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            self.out_path = OutputPath::default();
            return;
        }

        let p = PathBuf::from(crate::file::normalize_separators(s));
        if crate::file::looks_like_dir_hint(s) || p.is_dir() {
            self.out_path = OutputPath { dir: p, file_name: None };
            return;
        }

        let dir = p.parent().map(Path::to_path_buf).unwrap_or_default();
        let file_name = p.file_name().map(|n| n.to_os_string());
        self.out_path = OutputPath { dir, file_name };
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_name: Option<OsString>, // None → derived from title
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_name: None,
        }
    }
}
