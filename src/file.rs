// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::consts::BOM;
use crate::config::options::ExportOptions;

/// Write CSV text to `export.out_path(title)`, creating parent directories.
/// Returns the final path written to.
pub fn write_csv_export(
    export: &ExportOptions,
    title: &str,
    csv: &str,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = export.out_path(title);
    write_text(&path, csv, export.bom)?;
    Ok(path)
}

/// Ensure parent dir exists; create/truncate file; optionally lead with a BOM.
pub fn write_text(path: &Path, text: &str, bom: bool) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let file = File::create(path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    if bom {
        write!(out, "{}", BOM)?;
    }
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c=='/'||c=='\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(s: &str) -> bool {
    s.ends_with('/') || s.ends_with('\\')
}
