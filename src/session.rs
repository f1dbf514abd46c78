// src/session.rs
//
// The user-facing actions (append, append+save, append+copy, clear) as
// single load → modify → save steps against one stored buffer.
//
// Callers must not run two actions on the same store/key at once; each
// action re-reads the blob and would otherwise lose the other's rows.

use std::fmt;
use std::path::PathBuf;

use crate::{
    buffer::Buffer,
    config::options::ExportOptions,
    csv, file,
    snapshot::Snapshot,
    store::{self, BlobStore},
};

/// Outcome of one append, shown as the status line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppendReport {
    pub added: usize,
    pub rows: usize,
    pub cols: usize,
}

impl fmt::Display for AppendReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{} rows | total {} rows, {} cols", self.added, self.rows, self.cols)
    }
}

pub struct Session<S: BlobStore> {
    store: S,
    key: String,
}

impl<S: BlobStore> Session<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    pub fn store(&self) -> &S { &self.store }
    pub fn key(&self) -> &str { &self.key }

    /// Current persisted buffer (empty if missing or unreadable).
    pub fn buffer(&self) -> Buffer {
        store::load_buffer(&self.store, &self.key)
    }

    /// `buffer: R rows, C cols`
    pub fn summary(&self) -> String {
        self.buffer().summary()
    }

    /// Merge one snapshot into the stored buffer and persist it.
    pub fn append(&mut self, snap: &Snapshot) -> std::io::Result<AppendReport> {
        let mut buf = self.buffer();
        let added = buf.merge(snap);
        store::save_buffer(&mut self.store, &self.key, &buf)?;

        let report = AppendReport { added, rows: buf.row_count(), cols: buf.column_count() };
        logf!("Append: {}", report);
        Ok(report)
    }

    /// CSV of the stored buffer, `None` when there is nothing to export.
    pub fn csv(&self) -> Option<String> {
        let text = csv::serialize(&self.buffer());
        if text.is_empty() { None } else { Some(text) }
    }

    /// Append `snap` (if any), then write the CSV file.
    /// `Ok(None)` means the buffer had nothing to save.
    pub fn save_csv(
        &mut self,
        snap: Option<&Snapshot>,
        export: &ExportOptions,
        title: &str,
    ) -> Result<Option<PathBuf>, Box<dyn std::error::Error>> {
        if let Some(s) = snap {
            self.append(s)?;
        }
        let Some(text) = self.csv() else {
            logd!("Save: Nothing to save");
            return Ok(None);
        };
        let path = file::write_csv_export(export, title, &text)?;
        logf!("Save: OK → {}", path.display());
        Ok(Some(path))
    }

    /// Append `snap` (if any), then hand back the CSV for the clipboard.
    pub fn copy_csv(&mut self, snap: Option<&Snapshot>) -> std::io::Result<Option<String>> {
        if let Some(s) = snap {
            self.append(s)?;
        }
        let text = self.csv();
        match &text {
            Some(t) => logf!("Copy: {} bytes", t.len()),
            None => logd!("Copy: Nothing to copy"),
        }
        Ok(text)
    }

    /// Drop the stored buffer. Idempotent.
    pub fn clear(&mut self) -> std::io::Result<()> {
        store::delete_buffer(&mut self.store, &self.key)?;
        logf!("Clear: buffer {:?} cleared", self.key);
        Ok(())
    }
}
