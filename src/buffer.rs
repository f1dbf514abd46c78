// src/buffer.rs
//
// The accumulating table built from many snapshots.
//
// - Columns are keyed by external id and remember the leftmost display index
//   they were ever seen at, plus the first non-empty name.
// - Rows are keyed by external id and get an immutable `order` the first time
//   they are seen; output order is by that number only.
// - Cells only ever hold non-empty text. Later non-empty text replaces
//   earlier text; an empty observation never blanks a cell.
//
// Field names follow the persisted blob: `{ cols, rows, order }`.

use serde::{Deserialize, Serialize};

use crate::core::IdMap;
use crate::snapshot::{Snapshot, SnapshotColumn, SnapshotRow};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRecord {
    #[serde(default)]
    pub index: i64,
    #[serde(default)]
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowRecord {
    #[serde(default)]
    pub order: u64,
    #[serde(default)]
    pub cells: IdMap<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buffer {
    #[serde(default)]
    cols: IdMap<ColumnRecord>,
    #[serde(default)]
    rows: IdMap<RowRecord>,
    /// Next row order to hand out; always above every stored `order`.
    #[serde(default, rename = "order")]
    next_order: u64,
}

impl Buffer {
    pub fn new() -> Self { Self::default() }

    #[inline] pub fn column_count(&self) -> usize { self.cols.len() }
    #[inline] pub fn row_count(&self) -> usize { self.rows.len() }
    #[inline] pub fn next_order(&self) -> u64 { self.next_order }

    /// Nothing worth exporting: no columns or no rows.
    pub fn is_empty(&self) -> bool {
        self.cols.is_empty() || self.rows.is_empty()
    }

    pub fn column(&self, id: &str) -> Option<&ColumnRecord> { self.cols.get(id) }
    pub fn row(&self, id: &str) -> Option<&RowRecord> { self.rows.get(id) }

    /// Stored cell text, `None` if never observed.
    pub fn cell(&self, row_id: &str, col_id: &str) -> Option<&str> {
        self.rows.get(row_id)?.cells.get(col_id).map(String::as_str)
    }

    /// Columns in first-seen order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &ColumnRecord)> { self.cols.iter() }

    /// Rows in first-seen order (container order; `order` is the sort key).
    pub fn rows(&self) -> impl Iterator<Item = (&str, &RowRecord)> { self.rows.iter() }

    /// Reset to the empty buffer. Idempotent.
    pub fn clear(&mut self) {
        self.cols.clear();
        self.rows.clear();
        self.next_order = 0;
    }

    /// Merge one snapshot in place. Returns how many rows were new.
    pub fn merge(&mut self, snap: &Snapshot) -> usize {
        for c in &snap.columns {
            self.merge_column(c);
        }

        let mut added = 0;
        for r in &snap.rows {
            if self.merge_row(r) {
                added += 1;
            }
        }

        logd!(
            "Merge: cols_in={} rows_in={} added={} → total rows={} cols={}",
            snap.columns.len(), snap.rows.len(), added, self.rows.len(), self.cols.len()
        );
        added
    }

    fn merge_column(&mut self, c: &SnapshotColumn) {
        let Some(id) = c.id.as_deref().filter(|id| !id.is_empty()) else {
            logd!("Merge: column without id skipped (name={:?})", c.name);
            return;
        };

        match self.cols.get_mut(id) {
            None => {
                self.cols.insert(s!(id), ColumnRecord { index: c.index, name: c.name.clone() });
            }
            Some(old) if c.index < old.index => {
                // leftmost observed position wins; name untouched
                old.index = c.index;
            }
            Some(old) if old.name.is_empty() && !c.name.is_empty() => {
                old.name = c.name.clone();
            }
            Some(_) => {}
        }
    }

    /// Returns true if the row was new.
    fn merge_row(&mut self, r: &SnapshotRow) -> bool {
        let Some(id) = r.id.as_deref().filter(|id| !id.is_empty()) else {
            logd!("Merge: row without id skipped");
            return false;
        };
        if r.is_blank() {
            return false;
        }

        let is_new = !self.rows.contains_key(id);
        if is_new {
            let Some(after) = self.next_order.checked_add(1) else {
                loge!("Merge: row order counter exhausted, row {:?} skipped", id);
                return false;
            };
            let order = self.next_order;
            self.next_order = after;
            self.rows.insert(s!(id), RowRecord { order, cells: IdMap::new() });
        }
        let Some(row) = self.rows.get_mut(id) else { return false };

        for (col_id, value) in &r.cells {
            if !value.is_empty() {
                row.cells.insert(col_id.clone(), value.clone());
            }
        }
        is_new
    }

    /// Restore the invariants on a buffer read from outside: drop empty
    /// cells and lift `next_order` above every stored order.
    /// Returns false when the counter cannot be kept above every order
    /// (an order or the counter sits at `u64::MAX`); such a buffer is unusable.
    pub fn repair(&mut self) -> bool {
        let mut max_order = None;
        for row in self.rows.values_mut() {
            if row.cells.iter().any(|(_, v)| v.is_empty()) {
                row.cells = row.cells.iter()
                    .filter(|(_, v)| !v.is_empty())
                    .map(|(k, v)| (s!(k), v.clone()))
                    .collect();
            }
            max_order = max_order.max(Some(row.order));
        }

        if let Some(max) = max_order {
            if self.next_order <= max {
                let Some(lifted) = max.checked_add(1) else { return false };
                logd!("Buffer: next order {} lifted to {}", self.next_order, lifted);
                self.next_order = lifted;
            }
        }
        self.next_order < u64::MAX
    }

    /// `buffer: R rows, C cols`
    pub fn summary(&self) -> String {
        format!("buffer: {} rows, {} cols", self.rows.len(), self.cols.len())
    }
}
