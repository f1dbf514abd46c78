// src/snapshot.rs
//
// One capture of the currently rendered grid region: the visible columns
// (id, display index, name) and the visible rows (id, column id → text).
//
// Snapshots come from an external capture agent as JSON. They are merged
// into the buffer once and then dropped; nothing here is persisted.

use std::collections::BTreeMap;
use std::{fs, path::Path};

use serde::{Deserialize, Deserializer, Serialize};

use crate::core::sanitize::normalize_ws;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default, alias = "cols")]
    pub columns: Vec<SnapshotColumn>,
    #[serde(default)]
    pub rows: Vec<SnapshotRow>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotColumn {
    /// Absent ids are skipped by the merger.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub index: i64,
    #[serde(default)]
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotRow {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_cells")]
    pub cells: BTreeMap<String, String>,
}

/// `null` cell values read as "" (never observed).
fn lenient_cells<'de, D: Deserializer<'de>>(d: D) -> Result<BTreeMap<String, String>, D::Error> {
    let raw: Option<BTreeMap<String, Option<String>>> = Option::deserialize(d)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(k, v)| (k, v.unwrap_or_default()))
        .collect())
}

impl SnapshotColumn {
    pub fn new(id: &str, index: i64, name: &str) -> Self {
        Self { id: Some(s!(id)), index, name: s!(name) }
    }
}

impl SnapshotRow {
    pub fn new<I, K, V>(id: &str, cells: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            id: Some(s!(id)),
            cells: cells.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    /// True when no cell carries text. A row with no cells at all is blank too.
    pub fn is_blank(&self) -> bool {
        self.cells.values().all(|v| v.is_empty())
    }
}

impl Snapshot {
    pub fn new(columns: Vec<SnapshotColumn>, rows: Vec<SnapshotRow>) -> Self {
        Self { columns, rows }
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Read a snapshot file written by the capture agent.
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("Cannot read snapshot {}: {e}", path.display()))?;
        let snap = Self::from_json(&text)
            .map_err(|e| format!("Invalid snapshot {}: {e}", path.display()))?;
        logd!(
            "Snapshot: Loaded {} (cols={}, rows={})",
            path.display(), snap.columns.len(), snap.rows.len()
        );
        Ok(snap)
    }

    /// Capture-side hygiene: flatten whitespace in names and cell text,
    /// order columns by display index, drop rows with no text left.
    pub fn normalized(mut self) -> Self {
        for c in &mut self.columns {
            c.name = normalize_ws(&c.name);
        }
        // stable: equal indexes keep capture order
        self.columns.sort_by_key(|c| c.index);

        for r in &mut self.rows {
            for v in r.cells.values_mut() {
                *v = normalize_ws(v);
            }
        }
        self.rows.retain(|r| !r.is_blank());
        self
    }
}
