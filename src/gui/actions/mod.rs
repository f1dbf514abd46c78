// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{append,save,copy,clear}.

mod append; // src/gui/actions/append.rs
mod clear;  // src/gui/actions/clear.rs
mod copy;   // src/gui/actions/copy.rs
mod save;   // src/gui/actions/save.rs

pub use append::append;
pub use clear::clear;
pub use copy::copy;
pub use save::save;

use std::path::Path;

use crate::{gui::app::App, snapshot::Snapshot};

/// Snapshot named in the Snapshot field, normalized per capture options.
/// `Ok(None)` when the field is empty.
pub(super) fn read_snapshot(app: &App) -> Result<Option<Snapshot>, Box<dyn std::error::Error>> {
    let path = app.state.gui.snapshot_path.trim();
    if path.is_empty() {
        return Ok(None);
    }
    let snap = Snapshot::load(Path::new(path))?;
    Ok(Some(if app.state.options.capture.flatten_whitespace { snap.normalized() } else { snap }))
}
