// src/gui/actions/save.rs
use crate::gui::app::App;

pub fn save(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        logf!("Save: Out dir set → {}", app.state.options.export.out_dir().display());
        app.out_path_dirty = false;
    }

    let snap = match super::read_snapshot(app) {
        Ok(s) => s,
        Err(e) => {
            loge!("Save: {}", e);
            return app.set_status(format!("Error: {e}"));
        }
    };

    let export = app.state.options.export.clone();
    let title = app.state.gui.title.clone();
    let status_msg = match app.session.save_csv(snap.as_ref(), &export, &title) {
        Ok(Some(path)) => format!("Saved {}", path.display()),
        Ok(None) => s!("Nothing to save"),
        Err(e) => {
            loge!("Save: Error: {}", e);
            format!("Save error: {e}")
        }
    };

    app.refresh_table();
    app.set_status(status_msg);
}
