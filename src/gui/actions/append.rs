// src/gui/actions/append.rs
use crate::gui::app::App;

pub fn append(app: &mut App) {
    let snap = match super::read_snapshot(app) {
        Ok(Some(s)) => s,
        Ok(None) => {
            logd!("Append: Clicked, but no snapshot file is set");
            return app.set_status("No snapshot file");
        }
        Err(e) => {
            loge!("Append: {}", e);
            return app.set_status(format!("Error: {e}"));
        }
    };

    match app.session.append(&snap) {
        Ok(report) => app.set_status(report.to_string()),
        Err(e) => {
            loge!("Append: Save failed: {}", e);
            app.set_status(format!("Error: {e}"));
        }
    }
    app.refresh_table();
}
