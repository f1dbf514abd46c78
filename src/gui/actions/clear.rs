// src/gui/actions/clear.rs
use crate::gui::app::App;

pub fn clear(app: &mut App) {
    match app.session.clear() {
        Ok(()) => app.set_status("cleared"),
        Err(e) => {
            loge!("Clear: {}", e);
            app.set_status(format!("Error: {e}"));
        }
    }
    app.refresh_table();
}
