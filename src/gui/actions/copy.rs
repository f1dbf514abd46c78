// src/gui/actions/copy.rs
use eframe::egui;
use crate::gui::app::App;

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let snap = match super::read_snapshot(app) {
        Ok(s) => s,
        Err(e) => {
            loge!("Copy: {}", e);
            return app.set_status(format!("Error: {e}"));
        }
    };

    let result = app.session.copy_csv(snap.as_ref());
    app.refresh_table();

    match result {
        Ok(Some(text)) => {
            ui_ctx.copy_text(text);
            app.set_status("Copied");
        }
        Ok(None) => app.set_status("Nothing to copy"),
        Err(e) => {
            loge!("Copy: {}", e);
            app.set_status(format!("Error: {e}"));
        }
    }
}
