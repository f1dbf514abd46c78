// src/gui/components/action_bar.rs

use eframe::egui;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // --- Snapshot source + title ---
    ui.horizontal(|ui| {
        ui.label("Snapshot:");
        ui.add(egui::TextEdit::singleline(&mut app.state.gui.snapshot_path)
            .hint_text("capture.json")
            .font(egui::TextStyle::Monospace)
            .desired_width(320.0));

        ui.label("Title:");
        ui.add(egui::TextEdit::singleline(&mut app.state.gui.title)
            .hint_text("names the exported file")
            .desired_width(200.0));
    });

    // --- Output + export/capture toggles ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .hint_text("out/ (file name from title)")
                .font(egui::TextStyle::Monospace)
                .desired_width(320.0))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }

        let export = &mut app.state.options.export;
        if ui.checkbox(&mut export.bom, "BOM").changed() {
            logf!("UI: bom → {}", export.bom);
        }

        let capture = &mut app.state.options.capture;
        if ui.checkbox(&mut capture.flatten_whitespace, "Flatten whitespace").changed() {
            logf!("UI: flatten_whitespace → {}", capture.flatten_whitespace);
        }
    });

    // Actions: Append / Save CSV / Copy CSV / Clear
    ui.horizontal(|ui| {
        if ui.button("Append").on_hover_text("Ctrl+Shift+A").clicked() {
            actions::append(app);
        }
        if ui.button("Save CSV").on_hover_text("Ctrl+Shift+S").clicked() {
            actions::save(app);
        }
        if ui.button("Copy CSV").on_hover_text("Ctrl+Shift+C").clicked() {
            actions::copy(app, ui.ctx());
        }
        if ui.button("Clear").on_hover_text("Ctrl+Shift+X").clicked() {
            actions::clear(app);
        }

        ui.separator();
        ui.label(app.status.as_str());
    });
}
