// src/gui/components/buffer_table.rs
//
// Read-only preview of the buffer in export order.

use eframe::egui::{self, TextWrapMode};
use egui_extras::{Column, TableBuilder};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let table = &app.table;
    if table.is_empty() {
        ui.weak("Buffer is empty. Append a snapshot to start.");
        return;
    }

    ui.label(format!("{} rows × {} cols", table.nrows(), table.ncols()));

    let avail_h = ui.available_height();
    egui::ScrollArea::horizontal()
        .id_salt("buffer_table_hscroll")
        .max_height(avail_h)
        .show(ui, |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .columns(Column::initial(120.0).resizable(true).clip(true).at_least(20.0), table.ncols())
                .header(24.0, |mut header| {
                    for name in &table.headers {
                        header.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            ui.strong(name.as_str());
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, table.nrows(), |mut row| {
                        let Some(cells) = table.rows.get(row.index()) else { return };
                        for cell in cells {
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                ui.label(cell.as_str());
                            });
                        }
                    });
                });
        });
}
