// src/gui/app.rs
use std::error::Error;

use eframe::egui::{self, Key};

use crate::{
    config::state::AppState,
    csv::{self, Table},
    session::Session,
    store::FileStore,
};

use super::{actions, components};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Grid Capture",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // persisted buffer behind the four actions
    pub session: Session<FileStore>,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // preview of the buffer as it would be exported
    pub table: Table,

    pub status: String,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let storage = &state.options.storage;
        let session = Session::new(FileStore::new(&storage.dir), storage.key.clone());

        let buf = session.buffer();
        let status = buf.summary();
        let table = csv::project(&buf);

        logf!("Init: store={} key={:?} {}", storage.dir.display(), storage.key, status);

        Self {
            state,
            session,
            out_path_text: s!(),
            out_path_dirty: false,
            table,
            status,
        }
    }

    #[inline]
    pub fn set_status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /// Re-read the stored buffer into the preview table.
    pub fn refresh_table(&mut self) {
        self.table = csv::project(&self.session.buffer());
    }

    /// Ctrl/Cmd+Shift + A (append), S (save), C (copy), X (clear).
    fn handle_hotkeys(&mut self, ctx: &egui::Context) {
        let pressed = |key: Key| {
            ctx.input(|i| i.modifiers.command && i.modifiers.shift && i.key_pressed(key))
        };

        if pressed(Key::A) { actions::append(self); }
        if pressed(Key::S) { actions::save(self); }
        if pressed(Key::C) { actions::copy(self, ctx); }
        if pressed(Key::X) { actions::clear(self); }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_hotkeys(ctx);

        egui::TopBottomPanel::top("actions").show(ctx, |ui| {
            components::action_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::buffer_table::draw(ui, self);
        });
    }
}
