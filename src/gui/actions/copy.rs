// src/gui/actions/copy.rs
use eframe::egui;
use tracing::debug;

use crate::{gui::app::App, store};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let Some(ds) = super::current_view(app) else {
        app.status("Nothing to copy");
        debug!("Copy: Clicked, but there's nothing to copy");
        return;
    };

    match store::to_export_string(&ds, &app.state.options.export) {
        Ok(txt) => {
            debug!("Copy: rows={}, headers={}", ds.row_count(), ds.header_count());
            ui_ctx.copy_text(txt);
            app.status("Copied to clipboard");
        }
        Err(e) => app.status(format!("Copy failed: {e}")),
    }
}
