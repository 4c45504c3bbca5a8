// src/gui/actions/export.rs
use tracing::{info, warn};

use crate::{file, gui::app::App, store};

pub fn export(app: &mut App) {
    let Some(ds) = super::current_view(app) else {
        app.status("Nothing to export");
        return;
    };

    let export = &app.state.options.export;
    let page = app.current_page();
    let default_name = format!("{}.{}", page.export_stem(), export.format.ext());

    let result = file::resolve_out_path(&app.state.gui.export_path, &default_name)
        .and_then(|path| store::write_table(&path, &ds, export).map(|_| path));

    match result {
        Ok(path) => {
            info!("Export: {} row(s) → {}", ds.row_count(), path.display());
            app.status(format!("Exported {} row(s) to {}", ds.row_count(), path.display()));
        }
        Err(e) => {
            warn!("Export: failed: {e}");
            app.status(format!("Export failed: {e}"));
        }
    }
}
