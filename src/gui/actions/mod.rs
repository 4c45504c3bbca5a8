// src/gui/actions/mod.rs
pub mod copy;
pub mod export;
pub mod run;

use crate::{gui::app::App, store::DataSet};

/// The table as currently shown.
pub(crate) fn current_view(app: &App) -> Option<DataSet> {
    if app.rows.is_empty() {
        return None;
    }
    Some(DataSet { headers: app.headers.clone(), rows: app.rows.clone() })
}
