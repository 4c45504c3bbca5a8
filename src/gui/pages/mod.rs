// src/gui/pages/mod.rs
use std::path::PathBuf;

use eframe::egui;

use crate::{
    config::state::AppState,
    error::Result,
    progress::Progress,
    runner::RunSummary,
};

pub mod debates;
pub mod roster;
pub mod segments;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Roster,
    Debates,
    Segments,
}

/// A job detached from the UI state, ready for the worker thread.
pub type Task = Box<dyn FnOnce(&mut dyn Progress) -> Result<RunSummary> + Send + 'static>;

pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;
    fn kind(&self) -> PageKind;

    /// Headers shown before the first run.
    fn default_headers(&self) -> Option<&'static [&'static str]> {
        None
    }

    /// Optional: per-column starting widths (px).
    fn preferred_column_widths(&self) -> Option<&'static [f32]> { None }

    /// Columns drawn centered.
    fn numeric_columns(&self) -> &'static [usize] { &[] }

    /// File stem offered by the export bar.
    fn export_stem(&self) -> &'static str;

    fn run_label(&self, _state: &AppState) -> &'static str { "Run" }

    /// Draw page-specific controls above the table.
    fn draw_controls(&self, _ui: &mut egui::Ui, _state: &mut AppState) {}

    /// Snapshot the options this page runs with.
    fn task(&self, state: &AppState) -> Task;
}

/// Single-line editor for a path option.
pub(crate) fn path_edit(ui: &mut egui::Ui, label: &str, path: &mut PathBuf) {
    ui.horizontal(|ui| {
        ui.label(label);
        let mut text = path.to_string_lossy().into_owned();
        if ui
            .add(egui::TextEdit::singleline(&mut text).font(egui::TextStyle::Monospace))
            .changed()
        {
            *path = PathBuf::from(text);
        }
    });
}
