// src/gui/pages/roster.rs
use eframe::egui;

use super::{Page, PageKind, Task, path_edit};
use crate::{
    config::state::AppState,
    progress::Progress,
    runner::{self, Job},
};

pub struct RosterPage;
pub static PAGE: RosterPage = RosterPage;

impl Page for RosterPage {
    fn title(&self) -> &'static str { "Roster" }
    fn kind(&self) -> PageKind { PageKind::Roster }
    fn export_stem(&self) -> &'static str { "roster" }
    fn run_label(&self, _state: &AppState) -> &'static str { "Scrape" }

    fn draw_controls(&self, ui: &mut egui::Ui, state: &mut AppState) {
        let r = &mut state.options.roster;
        ui.horizontal(|ui| {
            ui.label("URL:");
            ui.add(egui::TextEdit::singleline(&mut r.url).desired_width(480.0));
        });
        ui.horizontal(|ui| {
            ui.label("Table class:");
            ui.add(egui::TextEdit::singleline(&mut r.table_class).desired_width(120.0));
            ui.checkbox(&mut r.expand_rowspan, "Expand rowspan");
            ui.checkbox(&mut r.strip_footnotes, "Strip [n] footnotes");
        });
        path_edit(ui, "Roster CSV:", &mut r.out);
    }

    fn task(&self, state: &AppState) -> Task {
        let opts = state.options.clone();
        Box::new(move |p: &mut dyn Progress| runner::run(Job::Roster, &opts, Some(p)))
    }
}
