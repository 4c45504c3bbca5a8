// src/gui/pages/debates.rs
use eframe::egui;

use super::{Page, PageKind, Task, path_edit};
use crate::{
    config::{options::RendererKind, state::AppState},
    progress::Progress,
    runner::{self, Job},
};

pub struct DebatesPage;
pub static PAGE: DebatesPage = DebatesPage;

static HEADERS: &[&str] = &["Session", "Paragraphs", "Result"];

impl Page for DebatesPage {
    fn title(&self) -> &'static str { "Debates" }
    fn kind(&self) -> PageKind { PageKind::Debates }
    fn default_headers(&self) -> Option<&'static [&'static str]> { Some(HEADERS) }
    fn preferred_column_widths(&self) -> Option<&'static [f32]> { Some(&[160.0, 90.0, 520.0]) }
    fn numeric_columns(&self) -> &'static [usize] { &[1] }
    fn export_stem(&self) -> &'static str { "debates" }
    fn run_label(&self, _state: &AppState) -> &'static str { "Fetch" }

    fn draw_controls(&self, ui: &mut egui::Ui, state: &mut AppState) {
        let d = &mut state.options.debates;
        ui.horizontal(|ui| {
            ui.label(format!("{} session(s)", d.links.len()));
            ui.separator();
            ui.label("Renderer:");
            ui.selectable_value(&mut d.renderer, RendererKind::Browser, "Browser");
            ui.selectable_value(&mut d.renderer, RendererKind::Http, "HTTP");
            if d.renderer == RendererKind::Browser {
                ui.checkbox(&mut d.headless, "Headless");
                ui.label("Settle (s):");
                ui.add(egui::DragValue::new(&mut d.settle_secs).range(0..=120));
            }
        });
        path_edit(ui, "Transcripts dir:", &mut d.out_dir);
    }

    fn task(&self, state: &AppState) -> Task {
        let opts = state.options.clone();
        Box::new(move |p: &mut dyn Progress| runner::run(Job::Debates, &opts, Some(p)))
    }
}
