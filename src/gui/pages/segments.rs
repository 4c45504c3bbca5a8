// src/gui/pages/segments.rs
//
// Two modes: with a transcript file set, segment just that file and show its
// rows (nothing written); otherwise run the whole input directory.

use std::path::PathBuf;

use eframe::egui;

use super::{Page, PageKind, Task, path_edit};
use crate::{
    config::state::AppState,
    convert::transcripts::segment_file,
    progress::Progress,
    runner::{self, Job, RunSummary},
    segment::{Profile, Segmenter},
};

pub struct SegmentsPage;
pub static PAGE: SegmentsPage = SegmentsPage;

impl Page for SegmentsPage {
    fn title(&self) -> &'static str { "Segments" }
    fn kind(&self) -> PageKind { PageKind::Segments }
    fn preferred_column_widths(&self) -> Option<&'static [f32]> { Some(&[220.0, 640.0, 90.0, 70.0]) }
    fn numeric_columns(&self) -> &'static [usize] { &[2, 3] }
    fn export_stem(&self) -> &'static str { "segments" }

    fn run_label(&self, state: &AppState) -> &'static str {
        if state.gui.transcript_path.trim().is_empty() { "Segment all" } else { "Preview file" }
    }

    fn draw_controls(&self, ui: &mut egui::Ui, state: &mut AppState) {
        let s = &mut state.options.segment;
        ui.horizontal(|ui| {
            egui::ComboBox::from_label("Profile")
                .selected_text(s.profile.label())
                .show_ui(ui, |ui| {
                    for p in Profile::ALL {
                        ui.selectable_value(&mut s.profile, p, p.label());
                    }
                });
            ui.checkbox(&mut s.preserve_paragraphs, "Keep paragraphs");
        });
        path_edit(ui, "Input dir:", &mut s.input_dir);
        path_edit(ui, "Output dir:", &mut s.out_dir);
        ui.horizontal(|ui| {
            ui.label("Single file:");
            ui.add(
                egui::TextEdit::singleline(&mut state.gui.transcript_path)
                    .hint_text("empty = whole input dir")
                    .font(egui::TextStyle::Monospace),
            );
        });
    }

    fn task(&self, state: &AppState) -> Task {
        let opts = state.options.clone();
        let single = state.gui.transcript_path.trim().to_string();
        if single.is_empty() {
            return Box::new(move |p: &mut dyn Progress| runner::run(Job::Segment, &opts, Some(p)));
        }

        let path = PathBuf::from(single);
        Box::new(move |p: &mut dyn Progress| {
            p.log(&format!("Segmenting {}", path.display()));
            let segmenter = Segmenter::from_options(&opts.segment)?;
            let (result, ds) = segment_file(&path, &segmenter, opts.segment.profile)?;
            p.log(&format!(
                "{} segment(s) from {} header(s), coverage {:.2}{}",
                result.segments.len(),
                result.headers,
                result.coverage,
                if result.used_fallback { ", fallback used" } else { "" }
            ));
            Ok(RunSummary { preview: ds, ..RunSummary::default() })
        })
    }
}
