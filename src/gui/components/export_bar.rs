// src/gui/components/export_bar.rs

use eframe::egui;
use tracing::debug;

use crate::{
    config::options::ExportFormat,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let stem = app.current_page().export_stem();
    ui.horizontal(|ui| {
        let export = &mut app.state.options.export;

        ui.label("Format:");
        let prev = export.format;
        ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
        ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");
        if export.format != prev {
            debug!("UI: Export format → {:?}", export.format);
        }

        ui.checkbox(&mut export.include_headers, "Include headers");
        ui.checkbox(&mut export.bom, "BOM");

        ui.separator();
        ui.label("Output:");
        ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.export_path)
                .hint_text(format!("{stem}.{}", export.format.ext()))
                .font(egui::TextStyle::Monospace),
        );
    });

    ui.horizontal(|ui| {
        let has_rows = !app.rows.is_empty();
        if ui.add_enabled(has_rows, egui::Button::new("Copy")).clicked() {
            actions::copy::copy(app, ui.ctx());
        }
        if ui.add_enabled(has_rows, egui::Button::new("Export")).clicked() {
            actions::export::export(app);
        }
        ui.label(format!("{} row(s)", app.rows.len()));
    });
}
