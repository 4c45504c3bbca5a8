// src/gui/components/data_table.rs
//
// Draws the live table from app.headers/app.rows. Purely a view.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;

const ROW_H: f32 = 20.0;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let page = app.current_page();
    let cols = app
        .headers
        .as_ref()
        .map(|h| h.len())
        .or_else(|| app.rows.first().map(|r| r.len()))
        .unwrap_or(0);
    if cols == 0 {
        ui.label("No data yet.");
        return;
    }

    let widths: Vec<f32> = (0..cols)
        .map(|ci| {
            page.preferred_column_widths()
                .and_then(|ws| ws.get(ci).copied())
                .unwrap_or(140.0)
        })
        .collect();
    let numeric = page.numeric_columns();

    // Reserve space for the scroll bars instead of overlaying content
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    let avail_h = ui.available_height();
    egui::ScrollArea::new([true, false])
        .id_salt("table_hscroll")
        .min_scrolled_height(avail_h)
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .id_salt(("table_state", page.kind(), cols));
            for w in &widths {
                table = table.column(Column::initial(*w).resizable(true).clip(true).at_least(20.0));
            }

            table
                .header(24.0, |mut header| {
                    for ci in 0..cols {
                        let label = app
                            .headers
                            .as_ref()
                            .and_then(|hs| hs.get(ci).cloned())
                            .unwrap_or_else(|| format!("Col {}", ci + 1));
                        header.col(|ui| {
                            ui.add(egui::Label::new(RichText::new(label).strong()).selectable(false));
                        });
                    }
                })
                .body(|body| {
                    body.rows(ROW_H, app.rows.len(), |mut row| {
                        let Some(data) = app.rows.get(row.index()) else { return };
                        for ci in 0..cols {
                            let cell = data.get(ci).map(String::as_str).unwrap_or("");
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                                if numeric.contains(&ci) {
                                    ui.centered_and_justified(|ui| { ui.label(cell); });
                                } else {
                                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                                        let resp = ui.label(cell);
                                        if cell.len() > 80 {
                                            resp.on_hover_text(cell);
                                        }
                                    });
                                }
                            });
                        }
                    });
                });
        });
}
