// src/gui/app.rs
use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, Mutex, mpsc::{Receiver, TryRecvError}},
    time::Duration,
};

use eframe::egui;
use tracing::{info, warn};

use crate::{
    config::{
        consts::{OPTIONS_FILE, STORE_DIR},
        options::AppOptions,
        state::AppState,
    },
    runner::RunSummary,
    store::DataSet,
};

use super::{
    components,
    pages::{Page, PageKind},
    router,
};

pub fn run(options: eframe::NativeOptions) -> eframe::Result<()> {
    let opts_path = Path::new(STORE_DIR).join(OPTIONS_FILE);
    let app_options = match AppOptions::load(&opts_path) {
        Ok(o) => o,
        Err(e) => {
            warn!("Init: ignoring {}: {e}", opts_path.display());
            AppOptions::default()
        }
    };
    let state = AppState { options: app_options, ..AppState::default() };

    eframe::run_native(
        "Sansad Scrape",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state)))),
    )
}

/// A job on the worker thread and the tab it belongs to.
pub struct Running {
    pub kind: PageKind,
    pub rx: Receiver<Result<RunSummary, String>>,
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // table for the CURRENT page
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,

    // last result per page
    pub results: HashMap<PageKind, DataSet>,

    // status line (worker writes here)
    pub status: Arc<Mutex<String>>,
    pub running: Option<Running>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let mut app = Self {
            state,
            headers: None,
            rows: Vec::new(),
            results: HashMap::new(),
            status: Arc::new(Mutex::new(s!("Idle"))),
            running: None,
        };
        app.rebuild_view();
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page {
        let pages = router::all_pages();
        pages[self.current_index().min(pages.len() - 1)]
    }

    #[inline]
    pub fn current_page_kind(&self) -> PageKind { self.current_page().kind() }

    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn is_running(&self) -> bool { self.running.is_some() }

    /// Show the current page's last result (or its default headers).
    pub fn rebuild_view(&mut self) {
        let page = self.current_page();
        match self.results.get(&page.kind()) {
            Some(ds) => {
                self.headers = ds.headers.clone();
                self.rows = ds.rows.clone();
            }
            None => {
                self.headers = page.default_headers().map(|hs| hs.iter().map(|h| s!(*h)).collect());
                self.rows.clear();
            }
        }
    }

    /// Collect the worker's result if it has arrived.
    fn poll_job(&mut self, ctx: &egui::Context) {
        let Some(running) = &self.running else { return };
        let kind = running.kind;
        let title = router::page_for(kind).title();
        match running.rx.try_recv() {
            Err(TryRecvError::Empty) => {
                ctx.request_repaint_after(Duration::from_millis(200));
                return;
            }
            Err(TryRecvError::Disconnected) => {
                self.status(format!("{title}: job ended without a result"));
            }
            Ok(Ok(summary)) => {
                info!(
                    "Job: {:?} done, {} file(s), {} failure(s), {} row(s)",
                    kind,
                    summary.files_written.len(),
                    summary.failures.len(),
                    summary.preview.row_count()
                );
                if !summary.failures.is_empty() {
                    self.status(format!("{title}: done with {} failure(s); see table", summary.failures.len()));
                }
                self.results.insert(kind, summary.preview);
                if kind == self.current_page_kind() {
                    self.rebuild_view();
                }
            }
            Ok(Err(e)) => {
                warn!("Job: {:?} failed: {e}", kind);
                self.status(format!("{title}: {e}"));
            }
        }
        self.running = None;
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_job(ctx);

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.is_running() {
                    ui.spinner();
                }
                ui.label(self.status_text());
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::tabs::draw(ui, self);

            ui.separator();

            let page = self.current_page();
            page.draw_controls(ui, &mut self.state);
            ui.horizontal(|ui| {
                let label = page.run_label(&self.state);
                if ui.add_enabled(!self.is_running(), egui::Button::new(label)).clicked() {
                    super::actions::run::start(self);
                }
            });

            ui.separator();

            components::export_bar::draw(ui, self);

            ui.separator();

            components::data_table::draw(ui, &*self);
        });
    }
}
