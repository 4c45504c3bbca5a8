// src/gui/actions/run.rs
use std::{sync::mpsc, thread};

use tracing::info;

use crate::gui::{
    app::{App, Running},
    progress::GuiProgress,
};

/// Start the current page's job on a worker thread. One job at a time.
pub fn start(app: &mut App) {
    if app.is_running() {
        return;
    }
    let page = app.current_page();
    let kind = page.kind();
    let task = page.task(&app.state);

    info!("Job: start {:?}", kind);
    app.status(format!("{}: running…", page.title()));

    let (tx, rx) = mpsc::channel();
    let status = app.status.clone();
    thread::spawn(move || {
        let mut prog = GuiProgress::new(status);
        let res = task(&mut prog).map_err(|e| e.to_string());
        let _ = tx.send(res);
    });
    app.running = Some(Running { kind, rx });
}
