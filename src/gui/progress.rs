// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use crate::progress::Progress;

/// Writes job progress into the status line the UI thread draws each frame.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    failed: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, failed: 0, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.set_status(format!("Starting ({total} item(s))…"));
    }
    fn log(&mut self, msg: &str) {
        self.set_status(msg);
    }
    fn item_done(&mut self, item: &str) {
        self.done += 1;
        self.set_status(format!("{item} ({}/{})", self.done + self.failed, self.total));
    }
    fn item_failed(&mut self, item: &str, reason: &str) {
        self.failed += 1;
        self.set_status(format!("{item} failed: {reason} ({}/{})", self.done + self.failed, self.total));
    }
    fn finish(&mut self) {
        if self.total == 0 {
            self.set_status("Done"); // no counts if we never began
        } else {
            self.set_status(format!("Done ({} ok, {} failed)", self.done, self.failed));
        }
    }
}
