// src/progress.rs
/// Lightweight progress reporting used by the batch jobs (fetch/segment/notebooks).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one logical unit completes (a debate key, an input file name).
    fn item_done(&mut self, _item: &str) {}

    /// Called when one unit failed but the job keeps going.
    fn item_failed(&mut self, _item: &str, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// Progress sink that forwards to `tracing`. Used by the CLI.
#[derive(Default)]
pub struct LogProgress {
    done: usize,
    failed: usize,
    total: usize,
}

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        tracing::info!("Starting: {total} item(s)");
    }
    fn log(&mut self, msg: &str) {
        tracing::info!("{msg}");
    }
    fn item_done(&mut self, item: &str) {
        self.done += 1;
        tracing::info!("[{}/{}] {item}", self.done + self.failed, self.total);
    }
    fn item_failed(&mut self, item: &str, reason: &str) {
        self.failed += 1;
        tracing::warn!("[{}/{}] {item} failed: {reason}", self.done + self.failed, self.total);
    }
    fn finish(&mut self) {
        tracing::info!("Done: {} ok, {} failed", self.done, self.failed);
    }
}
