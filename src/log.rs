// src/log.rs
//
// tracing-subscriber setup. The CLI logs to stderr; the GUI has no console
// and appends to .store/debug.log instead.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, fmt::time::uptime};

use crate::config::consts::{LOG_FILE, STORE_DIR};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sink {
    Stderr,
    File,
}

fn filter(verbose: bool) -> EnvFilter {
    let level = if verbose { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Install the global subscriber. Safe to call twice; the second call is a no-op.
pub fn init(sink: Sink, verbose: bool) {
    match sink {
        Sink::Stderr => {
            let _ = fmt()
                .with_env_filter(filter(verbose))
                .with_timer(uptime())
                .with_writer(std::io::stderr)
                .try_init();
        }
        Sink::File => {
            let path = Path::new(STORE_DIR).join(LOG_FILE);
            let _ = fs::create_dir_all(STORE_DIR);
            match OpenOptions::new().create(true).append(true).open(&path) {
                Ok(file) => {
                    let _ = fmt()
                        .with_env_filter(filter(verbose))
                        .with_timer(uptime())
                        .with_ansi(false)
                        .with_writer(Mutex::new(file))
                        .try_init();
                }
                // No log file, no reason to refuse to start
                Err(_) => init(Sink::Stderr, verbose),
            }
        }
    }
}
