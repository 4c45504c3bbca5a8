// src/lib.rs

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod convert;
pub mod core;
pub mod error;
pub mod log;
pub mod notebook;
pub mod segment;
pub mod specs;

pub mod file;
pub mod gui;
pub mod progress;
pub mod runner;
pub mod scrape;
pub mod store;

pub use error::{Error, Result};
