// src/error.rs
//! Crate-wide error type.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {status} {url}")]
    Status { status: u16, url: String },

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Page structure: {0}")]
    Structure(String),

    #[error("Bad selector: {0}")]
    Selector(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Bad header pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("PDF error in {path}: {message}")]
    Pdf { path: PathBuf, message: String },

    #[error("Browser error: {0}")]
    Browser(String),

    #[error("Notebook run failed for {input}: {detail}")]
    Notebook { input: PathBuf, detail: String },

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Invalid session key: {0}")]
    SessionKey(String),

    #[error("Path exists but is not a directory: {0}")]
    NotADirectory(PathBuf),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Read { path: path.into(), source }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Write { path: path.into(), source }
    }
}
