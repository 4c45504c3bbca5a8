// src/config/options.rs
//
// Runtime options for every job. Defaults mirror the constants in `consts`,
// so running with no config file reproduces the fixed paths of the research scripts.
// A JSON file may override any subset (`#[serde(default)]` everywhere).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::consts::*;
use crate::error::{Error, Result};
use crate::segment::Profile;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    pub roster: RosterOptions,
    pub debates: DebateOptions,
    pub segment: SegmentOptions,
    pub pdf: PdfOptions,
    pub join: NotebookOptions,
    pub preprocess: NotebookOptions,
    pub export: ExportOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            roster: RosterOptions::default(),
            debates: DebateOptions::default(),
            segment: SegmentOptions::default(),
            pdf: PdfOptions::default(),
            join: NotebookOptions::join(),
            preprocess: NotebookOptions::preprocess(),
            export: ExportOptions::default(),
        }
    }
}

impl AppOptions {
    /// Load options from a JSON file, or defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path).map_err(|e| Error::read(path, e))?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text).map_err(|e| Error::write(path, e))
    }
}

/* ---------------- Roster ---------------- */

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterOptions {
    pub url: String,
    /// Only `<table>`s carrying this class are read.
    pub table_class: String,
    /// Carry `rowspan` cells down into the following rows.
    pub expand_rowspan: bool,
    /// Drop `[1]`-style footnote markers from cell text.
    pub strip_footnotes: bool,
    pub out: PathBuf,
}

impl Default for RosterOptions {
    fn default() -> Self {
        Self {
            url: s!(ROSTER_URL),
            table_class: s!(ROSTER_TABLE_CLASS),
            expand_rowspan: false,
            strip_footnotes: false,
            out: PathBuf::from(ROSTER_OUT_FILE),
        }
    }
}

/* ---------------- Debates ---------------- */

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebateLink {
    pub key: String,
    pub url: String,
}

impl DebateLink {
    pub fn new(key: &str, url: &str) -> Self {
        Self { key: s!(key), url: s!(url) }
    }

    /// The built-in session table.
    pub fn defaults() -> Vec<DebateLink> {
        DEBATE_LINKS.iter().map(|(k, u)| DebateLink::new(k, u)).collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RendererKind {
    /// Headless Chrome; needed for the client-rendered debate pages.
    Browser,
    /// Plain GET; only for pages that ship their text in the HTML.
    Http,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebateOptions {
    pub links: Vec<DebateLink>,
    pub out_dir: PathBuf,
    pub renderer: RendererKind,
    pub settle_secs: u64,
    pub headless: bool,
}

impl Default for DebateOptions {
    fn default() -> Self {
        Self {
            links: DebateLink::defaults(),
            out_dir: PathBuf::from(TRANSCRIPTS_DIR),
            renderer: RendererKind::Browser,
            settle_secs: RENDER_SETTLE_SECS,
            headless: true,
        }
    }
}

/* ---------------- Segmentation ---------------- */

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentOptions {
    pub profile: Profile,
    pub input_dir: PathBuf,
    pub out_dir: PathBuf,
    /// Keep blank-line paragraph breaks inside speeches.
    pub preserve_paragraphs: bool,
    /// Overrides the profile's coverage threshold when set.
    pub coverage_threshold: Option<f64>,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            profile: Profile::Layered,
            input_dir: PathBuf::from(TRANSCRIPTS_DIR),
            out_dir: PathBuf::from(SEGMENTS_DIR),
            preserve_paragraphs: false,
            coverage_threshold: None,
        }
    }
}

/* ---------------- PDF ---------------- */

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfOptions {
    pub pdf_path: PathBuf,
    /// First page to dump, 0-based.
    pub first_page: usize,
    /// Last page to dump (inclusive, 0-based); `None` = to the end.
    pub last_page: Option<usize>,
    pub dump_path: PathBuf,
    pub csv_out: PathBuf,
    pub profile: Profile,
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self {
            pdf_path: PathBuf::from("Sup+Synopsis-11-06-2014.pdf"),
            first_page: PDF_FIRST_PAGE,
            last_page: None,
            dump_path: PathBuf::from(PDF_DUMP_FILE),
            csv_out: PathBuf::from(SYNOPSIS_CSV_FILE),
            profile: Profile::Synopsis,
        }
    }
}

/* ---------------- Notebooks ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotebookKind {
    /// Attach party affiliation to aggregated CSVs.
    Join,
    /// Preprocess raw CSVs into aggregated outputs.
    Preprocess,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotebookOptions {
    pub kind: NotebookKind,
    /// Executable invoked per input file.
    pub runner: String,
    pub notebook: PathBuf,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Where executed notebooks go; `None` = `output_dir`.
    pub executed_dir: Option<PathBuf>,
    pub lookup_path: Option<PathBuf>,
}

impl Default for NotebookOptions {
    fn default() -> Self { Self::join() }
}

impl NotebookOptions {
    pub fn join() -> Self {
        Self {
            kind: NotebookKind::Join,
            runner: s!(NOTEBOOK_RUNNER),
            notebook: PathBuf::from(JOIN_NOTEBOOK),
            input_dir: PathBuf::from(JOIN_INPUT_DIR),
            output_dir: PathBuf::from(JOIN_OUTPUT_DIR),
            executed_dir: Some(PathBuf::from(JOIN_EXECUTED_DIR)),
            lookup_path: Some(PathBuf::from(PARTY_LOOKUP_FILE)),
        }
    }

    pub fn preprocess() -> Self {
        Self {
            kind: NotebookKind::Preprocess,
            runner: s!(NOTEBOOK_RUNNER),
            notebook: PathBuf::from(PREPROCESS_NOTEBOOK),
            input_dir: PathBuf::from(PREPROCESS_INPUT_DIR),
            output_dir: PathBuf::from(PREPROCESS_OUTPUT_DIR),
            executed_dir: None,
            lookup_path: None,
        }
    }

    pub fn executed_dir(&self) -> &Path {
        self.executed_dir.as_deref().unwrap_or(&self.output_dir)
    }
}

/* ---------------- Export (GUI copy/export) ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    /// Prefix files with a UTF-8 byte-order mark (spreadsheet friendly).
    pub bom: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { format: ExportFormat::Csv, include_headers: true, bom: true }
    }
}
