// src/cli.rs
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};

use crate::{
    config::options::{AppOptions, NotebookOptions, RendererKind},
    log::{self, Sink},
    progress::LogProgress,
    runner::{self, Job},
    segment::Profile,
};

#[derive(Parser, Debug)]
#[command(name = "sansad_scrape", version, about = "Lok Sabha roster, debate and transcript tools")]
pub struct Cli {
    /// JSON options file; missing keys keep their defaults.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Debug-level logging (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scrape member tables into one CSV.
    Roster(RosterArgs),
    /// Render debate pages and save their transcripts as text.
    Debates(DebateArgs),
    /// Split transcripts into speaker/speech CSVs.
    Segment(SegmentArgs),
    /// Dump a synopsis PDF and segment it.
    Pdf(PdfArgs),
    /// Run the party-join notebook over every CSV.
    Join(NotebookArgs),
    /// Run the preprocessing notebook over every CSV.
    Preprocess(NotebookArgs),
}

#[derive(Args, Debug)]
pub struct RosterArgs {
    #[arg(long)]
    pub url: Option<String>,
    /// Only tables with this class are read.
    #[arg(long)]
    pub table_class: Option<String>,
    #[arg(long)]
    pub expand_rowspan: bool,
    #[arg(long)]
    pub strip_footnotes: bool,
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct DebateArgs {
    /// Only these session keys (repeatable).
    #[arg(long = "key")]
    pub keys: Vec<String>,
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
    /// Plain HTTP instead of a headless browser.
    #[arg(long)]
    pub http: bool,
    /// Seconds to wait for client-side rendering.
    #[arg(long)]
    pub settle: Option<u64>,
    /// Show the browser window.
    #[arg(long)]
    pub headed: bool,
}

#[derive(Args, Debug)]
pub struct SegmentArgs {
    /// layered | strict | synopsis
    #[arg(long)]
    pub profile: Option<Profile>,
    #[arg(long)]
    pub input_dir: Option<PathBuf>,
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
    #[arg(long)]
    pub preserve_paragraphs: bool,
    /// Coverage ratio below which fallback headers are tried.
    #[arg(long)]
    pub threshold: Option<f64>,
}

#[derive(Args, Debug)]
pub struct PdfArgs {
    pub pdf: Option<PathBuf>,
    /// First page, 0-based.
    #[arg(long)]
    pub first_page: Option<usize>,
    /// Last page, 0-based, inclusive.
    #[arg(long)]
    pub last_page: Option<usize>,
    #[arg(long)]
    pub dump: Option<PathBuf>,
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct NotebookArgs {
    #[arg(long)]
    pub notebook: Option<PathBuf>,
    #[arg(long)]
    pub input_dir: Option<PathBuf>,
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
    #[arg(long)]
    pub runner: Option<String>,
}

impl NotebookArgs {
    fn apply(self, nb: &mut NotebookOptions) {
        if let Some(v) = self.notebook { nb.notebook = v; }
        if let Some(v) = self.input_dir { nb.input_dir = v; }
        if let Some(v) = self.output_dir { nb.output_dir = v; }
        if let Some(v) = self.runner { nb.runner = v; }
    }
}

/// Fold command-line flags into `opts`; returns the job to run.
pub fn apply(command: Command, opts: &mut AppOptions) -> Job {
    match command {
        Command::Roster(a) => {
            let r = &mut opts.roster;
            if let Some(v) = a.url { r.url = v; }
            if let Some(v) = a.table_class { r.table_class = v; }
            if let Some(v) = a.out { r.out = v; }
            r.expand_rowspan |= a.expand_rowspan;
            r.strip_footnotes |= a.strip_footnotes;
            Job::Roster
        }
        Command::Debates(a) => {
            let d = &mut opts.debates;
            if !a.keys.is_empty() { d.links.retain(|l| a.keys.contains(&l.key)); }
            if let Some(v) = a.out_dir { d.out_dir = v; }
            if let Some(v) = a.settle { d.settle_secs = v; }
            if a.http { d.renderer = RendererKind::Http; }
            if a.headed { d.headless = false; }
            Job::Debates
        }
        Command::Segment(a) => {
            let s = &mut opts.segment;
            if let Some(v) = a.profile { s.profile = v; }
            if let Some(v) = a.input_dir { s.input_dir = v; }
            if let Some(v) = a.out_dir { s.out_dir = v; }
            if a.threshold.is_some() { s.coverage_threshold = a.threshold; }
            s.preserve_paragraphs |= a.preserve_paragraphs;
            Job::Segment
        }
        Command::Pdf(a) => {
            let p = &mut opts.pdf;
            if let Some(v) = a.pdf { p.pdf_path = v; }
            if let Some(v) = a.first_page { p.first_page = v; }
            if a.last_page.is_some() { p.last_page = a.last_page; }
            if let Some(v) = a.dump { p.dump_path = v; }
            if let Some(v) = a.csv { p.csv_out = v; }
            Job::Pdf
        }
        Command::Join(a) => { a.apply(&mut opts.join); Job::Join }
        Command::Preprocess(a) => { a.apply(&mut opts.preprocess); Job::Preprocess }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    log::init(Sink::Stderr, cli.verbose);

    let mut opts = match &cli.config {
        Some(path) => AppOptions::load(path)
            .wrap_err_with(|| format!("loading options from {}", path.display()))?,
        None => AppOptions::default(),
    };
    let job = apply(cli.command, &mut opts);

    let mut progress = LogProgress::default();
    let summary = runner::run(job, &opts, Some(&mut progress))
        .wrap_err_with(|| format!("{job} failed"))?;

    for path in &summary.files_written {
        println!("{}", path.display());
    }
    if !summary.failures.is_empty() {
        tracing::warn!("{job}: {} item(s) failed", summary.failures.len());
        for (item, reason) in &summary.failures {
            eprintln!("  {item}: {reason}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "cli", "segment", "--profile", "strict", "--out-dir", "o", "--threshold", "0.5",
        ])
        .unwrap();
        let mut opts = AppOptions::default();
        assert_eq!(apply(cli.command, &mut opts), Job::Segment);
        assert_eq!(opts.segment.profile, Profile::Strict);
        assert_eq!(opts.segment.out_dir, PathBuf::from("o"));
        assert_eq!(opts.segment.coverage_threshold, Some(0.5));
    }

    #[test]
    fn debate_keys_filter_the_link_table() {
        let cli = Cli::try_parse_from(["cli", "debates", "--key", "17_3_05Feb2020", "--http"]).unwrap();
        let mut opts = AppOptions::default();
        apply(cli.command, &mut opts);
        assert_eq!(opts.debates.links.len(), 1);
        assert_eq!(opts.debates.renderer, RendererKind::Http);
    }
}
