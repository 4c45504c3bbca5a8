// src/runner.rs
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::{
    config::options::{AppOptions, ExportOptions},
    convert,
    error::Result,
    notebook,
    progress::Progress,
    scrape,
    store::{self, DataSet},
};

/// What a job produced.
#[derive(Clone, Debug, Default)]
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
    /// `(item, reason)` for items skipped by jobs that keep going.
    pub failures: Vec<(String, String)>,
    /// Table the GUI shows after the run.
    pub preview: DataSet,
}

impl RunSummary {
    pub fn with_headers(headers: &[&str]) -> Self {
        Self {
            preview: DataSet { headers: Some(headers.iter().map(|h| s!(*h)).collect()), rows: Vec::new() },
            ..Self::default()
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.preview.rows.push(row);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Job {
    Roster,
    Debates,
    Segment,
    Pdf,
    Join,
    Preprocess,
}

impl Job {
    pub const ALL: [Job; 6] = [Job::Roster, Job::Debates, Job::Segment, Job::Pdf, Job::Join, Job::Preprocess];

    pub fn label(&self) -> &'static str {
        match self {
            Job::Roster => "roster",
            Job::Debates => "debates",
            Job::Segment => "segment",
            Job::Pdf => "pdf",
            Job::Join => "join",
            Job::Preprocess => "preprocess",
        }
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Job {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Job::ALL
            .into_iter()
            .find(|j| j.label() == s.trim().to_ascii_lowercase())
            .ok_or_else(|| format!("Unknown job: {s}"))
    }
}

/// Top-level runner: dispatch on job and run it to completion.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(job: Job, opts: &AppOptions, progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    match job {
        Job::Roster => run_roster(opts, progress),
        Job::Debates => {
            let mut renderer = scrape::make_renderer(&opts.debates)?;
            scrape::collect_debates(&opts.debates, renderer.as_mut(), progress)
        }
        Job::Segment => convert::transcripts::segment_dir(&opts.segment, progress),
        Job::Pdf => convert::pdf::extract(&opts.pdf, progress),
        Job::Join => notebook::run_batch(&opts.join, progress),
        Job::Preprocess => notebook::run_batch(&opts.preprocess, progress),
    }
}

/// Short reborrow of an optional sink, so it stays usable after the call.
fn reborrow<'a>(progress: &'a mut Option<&mut dyn Progress>) -> Option<&'a mut dyn Progress> {
    progress.as_mut().map(|p| &mut **p as &mut dyn Progress)
}

fn run_roster(opts: &AppOptions, mut progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    let ds = scrape::collect_roster(&opts.roster, reborrow(&mut progress))?;
    // Roster file is always BOM CSV with headers, whatever the GUI export settings say.
    store::write_table(&opts.roster.out, &ds, &ExportOptions::default())?;
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Wrote {}", opts.roster.out.display()));
        p.finish();
    }
    Ok(RunSummary { files_written: vec![opts.roster.out.clone()], failures: Vec::new(), preview: ds })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_names_round_trip() {
        for job in Job::ALL {
            assert_eq!(job.label().parse::<Job>().unwrap(), job);
        }
        assert!("nope".parse::<Job>().is_err());
    }
}
