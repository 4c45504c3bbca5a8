// src/notebook.rs
//! Parameterized notebook batches.
//!
//! Each `*.csv` in the input directory becomes one run of the notebook
//! runner (papermill by default):
//!
//! ```text
//! papermill <template> <executed.ipynb> -p <name> <value> ...
//! ```
//!
//! `join` attaches party names from a lookup table; `preprocess` aggregates
//! raw segment CSVs. The first failing run stops the batch.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info};

use crate::{
    config::{
        consts::PARTY_LOOKUP_FILE,
        options::{NotebookKind, NotebookOptions},
    },
    error::{Error, Result},
    file::{ensure_directory, file_stem, list_files_with_ext},
    progress::Progress,
    runner::RunSummary,
};

/// How much of the runner's stderr goes into the error.
const STDERR_TAIL: usize = 2000;

/// One planned invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotebookRun {
    pub input: PathBuf,
    pub template: PathBuf,
    pub executed: PathBuf,
    /// The `-p name value` pairs, in order.
    pub params: Vec<(String, String)>,
    /// The data file the notebook is expected to produce, if the kind names one.
    pub output: Option<PathBuf>,
}

fn path_str(p: &Path) -> String {
    p.to_string_lossy().into_owned()
}

impl NotebookRun {
    pub fn for_input(opts: &NotebookOptions, input: &Path) -> Self {
        let stem = file_stem(input);
        match opts.kind {
            NotebookKind::Join => {
                let output = opts.output_dir.join(format!("{stem}_with_partyname.csv"));
                let lookup = opts
                    .lookup_path
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(PARTY_LOOKUP_FILE));
                Self {
                    input: input.to_path_buf(),
                    template: opts.notebook.clone(),
                    executed: opts.executed_dir().join(format!("{stem}_executed.ipynb")),
                    params: vec![
                        (s!("input_csv_path"), path_str(input)),
                        (s!("output_csv_path"), path_str(&output)),
                        (s!("party_lookup_path"), path_str(&lookup)),
                    ],
                    output: Some(output),
                }
            }
            NotebookKind::Preprocess => Self {
                input: input.to_path_buf(),
                template: opts.notebook.clone(),
                executed: opts.executed_dir().join(format!("run_{stem}.ipynb")),
                params: vec![
                    (s!("input_file"), path_str(input)),
                    (s!("output_dir"), path_str(&opts.output_dir)),
                ],
                output: None,
            },
        }
    }

    /// Arguments after the runner executable.
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![path_str(&self.template), path_str(&self.executed)];
        for (name, value) in &self.params {
            args.push(s!("-p"));
            args.push(name.clone());
            args.push(value.clone());
        }
        args
    }

    pub fn command(&self, runner: &str) -> Command {
        let mut cmd = Command::new(runner);
        cmd.args(self.args());
        cmd
    }

    /// Run to completion. Non-zero exit (or failure to start) is an error.
    pub fn execute(&self, runner: &str) -> Result<()> {
        debug!("Notebook: {runner} {}", self.args().join(" "));
        let out = self.command(runner).output().map_err(|e| Error::Notebook {
            input: self.input.clone(),
            detail: format!("cannot start {runner}: {e}"),
        })?;
        if out.status.success() {
            return Ok(());
        }
        let stderr = String::from_utf8_lossy(&out.stderr);
        let tail: String = {
            let chars: Vec<char> = stderr.trim().chars().collect();
            chars[chars.len().saturating_sub(STDERR_TAIL)..].iter().collect()
        };
        Err(Error::Notebook { input: self.input.clone(), detail: format!("{}: {tail}", out.status) })
    }
}

/// One run per `*.csv` in `opts.input_dir`, sorted by name.
pub fn plan(opts: &NotebookOptions) -> Result<Vec<NotebookRun>> {
    Ok(list_files_with_ext(&opts.input_dir, "csv")?
        .iter()
        .map(|p| NotebookRun::for_input(opts, p))
        .collect())
}

pub fn run_batch(opts: &NotebookOptions, mut progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    let runs = plan(opts)?;
    ensure_directory(&opts.output_dir)?;
    ensure_directory(opts.executed_dir())?;

    if let Some(p) = progress.as_deref_mut() {
        p.begin(runs.len());
    }
    let mut summary = RunSummary::with_headers(&["Input", "Executed notebook", "Output"]);

    for run in &runs {
        let name = file_stem(&run.input);
        if let Err(e) = run.execute(&opts.runner) {
            if let Some(p) = progress.as_deref_mut() {
                p.item_failed(&name, &e.to_string());
                p.finish();
            }
            return Err(e);
        }
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(&name);
        }
        summary.push_row(vec![
            path_str(&run.input),
            path_str(&run.executed),
            run.output.as_deref().map(path_str).unwrap_or_default(),
        ]);
        summary.files_written.push(run.executed.clone());
        summary.files_written.extend(run.output.clone());
    }

    info!("Notebook: {} run(s) of {}", runs.len(), opts.notebook.display());
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(summary)
}
