// src/convert/transcripts.rs
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::{
    config::options::{ExportOptions, SegmentOptions},
    error::Result,
    file::{ensure_directory, file_stem, list_files_with_ext, read_text},
    progress::Progress,
    runner::RunSummary,
    segment::{OutputLayout, Profile, Segmentation, Segmenter},
    specs::session::year_dir,
    store::{self, DataSet},
};

/// Where the CSV for transcript `stem` goes under `out_dir`.
pub fn output_path(out_dir: &Path, profile: Profile, stem: &str) -> PathBuf {
    match profile.layout() {
        OutputLayout::ByYear => out_dir.join(year_dir(stem)).join(format!("{stem}.csv")),
        OutputLayout::Flat(suffix) => out_dir.join(format!("{stem}{suffix}.csv")),
    }
}

/// Segment one transcript file. Returns the diagnostics and the table as written.
pub fn segment_file(path: &Path, segmenter: &Segmenter, profile: Profile) -> Result<(Segmentation, DataSet)> {
    let text = read_text(path)?;
    let result = segmenter.segment(&text);
    let ds = DataSet::from_segments(&result.segments, profile.full_columns());
    Ok((result, ds))
}

/// Segment every `*.txt` under `opts.input_dir` (sorted), one CSV each.
/// An unreadable file stops the batch.
pub fn segment_dir(opts: &SegmentOptions, mut progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    let segmenter = Segmenter::from_options(opts)?;
    let files = list_files_with_ext(&opts.input_dir, "txt")?;
    ensure_directory(&opts.out_dir)?;
    let export = ExportOptions::default();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(files.len());
    }
    let mut summary =
        RunSummary::with_headers(&["File", "Segments", "Headers", "Coverage", "Fallback", "Output"]);

    for path in &files {
        let stem = file_stem(path);
        let (result, ds) = segment_file(path, &segmenter, opts.profile)?;
        let out = output_path(&opts.out_dir, opts.profile, &stem);
        store::write_table(&out, &ds, &export)?;

        debug!(
            "Segment: {stem}: {} header(s), coverage {:.3}, fallback {}",
            result.headers, result.coverage, result.used_fallback
        );
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(&stem);
        }
        summary.push_row(vec![
            stem,
            result.segments.len().to_string(),
            result.headers.to_string(),
            format!("{:.3}", result.coverage),
            if result.used_fallback { s!("yes") } else { s!("no") },
            out.display().to_string(),
        ]);
        summary.files_written.push(out);
    }

    info!("Segment: {} file(s) → {}", files.len(), opts.out_dir.display());
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layouts() {
        let out = Path::new("csv_files");
        assert_eq!(
            output_path(out, Profile::Layered, "debate_16_4_24Feb2015"),
            out.join("2015").join("debate_16_4_24Feb2015.csv")
        );
        assert_eq!(output_path(out, Profile::Layered, "notes"), out.join("misc").join("notes.csv"));
        assert_eq!(output_path(out, Profile::Strict, "x"), out.join("x_cleaned.csv"));
        assert_eq!(output_path(out, Profile::Synopsis, "x"), out.join("x.csv"));
    }
}
