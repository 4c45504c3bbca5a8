// src/convert/pdf.rs
//
// Synopsis PDFs: dump a page range to text, then segment the dump.

use std::fs;

use tracing::{info, warn};

use crate::{
    config::options::{ExportOptions, PdfOptions},
    error::{Error, Result},
    file::write_text,
    progress::Progress,
    runner::RunSummary,
    segment::Segmenter,
    store::{self, DataSet},
};

/// Pages `first..=last` (0-based, `last` clamped), joined by newlines.
pub fn select_pages<S: AsRef<str>>(pages: &[S], first: usize, last: Option<usize>) -> String {
    let end = last.map_or(pages.len(), |l| (l + 1).min(pages.len()));
    if first >= end {
        return s!();
    }
    pages[first..end].iter().map(|p| p.as_ref()).collect::<Vec<&str>>().join("\n")
}

/// Extract, dump, segment. Any read/parse failure ends the job with an error.
pub fn extract(opts: &PdfOptions, mut progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    let path = &opts.pdf_path;
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Reading {}", path.display()));
    }
    let bytes = fs::read(path).map_err(|e| Error::read(path, e))?;
    let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes)
        .map_err(|e| Error::Pdf { path: path.clone(), message: e.to_string() })?;

    if opts.first_page >= pages.len() {
        warn!(
            "PDF: {} has {} page(s), nothing from page {}",
            path.display(),
            pages.len(),
            opts.first_page
        );
    }
    let dump = select_pages(&pages, opts.first_page, opts.last_page);
    write_text(&opts.dump_path, &dump)?;

    let result = Segmenter::for_profile(opts.profile)?.segment(&dump);
    let ds = DataSet::from_segments(&result.segments, opts.profile.full_columns());
    store::write_table(&opts.csv_out, &ds, &ExportOptions::default())?;

    info!(
        "PDF: {} page(s), {} segment(s) → {}",
        pages.len(),
        ds.row_count(),
        opts.csv_out.display()
    );
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("{} segment(s) written", ds.row_count()));
        p.finish();
    }

    Ok(RunSummary {
        files_written: vec![opts.dump_path.clone(), opts.csv_out.clone()],
        failures: Vec::new(),
        preview: ds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_range_selection() {
        let pages = ["p0", "p1", "p2", "p3"];
        assert_eq!(select_pages(&pages, 2, None), "p2\np3");
        assert_eq!(select_pages(&pages, 1, Some(1)), "p1");
        assert_eq!(select_pages(&pages, 1, Some(99)), "p1\np2\np3");
        assert_eq!(select_pages(&pages, 5, None), "");
    }

    #[test]
    fn missing_pdf_is_a_read_error() {
        let opts = PdfOptions { pdf_path: "no/such/file.pdf".into(), ..PdfOptions::default() };
        assert!(matches!(extract(&opts, None), Err(Error::Read { .. })));
    }
}
