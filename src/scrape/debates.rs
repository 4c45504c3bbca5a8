// src/scrape/debates.rs
use tracing::{info, warn};

use super::render::Renderer;
use crate::{
    config::{consts::DEBATE_FILE_PREFIX, options::DebateOptions},
    core::sanitize::sanitize_file_stem,
    error::Result,
    file::{ensure_directory, write_text},
    progress::Progress,
    runner::RunSummary,
    specs::debate::{extract_paragraphs, to_transcript},
};

/// `debate_<key>.txt`
pub fn debate_file_name(key: &str) -> String {
    format!("{DEBATE_FILE_PREFIX}{}.txt", sanitize_file_stem(key, "session"))
}

/// Render every link, keep the transcript paragraphs, write one text file per
/// session. A failing link is logged and recorded; the loop moves on.
pub fn collect_debates(
    opts: &DebateOptions,
    renderer: &mut dyn Renderer,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    ensure_directory(&opts.out_dir)?;
    if let Some(p) = progress.as_deref_mut() {
        p.begin(opts.links.len());
    }

    let mut summary = RunSummary::with_headers(&["Session", "Paragraphs", "Result"]);

    for link in &opts.links {
        let path = opts.out_dir.join(debate_file_name(&link.key));
        let fetched = renderer
            .render(&link.url)
            .and_then(|html| extract_paragraphs(&html))
            .and_then(|ps| write_text(&path, &to_transcript(&ps)).map(|_| ps.len()));

        match fetched {
            Ok(n) => {
                info!("Debates: {} → {} ({n} paragraphs)", link.key, path.display());
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(&link.key);
                }
                summary.push_row(vec![link.key.clone(), n.to_string(), path.display().to_string()]);
                summary.files_written.push(path);
            }
            Err(e) => {
                warn!("Debates: {} ({}) failed: {e}", link.key, link.url);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(&link.key, &e.to_string());
                }
                summary.push_row(vec![link.key.clone(), s!("0"), format!("error: {e}")]);
                summary.failures.push((link.key.clone(), e.to_string()));
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(summary)
}
