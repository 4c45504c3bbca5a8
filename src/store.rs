// src/store.rs
//
// In-memory tables and their CSV form. Every CSV this crate writes goes
// through `write_table`, so BOM/delimiter/header policy lives in one place.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::config::options::ExportOptions;
use crate::error::{Error, Result};
use crate::file::ensure_parent;
use crate::segment::SpeechSegment;

pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn row_count(&self) -> usize { self.rows.len() }

    pub fn header_count(&self) -> usize {
        self.headers.as_ref().map_or(0, |h| h.len())
    }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Rows of `Speaker, Speech[, Words_in_Speech, Language]`.
    pub fn from_segments(segments: &[SpeechSegment], full: bool) -> Self {
        Self {
            headers: Some(SpeechSegment::headers(full)),
            rows: segments.iter().map(|s| s.to_row(full)).collect(),
        }
    }

    /// Index of a named column.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.as_ref()?.iter().position(|h| h == name)
    }
}

fn write_rows<W: Write>(w: W, ds: &DataSet, opts: &ExportOptions) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(opts.format.delim())
        .flexible(true)
        .from_writer(w);
    if opts.include_headers {
        if let Some(h) = &ds.headers {
            wtr.write_record(h)?;
        }
    }
    for row in &ds.rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write `ds` to `path` (parents created, file truncated).
pub fn write_table(path: &Path, ds: &DataSet, opts: &ExportOptions) -> Result<()> {
    ensure_parent(path)?;
    let file = File::create(path).map_err(|e| Error::write(path, e))?;
    let mut out = BufWriter::new(file);
    if opts.bom {
        out.write_all(UTF8_BOM).map_err(|e| Error::write(path, e))?;
    }
    write_rows(&mut out, ds, opts)?;
    out.flush().map_err(|e| Error::write(path, e))
}

/// Same layout as `write_table`, as a string (clipboard). Never carries a BOM.
pub fn to_export_string(ds: &DataSet, opts: &ExportOptions) -> Result<String> {
    let mut buf = Vec::new();
    write_rows(&mut buf, ds, opts)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Read a delimited file whose first row is the header. A leading BOM is ignored.
pub fn read_table(path: &Path, delim: u8) -> Result<DataSet> {
    let bytes = std::fs::read(path).map_err(|e| Error::read(path, e))?;
    let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes);

    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delim)
        .has_headers(true)
        .flexible(true)
        .from_reader(body);
    let headers = rdr.headers()?.iter().map(String::from).collect();
    let rows = rdr
        .records()
        .map(|r| r.map(|rec| rec.iter().map(String::from).collect()))
        .collect::<std::result::Result<Vec<Vec<String>>, csv::Error>>()?;
    Ok(DataSet { headers: Some(headers), rows })
}

/// Speech segments back from a segment CSV (either column layout).
/// Word count and language are recomputed from the speech text.
pub fn read_segments(path: &Path) -> Result<Vec<SpeechSegment>> {
    let ds = read_table(path, b',')?;
    let (Some(si), Some(pi)) = (ds.column("Speaker"), ds.column("Speech")) else {
        return Err(Error::Structure(format!(
            "{}: missing Speaker/Speech columns",
            path.display()
        )));
    };
    Ok(ds
        .rows
        .into_iter()
        .map(|mut r| {
            r.resize(si.max(pi) + 1, s!());
            SpeechSegment::new(std::mem::take(&mut r[si]), std::mem::take(&mut r[pi]))
        })
        .collect())
}
