// src/specs/roster.rs
//! Roster tables (e.g. the Wikipedia "List of members of the Nth Lok Sabha").
//!
//! Every `<table>` carrying the class filter is flattened into a
//! [`RosterTable`]: first row = headers, `colspan` repeated, optional `rowspan`
//! carry-down, rows padded/truncated to the header width. [`combine`] then
//! stacks all tables under the union of their headers.

use std::collections::HashMap;

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::config::options::RosterOptions;
use crate::core::sanitize::{normalize_ws, strip_brackets};
use crate::error::{Error, Result};
use crate::store::DataSet;

/// Spans beyond this are treated as markup errors and clamped.
const MAX_SPAN: usize = 64;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RosterTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Cell-level switches, split out of `RosterOptions` so tests need no URL.
#[derive(Clone, Copy, Debug, Default)]
pub struct TableRules<'a> {
    pub class: &'a str,
    pub expand_rowspan: bool,
    pub strip_footnotes: bool,
}

impl<'a> From<&'a RosterOptions> for TableRules<'a> {
    fn from(o: &'a RosterOptions) -> Self {
        Self {
            class: &o.table_class,
            expand_rowspan: o.expand_rowspan,
            strip_footnotes: o.strip_footnotes,
        }
    }
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::Selector(format!("{css}: {e}")))
}

/// All matching tables with at least one data row, in document order.
pub fn parse_tables(html: &str, rules: TableRules<'_>) -> Result<Vec<RosterTable>> {
    let doc = Html::parse_document(html);
    let table_sel = selector("table")?;
    let tr_sel = selector("tr")?;

    let mut out = Vec::new();
    for (i, table) in doc.select(&table_sel).enumerate() {
        if !rules.class.is_empty() && !table.value().classes().any(|c| c == rules.class) {
            continue;
        }

        let rows: Vec<Vec<String>> = flatten_rows(
            table.select(&tr_sel).filter(|tr| owning_table(tr) == Some(table)),
            rules,
        );

        let mut rows = rows.into_iter();
        let Some(headers) = rows.next() else { continue };
        let headers = dedup_headers(headers);
        let width = headers.len();
        let data: Vec<Vec<String>> = rows
            .map(|mut r| {
                r.resize(width, s!());
                r
            })
            .collect();

        if data.is_empty() {
            debug!("Roster: table #{i} has no data rows, skipped");
            continue;
        }
        out.push(RosterTable { headers, rows: data });
    }
    Ok(out)
}

/// Id of the nearest enclosing `<table>`, so nested tables don't leak rows.
fn owning_table<'a>(tr: &ElementRef<'a>) -> Option<ElementRef<'a>> {
    tr.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().name() == "table")
}

fn span_attr(cell: &ElementRef<'_>, name: &str) -> usize {
    cell.value()
        .attr(name)
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|&n| n >= 1)
        .map_or(1, |n| n.min(MAX_SPAN))
}

fn cell_text(cell: &ElementRef<'_>, strip_footnotes: bool) -> String {
    let text = normalize_ws(&cell.text().collect::<String>());
    if strip_footnotes { strip_brackets(&text) } else { text }
}

fn flatten_rows<'a>(
    trs: impl Iterator<Item = ElementRef<'a>>,
    rules: TableRules<'_>,
) -> Vec<Vec<String>> {
    // Column index → (value, rows still to fill)
    let mut carried: Vec<Option<(String, usize)>> = Vec::new();
    let mut rows = Vec::new();

    for tr in trs {
        let mut row: Vec<String> = Vec::new();
        let cells = tr
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|c| matches!(c.value().name(), "th" | "td"));

        for cell in cells {
            fill_carried(&mut row, &mut carried, false);
            let text = cell_text(&cell, rules.strip_footnotes);
            let colspan = span_attr(&cell, "colspan");
            let rowspan = if rules.expand_rowspan { span_attr(&cell, "rowspan") } else { 1 };

            for _ in 0..colspan {
                if rowspan > 1 {
                    let col = row.len();
                    if carried.len() <= col {
                        carried.resize(col + 1, None);
                    }
                    carried[col] = Some((text.clone(), rowspan - 1));
                }
                row.push(text.clone());
            }
        }
        fill_carried(&mut row, &mut carried, true);

        if !row.is_empty() {
            rows.push(row);
        }
    }
    rows
}

/// Push carried-down values sitting at the current column. With `trailing`,
/// keep going to the end of the carry table (cells after the last real cell).
fn fill_carried(row: &mut Vec<String>, carried: &mut [Option<(String, usize)>], trailing: bool) {
    loop {
        let col = row.len();
        if col >= carried.len() {
            return;
        }
        let more = carried[col + 1..].iter().any(Option::is_some);
        match carried[col].as_mut() {
            Some((value, left)) => {
                row.push(value.clone());
                *left -= 1;
                if *left == 0 {
                    carried[col] = None;
                }
            }
            None if trailing && more => row.push(s!()),
            None => return,
        }
    }
}

/// `Name, Name, Party` → `Name, Name.1, Party`.
pub fn dedup_headers(headers: Vec<String>) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    headers
        .into_iter()
        .map(|h| {
            let n = seen.entry(h.clone()).or_insert(0);
            let out = if *n == 0 { h } else { format!("{h}.{n}") };
            *n += 1;
            out
        })
        .collect()
}

/// Stack tables under the union of their headers (first-seen order).
pub fn combine(tables: &[RosterTable]) -> DataSet {
    let mut headers: Vec<String> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for t in tables {
        for h in &t.headers {
            if !index.contains_key(h.as_str()) {
                index.insert(h.as_str(), headers.len());
                headers.push(h.clone());
            }
        }
    }

    let mut rows = Vec::with_capacity(tables.iter().map(|t| t.rows.len()).sum());
    for t in tables {
        let cols: Vec<usize> = t.headers.iter().map(|h| index[h.as_str()]).collect();
        for r in &t.rows {
            let mut aligned = vec![s!(); headers.len()];
            for (value, &col) in r.iter().zip(&cols) {
                aligned[col] = value.clone();
            }
            rows.push(aligned);
        }
    }

    DataSet { headers: Some(headers), rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> TableRules<'static> {
        TableRules { class: "wikitable", ..Default::default() }
    }

    #[test]
    fn colspan_repeats_value() {
        let html = r#"<table class="wikitable sortable">
            <tr><th>A</th><th>B</th><th>C</th><th>D</th></tr>
            <tr><td colspan="3">wide</td><td>x</td></tr>
        </table>"#;
        let t = parse_tables(html, rules()).unwrap();
        assert_eq!(t[0].rows[0], vec!["wide", "wide", "wide", "x"]);
    }

    #[test]
    fn invalid_colspan_counts_as_one() {
        let html = r#"<table class="wikitable">
            <tr><th>A</th><th>B</th></tr>
            <tr><td colspan="abc">1</td><td colspan="0">2</td></tr>
        </table>"#;
        let t = parse_tables(html, rules()).unwrap();
        assert_eq!(t[0].rows[0], vec!["1", "2"]);
    }

    #[test]
    fn rows_pad_and_truncate_to_header() {
        let html = r#"<table class="wikitable">
            <tr><th>A</th><th>B</th><th>C</th></tr>
            <tr><td>1</td></tr>
            <tr><td>1</td><td>2</td><td>3</td><td>4</td></tr>
        </table>"#;
        let t = parse_tables(html, rules()).unwrap();
        assert_eq!(t[0].rows, vec![vec!["1", "", ""], vec!["1", "2", "3"]]);
    }

    #[test]
    fn other_classes_and_header_only_tables_are_skipped() {
        let html = r#"
            <table class="infobox"><tr><th>X</th></tr><tr><td>1</td></tr></table>
            <table class="wikitable"><tr><th>Only</th></tr></table>
            <table class="wikitable"><tr><th>Y</th></tr><tr><td>2</td></tr></table>"#;
        let t = parse_tables(html, rules()).unwrap();
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].headers, vec!["Y"]);
    }

    #[test]
    fn rowspan_carries_down_when_enabled() {
        let html = r#"<table class="wikitable">
            <tr><th>State</th><th>No.</th><th>Member</th></tr>
            <tr><td rowspan="2">Goa</td><td>1</td><td>A</td></tr>
            <tr><td>2</td><td>B</td></tr>
        </table>"#;
        let flat = parse_tables(html, rules()).unwrap();
        assert_eq!(flat[0].rows[1], vec!["2", "B", ""]);

        let expanded = parse_tables(html, TableRules { expand_rowspan: true, ..rules() }).unwrap();
        assert_eq!(expanded[0].rows[1], vec!["Goa", "2", "B"]);
    }

    #[test]
    fn rowspan_in_last_column_fills_after_short_row() {
        let html = r#"<table class="wikitable">
            <tr><th>No.</th><th>Name</th><th>Seat</th><th>Party</th></tr>
            <tr><td>1</td><td>A</td><td>S1</td><td rowspan="3">BJP</td></tr>
            <tr><td>2</td></tr>
            <tr><td>3</td><td>C</td><td>S3</td></tr>
        </table>"#;
        let t = parse_tables(html, TableRules { expand_rowspan: true, ..rules() }).unwrap();
        assert_eq!(t[0].rows[1], vec!["2", "", "", "BJP"]);
        assert_eq!(t[0].rows[2], vec!["3", "C", "S3", "BJP"]);
    }

    #[test]
    fn text_is_normalized_and_footnotes_optional() {
        let html = "<table class=\"wikitable\"><tr><th>Name</th></tr>\
                    <tr><td>\n  Om   Birla<sup>[12]</sup> </td></tr></table>";
        let plain = parse_tables(html, rules()).unwrap();
        assert_eq!(plain[0].rows[0][0], "Om Birla[12]");
        let stripped = parse_tables(html, TableRules { strip_footnotes: true, ..rules() }).unwrap();
        assert_eq!(stripped[0].rows[0][0], "Om Birla");
    }

    #[test]
    fn combine_uses_header_union() {
        let a = RosterTable { headers: vec![s!("Name"), s!("Party")], rows: vec![vec![s!("A"), s!("X")]] };
        let b = RosterTable { headers: vec![s!("Party"), s!("Seat")], rows: vec![vec![s!("Y"), s!("S1")]] };
        let ds = combine(&[a, b]);
        assert_eq!(ds.headers.unwrap(), vec!["Name", "Party", "Seat"]);
        assert_eq!(ds.rows, vec![vec!["A", "X", ""], vec!["", "Y", "S1"]]);
    }

    #[test]
    fn duplicate_headers_get_suffixes() {
        let h = dedup_headers(vec![s!("Name"), s!("Name"), s!("Party"), s!("Name")]);
        assert_eq!(h, vec!["Name", "Name.1", "Party", "Name.2"]);
    }
}
