// src/specs/debate.rs
//! Debate transcript pages (`sansad.in/ls/debates/view-debate?...`).
//!
//! The page is a client-rendered Next.js app; after rendering, the transcript
//! sits at `div#__next table > tbody > tr:first > td:nth(2)`, one `<p>` per
//! paragraph with the words split over `<span>`s.

use scraper::{ElementRef, Html, Selector};

use crate::core::sanitize::normalize_ws;
use crate::error::{Error, Result};

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::Selector(format!("{css}: {e}")))
}

fn child<'a>(el: ElementRef<'a>, name: &str, nth: usize) -> Option<ElementRef<'a>> {
    el.children()
        .filter_map(ElementRef::wrap)
        .filter(|c| c.value().name() == name)
        .nth(nth)
}

/// Non-blank paragraph texts in document order.
pub fn extract_paragraphs(html: &str) -> Result<Vec<String>> {
    let doc = Html::parse_document(html);
    let table_sel = selector("div#__next table")?;
    let p_sel = selector("p")?;
    let span_sel = selector("span")?;

    let table = doc
        .select(&table_sel)
        .next()
        .ok_or_else(|| Error::Structure(s!("no table under div#__next")))?;
    let body_cell = child(table, "tbody", 0)
        .and_then(|tbody| child(tbody, "tr", 0))
        .and_then(|tr| child(tr, "td", 1))
        .ok_or_else(|| Error::Structure(s!("transcript cell (first row, second column) missing")))?;

    let paragraphs = body_cell
        .select(&p_sel)
        .map(|p| {
            let mut spans = p.select(&span_sel).peekable();
            if spans.peek().is_none() {
                return normalize_ws(&p.text().collect::<String>());
            }
            spans
                .map(|s| normalize_ws(&s.text().collect::<String>()))
                .filter(|t| !t.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|t| !t.is_empty())
        .collect();

    Ok(paragraphs)
}

/// File body: every paragraph followed by a blank line.
pub fn to_transcript(paragraphs: &[String]) -> String {
    let mut out = String::with_capacity(paragraphs.iter().map(|p| p.len() + 2).sum());
    for p in paragraphs {
        out.push_str(p);
        out.push_str("\n\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><body><div id="__next"><div>
        <table><tbody>
          <tr>
            <td>meta</td>
            <td>
              <p><span> SHRI A: </span><span>Sir,</span><span>  </span><span>I rise.</span></p>
              <p><span>   </span></p>
              <p>Plain   paragraph.</p>
            </td>
          </tr>
          <tr><td>x</td><td><p><span>ignored</span></p></td></tr>
        </tbody></table>
    </div></div></body></html>"#;

    #[test]
    fn spans_join_and_blanks_drop() {
        let ps = extract_paragraphs(PAGE).unwrap();
        assert_eq!(ps, vec!["SHRI A: Sir, I rise.", "Plain paragraph."]);
    }

    #[test]
    fn missing_structure_is_an_error() {
        let err = extract_paragraphs("<div id='__next'><p>no table</p></div>").unwrap_err();
        assert!(matches!(err, Error::Structure(_)));
    }

    #[test]
    fn transcript_body_separates_paragraphs() {
        assert_eq!(to_transcript(&[s!("a"), s!("b")]), "a\n\nb\n\n");
    }
}
