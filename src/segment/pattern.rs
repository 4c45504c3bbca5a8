// src/segment/pattern.rs
use regex::Regex;

use crate::error::Result;

/// A speaker header found in the text. Offsets are byte offsets into that text;
/// `end` is just past the terminating colon.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Header {
    pub speaker_raw: String,
    pub start: usize,
    pub end: usize,
}

/// A named regex that recognizes speaker headers.
///
/// If the regex has a `speaker` capture group, that group is the label;
/// otherwise the whole match minus its trailing colon is.
#[derive(Clone, Debug)]
pub struct HeaderPattern {
    name: String,
    re: Regex,
}

impl HeaderPattern {
    pub fn new(name: &str, pattern: &str) -> Result<Self> {
        Ok(Self { name: s!(name), re: Regex::new(pattern)? })
    }

    pub fn name(&self) -> &str { &self.name }

    /// All non-overlapping matches, left to right.
    pub fn find(&self, text: &str) -> Vec<Header> {
        self.re
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let speaker = match caps.name("speaker") {
                    Some(m) => m.as_str(),
                    None => whole.as_str().trim_end_matches(':'),
                };
                Some(Header { speaker_raw: s!(speaker), start: whole.start(), end: whole.end() })
            })
            .collect()
    }

    /* ---------- built-in header rules ---------- */

    /// Honorific (English or Devanagari) at the start of a line, then up to 300
    /// characters of name/constituency, then a colon. Case-insensitive.
    pub fn honorific_line() -> Result<Self> {
        let honorifics = [
            r"HON(?:'?\s*BLE|OURABLE|\.?BLE|\.?)",
            r"Hon(?:'?ble|\.?)",
            r"SHRI",
            r"SRI",
            r"SHRIMATI",
            r"SMT\.?",
            r"श्री(?:मति|)|श्रीमती|श्रीमति",
            r"माननीय",
        ];
        let prefix = honorifics.join("|");
        let pattern = format!(
            r"(?im)^(?:\*{{1,2}}\s*)?\s*(?P<speaker>(?:{prefix})[\s\S]{{0,300}}?):"
        );
        Self::new("honorific-line", &pattern)
    }

    /// A run of at least nine uppercase characters at the start of a line ending
    /// in a colon, e.g. `THE MINISTER OF FINANCE (SHRI ARUN JAITLEY):`.
    pub fn uppercase_line() -> Result<Self> {
        Self::new(
            "uppercase-line",
            r"(?m)^(?:\*{1,2}\s*)?\s*(?P<speaker>[A-Z][A-Z0-9\.\-'\(\) ]{8,}?):",
        )
    }

    /// Honorific anywhere in the text followed by at most 50 characters on the
    /// same line, then a colon. Case-insensitive.
    pub fn honorific_inline() -> Result<Self> {
        let honorifics = [
            r"HON\.?\s*(?:[A-Z]+\s*)?SPEAKER",
            r"Hon\.?",
            r"Dr\.?",
            r"Shri",
            r"SHRI",
            r"Shrimati",
            r"Smt\.?",
            r"Sri",
            r"श्री",
            r"श्रीमती",
            r"माननीय",
        ];
        let prefix = honorifics.join("|");
        let pattern = format!(r"(?i)(?P<speaker>(?:{prefix})[^:\n]{{0,50}}):");
        Self::new("honorific-inline", &pattern)
    }

    /// Synopsis PDFs: `SHRI `, `SHRIMATI `, `THE MINISTER` or `ADV.` opening a
    /// line, label runs to the first colon.
    pub fn synopsis_line() -> Result<Self> {
        Self::new(
            "synopsis-line",
            r"(?m)^(?P<speaker>(?:SHRI |SHRIMATI |THE MINISTER|ADV\.)[^:]{0,300}?):",
        )
    }
}
