// src/segment/mod.rs
//! # Transcript segmentation
//!
//! Turns raw debate text into an ordered list of speaker → speech records.
//!
//! A [`Segmenter`] is a set of **header patterns** (regexes that find the
//! "SHRI SO-AND-SO (Constituency):" lines introducing each speaker) plus a
//! **coverage threshold**. The primary patterns are tried first; when the
//! speeches they produce cover too little of the document, the fallback
//! patterns are merged in by position and the text is split again.
//!
//! The header rules of the two transcript sources disagree, so each rule set
//! is a [`Profile`] rather than one hard-coded heuristic.
//!
//! ```text
//! text ─► primary headers ─► split ─► coverage < threshold? ─► + fallback headers ─► split
//!                                                   └──────────────► clean + tag language
//! ```

mod pattern;
mod profile;
mod segmenter;

pub use pattern::{Header, HeaderPattern};
pub use profile::{OutputLayout, Profile};
pub use segmenter::{Segmentation, Segmenter, merge_headers};

use std::fmt;
use std::str::FromStr;

use crate::core::sanitize::{contains_devanagari, word_count};

pub const COLUMNS: [&str; 4] = ["Speaker", "Speech", "Words_in_Speech", "Language"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Language {
    En,
    Hi,
}

impl Language {
    /// `Hi` as soon as one Devanagari code point shows up.
    pub fn detect(text: &str) -> Self {
        if contains_devanagari(text) { Language::Hi } else { Language::En }
    }

    pub fn as_str(&self) -> &'static str {
        match self { Language::En => "en", Language::Hi => "hi" }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "en" => Ok(Language::En),
            "hi" => Ok(Language::Hi),
            other => Err(format!("Unknown language tag: {other}")),
        }
    }
}

/// One speaker's turn, cleaned and tagged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpeechSegment {
    pub speaker: String,
    pub speech: String,
    pub words: usize,
    pub language: Language,
}

impl SpeechSegment {
    /// Derives word count and language from `speech`.
    pub fn new(speaker: String, speech: String) -> Self {
        let words = word_count(&speech);
        let language = Language::detect(&speech);
        Self { speaker, speech, words, language }
    }

    /// Column names; `full` adds word count and language.
    pub fn headers(full: bool) -> Vec<String> {
        let n = if full { 4 } else { 2 };
        COLUMNS[..n].iter().map(|c| s!(*c)).collect()
    }

    pub fn to_row(&self, full: bool) -> Vec<String> {
        let mut row = vec![self.speaker.clone(), self.speech.clone()];
        if full {
            row.push(self.words.to_string());
            row.push(s!(self.language.as_str()));
        }
        row
    }
}
