// src/segment/segmenter.rs
use std::borrow::Cow;

use regex::Regex;
use tracing::debug;

use super::pattern::{Header, HeaderPattern};
use super::profile::Profile;
use super::SpeechSegment;
use crate::config::consts::{COVERAGE_THRESHOLD, MERGE_TOLERANCE, PREAMBLE};
use crate::config::options::SegmentOptions;
use crate::core::sanitize::{clean_speaker, clean_speech, fix_hyphenation, word_count};
use crate::error::Result;

/// Result of one `Segmenter::segment` call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Segmentation {
    pub segments: Vec<SpeechSegment>,
    /// Headers the final split used.
    pub headers: usize,
    /// Words inside speeches / words in the document (before cleaning).
    pub coverage: f64,
    pub used_fallback: bool,
}

#[derive(Clone, Debug)]
pub struct Segmenter {
    primary: Vec<HeaderPattern>,
    fallback: Vec<HeaderPattern>,
    coverage_threshold: f64,
    merge_tolerance: usize,
    fix_hyphenation: bool,
    preserve_paragraphs: bool,
    drop_empty: bool,
    reject: Option<Regex>,
}

/// Borrowed, uncleaned segment.
struct RawSegment<'a> {
    speaker: &'a str,
    speech: &'a str,
}

impl Segmenter {
    /// Primary patterns only; no fallback, no filters.
    pub fn new(primary: Vec<HeaderPattern>) -> Self {
        Self {
            primary,
            fallback: Vec::new(),
            coverage_threshold: COVERAGE_THRESHOLD,
            merge_tolerance: MERGE_TOLERANCE,
            fix_hyphenation: false,
            preserve_paragraphs: false,
            drop_empty: false,
            reject: None,
        }
    }

    pub fn with_fallback(mut self, fallback: Vec<HeaderPattern>) -> Self {
        self.fallback = fallback;
        self
    }

    /// Coverage ratio below which the fallback patterns run. 0 disables them.
    pub fn coverage_threshold(mut self, ratio: f64) -> Self {
        self.coverage_threshold = ratio;
        self
    }

    /// Fallback headers starting this close to an accepted one are duplicates.
    pub fn merge_tolerance(mut self, chars: usize) -> Self {
        self.merge_tolerance = chars;
        self
    }

    pub fn fix_hyphenation(mut self, on: bool) -> Self {
        self.fix_hyphenation = on;
        self
    }

    pub fn preserve_paragraphs(mut self, on: bool) -> Self {
        self.preserve_paragraphs = on;
        self
    }

    pub fn drop_empty(mut self, on: bool) -> Self {
        self.drop_empty = on;
        self
    }

    /// Drop segments whose cleaned speech matches `re`.
    pub fn reject(mut self, re: Regex) -> Self {
        self.reject = Some(re);
        self
    }

    pub fn for_profile(profile: Profile) -> Result<Self> {
        let seg = match profile {
            Profile::Layered => Segmenter::new(vec![HeaderPattern::honorific_line()?])
                .with_fallback(vec![HeaderPattern::uppercase_line()?])
                .fix_hyphenation(true),
            Profile::Strict => Segmenter::new(vec![HeaderPattern::honorific_inline()?])
                .coverage_threshold(0.0)
                .drop_empty(true)
                .reject(Regex::new(
                    r"(?i)\b(?:seconded by|laid on the Table|dress had said|now the House)\b",
                )?),
            Profile::Synopsis => Segmenter::new(vec![HeaderPattern::synopsis_line()?])
                .coverage_threshold(0.0)
                .drop_empty(true),
        };
        Ok(seg)
    }

    pub fn from_options(opts: &SegmentOptions) -> Result<Self> {
        let mut seg = Self::for_profile(opts.profile)?.preserve_paragraphs(opts.preserve_paragraphs);
        if let Some(t) = opts.coverage_threshold {
            seg = seg.coverage_threshold(t);
        }
        Ok(seg)
    }

    /// Primary headers, sorted by position.
    pub fn find_headers(&self, text: &str) -> Vec<Header> {
        collect(&self.primary, text, self.merge_tolerance)
    }

    pub fn segment(&self, text: &str) -> Segmentation {
        let text: Cow<str> = if self.fix_hyphenation {
            Cow::Owned(fix_hyphenation(text))
        } else {
            Cow::Borrowed(text)
        };
        if text.trim().is_empty() {
            return Segmentation::default();
        }

        let total = word_count(&text);
        let mut headers = self.find_headers(&text);
        let mut coverage = coverage_of(&split(&text, &headers), total);
        let mut used_fallback = false;

        if coverage < self.coverage_threshold && !self.fallback.is_empty() {
            let extra = collect(&self.fallback, &text, self.merge_tolerance);
            let before = headers.len();
            headers = merge_headers(&text, headers, extra, self.merge_tolerance);
            let after = coverage_of(&split(&text, &headers), total);
            debug!(
                "Segment: coverage {:.3} < {:.3}, fallback headers {} → {}, coverage now {:.3}",
                coverage, self.coverage_threshold, before, headers.len(), after
            );
            coverage = after;
            used_fallback = true;
        }

        let segments = split(&text, &headers)
            .into_iter()
            .map(|raw| {
                SpeechSegment::new(
                    clean_speaker(raw.speaker),
                    clean_speech(raw.speech, self.preserve_paragraphs),
                )
            })
            .filter(|seg| self.keep(seg))
            .collect();

        Segmentation { segments, headers: headers.len(), coverage, used_fallback }
    }

    /// Filters apply to speaker turns only; the preamble always stays.
    fn keep(&self, seg: &SpeechSegment) -> bool {
        if seg.speaker == PREAMBLE {
            return true;
        }
        if self.drop_empty && seg.speech.is_empty() {
            return false;
        }
        match &self.reject {
            Some(re) => !re.is_match(&seg.speech),
            None => true,
        }
    }
}

/// Run every pattern and fold the results into one position-sorted set.
fn collect(patterns: &[HeaderPattern], text: &str, tolerance: usize) -> Vec<Header> {
    patterns
        .iter()
        .fold(Vec::new(), |acc, p| merge_headers(text, acc, p.find(text), tolerance))
}

/// Add `extra` headers to `base`, skipping any that start within `tolerance`
/// characters of an accepted header or overlap one. Result is sorted by start.
/// Offsets are byte offsets into `text`.
pub fn merge_headers(text: &str, base: Vec<Header>, extra: Vec<Header>, tolerance: usize) -> Vec<Header> {
    let mut merged = base;
    for h in extra {
        let clash = merged.iter().any(|e| {
            char_distance(text, e.start, h.start) < tolerance || (h.start < e.end && e.start < h.end)
        });
        if !clash {
            merged.push(h);
        }
    }
    merged.sort_by_key(|h| h.start);
    merged
}

/// Characters between two byte offsets, in either order.
fn char_distance(text: &str, a: usize, b: usize) -> usize {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    text.get(lo..hi).map_or(hi - lo, |s| s.chars().count())
}

/// Cut `text` at the headers. Headers must be sorted and non-overlapping.
fn split<'a>(text: &'a str, headers: &'a [Header]) -> Vec<RawSegment<'a>> {
    let Some(first) = headers.first() else {
        return vec![RawSegment { speaker: PREAMBLE, speech: text }];
    };

    let mut out = Vec::with_capacity(headers.len() + 1);
    let preamble = text[..first.start].trim();
    if !preamble.is_empty() {
        out.push(RawSegment { speaker: PREAMBLE, speech: preamble });
    }
    for (i, h) in headers.iter().enumerate() {
        let end = headers.get(i + 1).map_or(text.len(), |next| next.start).max(h.end);
        out.push(RawSegment { speaker: &h.speaker_raw, speech: &text[h.end..end] });
    }
    out
}

fn coverage_of(segments: &[RawSegment<'_>], total_words: usize) -> f64 {
    if total_words == 0 {
        return 1.0;
    }
    let covered: usize = segments.iter().map(|s| word_count(s.speech)).sum();
    covered as f64 / total_words as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h(start: usize, end: usize) -> Header {
        Header { speaker_raw: format!("H{start}"), start, end }
    }

    #[test]
    fn merge_skips_near_and_overlapping_headers() {
        let text = "x".repeat(120);
        let base = vec![h(0, 10), h(50, 60)];
        let extra = vec![h(3, 9), h(55, 70), h(30, 40), h(100, 110)];
        let merged = merge_headers(&text, base, extra, 5);
        let starts: Vec<_> = merged.iter().map(|h| h.start).collect();
        assert_eq!(starts, vec![0, 30, 50, 100]);
    }

    #[test]
    fn merge_tolerance_counts_characters() {
        // "श्री " is 5 characters but 13 bytes.
        let text = "श्री श्री X";
        let second = "श्री ".len();
        assert_eq!(second, 13);
        let base = vec![h(0, second - 1)];
        let near = vec![h(second, second + 2)];
        assert_eq!(merge_headers(text, base.clone(), near.clone(), 6).len(), 1);
        assert_eq!(merge_headers(text, base, near, 5).len(), 2);
    }

    #[test]
    fn split_emits_preamble_then_turns() {
        let text = "Intro text\nA: one\nB: two";
        let headers = vec![
            Header { speaker_raw: s!("A"), start: 11, end: 13 },
            Header { speaker_raw: s!("B"), start: 18, end: 20 },
        ];
        let raw = split(text, &headers);
        assert_eq!(raw.len(), 3);
        assert_eq!(raw[0].speaker, PREAMBLE);
        assert_eq!(raw[0].speech, "Intro text");
        assert_eq!(raw[1].speech, " one\n");
        assert_eq!(raw[2].speech, " two");
    }

    #[test]
    fn strict_profile_drops_procedural_turns() {
        let seg = Segmenter::for_profile(Profile::Strict).unwrap();
        let text = "SHRI A: The motion was seconded by many.\nSHRI B: I support the Bill.\nSHRI C:";
        let out = seg.segment(text);
        let speakers: Vec<_> = out.segments.iter().map(|s| s.speaker.as_str()).collect();
        assert_eq!(speakers, vec!["SHRI B"]);
    }

    #[test]
    fn filters_leave_the_preamble_alone() {
        let seg = Segmenter::for_profile(Profile::Strict).unwrap();

        let out = seg.segment("The motion was seconded by the member from Goa.");
        assert_eq!(out.headers, 0);
        assert_eq!(out.segments.len(), 1);
        assert_eq!(out.segments[0].speaker, PREAMBLE);

        let out = seg.segment("Papers laid on the Table.\nSHRI A: The motion was seconded by B.");
        let speakers: Vec<_> = out.segments.iter().map(|s| s.speaker.as_str()).collect();
        assert_eq!(speakers, vec![PREAMBLE]);
    }
}
