// src/core/sanitize.rs
use std::sync::LazyLock;

use regex::Regex;

static HYPHEN_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w)-\s*\n\s*(\w)").expect("static regex"));
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("static regex"));

/// Collapse every whitespace run to one space and trim the ends.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// File stem safe on every platform. Falls back to `fallback` when nothing survives.
pub fn sanitize_file_stem(name: &str, fallback: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_alphanumeric() { out.push(ch); last_us = false; }
        else if ch.is_whitespace() { if !last_us { out.push('_'); last_us = true; } }
        else if ch=='-' || ch=='_' || ch=='+' { if !(last_us && ch=='_') { out.push(ch); } last_us = ch=='_'; }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { s!(fallback) } else { out }
}

/// Remove `[ ... ]` footnote markers (e.g. `[12]`, `[a]`, `[citation needed]`).
/// Greedy within each bracket pair, no nesting.
pub fn strip_brackets(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_bracket = false;
    for ch in s.chars() {
        match ch {
            '[' => in_bracket = true,
            ']' => in_bracket = false,
            _ if !in_bracket => out.push(ch),
            _ => {}
        }
    }
    out.trim().to_string()
}

/// Join words split across a line break: `legis-\n lation` → `legislation`.
pub fn fix_hyphenation(text: &str) -> String {
    HYPHEN_BREAK.replace_all(text, "${1}${2}").into_owned()
}

/// Speaker label: one line, single spaces, no leading/trailing `*`, `-` or blanks.
pub fn clean_speaker(s: &str) -> String {
    normalize_ws(s)
        .trim_matches(|c| c == '*' || c == ' ' || c == '-')
        .to_string()
}

/// Speech body. Without `preserve_paragraphs` everything collapses onto one line;
/// with it, blank-line breaks survive as `\n\n` and single line breaks become spaces.
pub fn clean_speech(s: &str, preserve_paragraphs: bool) -> String {
    let s = s.trim().replace("\r\n", "\n").replace('\r', "\n");
    if !preserve_paragraphs {
        return normalize_ws(&s);
    }
    PARAGRAPH_BREAK
        .split(&s)
        .map(normalize_ws)
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn contains_devanagari(s: &str) -> bool {
    s.chars().any(|c| ('\u{0900}'..='\u{097F}').contains(&c))
}

pub fn word_count(s: &str) -> usize {
    s.split_whitespace().count()
}
