//! Plain-text helpers: markdown stripping, reading time, excerpts

use lazy_static::lazy_static;
use regex::Regex;

/// Words per minute used for reading time
pub const WORDS_PER_MINUTE: usize = 200;

lazy_static! {
    static ref HEADING_MARKER_RE: Regex = Regex::new(r"(?m)^[ \t]*#+[ \t]+").unwrap();
    static ref LINK_RE: Regex = Regex::new(r"\[([^\]]+)\]\([^)]+\)").unwrap();
    static ref EMPHASIS_RE: Regex = Regex::new(r"[*_`~]").unwrap();
    static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").unwrap();
}

/// Lossy markdown-to-text used for excerpts and word counts
pub fn strip_markdown(markdown: &str) -> String {
    let text = HEADING_MARKER_RE.replace_all(markdown, "");
    let text = LINK_RE.replace_all(&text, "$1");
    let text = EMPHASIS_RE.replace_all(&text, "");
    let text = WHITESPACE_RE.replace_all(&text, " ");
    text.trim().to_string()
}

/// Whitespace-delimited word count
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Estimated reading time such as "1 min" or "4 min"; never less than a minute
pub fn reading_time(text: &str) -> String {
    let minutes = word_count(text).div_ceil(WORDS_PER_MINUTE).max(1);
    format!("{} min", minutes)
}

/// First `limit` characters, with "..." appended when the text was cut
pub fn excerpt(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
