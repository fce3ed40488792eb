//! Text normalization helpers shared by the extractors.

use crate::patterns::{MULTIPLE_NEWLINES, NAME_SEPARATOR, WHITESPACE_NORMALIZE};

/// Quote-like characters trimmed from titles.
pub const QUOTE_CHARS: &[char] = &['"', '\'', '`', '‘', '’', '“', '”'];

/// Canonicalize line endings to `\n` and strip trailing whitespace per line.
///
/// # Example
///
/// ```rust
/// use rs_screenplay::text::clean_text;
///
/// assert_eq!(clean_text("FADE IN:  \r\nINT. HOUSE\t\r"), "FADE IN:\nINT. HOUSE\n");
/// ```
#[must_use]
pub fn clean_text(text: &str) -> String {
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");
    unified
        .split('\n')
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Collapse runs of three or more newlines into a single blank line.
#[must_use]
pub fn collapse_blank_runs(text: &str) -> String {
    MULTIPLE_NEWLINES.replace_all(text, "\n\n").into_owned()
}

/// Collapse whitespace runs to single spaces and trim.
#[must_use]
pub fn squash_whitespace(text: &str) -> String {
    WHITESPACE_NORMALIZE.replace_all(text, " ").trim().to_string()
}

/// Trim whitespace and quote-like characters from both ends.
#[must_use]
pub fn trim_quotes(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || QUOTE_CHARS.contains(&c))
}

/// Split a list of names on `&`, `,` or ` and `.
///
/// Parts are trimmed; empty parts are dropped.
#[must_use]
pub fn split_names(text: &str) -> Vec<String> {
    NAME_SEPARATOR
        .split(text)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Sort and deduplicate names in place.
pub fn sort_dedup(names: &mut Vec<String>) {
    names.sort();
    names.dedup();
}
