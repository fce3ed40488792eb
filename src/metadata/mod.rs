//! Metadata extraction module.
//!
//! Fields describing a script page apart from the script itself: the header
//! title and writers, genre tags, writer names and the draft description.

pub mod draft;
pub mod genres;
pub mod header;
pub mod writers;

pub use draft::extract_draft_info;
pub use genres::extract_genres;
pub use header::{extract_header, parse_header, HeaderInfo};
pub use writers::extract_writers;

use crate::text::{squash_whitespace, trim_quotes};

/// Lines of script text inspected when the header gave no title.
pub const TITLE_SCAN_LINES: usize = 10;

/// Guess a title from the opening lines of a script.
///
/// Among the first ten lines, trimmed and non-empty, the longest all-caps
/// line containing a letter wins; otherwise the first line.
#[must_use]
pub fn title_from_script(script: &str) -> Option<String> {
    let lines: Vec<&str> = script
        .lines()
        .take(TITLE_SCAN_LINES)
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let shouting = lines
        .iter()
        .filter(|l| l.chars().any(char::is_alphabetic) && l.to_uppercase() == **l)
        .fold(None::<&str>, |best, line| match best {
            Some(b) if b.len() >= line.len() => Some(b),
            _ => Some(line),
        });

    shouting.or_else(|| lines.first().copied()).map(ToString::to_string)
}

/// Final title cleanup: collapse whitespace, drop surrounding quotes.
#[must_use]
pub fn normalize_title(title: &str) -> String {
    trim_quotes(&squash_whitespace(title)).to_string()
}
