//! Compiled regex patterns for navigation and field extraction.
//!
//! All patterns are compiled once at first use via `LazyLock`.
//! Patterns are grouped by the stage of the pipeline that uses them.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// URL Shapes
// =============================================================================

/// Info page: describes a movie and links to its script.
/// Spaces may arrive raw or percent-encoded.
pub static INFO_PAGE_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)/Movie(?:\s|%20)+Scripts/.+Script\.html$").expect("INFO_PAGE_PATH regex")
});

/// Canonical script page.
pub static SCRIPT_PAGE_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)/scripts/.+\.html$").expect("SCRIPT_PAGE_PATH regex"));

/// Link to a PDF document, with or without a query string.
pub static PDF_HREF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.pdf($|\?)").expect("PDF_HREF regex"));

// =============================================================================
// Navigation Anchors
// =============================================================================

/// `Read "Title" Script` style anchor label.
pub static READ_SCRIPT_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Read\s+.*Script").expect("READ_SCRIPT_LABEL regex"));

/// Looser anchor label used when no `Read ... Script` link exists.
pub static READ_OR_HTML_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(Read|HTML)\b").expect("READ_OR_HTML_LABEL regex"));

/// Label of a link that may lead to the script text from a script page.
pub static FOLLOW_UP_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(read|html|script)").expect("FOLLOW_UP_LABEL regex"));

// =============================================================================
// Header (<title>) Alternatives
// =============================================================================

/// Header alternatives, most specific first.
///
/// Each exposes a `title` group and an optional `writers` group.
pub static HEADER_ALTERNATIVES: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(
            r#"(?i)Read\s+(?:the\s+)?[“"'`]?(?P<title>.+?)[”"'`]?\s+(?:Script|Screenplay)\b(?:\s*-\s*by\s*(?P<writers>.+))?$"#,
        )
        .expect("HEADER_READ_SCRIPT regex"),
        Regex::new(
            r#"(?i)Read\s+(?:the\s+)?[“"'`]?(?P<title>.+?)[”"'`]?\s+(?:Script|Screenplay)\s+by\s+(?P<writers>.+)$"#,
        )
        .expect("HEADER_SCREENPLAY_BY regex"),
        Regex::new(r"(?i)^(?P<title>.+?)\s*-\s*by\s*(?P<writers>.+)$").expect("HEADER_DASH_BY regex"),
    ]
});

/// Header fallback: text up to a ` | ` site separator.
pub static HEADER_FALLBACK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[“"'`]?(?P<title>.+?)[”"'`]?(?:\s+\|\s+|$)"#).expect("HEADER_FALLBACK regex")
});

// =============================================================================
// Labels
// =============================================================================

/// `Genres:` label text.
pub static GENRES_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bGenres\s*:\s*").expect("GENRES_LABEL regex"));

/// `Writer:` / `Writers:` label text.
pub static WRITERS_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bWriters?\s*:\s*").expect("WRITERS_LABEL regex"));

/// Bold element holding only the writers label.
pub static WRITERS_BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^writers?\s*:?$").expect("WRITERS_BOLD regex"));

/// Label prefix at the start of a writers box.
pub static WRITERS_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^writers?\s*:\s*").expect("WRITERS_PREFIX regex"));

/// Words that mark a writers-box fragment as page chrome.
pub static WRITER_NOISE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)genres|read|script").expect("WRITER_NOISE regex"));

/// Attribution near the top of a script. The names are the rest of the
/// label's line, or the next non-blank line when the label stands alone.
pub static CREDIT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^[ \t]*(?:screenplay[ \t]+by|written[ \t]+by)[ \t]*[:\-]?\s*(?P<names>\S.*)$")
        .expect("CREDIT_LINE regex")
});

/// Separators between names: `&`, `,` or ` and `.
pub static NAME_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s*(?:&|,|\sand\s)\s*").expect("NAME_SEPARATOR regex"));

/// Draft description such as "1998 Draft" or "2001-04 Revision".
pub static DRAFT_INFO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b\d{4}(?:-\d{2})?\s*(?:Draft|Final|Revision|Rev(?:ision)?)\b")
        .expect("DRAFT_INFO regex")
});

// =============================================================================
// Script Containers
// =============================================================================

/// Class token of the canonical script container.
pub static SCRIPT_TEXT_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bscrtext\b").expect("SCRIPT_TEXT_CLASS regex"));

/// Id of an alternative script container.
pub static ALT_CONTAINER_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)screenplay|script").expect("ALT_CONTAINER_ID regex"));

/// Class of an alternative script container.
pub static ALT_CONTAINER_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)screenplay|script|content").expect("ALT_CONTAINER_CLASS regex")
});

/// Class of an area that may hold a link to the script.
pub static CONTENT_AREA_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)scrtext|content|main").expect("CONTENT_AREA_CLASS regex"));

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Matches runs of whitespace.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex"));

/// Matches three or more consecutive newlines.
pub static MULTIPLE_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("MULTIPLE_NEWLINES regex"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_page_path_accepts_encoded_spaces() {
        assert!(INFO_PAGE_PATH.is_match("https://imsdb.com/Movie Scripts/Fight Club Script.html"));
        assert!(INFO_PAGE_PATH.is_match("https://imsdb.com/Movie%20Scripts/Fight%20Club%20Script.html"));
        assert!(!INFO_PAGE_PATH.is_match("https://imsdb.com/scripts/Fight-Club.html"));
    }

    #[test]
    fn name_separator_splits_on_and() {
        let parts: Vec<&str> = NAME_SEPARATOR.split("Jim Uhls and Chuck Palahniuk").collect();
        assert_eq!(parts, vec!["Jim Uhls", "Chuck Palahniuk"]);
    }

    #[test]
    fn name_separator_keeps_names_containing_and() {
        let parts: Vec<&str> = NAME_SEPARATOR.split("Alexander Payne, Sandy Anderson").collect();
        assert_eq!(parts, vec!["Alexander Payne", "Sandy Anderson"]);
    }

    #[test]
    fn draft_info_matches_year_and_kind() {
        let m = DRAFT_INFO.find("Final Draft -- 1998 Draft by the writer");
        assert_eq!(m.map(|m| m.as_str()), Some("1998 Draft"));
    }
}
