//! Title and writers from the page header.
//!
//! Script pages carry their best metadata in `<title>`, in shapes such as
//! `Read "Fight Club" Script - by Jim Uhls` or `Heat - by Michael Mann`.
//! The parser tries the known shapes in order and never fails: an
//! unrecognised header degrades to "the whole header is the title".

use dom_query::Document;

use crate::dom;
use crate::patterns::{HEADER_ALTERNATIVES, HEADER_FALLBACK};
use crate::selector::{first_match, Outcome};
use crate::text::{split_names, trim_quotes};

/// Title and writers read from a header string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title, empty when the header is empty.
    pub title: String,
    /// Writers named in the header, in header order.
    pub writers: Vec<String>,
}

/// Text of the document's `<title>` element, trimmed.
#[must_use]
pub fn header_text(doc: &Document) -> String {
    doc.select("title")
        .nodes()
        .first()
        .map(|node| dom::text_content(&dom::Selection::from(*node)).trim().to_string())
        .unwrap_or_default()
}

/// Extract title and writers from the document's `<title>`.
#[must_use]
pub fn extract_header(doc: &Document) -> HeaderInfo {
    parse_header(&header_text(doc))
}

/// Extract title and writers from a header string.
///
/// # Example
///
/// ```rust
/// use rs_screenplay::metadata::header::parse_header;
///
/// let info = parse_header(r#"Read "Fight Club" Script - by Jim Uhls & Chuck Palahniuk"#);
/// assert_eq!(info.title, "Fight Club");
/// assert_eq!(info.writers, vec!["Jim Uhls", "Chuck Palahniuk"]);
/// ```
#[must_use]
pub fn parse_header(header: &str) -> HeaderInfo {
    let header = header.trim();
    if header.is_empty() {
        return HeaderInfo::default();
    }

    const STRATEGIES: [fn(&str) -> Outcome<HeaderInfo>; 2] = [known_shapes, site_separator];

    match first_match(header, &STRATEGIES) {
        Outcome::Matched(info) => info,
        Outcome::NoMatch => HeaderInfo {
            title: header.to_string(),
            writers: Vec::new(),
        },
    }
}

/// The `Read ... Script`, `... Screenplay by ...` and `... - by ...` shapes.
fn known_shapes(header: &str) -> Outcome<HeaderInfo> {
    for pattern in HEADER_ALTERNATIVES.iter() {
        let Some(caps) = pattern.captures(header) else {
            continue;
        };
        let title = caps
            .name("title")
            .map(|m| trim_quotes(m.as_str()).to_string())
            .unwrap_or_default();
        let writers = caps
            .name("writers")
            .map(|m| split_names(m.as_str()))
            .unwrap_or_default();
        return Outcome::Matched(HeaderInfo { title, writers });
    }
    Outcome::NoMatch
}

/// Anything else: the text before a ` | ` site suffix.
fn site_separator(header: &str) -> Outcome<HeaderInfo> {
    let title = HEADER_FALLBACK
        .captures(header)
        .and_then(|caps| caps.name("title"))
        .map(|m| trim_quotes(m.as_str()).to_string())
        .filter(|t| !t.is_empty());

    Outcome::from_option(title.map(|title| HeaderInfo {
        title,
        writers: Vec::new(),
    }))
}
