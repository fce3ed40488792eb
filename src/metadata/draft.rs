//! Draft description ("1998 Draft", "2001-04 Revision").

use dom_query::Document;

use crate::dom;
use crate::patterns::DRAFT_INFO;

/// Lines of page text searched for a draft description.
pub const DRAFT_SCAN_LINES: usize = 300;

/// First draft description among the opening lines of the page text.
///
/// Returns an empty string when none is found.
#[must_use]
pub fn extract_draft_info(doc: &Document) -> String {
    let page = dom::page_text(doc);
    let head = page.lines().take(DRAFT_SCAN_LINES).collect::<Vec<_>>().join(" ");

    DRAFT_INFO
        .find(&head)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
