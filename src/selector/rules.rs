//! Element rules for script-archive pages.
//!
//! Each rule answers one structural question about a single element.

use dom_query::Selection;

use crate::dom;
use crate::patterns::{
    ALT_CONTAINER_CLASS, ALT_CONTAINER_ID, CONTENT_AREA_CLASS, PDF_HREF, SCRIPT_TEXT_CLASS,
    WRITERS_BOLD,
};

fn is_one_of_tags(sel: &Selection, tags: &[&str]) -> bool {
    dom::tag_name(sel).is_some_and(|t| tags.contains(&t.as_str()))
}

fn href_contains(sel: &Selection, needle: &str) -> bool {
    is_one_of_tags(sel, &["a"]) && sel.attr("href").is_some_and(|h| h.contains(needle))
}

fn bold_text(sel: &Selection) -> Option<String> {
    is_one_of_tags(sel, &["b", "strong"]).then(|| dom::text_content(sel).trim().to_string())
}

// ============================================================
// LABELS
// ============================================================

/// `<b>`/`<strong>` whose text starts with "genres".
#[must_use]
pub fn genres_bold_label(sel: &Selection) -> bool {
    bold_text(sel).is_some_and(|t| t.to_lowercase().starts_with("genres"))
}

/// `<b>`/`<strong>` holding only a "Writer(s):" label.
#[must_use]
pub fn writers_bold_label(sel: &Selection) -> bool {
    bold_text(sel).is_some_and(|t| WRITERS_BOLD.is_match(&t))
}

// ============================================================
// LINKS
// ============================================================

/// Link to a writer profile.
#[must_use]
pub fn writer_link(sel: &Selection) -> bool {
    href_contains(sel, "/writer/")
}

/// Link to a genre listing.
#[must_use]
pub fn genre_link(sel: &Selection) -> bool {
    href_contains(sel, "/genre/")
}

/// Link to a PDF document.
#[must_use]
pub fn pdf_link(sel: &Selection) -> bool {
    is_one_of_tags(sel, &["a"]) && sel.attr("href").is_some_and(|h| PDF_HREF.is_match(&h))
}

// ============================================================
// CONTAINERS
// ============================================================

/// Canonical script container: `td`/`div` with class `scrtext`.
#[must_use]
pub fn script_text_container(sel: &Selection) -> bool {
    is_one_of_tags(sel, &["td", "div"]) && dom::attr_matches(sel, "class", &SCRIPT_TEXT_CLASS)
}

/// `div` whose id names a screenplay or script.
#[must_use]
pub fn alt_container_by_id(sel: &Selection) -> bool {
    is_one_of_tags(sel, &["div"]) && dom::attr_matches(sel, "id", &ALT_CONTAINER_ID)
}

/// `div` whose class names a screenplay, script or content block.
#[must_use]
pub fn alt_container_by_class(sel: &Selection) -> bool {
    is_one_of_tags(sel, &["div"]) && dom::attr_matches(sel, "class", &ALT_CONTAINER_CLASS)
}

/// `div`/`td` likely to hold the page's main content.
#[must_use]
pub fn content_area(sel: &Selection) -> bool {
    is_one_of_tags(sel, &["div", "td"]) && dom::attr_matches(sel, "class", &CONTENT_AREA_CLASS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::{query, query_all};

    #[test]
    fn bold_labels_are_recognised() {
        let doc = dom::parse("<p><b>Genres</b><strong> Writers : </strong><b>Writers of note</b></p>");
        let root = doc.select("p");

        assert_eq!(query_all(&root, genres_bold_label).len(), 1);
        assert_eq!(query_all(&root, writers_bold_label).len(), 1);
    }

    #[test]
    fn link_rules_check_href() {
        let doc = dom::parse(
            r#"<div><a href="/writer.php?w=Jim">x</a><a href="/writer/Jim">Jim</a>
            <a href="/genre/Drama">Drama</a><a href="/files/a.PDF?dl=1">pdf</a></div>"#,
        );
        let root = doc.select("div");

        assert_eq!(query_all(&root, writer_link).len(), 1);
        assert_eq!(query_all(&root, genre_link).len(), 1);
        assert_eq!(query_all(&root, pdf_link).len(), 1);
    }

    #[test]
    fn script_container_needs_scrtext_class() {
        let doc = dom::parse(r#"<table><tr><td class="nav">a</td><td class="scrtext">b</td></tr></table>"#);
        let found = query(&doc.select("table"), script_text_container);
        assert_eq!(found.map(|s| dom::text_content(&s)), Some("b".to_string()));
    }

    #[test]
    fn content_area_ignores_spans() {
        let doc = dom::parse(r#"<body><span class="main">a</span><div class="main-col">b</div></body>"#);
        assert_eq!(query_all(&doc.select("body"), content_area).len(), 1);
    }
}
