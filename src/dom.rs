//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate giving the extractors a small,
//! consistent vocabulary: attribute access, sibling navigation, anchor lookup
//! and text joining with a separator.

use dom_query::NodeRef;
use regex::Regex;

// Re-export core types for external use
pub use dom_query::{Document, Selection};

/// Elements whose text is never part of the visible page.
const INVISIBLE_TAGS: &[&str] = &["script", "style", "noscript", "template", "head"];

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Attribute Operations ===

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Whether an attribute matches a pattern.
///
/// `class` is tested token by token as well as as a whole, so `\bscrtext\b`
/// matches `class="pad scrtext"`.
#[must_use]
pub fn attr_matches(sel: &Selection, name: &str, pattern: &Regex) -> bool {
    let Some(value) = sel.attr(name) else {
        return false;
    };
    if pattern.is_match(&value) {
        return true;
    }
    name == "class" && value.split_whitespace().any(|token| pattern.is_match(token))
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(NodeRef::node_name)
        .map(|t| t.to_ascii_lowercase())
}

// === Tree Navigation ===

/// Get next element sibling (skipping text nodes)
#[must_use]
pub fn next_element_sibling<'a>(sel: &Selection<'a>) -> Option<Selection<'a>> {
    sel.nodes()
        .first()
        .and_then(NodeRef::next_element_sibling)
        .map(Selection::from)
}

/// Parent element of a node, if it has one.
#[must_use]
pub fn parent_element<'a>(node: &NodeRef<'a>) -> Option<Selection<'a>> {
    node.parent()
        .filter(NodeRef::is_element)
        .map(Selection::from)
}

/// Split a multi-node selection into one selection per element.
#[must_use]
pub fn each<'a>(sel: &Selection<'a>) -> Vec<Selection<'a>> {
    sel.nodes().iter().map(|node| Selection::from(*node)).collect()
}

// === Querying ===

/// All anchors with an `href` under `sel`, in document order.
#[must_use]
pub fn anchors<'a>(sel: &Selection<'a>) -> Vec<Selection<'a>> {
    each(&sel.select("a[href]"))
}

/// First text node under `root` matching `pattern`, as its parent element.
///
/// Mirrors "find the label string, then look at the element holding it".
#[must_use]
pub fn find_text_parent<'a>(root: &Selection<'a>, pattern: &Regex) -> Option<Selection<'a>> {
    let root_node = root.nodes().first()?;
    root_node
        .descendants()
        .into_iter()
        .filter(NodeRef::is_text)
        .filter(|node| !inside_invisible(node))
        .find(|node| pattern.is_match(&node.text()))
        .and_then(|node| parent_element(&node))
}

// === Text Content ===

/// Get all text content of node and descendants, unseparated.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> String {
    sel.text().to_string()
}

/// Join the visible text nodes under `sel` with `separator`.
///
/// With `strip`, each fragment is trimmed and blank fragments are dropped.
/// Script, style and similar invisible elements are skipped.
#[must_use]
pub fn joined_text(sel: &Selection, separator: &str, strip: bool) -> String {
    let mut parts: Vec<String> = Vec::new();

    for root in sel.nodes() {
        for node in root.descendants() {
            if !node.is_text() || inside_invisible(&node) {
                continue;
            }
            let text = node.text();
            if strip {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    parts.push(trimmed.to_string());
                }
            } else {
                parts.push(text.to_string());
            }
        }
    }

    parts.join(separator)
}

/// Visible text of a whole document, text nodes joined by newlines.
#[must_use]
pub fn page_text(doc: &Document) -> String {
    joined_text(&doc.select("html"), "\n", false)
}

fn inside_invisible(node: &NodeRef) -> bool {
    let mut current = node.parent();
    while let Some(parent) = current {
        if let Some(name) = parent.node_name() {
            if INVISIBLE_TAGS.iter().any(|t| name.eq_ignore_ascii_case(t)) {
                return true;
            }
        }
        current = parent.parent();
    }
    false
}
