//! Navigation from an info page to the canonical script page.
//!
//! Info pages (`/Movie Scripts/<Title> Script.html`) describe a movie and
//! link to its script with an anchor labelled `Read "<Title>" Script`. Any
//! other page is already where the script lives.

use dom_query::{Document, Selection};
use regex::Regex;
use tracing::debug;
use url::Url;

use crate::dom;
use crate::patterns::{READ_OR_HTML_LABEL, READ_SCRIPT_LABEL};
use crate::url_utils;

/// Where the script of `url` lives.
///
/// Returns `url` itself unless it is an info page with a recognisable
/// "read" link. Compare the result with `url` to know whether to hop.
///
/// # Example
///
/// ```rust
/// use rs_screenplay::navigation::resolve_script_url;
/// use url::Url;
///
/// let info = Url::parse("https://imsdb.com/Movie%20Scripts/Heat%20Script.html")?;
/// let html = r#"<a href="/scripts/Heat.html">Read "Heat" Script</a>"#;
///
/// assert_eq!(resolve_script_url(html, &info).as_str(), "https://imsdb.com/scripts/Heat.html");
/// # Ok::<(), url::ParseError>(())
/// ```
#[must_use]
pub fn resolve_script_url(html: &str, url: &Url) -> Url {
    if !url_utils::is_info_page(url.as_str()) {
        return url.clone();
    }
    resolve_in_document(&dom::parse(html), url)
}

/// As [`resolve_script_url`], for an already parsed page.
#[must_use]
pub fn resolve_in_document(doc: &Document, url: &Url) -> Url {
    if !url_utils::is_info_page(url.as_str()) {
        return url.clone();
    }

    let links = dom::anchors(&doc.select("html"));
    let target = [&*READ_SCRIPT_LABEL, &*READ_OR_HTML_LABEL]
        .into_iter()
        .find_map(|label| labelled_target(&links, label, url));

    match target {
        Some(target) => {
            debug!(from = %url, to = %target, "info page links to script");
            target
        }
        None => {
            debug!(url = %url, "info page without a read link");
            url.clone()
        }
    }
}

/// Absolute target of the first anchor whose visible text matches `label`.
fn labelled_target(links: &[Selection], label: &Regex, base: &Url) -> Option<Url> {
    links
        .iter()
        .filter(|link| label.is_match(&dom::joined_text(link, " ", true)))
        .filter_map(|link| dom::get_attribute(link, "href"))
        .find_map(|href| url_utils::resolve(base, &href))
}
