//! Script body extraction.
//!
//! Script pages put the text in one of several container shapes. The
//! strategies below run in priority order and the first to recognise the
//! page decides the outcome:
//!
//! 1. `<pre>` blocks inside the canonical `scrtext` container
//! 2. alternative `screenplay`/`script` containers (pre blocks or long text)
//! 3. any `<pre>` on the page
//! 4. a link to the script from a content area (follow-up)
//! 5. a PDF link (unsupported)
//! 6. the whole visible page, noise included

use dom_query::{Document, Selection};
use url::Url;

use crate::dom;
use crate::patterns::FOLLOW_UP_LABEL;
use crate::result::{ScriptBody, UnsupportedReason};
use crate::selector::{first_match, query_all, rules, Outcome, Rule};
use crate::text::{clean_text, collapse_blank_runs};
use crate::url_utils;

/// Plain-text line count above which an alternative container counts as
/// holding the script.
pub const LONG_TEXT_LINES: usize = 50;

/// Separator between consecutive `<pre>` blocks.
const BLOCK_SEPARATOR: &str = "\n\n";

/// A parsed page and the URL it was fetched from.
pub struct BodyPage<'a> {
    /// Parsed page.
    pub doc: &'a Document,
    /// Page URL, base for relative links.
    pub url: &'a Url,
}

type Strategy = fn(&BodyPage) -> Outcome<ScriptBody>;

const STRATEGIES: [Strategy; 6] = [
    canonical_container,
    alternative_containers,
    any_preformatted,
    follow_up_link,
    pdf_link,
    whole_page,
];

/// Locate the script body of a page.
#[must_use]
pub fn extract_script_body(doc: &Document, url: &Url) -> ScriptBody {
    let page = BodyPage { doc, url };
    match first_match(&page, &STRATEGIES) {
        Outcome::Matched(body) => body,
        Outcome::NoMatch => ScriptBody::Text(String::new()),
    }
}

fn root<'a>(page: &BodyPage<'a>) -> Selection<'a> {
    page.doc.select("html")
}

/// Text of every `<pre>` under `scope`, blocks separated by a blank line.
fn preformatted_text(scope: &Selection) -> Option<String> {
    let blocks: Vec<String> = dom::each(&scope.select("pre"))
        .iter()
        .map(dom::text_content)
        .collect();

    if blocks.is_empty() {
        None
    } else {
        Some(clean_text(&blocks.join(BLOCK_SEPARATOR)))
    }
}

fn text_body(text: String) -> Outcome<ScriptBody> {
    Outcome::Matched(ScriptBody::Text(text))
}

/// Tier 1: `<td class="scrtext"><pre>...</pre></td>`.
fn canonical_container(page: &BodyPage) -> Outcome<ScriptBody> {
    let blocks: Vec<String> = query_all(&root(page), rules::script_text_container)
        .iter()
        .filter_map(preformatted_text)
        .collect();

    if blocks.is_empty() {
        Outcome::NoMatch
    } else {
        text_body(clean_text(&blocks.join(BLOCK_SEPARATOR)))
    }
}

/// Tier 2: `div#screenplay`, `div.script`, `div.content` and friends.
fn alternative_containers(page: &BodyPage) -> Outcome<ScriptBody> {
    const CONTAINERS: [Rule; 2] = [rules::alt_container_by_id, rules::alt_container_by_class];

    for rule in CONTAINERS {
        for container in query_all(&root(page), rule) {
            if let Some(text) = preformatted_text(&container) {
                return text_body(text);
            }

            let text = dom::joined_text(&container, "\n", true);
            if text.lines().count() > LONG_TEXT_LINES {
                return text_body(clean_text(&text));
            }
        }
    }

    Outcome::NoMatch
}

/// Tier 3: any `<pre>` anywhere.
fn any_preformatted(page: &BodyPage) -> Outcome<ScriptBody> {
    Outcome::from_option(preformatted_text(&root(page)).map(ScriptBody::Text))
}

/// Tier 4: a "read"/"html"/"script" link, or a link to a script page, inside
/// a content area.
fn follow_up_link(page: &BodyPage) -> Outcome<ScriptBody> {
    for area in query_all(&root(page), rules::content_area) {
        for link in dom::anchors(&area) {
            let href = dom::get_attribute(&link, "href").unwrap_or_default();
            let label = dom::joined_text(&link, " ", true);

            if !FOLLOW_UP_LABEL.is_match(&label) && !url_utils::is_script_page(&href) {
                continue;
            }
            if let Some(target) = url_utils::resolve(page.url, &href) {
                return Outcome::Matched(ScriptBody::FollowUp(target));
            }
        }
    }

    Outcome::NoMatch
}

/// Tier 5: the script is a PDF.
fn pdf_link(page: &BodyPage) -> Outcome<ScriptBody> {
    query_all(&root(page), rules::pdf_link)
        .iter()
        .filter_map(|link| dom::get_attribute(link, "href"))
        .find_map(|href| url_utils::resolve(page.url, &href))
        .map_or(Outcome::NoMatch, |url| {
            Outcome::Matched(ScriptBody::Unsupported {
                url,
                reason: UnsupportedReason::Pdf,
            })
        })
}

/// Tier 6: whole-page text, with long blank runs collapsed.
fn whole_page(page: &BodyPage) -> Outcome<ScriptBody> {
    text_body(collapse_blank_runs(&clean_text(&dom::page_text(page.doc))))
}
