//! Record assembly.
//!
//! One target URL moves through these stages:
//!
//! ```text
//! fetched -> navigation resolved -> fields extracted -> [follow-up] -> writers resolved -> finalized
//! ```
//!
//! A failed fetch at any stage aborts the target. Everything else degrades to
//! empty fields; a record without script text is finalized anyway and left
//! for the caller to discard.

use dom_query::Document;
use tracing::{debug, info};
use url::Url;

use crate::dom;
use crate::error::Result;
use crate::extractor::extract_script_body;
use crate::metadata::{
    extract_draft_info, extract_genres, extract_header, extract_writers, normalize_title,
    title_from_script, HeaderInfo,
};
use crate::navigation;
use crate::net::Fetcher;
use crate::options::Options;
use crate::result::{ScriptBody, ScriptRecord};

/// Fields read from a single page, before any follow-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFields {
    /// Title and writers from `<title>`.
    pub header: HeaderInfo,
    /// Genres of this movie.
    pub genres: Vec<String>,
    /// Draft description.
    pub draft_info: String,
    /// Script body outcome.
    pub body: ScriptBody,
}

/// Read every single-page field of `doc`.
#[must_use]
pub fn extract_page(doc: &Document, url: &Url, options: &Options) -> PageFields {
    PageFields {
        header: extract_header(doc),
        genres: extract_genres(doc, &options.genre_menu),
        draft_info: extract_draft_info(doc),
        body: extract_script_body(doc, url),
    }
}

/// Build a record from a script page without touching the network.
///
/// A follow-up link found on the page is not fetched, so such pages yield a
/// record with empty script text.
#[must_use]
pub fn extract_record(html: &str, url: &Url, options: &Options) -> ScriptRecord {
    let doc = dom::parse(html);
    let fields = extract_page(&doc, url, options);
    let text = match &fields.body {
        ScriptBody::Text(text) => text.clone(),
        ScriptBody::FollowUp(next) => {
            debug!(url = %url, next = %next, "follow-up link not fetched offline");
            String::new()
        }
        ScriptBody::Unsupported { url: target, reason } => {
            info!(url = %url, target = %target, %reason, "unsupported script");
            String::new()
        }
    };
    finalize(&doc, fields.header, fields.genres, fields.draft_info, text, url.clone())
}

/// Build a record from a script page, fetching at most one follow-up page.
///
/// # Errors
///
/// Returns the fetch error when the follow-up page cannot be fetched or is
/// not served with status 200.
pub fn assemble(
    fetcher: &dyn Fetcher,
    html: &str,
    url: &Url,
    options: &Options,
) -> Result<ScriptRecord> {
    let doc = dom::parse(html);
    let PageFields {
        mut header,
        genres,
        draft_info,
        body,
    } = extract_page(&doc, url, options);

    let mut source_url = url.clone();
    let text = match body {
        ScriptBody::Text(text) => text,
        ScriptBody::FollowUp(next) if options.follow_links && next != *url => {
            let followed = follow(fetcher, &next)?;
            if header.title.is_empty() {
                header.title = followed.title;
            }
            match followed.text {
                Some(text) => {
                    source_url = next;
                    text
                }
                None => String::new(),
            }
        }
        ScriptBody::FollowUp(next) => {
            debug!(url = %url, next = %next, "follow-up skipped");
            String::new()
        }
        ScriptBody::Unsupported { url: target, reason } => {
            info!(url = %url, target = %target, %reason, "unsupported script");
            String::new()
        }
    };

    Ok(finalize(&doc, header, genres, draft_info, text, source_url))
}

/// Fetch `url`, resolve an info page to its script page, and assemble.
///
/// Takes at most one navigation hop and then at most one follow-up hop.
///
/// # Errors
///
/// Returns the first fetch error; the target should then be skipped.
pub fn harvest_target(fetcher: &dyn Fetcher, url: &Url, options: &Options) -> Result<ScriptRecord> {
    let mut page = fetcher.fetch_ok(url)?;

    let script_url = navigation::resolve_script_url(&page.body, url);
    if script_url != *url {
        debug!(from = %url, to = %script_url, "navigation hop");
        page = fetcher.fetch_ok(&script_url)?;
    }

    assemble(fetcher, &page.body, &script_url, options)
}

/// What a follow-up page contributed.
struct FollowedPage {
    title: String,
    text: Option<String>,
}

fn follow(fetcher: &dyn Fetcher, url: &Url) -> Result<FollowedPage> {
    debug!(url = %url, "following script link");
    let page = fetcher.fetch_ok(url)?;
    let doc = dom::parse(&page.body);

    // A second follow-up link is not taken.
    let text = extract_script_body(&doc, url)
        .text()
        .map(ToString::to_string);

    Ok(FollowedPage {
        title: extract_header(&doc).title,
        text,
    })
}

fn finalize(
    doc: &Document,
    header: HeaderInfo,
    genres: Vec<String>,
    draft_info: String,
    script_text: String,
    source_url: Url,
) -> ScriptRecord {
    let mut writers = extract_writers(doc, Some(&script_text));
    if writers.is_empty() {
        writers = header.writers;
    }

    let title = if header.title.is_empty() {
        title_from_script(&script_text).unwrap_or_default()
    } else {
        header.title
    };

    ScriptRecord {
        source_url: source_url.to_string(),
        title: normalize_title(&title),
        writers,
        genres,
        draft_info,
        script_text,
    }
}
