//! # rs-screenplay
//!
//! Movie-script extraction from script-archive pages (IMSDb and sites shaped
//! like it).
//!
//! Pages on such sites are hand-built and inconsistent: the script may sit in
//! a `<pre>` block, a loosely named container, behind a second "read" link or
//! only in a PDF. Every field is found by an ordered list of heuristics where
//! the first to recognise the page wins, and a miss degrades to an empty
//! value instead of an error.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_screenplay::extract;
//! use url::Url;
//!
//! let html = r#"<html><head><title>Read "Heat" Script - by Michael Mann</title></head>
//! <body><table><tr><td class="scrtext"><pre>HEAT
//!
//! FADE IN:</pre></td></tr></table></body></html>"#;
//!
//! let url = Url::parse("https://imsdb.com/scripts/Heat.html")?;
//! let record = extract(html, &url);
//!
//! assert_eq!(record.title, "Heat");
//! assert_eq!(record.writers, vec!["Michael Mann"]);
//! assert!(record.script_text.ends_with("FADE IN:"));
//! # Ok::<(), url::ParseError>(())
//! ```
//!
//! ## Harvesting
//!
//! [`runner::run`] crawls the site index (or an explicit URL list), follows
//! info pages to their script pages, and appends one CSV row per script via
//! [`sink::CsvSink`]. The `harvest` binary wraps it.

mod error;
mod options;
mod patterns;
mod result;

/// Text normalization shared by the extractors.
pub mod text;

/// DOM helpers over `dom_query`.
pub mod dom;

/// Element rules and the first-match strategy chain.
pub mod selector;

/// Header, genre, writer and draft extraction.
pub mod metadata;

/// Script body extraction.
pub mod extractor;

/// Info page to script page navigation.
pub mod navigation;

/// Record assembly for one target.
pub mod extract;

/// URL validation, resolution and page shapes.
pub mod url_utils;

/// Character decoding of fetched bodies.
pub mod encoding;

/// Fetcher trait and HTTP implementation.
pub mod net;

/// CSV output and resume support.
pub mod sink;

/// Index crawling.
pub mod crawl;

/// Sequential harvest loop.
pub mod runner;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::{Options, DEFAULT_BASE_URL, DEFAULT_USER_AGENT, GENRE_MENU};
pub use result::{ScriptBody, ScriptRecord, UnsupportedReason};

/// Extracts a record from a script page using default options.
///
/// No network access: a follow-up link on the page is not fetched.
#[must_use]
pub fn extract(html: &str, url: &url::Url) -> ScriptRecord {
    extract_with_options(html, url, &Options::default())
}

/// Extracts a record from a script page with custom options.
///
/// # Example
///
/// ```rust
/// use rs_screenplay::{extract_with_options, Options};
/// use url::Url;
///
/// let options = Options {
///     genre_menu: ["Drama".to_string()].into_iter().collect(),
///     ..Options::default()
/// };
/// let html = r#"<b>Genres</b> <a href="/genre/Drama">Drama</a><pre>TEXT</pre>"#;
/// let url = Url::parse("https://imsdb.com/scripts/A.html")?;
///
/// // With a one-genre menu, a lone "Drama" link looks like the menu.
/// assert!(extract_with_options(html, &url, &options).genres.is_empty());
/// # Ok::<(), url::ParseError>(())
/// ```
#[must_use]
pub fn extract_with_options(html: &str, url: &url::Url, options: &Options) -> ScriptRecord {
    extract::extract_record(html, url, options)
}

/// Extracts a record from raw page bytes, detecting the character encoding.
#[must_use]
pub fn extract_bytes(html: &[u8], url: &url::Url) -> ScriptRecord {
    extract(&encoding::decode_body(html, None), url)
}
