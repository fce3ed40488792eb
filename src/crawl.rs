//! Target discovery.
//!
//! Index pages list every script as either a direct `/scripts/<name>.html`
//! link or an info page link. Both kinds are harvest targets.

use std::collections::{BTreeSet, HashSet};

use tracing::{info, warn};
use url::Url;

use crate::dom;
use crate::net::Fetcher;
use crate::url_utils;

/// Script and info page links on an index page, absolute, deduplicated and
/// sorted.
#[must_use]
pub fn parse_index_links(html: &str, base: &Url) -> Vec<Url> {
    let doc = dom::parse(html);

    dom::anchors(&doc.select("html"))
        .iter()
        .filter_map(|link| dom::get_attribute(link, "href"))
        .filter(|href| url_utils::is_script_page(href) || url_utils::is_info_page(href))
        .filter_map(|href| url_utils::resolve(base, &href))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Crawl the full index, or one alphabetical index per letter.
///
/// Index pages that cannot be fetched are logged and skipped.
pub fn collect_links(fetcher: &dyn Fetcher, base: &Url, letters: &[char]) -> Vec<Url> {
    let indexes: Vec<Option<char>> = if letters.is_empty() {
        vec![None]
    } else {
        letters.iter().copied().map(Some).collect()
    };

    let mut links = BTreeSet::new();
    for letter in indexes {
        let index = match url_utils::index_url(base, letter) {
            Ok(index) => index,
            Err(e) => {
                warn!(error = %e, "bad index url");
                continue;
            }
        };

        match fetcher.fetch_ok(&index) {
            Ok(page) => {
                let found = parse_index_links(&page.body, &index);
                info!(index = %index, count = found.len(), "index parsed");
                links.extend(found);
            }
            Err(e) => warn!(index = %index, error = %e, "index fetch failed"),
        }
    }

    links.into_iter().collect()
}

/// Drop repeated URLs, keeping the first occurrence of each.
#[must_use]
pub fn dedupe_preserving_order(urls: Vec<Url>) -> Vec<Url> {
    let mut seen = HashSet::new();
    urls.into_iter()
        .filter(|url| seen.insert(url.to_string()))
        .collect()
}
