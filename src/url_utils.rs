//! URL Utility Functions
//!
//! Validation, relative-link resolution and recognition of the page shapes
//! the navigation logic cares about.

use url::Url;

use crate::error::{Error, Result};
use crate::patterns::{INFO_PAGE_PATH, SCRIPT_PAGE_PATH};

/// Check if a string is a valid absolute http(s) URL.
///
/// # Returns
/// * `(is_absolute, parsed_url)` - Whether URL is absolute and the parsed URL if valid
#[must_use]
pub fn is_absolute_url(s: &str) -> (bool, Option<Url>) {
    let s = s.trim();

    if !s.starts_with("http://") && !s.starts_with("https://") {
        return (false, None);
    }

    match Url::parse(s) {
        Ok(url) if url.host().is_some() => (true, Some(url)),
        _ => (false, None),
    }
}

/// Parse an absolute http(s) URL, failing with [`Error::InvalidUrl`].
///
/// # Errors
///
/// Returns an error when `s` is not an absolute http(s) URL with a host.
pub fn parse_url(s: &str) -> Result<Url> {
    match is_absolute_url(s) {
        (true, Some(url)) => Ok(url),
        _ => Err(Error::InvalidUrl(s.trim().to_string())),
    }
}

/// Resolve an `href` against the page it appeared on.
///
/// `javascript:`, `mailto:` and empty hrefs resolve to nothing.
#[must_use]
pub fn resolve(base: &Url, href: &str) -> Option<Url> {
    let href = href.trim();

    if href.is_empty()
        || href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
    {
        return None;
    }

    base.join(href).ok()
}

/// Whether `url` is an info page (`/Movie Scripts/<Title> Script.html`).
#[must_use]
pub fn is_info_page(url: &str) -> bool {
    INFO_PAGE_PATH.is_match(url)
}

/// Whether `url` points at a canonical script page (`/scripts/<name>.html`).
#[must_use]
pub fn is_script_page(url: &str) -> bool {
    SCRIPT_PAGE_PATH.is_match(url)
}

/// Index page listing every script, or only titles starting with `letter`.
///
/// # Errors
///
/// Returns an error when `base` cannot be joined with the index path.
pub fn index_url(base: &Url, letter: Option<char>) -> Result<Url> {
    let path = match letter {
        Some(letter) => format!("/alphabetical/{}", letter.to_ascii_uppercase()),
        None => "/all-scripts.html".to_string(),
    };
    base.join(&path).map_err(|e| Error::InvalidUrl(format!("{base}{path}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        parse_url("https://imsdb.com/Movie Scripts/Heat Script.html").unwrap_or_else(|e| panic!("{e}"))
    }

    #[test]
    fn test_is_absolute_url() {
        assert!(is_absolute_url("https://imsdb.com/scripts/A.html").0);
        assert!(!is_absolute_url("/scripts/A.html").0);
        assert!(!is_absolute_url("").0);
        assert!(!is_absolute_url("ftp://imsdb.com").0);
    }

    #[test]
    fn test_parse_url_rejects_relative() {
        assert!(matches!(parse_url("scripts/A.html"), Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn test_resolve_relative_and_root_paths() {
        let base = base();
        assert_eq!(
            resolve(&base, "/scripts/Heat.html").map(String::from),
            Some("https://imsdb.com/scripts/Heat.html".to_string())
        );
        assert_eq!(
            resolve(&base, "Heat.pdf").map(String::from),
            Some("https://imsdb.com/Movie%20Scripts/Heat.pdf".to_string())
        );
        assert!(resolve(&base, "javascript:void(0)").is_none());
    }

    #[test]
    fn test_info_and_script_shapes() {
        assert!(is_info_page(base().as_str()));
        assert!(!is_script_page(base().as_str()));
        assert!(is_script_page("https://imsdb.com/scripts/Heat.html"));
    }

    #[test]
    fn test_index_url() {
        let root = parse_url("https://imsdb.com").unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(index_url(&root, None).map(String::from).ok(), Some("https://imsdb.com/all-scripts.html".into()));
        assert_eq!(index_url(&root, Some('f')).map(String::from).ok(), Some("https://imsdb.com/alphabetical/F".into()));
    }
}
