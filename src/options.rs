//! Configuration options for fetching and extraction.
//!
//! The `Options` struct controls the fetcher's pacing and retry behaviour and
//! carries the site-specific data the extractors need (the genre menu).

use std::collections::BTreeSet;
use std::time::Duration;

/// Default site root.
pub const DEFAULT_BASE_URL: &str = "https://imsdb.com";

/// Default User-Agent header sent with every request.
pub const DEFAULT_USER_AGENT: &str =
    "rs-screenplay/0.1 (+https://example.org/contact) research crawler";

/// The site-wide genre navigation menu.
///
/// A genre list equal to exactly this set is the sidebar menu, not the tags
/// of the current movie.
pub const GENRE_MENU: [&str; 18] = [
    "Action",
    "Adventure",
    "Animation",
    "Comedy",
    "Crime",
    "Drama",
    "Family",
    "Fantasy",
    "Film-Noir",
    "Horror",
    "Musical",
    "Mystery",
    "Romance",
    "Sci-Fi",
    "Short",
    "Thriller",
    "War",
    "Western",
];

/// Configuration options for fetching and extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use rs_screenplay::Options;
///
/// let options = Options {
///     delay: Duration::from_millis(500),
///     retries: 5,
///     ..Options::default()
/// };
/// assert_eq!(options.retries, 5);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Site root used for index pages and relative links.
    ///
    /// Default: `https://imsdb.com`
    pub base_url: String,

    /// Pause after every network call, successful or not.
    ///
    /// Default: 1.5 seconds
    pub delay: Duration,

    /// Attempts per fetch before giving up.
    ///
    /// Default: `3`
    pub retries: u32,

    /// Base of the exponential backoff; attempt `n` sleeps `backoff * 2^n`.
    ///
    /// Default: 1.6 seconds
    pub backoff: Duration,

    /// Per-request network timeout.
    ///
    /// Default: 30 seconds
    pub timeout: Duration,

    /// User-Agent header.
    pub user_agent: String,

    /// Genre names forming the site navigation menu.
    ///
    /// Default: [`GENRE_MENU`]
    pub genre_menu: BTreeSet<String>,

    /// Follow a "read"/"html" link when a script page holds no text.
    ///
    /// Default: `true`
    pub follow_links: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            delay: Duration::from_millis(1500),
            retries: 3,
            backoff: Duration::from_millis(1600),
            timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            genre_menu: GENRE_MENU.iter().map(|g| (*g).to_string()).collect(),
            follow_links: true,
        }
    }
}

impl Options {
    /// Backoff before retrying after failed attempt `attempt` (0-based).
    #[must_use]
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        self.backoff.saturating_mul(2_u32.saturating_pow(attempt))
    }
}
