//! Page fetching.
//!
//! [`Fetcher`] is the seam between the harvest logic and the network.
//! [`HttpFetcher`] talks to the site with bounded retries and a pacing delay;
//! [`StaticFetcher`] serves pages from memory for offline runs and tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::thread;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use tracing::{debug, warn};
use url::Url;

use crate::encoding::decode_body;
use crate::error::{Error, Result};
use crate::options::Options;

/// A fetched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// URL that was requested.
    pub url: Url,
    /// Final HTTP status.
    pub status: u16,
    /// Decoded body.
    pub body: String,
}

impl Page {
    /// Whether the page was served with status 200.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == StatusCode::OK.as_u16()
    }
}

/// Something that can fetch a page by URL.
pub trait Fetcher {
    /// Fetch `url`.
    ///
    /// A page with a terminal non-200 status (403, 404) is returned as `Ok`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transient`] once retries are exhausted.
    fn fetch(&self, url: &Url) -> Result<Page>;

    /// Fetch `url`, treating any status other than 200 as an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Status`] for a non-200 page, or whatever
    /// [`Fetcher::fetch`] returns.
    fn fetch_ok(&self, url: &Url) -> Result<Page> {
        let page = self.fetch(url)?;
        if page.is_ok() {
            Ok(page)
        } else {
            Err(Error::Status {
                url: url.to_string(),
                status: page.status,
            })
        }
    }
}

/// Statuses returned without retrying.
fn is_terminal(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::OK | StatusCode::FORBIDDEN | StatusCode::NOT_FOUND
    )
}

/// Blocking HTTP fetcher with retries, backoff and a pacing delay.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    options: Options,
}

impl HttpFetcher {
    /// Build a fetcher from `options`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] when the HTTP client cannot be built.
    pub fn new(options: &Options) -> Result<Self> {
        let client = Client::builder()
            .user_agent(options.user_agent.as_str())
            .timeout(options.timeout)
            .build()?;

        Ok(Self {
            client,
            options: options.clone(),
        })
    }

    fn attempts(&self) -> u32 {
        self.options.retries.max(1)
    }

    /// One request. `None` means "worth retrying".
    fn attempt(&self, url: &Url) -> Option<Page> {
        let response = match self.client.get(url.as_str()).send() {
            Ok(response) => response,
            Err(e) => {
                warn!(url = %url, error = %e, "request failed");
                return None;
            }
        };

        let status = response.status();
        if !is_terminal(status) {
            warn!(url = %url, status = status.as_u16(), "retryable status");
            return None;
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);

        match response.bytes() {
            Ok(bytes) => Some(Page {
                url: url.clone(),
                status: status.as_u16(),
                body: decode_body(&bytes, content_type.as_deref()),
            }),
            Err(e) => {
                warn!(url = %url, error = %e, "reading body failed");
                None
            }
        }
    }

    fn fetch_with_retries(&self, url: &Url) -> Result<Page> {
        for attempt in 0..self.attempts() {
            if let Some(page) = self.attempt(url) {
                debug!(url = %url, status = page.status, attempt, "fetched");
                return Ok(page);
            }
            thread::sleep(self.options.backoff_for(attempt));
        }

        Err(Error::Transient {
            url: url.to_string(),
            attempts: self.attempts(),
        })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &Url) -> Result<Page> {
        let result = self.fetch_with_retries(url);
        thread::sleep(self.options.delay);
        result
    }
}

/// Serves canned pages from memory and records every request.
///
/// URLs without a page fail as [`Error::Transient`] after one attempt.
#[derive(Debug, Default)]
pub struct StaticFetcher {
    pages: HashMap<String, (u16, String)>,
    requests: RefCell<Vec<Url>>,
}

impl StaticFetcher {
    /// An empty fetcher.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` with status 200 at `url`.
    #[must_use]
    pub fn with_page(self, url: &str, body: &str) -> Self {
        self.with_status(url, 200, body)
    }

    /// Serve `body` with `status` at `url`.
    #[must_use]
    pub fn with_status(mut self, url: &str, status: u16, body: &str) -> Self {
        let key = Url::parse(url).map_or_else(|_| url.to_string(), String::from);
        self.pages.insert(key, (status, body.to_string()));
        self
    }

    /// URLs requested so far, in order.
    #[must_use]
    pub fn requests(&self) -> Vec<Url> {
        self.requests.borrow().clone()
    }
}

impl Fetcher for StaticFetcher {
    fn fetch(&self, url: &Url) -> Result<Page> {
        self.requests.borrow_mut().push(url.clone());

        match self.pages.get(url.as_str()) {
            Some((status, body)) => Ok(Page {
                url: url.clone(),
                status: *status,
                body: body.clone(),
            }),
            None => Err(Error::Transient {
                url: url.to_string(),
                attempts: 1,
            }),
        }
    }
}
