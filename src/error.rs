//! Error types for rs-screenplay.
//!
//! Extraction itself never fails: every heuristic degrades to an empty value.
//! These errors cover the I/O around it (fetching, writing rows, setup).

/// Error type for fetch, sink and configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The HTTP client could not be built or a request could not be sent.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// A fetch finished with a status other than 200.
    #[error("{url} returned status {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// Final HTTP status code.
        status: u16,
    },

    /// A fetch kept failing after every retry.
    #[error("{url} failed after {attempts} attempts")]
    Transient {
        /// Requested URL.
        url: String,
        /// Number of attempts made.
        attempts: u32,
    },

    /// A URL could not be parsed or resolved.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Reading or writing the CSV output failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Filesystem error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Unusable configuration (e.g. output path cannot be created).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Whether this error means "skip this target and keep going".
    ///
    /// Fetch-level failures are local to one URL; everything else is a
    /// problem with the run itself.
    #[must_use]
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, Self::Status { .. } | Self::Transient { .. } | Self::InvalidUrl(_))
    }
}

/// Result type alias for rs-screenplay operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_and_transient_are_fetch_failures() {
        let status = Error::Status { url: "https://imsdb.com/x".into(), status: 500 };
        let transient = Error::Transient { url: "https://imsdb.com/x".into(), attempts: 3 };
        assert!(status.is_fetch_failure());
        assert!(transient.is_fetch_failure());
        assert!(!Error::Config("bad".into()).is_fetch_failure());
    }

    #[test]
    fn display_mentions_url_and_status() {
        let err = Error::Status { url: "https://imsdb.com/x".into(), status: 404 };
        assert_eq!(err.to_string(), "https://imsdb.com/x returned status 404");
    }
}
