//! Result types for extraction output.
//!
//! `ScriptRecord` is the row written by the sink; `ScriptBody` is the tagged
//! outcome of script-body extraction for a single page.

use serde::{Deserialize, Serialize};
use url::Url;

/// One extracted movie script.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptRecord {
    /// URL of the page the script text was finally taken from.
    ///
    /// Differs from the requested URL when a follow-up hop supplied the text.
    pub source_url: String,

    /// Movie title, empty when every source failed.
    pub title: String,

    /// Writer names, deduplicated.
    pub writers: Vec<String>,

    /// Genres of this movie only. Empty is a valid result.
    pub genres: Vec<String>,

    /// Free-form draft description such as "1998 Draft".
    pub draft_info: String,

    /// Newline-normalized script body. Empty means extraction failed.
    pub script_text: String,
}

impl ScriptRecord {
    /// Whether this record carries a script and may be written.
    #[must_use]
    pub fn is_emittable(&self) -> bool {
        !self.script_text.trim().is_empty()
    }
}

/// Why a page pointing at its script cannot be handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsupportedReason {
    /// The script is only available as a PDF.
    Pdf,
}

impl std::fmt::Display for UnsupportedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pdf => f.write_str("pdf-only script"),
        }
    }
}

/// Outcome of looking for the script body on one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptBody {
    /// Script text found on the page.
    Text(String),

    /// No text here, but this link plausibly leads to it.
    FollowUp(Url),

    /// The script exists but in a form this crate does not parse.
    Unsupported {
        /// Where the content lives.
        url: Url,
        /// What kind of content it is.
        reason: UnsupportedReason,
    },
}

impl ScriptBody {
    /// Script text, if this outcome carries any non-empty text.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) if !text.trim().is_empty() => Some(text),
            _ => None,
        }
    }
}
