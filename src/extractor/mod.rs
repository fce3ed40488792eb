//! Script body extraction module.
//!
//! # Module Structure
//!
//! - `body`: the ordered container strategies and their [`ScriptBody`] outcome
//!
//! # Usage
//!
//! ```rust
//! use rs_screenplay::extractor::extract_script_body;
//! use rs_screenplay::{dom, ScriptBody};
//! use url::Url;
//!
//! let doc = dom::parse(r#"<div class="scrtext"><pre>FADE IN:</pre></div>"#);
//! let url = Url::parse("https://imsdb.com/scripts/A.html")?;
//!
//! match extract_script_body(&doc, &url) {
//!     ScriptBody::Text(text) => assert!(text.starts_with("FADE IN")),
//!     other => panic!("unexpected {other:?}"),
//! }
//! # Ok::<(), url::ParseError>(())
//! ```
//!
//! [`ScriptBody`]: crate::ScriptBody

pub mod body;

pub use body::{extract_script_body, BodyPage, LONG_TEXT_LINES};
