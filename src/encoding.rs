//! Character decoding of fetched page bodies.
//!
//! Older script pages are frequently served as windows-1252. The charset is
//! taken from, in order: the HTTP `Content-Type` header, a byte-order mark,
//! a `<meta>` declaration in the first kilobyte. UTF-8 otherwise.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// `charset=...` inside a header value or a `<meta>` tag.
#[allow(clippy::expect_used)]
static CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s>;/]+)"#).expect("valid regex")
});

/// Bytes of the body searched for a `<meta>` charset.
const META_SNIFF_LEN: usize = 1024;

/// Pick the encoding of a fetched body.
#[must_use]
pub fn detect_encoding(body: &[u8], content_type: Option<&str>) -> &'static Encoding {
    if let Some(encoding) = content_type.and_then(charset_label).and_then(|l| label_encoding(&l)) {
        return encoding;
    }

    if let Some((encoding, _bom_len)) = Encoding::for_bom(body) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&body[..body.len().min(META_SNIFF_LEN)]);
    head.lines()
        .filter(|line| line.to_ascii_lowercase().contains("<meta"))
        .find_map(|line| charset_label(line).and_then(|l| label_encoding(&l)))
        .unwrap_or(UTF_8)
}

/// Decode a fetched body to UTF-8, replacing invalid sequences with `�`.
///
/// # Examples
///
/// ```
/// use rs_screenplay::encoding::decode_body;
///
/// let body = b"<html><body>\x93Rosebud\x94</body></html>";
/// let text = decode_body(body, Some("text/html; charset=windows-1252"));
/// assert!(text.contains("\u{201C}Rosebud\u{201D}"));
/// ```
#[must_use]
pub fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = detect_encoding(body, content_type);
    let (decoded, _used, _had_errors) = encoding.decode(body);
    decoded.into_owned()
}

fn charset_label(text: &str) -> Option<String> {
    CHARSET_RE
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

fn label_encoding(label: &str) -> Option<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
}
