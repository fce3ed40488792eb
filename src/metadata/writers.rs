//! Writer names, from three sources in fixed priority.
//!
//! 1. Links to writer profiles anywhere on the page.
//! 2. A `Writers:` label block (its links plus its plain text).
//! 3. An attribution line ("Written by ...") near the top of the script.
//!
//! The first source yielding any name wins; later ones are not consulted.

use dom_query::{Document, Selection};

use crate::dom;
use crate::patterns::{CREDIT_LINE, WRITERS_LABEL, WRITERS_PREFIX, WRITER_NOISE};
use crate::selector::{first_match, query_all, rules, Outcome};
use crate::text::{sort_dedup, split_names};

/// Lines of script text searched for an attribution line.
pub const CREDIT_SCAN_LINES: usize = 80;

/// Shortest fragment accepted as a name from a label block.
const MIN_NAME_LEN: usize = 3;

struct WriterSources<'a> {
    doc: &'a Document,
    script_text: Option<&'a str>,
}

/// Extract writer names.
///
/// `script_text` is only used by the last tier. An empty result is normal.
#[must_use]
pub fn extract_writers(doc: &Document, script_text: Option<&str>) -> Vec<String> {
    const TIERS: [fn(&WriterSources) -> Outcome<Vec<String>>; 3] =
        [linked_writers, labeled_writers, credited_writers];

    let sources = WriterSources { doc, script_text };
    first_match(&sources, &TIERS).into_option().unwrap_or_default()
}

fn non_empty(names: Vec<String>) -> Outcome<Vec<String>> {
    if names.is_empty() {
        Outcome::NoMatch
    } else {
        Outcome::Matched(names)
    }
}

fn link_names(root: &Selection) -> Vec<String> {
    query_all(root, rules::writer_link)
        .iter()
        .map(|link| dom::text_content(link).trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}

/// Tier 1: every `/writer/` link on the page, sorted.
fn linked_writers(sources: &WriterSources) -> Outcome<Vec<String>> {
    let mut names = link_names(&sources.doc.select("html"));
    sort_dedup(&mut names);
    non_empty(names)
}

/// Tier 2: names inside the `Writers:` label block, sorted.
fn labeled_writers(sources: &WriterSources) -> Outcome<Vec<String>> {
    let root = sources.doc.select("html");
    let mut names = Vec::new();

    for block in label_blocks(&root) {
        names.extend(link_names(&block));

        let text = dom::joined_text(&block, " ", true);
        let text = WRITERS_PREFIX.replace(&text, "");
        names.extend(
            split_names(&text)
                .into_iter()
                .filter(|part| part.chars().count() >= MIN_NAME_LEN && !WRITER_NOISE.is_match(part)),
        );
    }

    sort_dedup(&mut names);
    non_empty(names)
}

fn label_blocks<'a>(root: &Selection<'a>) -> Vec<Selection<'a>> {
    let mut blocks = Vec::new();

    if let Some(holder) = dom::find_text_parent(root, &WRITERS_LABEL) {
        let sibling = dom::next_element_sibling(&holder);
        blocks.push(holder);
        blocks.extend(sibling);
    }

    for label in query_all(root, rules::writers_bold_label) {
        let parent = label.parent();
        if parent.exists() {
            blocks.push(parent);
        }
    }

    blocks
}

/// Tier 3: "Screenplay by" / "Written by" in the script's opening lines.
///
/// Names keep their on-page order.
fn credited_writers(sources: &WriterSources) -> Outcome<Vec<String>> {
    let Some(script) = sources.script_text.filter(|s| !s.is_empty()) else {
        return Outcome::NoMatch;
    };

    let opening = script
        .lines()
        .take(CREDIT_SCAN_LINES)
        .collect::<Vec<_>>()
        .join("\n");

    let Some(names) = CREDIT_LINE.captures(&opening).and_then(|caps| caps.name("names")) else {
        return Outcome::NoMatch;
    };

    non_empty(
        split_names(names.as_str())
            .iter()
            .map(|part| part.trim_matches(|c: char| c == ' ' || c == '.').to_string())
            .filter(|part| !part.is_empty())
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linked_writers_win_over_label() {
        let doc = dom::parse(
            r#"<table><tr><td>
                <b>Writers</b> : Somebody Else<br>
                <a href="/writer.php?w=x">not a profile</a>
                <a href="/writer/Jim Uhls">Jim Uhls</a>
                <a href="/writer/Chuck Palahniuk">Chuck Palahniuk</a>
                <a href="/writer/Jim Uhls">Jim Uhls</a>
            </td></tr></table>"#,
        );
        assert_eq!(extract_writers(&doc, None), vec!["Chuck Palahniuk", "Jim Uhls"]);
    }

    #[test]
    fn label_text_is_split_and_filtered() {
        let doc = dom::parse(
            r#"<div><p><strong>Writers:</strong> Walter Hill &amp; David Giler, Jo</p>
               <p>Genres: Horror</p></div>"#,
        );
        assert_eq!(extract_writers(&doc, None), vec!["David Giler", "Walter Hill"]);
    }

    #[test]
    fn label_noise_is_dropped() {
        let doc = dom::parse(r#"<p>Writer: Read Script, Nora Ephron</p>"#);
        assert_eq!(extract_writers(&doc, None), vec!["Nora Ephron"]);
    }

    #[test]
    fn credit_line_preserves_order() {
        let doc = dom::parse("<pre>nothing</pre>");
        let script = "\n\n                    ALIEN\n\n     Screenplay by Walter Hill & David Giler.\n";
        assert_eq!(extract_writers(&doc, Some(script)), vec!["Walter Hill", "David Giler"]);
    }

    #[test]
    fn credit_label_alone_takes_next_non_blank_line() {
        let doc = dom::parse("<pre>nothing</pre>");
        let script = "ALIEN\n\n          Written by\n\n       Dan O'Bannon\n\nFADE IN:";
        assert_eq!(extract_writers(&doc, Some(script)), vec!["Dan O'Bannon"]);
    }

    #[test]
    fn credit_label_at_end_of_text_yields_nothing() {
        let doc = dom::parse("<pre>nothing</pre>");
        assert!(extract_writers(&doc, Some("ALIEN\n\nScreenplay by:\n   \n")).is_empty());
    }

    #[test]
    fn credit_line_on_one_line() {
        let doc = dom::parse("<pre>nothing</pre>");
        let script = "THE THING\n\nWritten by: Bill Lancaster, John Carpenter.\n\nFADE IN:";
        assert_eq!(extract_writers(&doc, Some(script)), vec!["Bill Lancaster", "John Carpenter"]);
    }

    #[test]
    fn credit_line_beyond_scan_window_is_ignored() {
        let doc = dom::parse("<pre>nothing</pre>");
        let mut script = "INT. ROOM\n".repeat(CREDIT_SCAN_LINES);
        script.push_str("Written by Someone Late\n");
        assert!(extract_writers(&doc, Some(&script)).is_empty());
    }

    #[test]
    fn no_sources_yields_empty() {
        let doc = dom::parse("<p>Nothing here</p>");
        assert!(extract_writers(&doc, None).is_empty());
        assert!(extract_writers(&doc, Some("")).is_empty());
    }
}
