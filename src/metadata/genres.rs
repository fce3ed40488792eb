//! Genre tags of the current movie.
//!
//! Genre links appear twice on a typical page: next to a `Genres:` label for
//! the movie itself, and in the site-wide navigation menu. Both use the same
//! `/genre/` links, so a result equal to the full menu is treated as "no
//! movie-specific genres".

use std::collections::BTreeSet;

use dom_query::{Document, Selection};

use crate::dom;
use crate::patterns::GENRES_LABEL;
use crate::selector::{query_all, rules};

/// Extract the genres of the movie described by `doc`.
///
/// Returns a sorted, deduplicated list; empty when no genre label exists or
/// when the collected set equals `menu`.
#[must_use]
pub fn extract_genres(doc: &Document, menu: &BTreeSet<String>) -> Vec<String> {
    let root = doc.select("html");
    let mut genres = BTreeSet::new();

    for container in label_containers(&root) {
        for link in query_all(&container, rules::genre_link) {
            let name = dom::text_content(&link).trim().to_string();
            if !name.is_empty() {
                genres.insert(name);
            }
        }
    }

    if !genres.is_empty() && &genres == menu {
        return Vec::new();
    }

    genres.into_iter().collect()
}

/// Elements that may hold the movie's genre links.
///
/// The element holding the first `Genres:` text plus its next element
/// sibling, then the parent of every bold `Genres` label.
fn label_containers<'a>(root: &Selection<'a>) -> Vec<Selection<'a>> {
    let mut containers = Vec::new();

    if let Some(holder) = dom::find_text_parent(root, &GENRES_LABEL) {
        let sibling = dom::next_element_sibling(&holder);
        containers.push(holder);
        containers.extend(sibling);
    }

    for label in query_all(root, rules::genres_bold_label) {
        let parent = label.parent();
        if parent.exists() {
            containers.push(parent);
        }
    }

    containers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::GENRE_MENU;

    fn menu() -> BTreeSet<String> {
        GENRE_MENU.iter().map(|g| (*g).to_string()).collect()
    }

    fn menu_links() -> String {
        GENRE_MENU
            .iter()
            .map(|g| format!(r#"<a href="/genre/{g}">{g}</a><br>"#))
            .collect()
    }

    #[test]
    fn genres_next_to_bold_label() {
        let doc = dom::parse(
            r#"<table class="script-details"><tr><td>
                <b>Genres</b> : <a href="/genre/Drama">Drama</a>&nbsp;<a href="/genre/Crime">Crime</a>
            </td></tr></table>"#,
        );
        assert_eq!(extract_genres(&doc, &menu()), vec!["Crime", "Drama"]);
    }

    #[test]
    fn genres_in_sibling_of_text_label() {
        let doc = dom::parse(
            r#"<div><span>Genres:</span><span><a href="/genre/War">War</a> <a href="/genre/War">War</a></span></div>"#,
        );
        assert_eq!(extract_genres(&doc, &menu()), vec!["War"]);
    }

    #[test]
    fn full_menu_is_a_false_positive() {
        let html = format!(
            r#"<table><tr><td><b>Genres</b><br>{}</td></tr></table>"#,
            menu_links()
        );
        let doc = dom::parse(&html);
        assert!(extract_genres(&doc, &menu()).is_empty());
    }

    #[test]
    fn menu_links_without_label_are_ignored() {
        let html = format!("<div class=\"sidebar\">{}</div>", menu_links());
        let doc = dom::parse(&html);
        assert!(extract_genres(&doc, &menu()).is_empty());
    }

    #[test]
    fn custom_menu_is_honoured() {
        let doc = dom::parse(r#"<p><b>Genres</b> <a href="/genre/Drama">Drama</a></p>"#);
        let custom: BTreeSet<String> = std::iter::once("Drama".to_string()).collect();
        assert!(extract_genres(&doc, &custom).is_empty());
    }

    #[test]
    fn extraction_is_idempotent() {
        let doc = dom::parse(r#"<p><b>Genres:</b> <a href="/genre/Horror">Horror</a> <a href="/genre/Comedy">Comedy</a></p>"#);
        let first = extract_genres(&doc, &menu());
        let second = extract_genres(&doc, &menu());
        assert_eq!(first, second);
        assert_eq!(first, vec!["Comedy", "Horror"]);
    }
}
