//! Selector Infrastructure
//!
//! Element rules and the strategy chain used by every extractor.
//!
//! A [`Rule`] is a predicate over one element; [`query`] and [`query_all`]
//! walk a subtree in document order applying it. A strategy is a function
//! returning an [`Outcome`]; [`first_match`] runs an ordered slice of them and
//! stops at the first [`Outcome::Matched`].

use dom_query::Selection;

pub mod rules;

/// A selector rule that tests if a selection matches certain criteria
pub type Rule = fn(&Selection) -> bool;

/// Tagged result of one matcher strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The strategy recognised the input and produced a value.
    Matched(T),
    /// The strategy does not apply; try the next one.
    NoMatch,
}

impl<T> Outcome<T> {
    /// `Matched` when `value` is `Some`.
    #[must_use]
    pub fn from_option(value: Option<T>) -> Self {
        value.map_or(Self::NoMatch, Self::Matched)
    }

    /// Converts into an `Option`.
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Matched(value) => Some(value),
            Self::NoMatch => None,
        }
    }
}

/// Run `strategies` in order, returning the first `Matched` outcome.
///
/// # Example
///
/// ```rust
/// use rs_screenplay::selector::{first_match, Outcome};
///
/// fn even(n: &u32) -> Outcome<&'static str> {
///     if n % 2 == 0 { Outcome::Matched("even") } else { Outcome::NoMatch }
/// }
/// fn any(_: &u32) -> Outcome<&'static str> {
///     Outcome::Matched("odd")
/// }
///
/// assert_eq!(first_match(&3, &[even, any]), Outcome::Matched("odd"));
/// assert_eq!(first_match(&4, &[even, any]), Outcome::Matched("even"));
/// ```
pub fn first_match<I, T, F>(input: &I, strategies: &[F]) -> Outcome<T>
where
    I: ?Sized,
    F: Fn(&I) -> Outcome<T>,
{
    for strategy in strategies {
        if let Outcome::Matched(value) = strategy(input) {
            return Outcome::Matched(value);
        }
    }
    Outcome::NoMatch
}

/// Query for first element matching the rule
///
/// Iterates through all descendants in document order and returns the first
/// element for which the rule returns true.
#[must_use]
pub fn query<'a>(root: &Selection<'a>, rule: Rule) -> Option<Selection<'a>> {
    for node in root.select("*").nodes() {
        let sel = Selection::from(*node);
        if rule(&sel) {
            return Some(sel);
        }
    }
    None
}

/// Query for all elements matching the rule
///
/// Iterates through all descendants in document order and collects all
/// elements for which the rule returns true.
#[must_use]
pub fn query_all<'a>(root: &Selection<'a>, rule: Rule) -> Vec<Selection<'a>> {
    root.select("*")
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .filter(|sel| rule(sel))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;

    fn is_target(sel: &Selection) -> bool {
        dom::get_attribute(sel, "class").is_some_and(|c| c.contains("target"))
    }

    #[test]
    fn test_query_finds_first_match() {
        let doc = dom::parse(r#"
            <div>
                <p class="target">First</p>
                <p class="target">Second</p>
            </div>
        "#);
        let root = doc.select("div");

        let result = query(&root, is_target);
        assert_eq!(result.map(|s| dom::text_content(&s)), Some("First".to_string()));
    }

    #[test]
    fn test_query_all_preserves_document_order() {
        let doc = dom::parse(r#"
            <div>
                <p class="target">1</p>
                <section><p class="target">2</p></section>
                <span>skip</span>
                <p class="target">3</p>
            </div>
        "#);
        let root = doc.select("div");

        let texts: Vec<String> = query_all(&root, is_target).iter().map(dom::text_content).collect();
        assert_eq!(texts, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_query_returns_none_when_no_match() {
        let doc = dom::parse("<div><p>content</p></div>");
        assert!(query(&doc.select("div"), is_target).is_none());
    }

    #[test]
    fn test_first_match_stops_at_first_success() {
        fn never(_: &str) -> Outcome<usize> {
            Outcome::NoMatch
        }
        fn length(s: &str) -> Outcome<usize> {
            Outcome::Matched(s.len())
        }
        fn unreached(_: &str) -> Outcome<usize> {
            Outcome::Matched(usize::MAX)
        }

        assert_eq!(first_match("abc", &[never, length, unreached]), Outcome::Matched(3));
        assert_eq!(first_match("abc", &[never]), Outcome::NoMatch);
    }

    #[test]
    fn test_outcome_option_round_trip() {
        assert_eq!(Outcome::from_option(Some(1)).into_option(), Some(1));
        assert_eq!(Outcome::<u8>::from_option(None), Outcome::NoMatch);
    }
}
