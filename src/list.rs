//! Ingredient lists whose `<li>` items are often never closed.
//!
//! A tree parse either nests unclosed items inside each other or merges
//! them, so the list markup is split lexically on item openers instead.

use crate::text::fragment_text;
use regex::Regex;
use std::sync::LazyLock;

static LIST_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*<(?:ul|ol)\b[^>]*>").expect("Invalid list open regex"));

static LIST_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</(?:ul|ol)\s*>\s*$").expect("Invalid list close regex"));

// `\b` keeps `<link>` from counting as an item
static ITEM_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<li\b[^>]*>").expect("Invalid item open regex"));

static ITEM_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</li\s*>").expect("Invalid item close regex"));

/// `<a name="more">` swallowed by a list whose `</ul>` is missing
static END_OF_CONTENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<a\b[^>]*\bname\s*=\s*["']?more["'\s/>]"#)
        .expect("Invalid end of content regex")
});

/// Returns the normalized text of every non-empty item, in source order.
///
/// Anything from an end-of-content anchor onwards is dropped.
pub fn parse_list(list_markup: &str) -> Vec<String> {
    let list_markup = match END_OF_CONTENT.find(list_markup) {
        Some(marker) => &list_markup[..marker.start()],
        None => list_markup,
    };

    let inner = LIST_OPEN.replace(list_markup, "");
    let inner = LIST_CLOSE.replace(&inner, "");

    ITEM_OPEN
        .split(&inner)
        .map(|part| fragment_text(&ITEM_CLOSE.replace_all(part, "")))
        .filter(|text| !text.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unclosed_items() {
        let items = parse_list("<ul><li>2 cups flour<li>1 tsp salt<li>3 eggs</ul>");
        assert_eq!(items, vec!["2 cups flour", "1 tsp salt", "3 eggs"]);
    }

    #[test]
    fn test_mixed_closed_and_unclosed_items() {
        let items = parse_list("<ul>\n<li>butter</li>\n<li>sugar\n<li>vanilla</li></ul>");
        assert_eq!(items, vec!["butter", "sugar", "vanilla"]);
    }

    #[test]
    fn test_leading_text_before_first_item_is_dropped_when_blank() {
        let items = parse_list("<ul class=\"x\">\n   \n<li>only item</ul>");
        assert_eq!(items, vec!["only item"]);
    }

    #[test]
    fn test_item_attributes_and_case() {
        let items = parse_list("<UL><LI class=\"a\">one<Li>two</UL>");
        assert_eq!(items, vec!["one", "two"]);
    }

    #[test]
    fn test_link_tag_is_not_an_item() {
        let items = parse_list("<ul><li>one <link rel=\"x\">still one<li>two</ul>");
        assert_eq!(items, vec!["one still one", "two"]);
    }

    #[test]
    fn test_fractions_and_glyphs_in_items() {
        let items = parse_list(
            "<ul><li><sup>1</sup>/<sub>2</sub> cup milk<li>1 ½ c. flour<li>oven at 400&deg;</ul>",
        );
        assert_eq!(items, vec!["1/2 cup milk", "1 1/2 c. flour", "oven at 400 degrees"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let items = parse_list("<ul><li>salt<li>salt<li></li><li> </ul>");
        assert_eq!(items, vec!["salt", "salt"]);
    }

    #[test]
    fn test_items_stop_at_end_of_content_anchor() {
        let items = parse_list(
            "<ul><li>flour</li><li>sugar <p>Mix.</p><a name=\"more\"></a><p>Comment by spammer</p></li></ul>",
        );
        assert_eq!(items, vec!["flour", "sugar Mix."]);

        let items = parse_list("<ul><li>flour<A NAME=more><li>spam</ul>");
        assert_eq!(items, vec!["flour"]);
    }

    #[test]
    fn test_other_anchors_inside_items_are_kept() {
        let items = parse_list("<ul><li><a name=\"moreover\">x</a> salt<li><a href=\"more.html\">more</a></ul>");
        assert_eq!(items, vec!["x salt", "more"]);
    }

    #[test]
    fn test_empty_list() {
        assert!(parse_list("<ul></ul>").is_empty());
        assert!(parse_list("").is_empty());
    }
}
