use regex::Regex;
use scraper::Html;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Stacked fraction markup: `<sup>3</sup>/<sub>4</sub>`
static STACKED_FRACTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<sup>(\d+)</sup>\s*/\s*<sub>(\d+)</sub>").expect("Invalid fraction regex")
});

/// Legacy glyphs and their ASCII spellings. The degree sign is usually glued
/// to a number, hence the leading space.
const GLYPHS: &[(char, &str)] = &[
    ('½', "1/2"),
    ('¼', "1/4"),
    ('¾', "3/4"),
    ('⅓', "1/3"),
    ('⅔', "2/3"),
    ('°', " degrees"),
];

/// Decodes character references the way a browser does in text content:
/// legacy names without a semicolon (`&frac12`, `&amp`) and the
/// windows-1252 remap of `&#128;` to `&#159;` included.
pub fn decode_entities(raw: &str) -> Cow<'_, str> {
    if !raw.contains('&') {
        return Cow::Borrowed(raw);
    }
    // Only `&` may start markup once `<` is escaped, so the parse yields one
    // text node holding the decoded string.
    let escaped = raw.replace('<', "&lt;");
    Cow::Owned(markup_to_text(&escaped))
}

/// Decodes entities, spells out legacy glyphs and collapses whitespace.
pub fn normalize(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let decoded = decode_entities(raw);

    let mut spelled = String::with_capacity(decoded.len());
    for ch in decoded.chars() {
        match GLYPHS.iter().find(|(glyph, _)| *glyph == ch) {
            Some((_, ascii)) => spelled.push_str(ascii),
            None => spelled.push(ch),
        }
    }

    spelled.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Rewrites `<sup>N</sup>/<sub>M</sub>` to plain `N/M`, leaving all other
/// markup alone.
pub fn rewrite_fractions(fragment: &str) -> Cow<'_, str> {
    STACKED_FRACTION.replace_all(fragment, "$1/$2")
}

/// Concatenates every text node of an HTML fragment.
pub fn markup_to_text(fragment: &str) -> String {
    let parsed = Html::parse_fragment(fragment);
    parsed.root_element().text().collect()
}

/// Fraction rewrite, text reduction and normalization in one step.
pub fn fragment_text(fragment: &str) -> String {
    normalize(&markup_to_text(&rewrite_fractions(fragment)))
}
