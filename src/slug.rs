use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Returned when a name has nothing left after filtering.
pub const FALLBACK_SLUG: &str = "unnamed";

// Padded so the word never fuses with neighbouring letters.
const SYMBOL_WORDS: &[(char, &str)] = &[
    ('&', " and "),
    ('@', " at "),
    ('#', " number "),
    ('$', " dollar "),
    ('%', " percent "),
    ('+', " plus "),
];

static DISALLOWED: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9\s-]").expect("valid regex"));
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));
static HYPHEN_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").expect("valid regex"));

/// Derive a URL-friendly slug from a display name.
///
/// The result is lowercase ASCII, hyphen separated and never empty: names
/// that reduce to nothing (including `None` and `""`) become
/// [`FALLBACK_SLUG`].
///
/// ```
/// use leadgen::slug::slugify;
///
/// assert_eq!(slugify(Some("Cedar Financial")), "cedar-financial");
/// assert_eq!(slugify(Some("ABC & XYZ Company")), "abc-and-xyz-company");
/// assert_eq!(slugify(None), "unnamed");
/// ```
pub fn slugify(text: Option<&str>) -> String {
    let text = match text {
        Some(text) if !text.is_empty() => text,
        _ => return FALLBACK_SLUG.to_string(),
    };

    let ascii: String = text
        .to_lowercase()
        .nfkd()
        .filter(char::is_ascii)
        .collect();

    let mut expanded = String::with_capacity(ascii.len());
    for c in ascii.chars() {
        match SYMBOL_WORDS.iter().find(|(symbol, _)| *symbol == c) {
            Some((_, word)) => expanded.push_str(word),
            None => expanded.push(c),
        }
    }

    let filtered = DISALLOWED.replace_all(&expanded, "");
    let collapsed = WHITESPACE_RUN.replace_all(&filtered, " ");
    let hyphenated = collapsed.trim().replace(' ', "-");
    let slug = HYPHEN_RUN.replace_all(&hyphenated, "-");
    let slug = slug.trim_matches('-');

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug.to_string()
    }
}

/// Pick `base`, or the first free `base-N` (N starting at 1) when `base` is taken.
pub fn unique_slug(base: &str, taken: &HashSet<String>) -> String {
    if !taken.contains(base) {
        return base.to_string();
    }

    (1u64..)
        .map(|n| format!("{base}-{n}"))
        .find(|candidate| !taken.contains(candidate))
        .unwrap_or_else(|| base.to_string())
}
