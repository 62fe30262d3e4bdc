//! Title-derived URL slugs.
//!
//! Slugs are never stored. They are recomputed from the title whenever a URL
//! is built, and a mismatching slug in an incoming URL only triggers a
//! redirect to the canonical one.

use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref DISALLOWED: Regex = Regex::new(r"[^\w\s-]").expect("valid slug regex");
    static ref SEPARATORS: Regex = Regex::new(r"[-\s]+").expect("valid slug regex");
}

/// Convert a title into a lowercase, hyphen-separated ASCII slug.
///
/// Accented letters fold to their base letter (NFKD, then combining marks
/// fall away with the rest of the non-ASCII input). Punctuation is removed and
/// runs of whitespace or hyphens collapse into a single hyphen.
pub fn slugify(title: &str) -> String {
    let ascii: String = title
        .nfkd()
        .filter(char::is_ascii)
        .collect::<String>()
        .to_lowercase();
    let cleaned = DISALLOWED.replace_all(&ascii, "");
    let joined = SEPARATORS.replace_all(cleaned.trim(), "-");
    joined.trim_matches(|c| c == '-' || c == '_').to_string()
}
