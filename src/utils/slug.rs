//! URL slugification.
//!
//! Converts titles to URL-safe path segments.

use deunicode::deunicode;

/// Characters forbidden in file paths
const FORBIDDEN_CHARS: &[char] = &[
    '<', '>', ':', '|', '?', '*', '#', '\\', '(', ')', '[', ']', '\t', '\r', '\n',
];

/// Convert text to an ASCII slug: "Hello, Wörld!" → "hello-world".
///
/// Non-ASCII characters are transliterated, runs of non-alphanumerics
/// become a single `-`, and leading/trailing separators are dropped.
pub fn slugify(text: &str) -> String {
    let ascii = deunicode(text);
    let mut slug = String::with_capacity(ascii.len());

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Remove forbidden characters and replace whitespace with underscores.
///
/// Used on permalinks taken verbatim from metadata.
pub fn sanitize_text(text: &str) -> String {
    text.trim()
        .chars()
        .filter(|c| !FORBIDDEN_CHARS.contains(c))
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect()
}
