use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Cleans text coming back from a provider before it is persisted.
///
/// Applies NFKC, drops zero-width spaces and byte order marks, and collapses
/// every whitespace run (line breaks included) into a single space.
pub fn sanitize_provider_text(raw: &str) -> String {
    let normalized: String = raw.nfkc().filter(|c| !is_invisible(*c)).collect();
    WHITESPACE_RUN
        .replace_all(&normalized, " ")
        .trim()
        .to_string()
}

fn is_invisible(c: char) -> bool {
    matches!(c, '\u{200B}' | '\u{FEFF}' | '\u{2060}')
}
