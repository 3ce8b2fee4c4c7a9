use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref LIST_SEP: Regex = Regex::new(r"(?i)\s*(?:,|;|&|\band\b)\s*").expect("valid regex");
    static ref SPACES: Regex = Regex::new(r"\s+").expect("valid regex");
}

/// Canonical form used for every case-insensitive comparison: NFKC, lowercase, inner
/// whitespace collapsed, trimmed.
pub fn normalize(text: &str) -> String {
    let folded = text.nfkc().collect::<String>().to_lowercase();
    SPACES.replace_all(folded.trim(), " ").into_owned()
}

/// Splits a spoken list such as "pool, garage and a garden" into its items. Items keep their
/// original spelling; empty items are dropped.
pub fn split_list(text: &str) -> Vec<String> {
    LIST_SEP
        .split(text)
        .map(|s| s.trim())
        .map(|s| s.strip_prefix("a ").or_else(|| s.strip_prefix("an ")).unwrap_or(s).trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}
