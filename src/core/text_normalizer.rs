//! Text Normalization
//!
//! Canonical forms used when comparing spoken titles against file names.

use lazy_static::lazy_static;
use regex::Regex;

/// Wrapping and punctuation symbols removed anywhere in the text
const MATCH_SYMBOLS: &[char] = &[
    '《', '》', '"', '\'', '“', '”', '‘', '’', '(', ')', '[', ']', '-', '—', '·',
];

/// Connective particles and tag words that carry no title information
const STOP_WORDS: &[&str] = &["的", "之", "与", "和", "feat", "version"];

lazy_static! {
    static ref NON_WORD: Regex = Regex::new(r"[^\w\s]").expect("static regex");
}

/// Normalize text for title comparison.
///
/// Lower-cases, removes [`MATCH_SYMBOLS`] wherever they occur, removes each
/// stop word once per word (text exposed by a removal is not rescanned) and
/// trims.
pub fn normalize(text: &str) -> String {
    let mut result: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !MATCH_SYMBOLS.contains(c))
        .collect();

    for word in STOP_WORDS {
        result = result.replace(word, "");
    }

    result.trim().to_string()
}

/// Drop every character that is neither a word character nor whitespace
pub fn strip_punctuation(text: &str) -> String {
    NON_WORD.replace_all(text, "").trim().to_string()
}

/// Remove the extension of the last path component, keeping any directories
pub fn strip_extension(name: &str) -> &str {
    let file_start = name.rfind(|c: char| c == '/' || c == '\\').map(|i| i + 1).unwrap_or(0);
    match name[file_start..].rfind('.') {
        // ".hidden" has no extension
        Some(0) | None => name,
        Some(dot) => &name[..file_start + dot],
    }
}
