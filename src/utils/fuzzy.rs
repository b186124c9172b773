//! Fuzzy matching utilities for title search
//!
//! Three percentage measures over normalized strings, combined by taking the
//! best one. Typos, truncated titles and reordered words are each caught well
//! by a different measure.

use crate::core::text_normalizer::{normalize, strip_extension};
use strsim::{generic_levenshtein, normalized_levenshtein};

fn to_percent(similarity: f64) -> u8 {
    (similarity * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Edit-distance ratio over the full strings, 0-100
pub fn ratio(a: &str, b: &str) -> u8 {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    to_percent(normalized_levenshtein(a, b))
}

/// Best ratio of the shorter string against every equally long window of the
/// longer one
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let (short, long) = if a_chars.len() <= b_chars.len() {
        (a_chars, b_chars)
    } else {
        (b_chars, a_chars)
    };

    if short.len() == long.len() {
        return ratio(a, b);
    }

    // Windows share one buffer and have the needle's length, so the
    // normalized distance is just dist / len
    let len = short.len();
    let mut window_buf: Vec<char> = Vec::with_capacity(len);
    let mut best = 0;
    for window in long.windows(len) {
        window_buf.clear();
        window_buf.extend_from_slice(window);
        let dist = generic_levenshtein(&short, &window_buf);
        best = best.max(to_percent(1.0 - dist as f64 / len as f64));
        if best == 100 {
            break;
        }
    }
    best
}

/// Ratio after sorting whitespace-separated tokens
pub fn token_sort_ratio(a: &str, b: &str) -> u8 {
    ratio(&sorted_tokens(a), &sorted_tokens(b))
}

fn sorted_tokens(text: &str) -> String {
    let mut tokens: Vec<&str> = text.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// Composite score of two already normalized strings, 0-100
pub fn score_normalized(candidate: &str, entry: &str) -> u8 {
    ratio(candidate, entry)
        .max(partial_ratio(candidate, entry))
        .max(token_sort_ratio(candidate, entry))
}

/// Composite score of a raw candidate title against a catalog file name
pub fn score(candidate: &str, entry_name: &str) -> u8 {
    score_normalized(&normalize(candidate), &normalize(strip_extension(entry_name)))
}
