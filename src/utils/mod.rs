//! Utility modules

pub mod fuzzy;

pub use fuzzy::{partial_ratio, ratio, score, score_normalized, token_sort_ratio};
