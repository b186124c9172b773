//! Core text processing
//!
//! Pure string helpers shared by the resolver: normalization for matching and
//! title extraction from spoken commands.

pub mod text_normalizer;
pub mod title_extractor;

pub use text_normalizer::{normalize, strip_extension, strip_punctuation};
pub use title_extractor::{clean_title, extract_title};
