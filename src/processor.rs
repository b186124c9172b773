//! Command Resolver
//!
//! Decides whether an utterance names a specific track in the catalog, asks
//! for music in general, or is not a music command at all.

use crate::core::text_normalizer::{normalize, strip_punctuation};
use crate::core::title_extractor::extract_title;
use crate::library::{Catalog, CatalogEntry};
use crate::utils::fuzzy::score_normalized;
use tracing::debug;

/// Per-entry floor for candidates longer than [`SHORT_CANDIDATE_CHARS`]
pub const MIN_SCORE_LONG: u8 = 60;
/// Per-entry floor for short candidates, whose percentages are noisier
pub const MIN_SCORE_SHORT: u8 = 50;
/// Overall floor for accepting the best entry
pub const ACCEPT_SCORE: u8 = 50;
pub const SHORT_CANDIDATE_CHARS: usize = 3;

/// Outcome of resolving one utterance
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchDecision {
    /// A catalog entry matched the spoken title
    Specific { entry: String, score: u8 },
    /// "Play some music" without a usable title
    Generic,
    /// Not a music command
    NoMatch,
}

/// Resolves utterances against a catalog using a fixed set of generic phrases
#[derive(Debug, Clone)]
pub struct Resolver {
    music_commands: Vec<String>,
}

impl Resolver {
    pub fn new(music_commands: Vec<String>) -> Self {
        Self { music_commands }
    }

    pub fn resolve(&self, utterance: &str, catalog: &Catalog) -> MatchDecision {
        resolve(utterance, catalog, self.music_commands.as_slice())
    }
}

/// Resolve an utterance against `catalog`, falling back to the generic phrases
pub fn resolve<S: AsRef<str>>(
    utterance: &str,
    catalog: &Catalog,
    music_commands: &[S],
) -> MatchDecision {
    let clean_text = strip_punctuation(utterance);
    debug!("Checking for music command: '{}'", clean_text);

    if catalog.is_available() {
        if let Some(candidate) = extract_title(&clean_text) {
            match find_best_match(&candidate, catalog) {
                Some((entry, score)) if score >= ACCEPT_SCORE => {
                    debug!("🎯 Best match for '{}': {} ({})", candidate, entry.path, score);
                    return MatchDecision::Specific {
                        entry: entry.path.clone(),
                        score,
                    };
                }
                _ => debug!("No catalog entry matched '{}'", candidate),
            }
        }
    }

    // Transcribers capitalise freely; the phrase lists are lower case
    let lowered = clean_text.to_lowercase();
    if music_commands
        .iter()
        .any(|cmd| lowered.contains(&cmd.as_ref().to_lowercase()))
    {
        debug!("Generic music request: '{}'", clean_text);
        return MatchDecision::Generic;
    }

    MatchDecision::NoMatch
}

/// Highest scoring entry that clears the length-dependent floor.
///
/// Earlier entries win ties: a later entry replaces the best only with a
/// strictly higher score.
pub fn find_best_match<'a>(
    candidate: &str,
    catalog: &'a Catalog,
) -> Option<(&'a CatalogEntry, u8)> {
    let target = normalize(candidate);
    let min_score = min_score_for(&target);

    catalog
        .entries()
        .iter()
        .map(|entry| (entry, score_normalized(&target, &entry.match_key)))
        .filter(|&(_, score)| score >= min_score)
        .fold(None, |best, (entry, score)| match best {
            Some((_, best_score)) if score <= best_score => best,
            _ => Some((entry, score)),
        })
}

/// Per-entry floor for a normalized candidate
pub fn min_score_for(normalized_candidate: &str) -> u8 {
    if normalized_candidate.chars().count() > SHORT_CANDIDATE_CHARS {
        MIN_SCORE_LONG
    } else {
        MIN_SCORE_SHORT
    }
}
