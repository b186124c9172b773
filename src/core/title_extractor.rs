//! Title Extraction
//!
//! Pulls the candidate song title out of a spoken command such as
//! "play the song Moonlight Sonata" or "播放一首《晴天》".

use lazy_static::lazy_static;

/// Verbs that introduce a title
const TRIGGER_VERBS: &[&str] = &["播放", "听", "放", "唱", "play", "listen to", "listen", "sing"];

/// Descriptive words that may sit between the verb and the title
const LEADING_FILLERS: &[&str] = &[
    "一首",
    "个",
    "的歌曲",
    "的歌",
    "音乐",
    "a song",
    "a track",
    "the song",
    "the track",
    "some music",
    "music",
];

/// Symbols that wrap a quoted title
const WRAPPERS: &[char] = &['《', '》', '\'', '"', '“', '”', '「', '」'];

/// Separators after which only the trailing part is the title ("artist: title")
const SEPARATORS: &[char] = &[':', '：'];

lazy_static! {
    /// Longest first, so "listen to" wins over "listen"
    static ref SORTED_TRIGGERS: Vec<&'static str> = {
        let mut verbs = TRIGGER_VERBS.to_vec();
        verbs.sort_by_key(|v| std::cmp::Reverse(v.chars().count()));
        verbs
    };
}

/// Extract the candidate title following the first trigger verb that yields one
pub fn extract_title(utterance: &str) -> Option<String> {
    let haystack = utterance.to_ascii_lowercase();

    for verb in SORTED_TRIGGERS.iter() {
        let Some(pos) = find_phrase(&haystack, verb) else {
            continue;
        };
        // ASCII lower-casing keeps byte offsets aligned with the input
        let raw = utterance[pos + verb.len()..].trim();
        let candidate = clean_title(raw);
        if !candidate.is_empty() {
            return Some(candidate);
        }
    }

    None
}

/// Strip leading fillers, wrapping quotes and any "prefix:" from a raw title.
///
/// Wrappers are trimmed as a set, so mixed nestings such as `'《x》'` come
/// out as `x` rather than losing only the outer pair.
pub fn clean_title(raw: &str) -> String {
    let mut name = raw.trim();

    // One pass over the list, so "一首" then "音乐" can both go
    for filler in LEADING_FILLERS {
        if let Some(len) = prefix_len(name, filler) {
            name = name[len..].trim();
        }
    }

    name = name.trim_matches(|c: char| WRAPPERS.contains(&c));

    if let Some(idx) = name.find(|c: char| SEPARATORS.contains(&c)) {
        let sep_len = name[idx..].chars().next().map_or(1, char::len_utf8);
        name = name[idx + sep_len..].trim();
    }

    name.to_string()
}

fn is_latin_phrase(phrase: &str) -> bool {
    phrase.is_ascii()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Byte offset of the first occurrence of `phrase` in an ASCII-lowercased
/// haystack. Latin phrases must sit on word boundaries ("sing" is not in "using").
fn find_phrase(haystack: &str, phrase: &str) -> Option<usize> {
    if !is_latin_phrase(phrase) {
        return haystack.find(phrase);
    }

    haystack.match_indices(phrase).map(|(i, _)| i).find(|&i| {
        let before = haystack[..i].chars().next_back();
        let after = haystack[i + phrase.len()..].chars().next();
        !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
    })
}

/// Length of `filler` if `text` starts with it (case-insensitive, word-bounded
/// for Latin fillers)
fn prefix_len(text: &str, filler: &str) -> Option<usize> {
    if !is_latin_phrase(filler) {
        return text.starts_with(filler).then_some(filler.len());
    }

    let head = text.get(..filler.len())?;
    if !head.eq_ignore_ascii_case(filler) {
        return None;
    }
    let next = text[filler.len()..].chars().next();
    (!next.is_some_and(is_word_char)).then_some(filler.len())
}
