// Reduplication detection.
//
// Three patterns are recognised:
//   dwilingga   full repetition          {rumah-rumah}, {bermain-main}
//   salin suara repetition with a sound  {sayur-mayur}, {bolak-balik}
//               change
//   dwipurwa    partial initial syllable {lelaki}, {tetamu}

use tracing::debug;

use crate::dictionary::is_vowel;
use crate::morphology::{strip_suffix_cluster, Lexicon};
use crate::stemmer::Stemmer;
use crate::types::{RedupMarker, Reduplication};

/// Suffixes attached directly to a full reduplication ({mobil-mobilan}).
const DIRECT_SUFFIXES: &[&str] = &["an", "nya"];

/// Dwipurwa words recognised without consulting the stemmer.
const DWIPURWA_WORDS: &[&str] = &["lelaki", "sesama", "tetamu"];

/// Detect a reduplication pattern in a normalised word.
///
/// Returns the base to hand on to affix stripping, the marker (if any) and
/// any suffixes attached after the reduplication. Words with no pattern come
/// back as their own base with no marker.
pub fn detect(word: &str, stemmer: &dyn Stemmer, lex: Lexicon<'_>) -> Reduplication {
    let detected = match word.split_once('-') {
        Some((first, second)) if !first.is_empty() && !second.is_empty() => {
            hyphenated(first, second, stemmer, lex)
        }
        _ => None,
    }
    .or_else(|| dwipurwa(word, stemmer, lex));

    match detected {
        Some(redup) => {
            debug!(word, base = %redup.base, marker = ?redup.marker, "reduplication");
            redup
        }
        None => Reduplication::none(word),
    }
}

fn full(base: &str, suffixes: Vec<String>) -> Reduplication {
    Reduplication {
        base: base.to_string(),
        marker: Some(RedupMarker::Ulg),
        suffixes,
    }
}

fn hyphenated(
    first: &str,
    second: &str,
    stemmer: &dyn Stemmer,
    lex: Lexicon<'_>,
) -> Option<Reduplication> {
    // {mobil-mobilan}, {buku-bukunya}
    if let Some(rest) = second.strip_prefix(first) {
        if let Some(&suffix) = DIRECT_SUFFIXES.iter().find(|&&s| s == rest) {
            return Some(full(first, vec![suffix.to_string()]));
        }
    }

    if lex.config.is_phonetic_pair(first, second) {
        return Some(Reduplication {
            base: first.to_string(),
            marker: Some(RedupMarker::Rs {
                variant: second.to_string(),
            }),
            suffixes: vec![],
        });
    }

    if first == second {
        return Some(full(first, vec![]));
    }

    // Both halves share a root: {bermain-main}, {rumah-rumahannya}.
    let stem = stemmer.root_of(first);
    if stem != stemmer.root_of(second) {
        return None;
    }
    if stem == second {
        return Some(full(first, vec![]));
    }
    let suffixes = second
        .strip_prefix(stem.as_str())
        .and_then(|cluster| strip_suffix_cluster(cluster, lex))
        .or_else(|| {
            second
                .strip_prefix(first)
                .and_then(|cluster| strip_suffix_cluster(cluster, lex))
        })
        .unwrap_or_default();
    Some(full(first, suffixes))
}

fn dwipurwa(word: &str, stemmer: &dyn Stemmer, lex: Lexicon<'_>) -> Option<Reduplication> {
    let rp = |base: String| Reduplication {
        base,
        marker: Some(RedupMarker::Rp),
        suffixes: vec![],
    };

    if lex.config.features.dwipurwa_whitelist && DWIPURWA_WORDS.contains(&word) {
        return Some(rp(word.chars().skip(2).collect()));
    }

    let root = stemmer.root_of(word);
    if root.is_empty() || root == word {
        return None;
    }
    let head = word.strip_suffix(root.as_str())?;

    // The head is the root's first consonant followed by a schwa.
    let mut head_chars = head.chars();
    let (Some(initial), Some('e'), None) = (head_chars.next(), head_chars.next(), head_chars.next())
    else {
        return None;
    };
    let mut root_chars = root.chars();
    if root_chars.next() != Some(initial) {
        return None;
    }
    match root_chars.next() {
        None => {}
        Some(c) if is_vowel(c) => {}
        Some(_) => return None,
    }

    Some(rp(root))
}
