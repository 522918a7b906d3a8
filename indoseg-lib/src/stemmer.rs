// Root-finding oracle consulted by the reduplication detector and by
// reconstruction of full reduplication.

use std::collections::HashSet;
use std::sync::Arc;

use crate::dictionary::Dictionary;

/// Maps a (possibly affixed) word to its root.
pub trait Stemmer: Send + Sync {
    fn root_of(&self, word: &str) -> String;
}

impl<F> Stemmer for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn root_of(&self, word: &str) -> String {
        self(word)
    }
}

const PARTICLES: &[&str] = &["lah", "kah", "tah", "pun"];
const POSSESSIVES: &[&str] = &["nya", "ku", "mu"];
const DERIVATIONAL: &[&str] = &["kan", "an", "i"];

// Prefix surfaces with the consonant their nasal assimilation deletes.
// Longer surfaces come first so {menge} is tried before {meng} and {me}.
const PREFIX_FORMS: &[(&str, Option<char>)] = &[
    ("menge", None),
    ("penge", None),
    ("meny", Some('s')),
    ("peny", Some('s')),
    ("meng", Some('k')),
    ("meng", None),
    ("peng", Some('k')),
    ("peng", None),
    ("mem", Some('p')),
    ("mem", None),
    ("pem", Some('p')),
    ("pem", None),
    ("men", Some('t')),
    ("men", None),
    ("pen", Some('t')),
    ("pen", None),
    ("ber", None),
    ("bel", None),
    ("per", None),
    ("pel", None),
    ("ter", None),
    ("me", None),
    ("pe", None),
    ("be", None),
    ("te", None),
    ("di", None),
    ("ke", None),
    ("se", None),
];

const MAX_PREFIX_LAYERS: usize = 3;
const MIN_STEM_CHARS: usize = 2;

/// Dictionary-backed heuristic stemmer.
///
/// Peels particle, possessive and derivational suffixes in turn; for each
/// intermediate form runs a breadth-first search over prefix surfaces
/// (restoring elided consonants) and returns the first dictionary root
/// found. Words with no recognisable root come back unchanged.
#[derive(Debug, Clone)]
pub struct DictionaryStemmer {
    dictionary: Arc<Dictionary>,
}

impl DictionaryStemmer {
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        Self { dictionary }
    }

    fn strip_prefixes(&self, stem: &str) -> Option<String> {
        if self.dictionary.contains(stem) {
            return Some(stem.to_string());
        }
        let mut frontier = vec![stem.to_string()];
        let mut seen: HashSet<String> = HashSet::new();
        for _ in 0..MAX_PREFIX_LAYERS {
            let mut next = Vec::new();
            for form in &frontier {
                for &(surface, restore) in PREFIX_FORMS {
                    let Some(rest) = form.strip_prefix(surface) else {
                        continue;
                    };
                    if rest.chars().count() < MIN_STEM_CHARS {
                        continue;
                    }
                    let candidate = match restore {
                        Some(c) => format!("{c}{rest}"),
                        None => rest.to_string(),
                    };
                    if self.dictionary.contains(&candidate) {
                        return Some(candidate);
                    }
                    if seen.insert(candidate.clone()) {
                        next.push(candidate);
                    }
                }
            }
            if next.is_empty() {
                break;
            }
            frontier = next;
        }
        None
    }
}

impl Stemmer for DictionaryStemmer {
    fn root_of(&self, word: &str) -> String {
        if word.is_empty() || self.dictionary.contains(word) {
            return word.to_string();
        }
        for form in suffix_layers(word) {
            if let Some(root) = self.strip_prefixes(&form) {
                return root;
            }
        }
        word.to_string()
    }
}

/// The word followed by each successively suffix-stripped form.
fn suffix_layers(word: &str) -> Vec<String> {
    let mut layers = vec![word.to_string()];
    let mut current = word.to_string();
    for tier in [PARTICLES, POSSESSIVES, DERIVATIONAL] {
        let stripped = tier.iter().find_map(|suffix| {
            current
                .strip_suffix(suffix)
                .filter(|rest| rest.chars().count() >= MIN_STEM_CHARS)
                .map(str::to_string)
        });
        if let Some(rest) = stripped {
            layers.push(rest.clone());
            current = rest;
        }
    }
    layers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stemmer() -> DictionaryStemmer {
        DictionaryStemmer::new(Arc::new(Dictionary::new()))
    }

    #[test]
    fn test_root_is_returned_unchanged() {
        assert_eq!(stemmer().root_of("main"), "main");
        assert_eq!(stemmer().root_of(""), "");
    }

    #[test]
    fn test_prefixed_words() {
        let s = stemmer();
        assert_eq!(s.root_of("bermain"), "main");
        assert_eq!(s.root_of("berlari"), "lari");
        assert_eq!(s.root_of("dibaca"), "baca");
        assert_eq!(s.root_of("memukul"), "pukul");
        assert_eq!(s.root_of("menyapu"), "sapu");
        assert_eq!(s.root_of("mengupas"), "kupas");
        assert_eq!(s.root_of("menulis"), "tulis");
    }

    #[test]
    fn test_suffixed_words() {
        let s = stemmer();
        assert_eq!(s.root_of("mainan"), "main");
        assert_eq!(s.root_of("makanan"), "makan");
        assert_eq!(s.root_of("bukunyalah"), "buku");
    }

    #[test]
    fn test_confixed_words() {
        let s = stemmer();
        assert_eq!(s.root_of("keberhasilan"), "hasil");
        assert_eq!(s.root_of("pembangunan"), "bangun");
        assert_eq!(s.root_of("mempertaruhkan"), "taruh");
    }

    #[test]
    fn test_unknown_word_unchanged() {
        assert_eq!(stemmer().root_of("lelaki"), "lelaki");
        assert_eq!(stemmer().root_of("xyzzy"), "xyzzy");
    }

    #[test]
    fn test_closure_stemmer() {
        let strip_nya = |w: &str| -> String { w.trim_end_matches("nya").to_string() };
        let s: &dyn Stemmer = &strip_nya;
        assert_eq!(s.root_of("bukunya"), "buku");
    }
}
