use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, SegmenterError};
use crate::normalize::normalize;

const PACKAGED_ROOTS: &str = include_str!("../data/kata-dasar.txt");

/// Set of known root words (kata dasar).
///
/// The word set is public so callers can swap it wholesale, e.g. to measure
/// how segmentation degrades with a smaller dictionary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    pub words: HashSet<String>,
}

impl Dictionary {
    /// Load the packaged root list.
    ///
    /// The packaged list holds a few hundred common roots, enough for the
    /// bundled rules and tests but far short of a full kata dasar list.
    /// Words built on roots it lacks pass through unsegmented; load a
    /// complete list with [`Dictionary::from_path`] for real text.
    pub fn new() -> Self {
        let dict = Self::parse(PACKAGED_ROOTS);
        debug!(roots = dict.len(), "loaded packaged dictionary");
        dict
    }

    /// An empty dictionary: nothing is a root, so nothing is stripped with
    /// confidence.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a root list: one word per line, `#` lines are comments.
    pub fn parse(text: &str) -> Self {
        let words = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(normalize)
            .filter(|word| !word.is_empty())
            .collect();
        Self { words }
    }

    /// Load a root list from an explicit path. A missing or unreadable file
    /// is fatal.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| SegmenterError::DictionaryRead {
            path: path.to_path_buf(),
            source,
        })?;
        let dict = Self::parse(&text);
        debug!(roots = dict.len(), path = %path.display(), "loaded dictionary");
        Ok(dict)
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| normalize(w.as_ref()))
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Check whether a word is a known root.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Check whether a word is a known root with a single vowel, the
    /// condition for the {menge-}/{penge-} allomorphs.
    pub fn is_monosyllabic_root(&self, word: &str) -> bool {
        self.contains(word) && is_monosyllabic(word)
    }

    /// Replace the whole word set.
    pub fn replace_words(&mut self, words: HashSet<String>) {
        self.words = words;
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

pub(crate) fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// A word with exactly one vowel letter ({bom}, {cat}, {las}).
pub fn is_monosyllabic(word: &str) -> bool {
    word.chars().filter(|&c| is_vowel(c)).count() == 1
}
