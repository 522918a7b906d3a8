// The segmentation engine: shared resources plus the two entry points.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::config::Config;
use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::morphology::{self, Lexicon};
use crate::normalize::normalize;
use crate::output::to_segmented;
use crate::reconstruct;
use crate::reduplication;
use crate::rules::RuleStore;
use crate::stemmer::{DictionaryStemmer, Stemmer};
use crate::types::*;

/// Segments words into morphemes and rebuilds words from segmentations.
///
/// All resources are immutable after construction and shared behind `Arc`,
/// so an engine is cheap to clone and safe to use from many threads.
#[derive(Clone)]
pub struct Engine {
    dictionary: Arc<Dictionary>,
    rules: Arc<RuleStore>,
    stemmer: Arc<dyn Stemmer>,
    config: Arc<Config>,
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("roots", &self.dictionary.len())
            .field("prefix_groups", &self.rules.prefix_groups().len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// An engine over the packaged dictionary and rules.
    pub fn new() -> Self {
        EngineBuilder::new().build()
    }

    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// Load each resource from its path when given, or from the packaged
    /// copy otherwise. Explicit paths that cannot be loaded are fatal.
    pub fn from_paths(
        dictionary: Option<&Path>,
        rules: Option<&Path>,
        config: Option<&Path>,
    ) -> Result<Self> {
        let mut builder = EngineBuilder::new();
        if let Some(path) = dictionary {
            builder = builder.dictionary(Dictionary::from_path(path)?);
        }
        if let Some(path) = rules {
            builder = builder.rules(RuleStore::from_path(path)?);
        }
        if let Some(path) = config {
            builder = builder.config(Config::from_path(path)?);
        }
        Ok(builder.build())
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn rules(&self) -> &RuleStore {
        &self.rules
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Segment a word into its `~`-joined morphemes.
    ///
    /// Never fails: words with no usable analysis come back normalised but
    /// otherwise unchanged.
    pub fn segment(&self, word: &str) -> String {
        let normalized = normalize(word);
        if normalized.is_empty() || self.dictionary.contains(&normalized) {
            return normalized;
        }
        match self.choose(&normalized) {
            Some(analysis) => to_segmented(&analysis),
            None => normalized,
        }
    }

    /// Rebuild the surface word from a segmented string.
    pub fn reconstruct(&self, segmented: &str) -> String {
        reconstruct::reconstruct(
            segmented.trim(),
            &self.rules,
            &self.dictionary,
            self.stemmer.as_ref(),
        )
    }

    /// The structured analysis behind [`Engine::segment`].
    ///
    /// A dictionary root is its own bare analysis. Returns `None` for empty
    /// input and for words that pass through unsegmented.
    pub fn analyse(&self, word: &str) -> Option<Analysis> {
        let normalized = normalize(word);
        if normalized.is_empty() {
            return None;
        }
        if self.dictionary.contains(&normalized) {
            return Some(Analysis {
                prefixes: vec![],
                root: normalized,
                redup: None,
                suffixes: vec![],
                redup_suffixes: vec![],
                strategy: Strategy::Bare,
            });
        }
        self.choose(&normalized)
    }

    /// Parse a segmented string into its morphemes without rebuilding.
    pub fn parse(&self, segmented: &str) -> Morphemes {
        reconstruct::parse(segmented.trim(), &self.rules, &self.dictionary)
    }

    /// Segment a batch of words.
    pub fn segment_all<I, S>(&self, words: I) -> Vec<Segmentation>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words
            .into_iter()
            .map(|word| {
                let input = word.as_ref();
                Segmentation {
                    input: input.to_string(),
                    normalized: normalize(input),
                    segmented: self.segment(input),
                }
            })
            .collect()
    }

    fn lexicon(&self) -> Lexicon<'_> {
        Lexicon {
            dictionary: &self.dictionary,
            rules: &self.rules,
            config: &self.config,
        }
    }

    /// Pick the analysis to emit for a normalised, non-root word.
    fn choose(&self, normalized: &str) -> Option<Analysis> {
        let lex = self.lexicon();
        let redup = reduplication::detect(normalized, self.stemmer.as_ref(), lex);
        let candidates = morphology::analyse(&redup, lex);

        if !self.config.features.verify_round_trip {
            return candidates
                .into_iter()
                .next()
                .filter(|a| !to_segmented(a).is_empty());
        }

        for analysis in candidates {
            let segmented = to_segmented(&analysis);
            if segmented.is_empty() || segmented == normalized {
                continue;
            }
            let rebuilt = self.reconstruct(&segmented);
            if rebuilt == normalized {
                return Some(analysis);
            }
            debug!(
                word = normalized,
                %segmented,
                %rebuilt,
                "rejected analysis that does not round-trip"
            );
        }
        None
    }
}

/// Assembles an [`Engine`] from any mix of supplied and packaged resources.
#[derive(Default)]
pub struct EngineBuilder {
    dictionary: Option<Dictionary>,
    rules: Option<RuleStore>,
    config: Option<Config>,
    stemmer: Option<Arc<dyn Stemmer>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dictionary(mut self, dictionary: Dictionary) -> Self {
        self.dictionary = Some(dictionary);
        self
    }

    pub fn rules(mut self, rules: RuleStore) -> Self {
        self.rules = Some(rules);
        self
    }

    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Replace the default dictionary-backed stemmer.
    pub fn stemmer<S: Stemmer + 'static>(mut self, stemmer: S) -> Self {
        self.stemmer = Some(Arc::new(stemmer));
        self
    }

    pub fn build(self) -> Engine {
        let dictionary = Arc::new(self.dictionary.unwrap_or_else(Dictionary::new));
        let rules = Arc::new(self.rules.unwrap_or_else(RuleStore::packaged));
        let config = Arc::new(self.config.unwrap_or_default());
        let stemmer = self
            .stemmer
            .unwrap_or_else(|| Arc::new(DictionaryStemmer::new(Arc::clone(&dictionary))));

        info!(
            roots = dictionary.len(),
            prefix_groups = rules.prefix_groups().len(),
            phonetic_pairs = config.phonetic_pairs.len(),
            "segmentation engine ready"
        );

        Engine {
            dictionary,
            rules,
            stemmer,
            config,
        }
    }
}
