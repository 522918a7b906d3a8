// Prefix and suffix rule tables, loaded from a JSON document of the form
// `{ "prefixes": [...], "suffixes": [...] }`.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{Result, SegmenterError};
use crate::types::{PrefixRule, SuffixRule, SuffixType};

const PACKAGED_RULES: &str = include_str!("../data/rules.json");

#[derive(Debug, Default, Deserialize)]
struct RulesDocument {
    #[serde(default)]
    prefixes: Vec<PrefixRule>,
    #[serde(default)]
    suffixes: Vec<SuffixRule>,
}

/// Indexed prefix and suffix rules.
///
/// Definition order is kept: prefix groups are swept in file order and
/// suffix tiers list their forms in file order.
#[derive(Debug, Clone, Default)]
pub struct RuleStore {
    prefixes: Vec<PrefixRule>,
    prefix_index: HashMap<String, usize>,
    suffixes: Vec<SuffixRule>,
    suffix_index: HashMap<String, usize>,
}

impl RuleStore {
    /// An empty store: no affix is ever recognised.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load the packaged rules. A malformed packaged file downgrades to an
    /// empty store.
    pub fn packaged() -> Self {
        match Self::from_json_str(PACKAGED_RULES) {
            Ok(store) => store,
            Err(e) => {
                warn!("packaged rules are malformed, continuing without rules: {e}");
                Self::empty()
            }
        }
    }

    /// Parse a rules document. Blank input yields an empty store.
    pub fn from_json_str(json: &str) -> std::result::Result<Self, serde_json::Error> {
        if json.trim().is_empty() {
            return Ok(Self::empty());
        }
        let doc: RulesDocument = serde_json::from_str(json)?;
        Ok(Self::from_rules(doc.prefixes, doc.suffixes))
    }

    /// Load rules from an explicit path. Missing or malformed files are fatal.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| SegmenterError::RulesRead {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_json_str(&text).map_err(|source| SegmenterError::RulesParse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(
            prefixes = store.prefixes.len(),
            suffixes = store.suffixes.len(),
            path = %path.display(),
            "loaded rules"
        );
        Ok(store)
    }

    pub fn from_rules(prefixes: Vec<PrefixRule>, suffixes: Vec<SuffixRule>) -> Self {
        let mut store = Self::empty();
        for rule in prefixes {
            // A repeated canonical replaces the earlier definition in place.
            match store.prefix_index.get(&rule.canonical) {
                Some(&i) => store.prefixes[i] = rule,
                None => {
                    store
                        .prefix_index
                        .insert(rule.canonical.clone(), store.prefixes.len());
                    store.prefixes.push(rule);
                }
            }
        }
        for rule in suffixes {
            match store.suffix_index.get(&rule.form) {
                Some(&i) => store.suffixes[i] = rule,
                None => {
                    store
                        .suffix_index
                        .insert(rule.form.clone(), store.suffixes.len());
                    store.suffixes.push(rule);
                }
            }
        }
        store
    }

    pub fn get_prefix_group(&self, canonical: &str) -> Option<&PrefixRule> {
        self.prefix_index.get(canonical).map(|&i| &self.prefixes[i])
    }

    pub fn get_suffix(&self, form: &str) -> Option<&SuffixRule> {
        self.suffix_index.get(form).map(|&i| &self.suffixes[i])
    }

    pub fn suffix_type(&self, form: &str) -> Option<SuffixType> {
        self.get_suffix(form).map(|s| s.kind)
    }

    pub fn is_prefix(&self, canonical: &str) -> bool {
        self.prefix_index.contains_key(canonical)
    }

    pub fn is_suffix(&self, form: &str) -> bool {
        self.suffix_index.contains_key(form)
    }

    /// All prefix groups in definition order.
    pub fn prefix_groups(&self) -> &[PrefixRule] {
        &self.prefixes
    }

    /// Suffix forms of one type, in definition order.
    pub fn suffixes_of_type(&self, kind: SuffixType) -> impl Iterator<Item = &str> + '_ {
        self.suffixes
            .iter()
            .filter(move |s| s.kind == kind)
            .map(|s| s.form.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty() && self.suffixes.is_empty()
    }
}
