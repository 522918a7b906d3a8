// Ranking of the prefix-first and suffix-first analyses.

use std::cmp::Ordering;

use crate::dictionary::Dictionary;
use crate::types::Strategy;

/// The outcome of one stripping strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub stem: String,
    /// Canonical prefixes, outermost first.
    pub prefixes: Vec<String>,
    /// Suffixes, innermost first.
    pub suffixes: Vec<String>,
    pub strategy: Strategy,
}

impl Candidate {
    /// The unanalysed base: no affixes at all.
    pub fn bare(base: &str) -> Self {
        Self {
            stem: base.to_string(),
            prefixes: vec![],
            suffixes: vec![],
            strategy: Strategy::Bare,
        }
    }
}

/// Order the candidates best first.
///
/// Only strategies whose stem is a dictionary root are kept. Among those the
/// longer stem wins and equal lengths go to prefix-first. The bare base is
/// always appended as the last resort, so with no valid stem it is the only
/// entry.
pub fn rank(
    base: &str,
    prefix_first: Candidate,
    suffix_first: Candidate,
    dict: &Dictionary,
) -> Vec<Candidate> {
    let mut ranked: Vec<Candidate> = [prefix_first, suffix_first]
        .into_iter()
        .filter(|c| dict.contains(&c.stem))
        .collect();
    ranked.sort_by(compare);
    ranked.push(Candidate::bare(base));
    ranked
}

/// Longer stem first, then strategy declaration order.
pub fn compare(a: &Candidate, b: &Candidate) -> Ordering {
    b.stem
        .chars()
        .count()
        .cmp(&a.stem.chars().count())
        .then_with(|| a.strategy.cmp(&b.strategy))
}
