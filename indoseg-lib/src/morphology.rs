// Affix stripping for Indonesian words.
//
// A word (or the base handed over by the reduplication detector) is analysed
// by two strategies:
//   S1. strip prefixes, then suffixes
//   S2. strip suffixes, then prefixes
// and the selection rule in `selection` ranks the two outcomes by
// dictionary validity.
//
// Prefix stripping reverses nasal assimilation: {memukul} loses {mem} and
// regains the elided {p} of {pukul}. Suffix stripping peels the tiers
// particle → possessive → derivational, restarting from the outermost tier
// after every match.
//
// Stripping is bounded only by the length minima and the layer cap; the
// dictionary decides afterwards which strategy survives. The
// `dictionary_stops` feature makes both strippers halt at roots instead.

use tracing::debug;

use crate::config::Config;
use crate::dictionary::{is_vowel, Dictionary};
use crate::rules::RuleStore;
use crate::selection::{self, Candidate};
use crate::types::*;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Upper bound on stacked prefixes ({meN-per-} is two).
const MAX_PREFIX_LAYERS: usize = 5;

/// (suffix, residue) pairs that are never split: {sekolah} is not
/// {seko} + {-lah}.
const PROTECTED_RESIDUES: &[(&str, &str)] = &[("lah", "seko")];

/// Shared read-only resources for one analysis.
#[derive(Clone, Copy)]
pub struct Lexicon<'a> {
    pub dictionary: &'a Dictionary,
    pub rules: &'a RuleStore,
    pub config: &'a Config,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Analyse a reduplication base with both strategies.
///
/// Returns every distinct analysis worth trying, best first: the selected
/// strategy, then the other strategy when its stem is also a root, then the
/// bare base with no affixes.
pub fn analyse(redup: &Reduplication, lex: Lexicon<'_>) -> Vec<Analysis> {
    let base = redup.base.as_str();

    // S1: prefixes, then suffixes.
    let (after_prefixes, prefixes1) = strip_prefixes(base, lex);
    let (stem1, suffixes1) = strip_suffixes(&after_prefixes, lex);
    let prefix_first = Candidate {
        stem: stem1,
        prefixes: prefixes1,
        suffixes: suffixes1,
        strategy: Strategy::PrefixFirst,
    };

    // S2: suffixes, then prefixes.
    let (after_suffixes, suffixes2) = strip_suffixes(base, lex);
    let (stem2, prefixes2) = strip_prefixes(&after_suffixes, lex);
    let suffix_first = Candidate {
        stem: stem2,
        prefixes: prefixes2,
        suffixes: suffixes2,
        strategy: Strategy::SuffixFirst,
    };

    let ranked = selection::rank(base, prefix_first, suffix_first, lex.dictionary);
    debug!(
        base,
        best = ?ranked.first().map(|c| (&c.stem, c.strategy)),
        "ranked strategies"
    );

    let mut analyses: Vec<Analysis> = Vec::new();
    for candidate in ranked {
        let analysis = Analysis {
            prefixes: candidate.prefixes,
            root: candidate.stem,
            redup: redup.marker.clone(),
            suffixes: candidate.suffixes,
            redup_suffixes: redup.suffixes.clone(),
            strategy: candidate.strategy,
        };
        if !analyses.iter().any(|a| same_morphemes(a, &analysis)) {
            analyses.push(analysis);
        }
    }
    analyses
}

/// Strip up to five prefix layers from `word`.
///
/// Returns the final stem and the canonical prefixes, outermost first.
pub fn strip_prefixes(word: &str, lex: Lexicon<'_>) -> (String, Vec<String>) {
    let mut current = word.to_string();
    let mut prefixes = Vec::new();

    if lex.config.features.dictionary_stops && lex.dictionary.contains(&current) {
        return (current, prefixes);
    }

    for _ in 0..MAX_PREFIX_LAYERS {
        let Some(strip) = best_prefix_strip(&current, lex) else {
            break;
        };
        debug!(
            word = %current,
            prefix = %strip.canonical,
            surface = %strip.surface,
            stem = %strip.stem,
            "stripped prefix"
        );
        prefixes.push(strip.canonical);
        current = strip.stem;
        if strip.in_dictionary {
            break;
        }
    }

    (current, prefixes)
}

/// Strip suffix tiers from `word`.
///
/// Returns the stem and the stripped suffixes in attachment order
/// (innermost first). With dictionary stops enabled, peeling halts as soon
/// as the residue is a dictionary root.
pub fn strip_suffixes(word: &str, lex: Lexicon<'_>) -> (String, Vec<String>) {
    peel_suffixes(word, lex, SuffixMode::Word)
}

/// Strip a bare suffix cluster such as {annya} left over after the root of
/// a reduplicated second member.
///
/// Length minima are relaxed and no dictionary check applies. Returns the
/// suffixes in attachment order, or `None` unless the whole cluster is
/// consumed.
pub fn strip_suffix_cluster(cluster: &str, lex: Lexicon<'_>) -> Option<Vec<String>> {
    if cluster.is_empty() {
        return None;
    }
    let (rest, stripped) = peel_suffixes(cluster, lex, SuffixMode::Cluster);
    if rest.is_empty() {
        Some(stripped)
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// Prefix stripping
// ---------------------------------------------------------------------------

/// One way of removing a prefix from the current word.
#[derive(Debug, Clone)]
struct PrefixStrip {
    canonical: String,
    surface: String,
    stem: String,
    in_dictionary: bool,
}

impl PrefixStrip {
    fn surface_len(&self) -> usize {
        self.surface.chars().count()
    }

    fn stem_len(&self) -> usize {
        self.stem.chars().count()
    }
}

/// Sweep the prefix groups in order and pick the stripping to commit.
///
/// The first group with any candidate commits: its dictionary root if it
/// found one, else its candidate with the longest surface, ties going to
/// the longer stem. With dictionary stops enabled the sweep continues past
/// groups without a root, and the fallback is the best candidate across all
/// of them (earlier group on a full tie). The packaged rules give the same
/// result either way, since only {per} and {peN} share an opening.
fn best_prefix_strip(word: &str, lex: Lexicon<'_>) -> Option<PrefixStrip> {
    let mut fallback: Option<PrefixStrip> = None;

    for rule in lex.rules.prefix_groups() {
        let candidates = group_candidates(word, rule, lex.dictionary);
        if let Some(hit) = candidates.iter().find(|c| c.in_dictionary) {
            return Some(hit.clone());
        }
        for candidate in candidates {
            let better = match &fallback {
                None => true,
                Some(best) => {
                    (candidate.surface_len(), candidate.stem_len())
                        > (best.surface_len(), best.stem_len())
                }
            };
            if better {
                fallback = Some(candidate);
            }
        }
        if fallback.is_some() && !lex.config.features.dictionary_stops {
            break;
        }
    }

    fallback
}

/// All stripping candidates one prefix group offers for `word`, in
/// allomorph order. Scanning stops at the first dictionary root.
fn group_candidates(word: &str, rule: &PrefixRule, dict: &Dictionary) -> Vec<PrefixStrip> {
    let mut out = Vec::new();

    if rule.allomorphs.is_empty() {
        let surface = rule.surface();
        if let Some(remainder) = word.strip_prefix(surface) {
            if !remainder.is_empty() {
                out.push(PrefixStrip {
                    canonical: rule.canonical.clone(),
                    surface: surface.to_string(),
                    stem: remainder.to_string(),
                    in_dictionary: dict.contains(remainder),
                });
            }
        }
        return out;
    }

    for allomorph in &rule.allomorphs {
        let Some(stem) = allomorph_candidate(word, allomorph, dict) else {
            continue;
        };
        let in_dictionary = dict.contains(&stem);
        out.push(PrefixStrip {
            canonical: rule.canonical.clone(),
            surface: allomorph.surface.clone(),
            stem,
            in_dictionary,
        });
        if in_dictionary {
            break;
        }
    }

    out
}

/// The stem left by removing `allomorph` from `word`, if it applies.
fn allomorph_candidate(word: &str, allomorph: &Allomorph, dict: &Dictionary) -> Option<String> {
    if allomorph.surface.is_empty() {
        return None;
    }
    let remainder = word.strip_prefix(allomorph.surface.as_str())?;
    if remainder.is_empty() {
        return None;
    }

    let candidate = match allomorph.elided_initial() {
        // Chained prefix ({mem} + {per...}): nothing was elided.
        Some(initial) if remainder.starts_with(initial) => remainder.to_string(),
        // Elided consonants are always followed by a vowel.
        Some(initial) => {
            if !remainder.chars().next().is_some_and(is_vowel) {
                return None;
            }
            format!("{initial}{remainder}")
        }
        None => remainder.to_string(),
    };

    if !allomorph.next_char_is.is_empty() && !allomorph.next_char_matches(&candidate) {
        return None;
    }
    if allomorph.is_monosyllabic_root && !dict.is_monosyllabic_root(&candidate) {
        return None;
    }
    if !allomorph.condition_exact_root.is_empty() && !allomorph.exact_root_matches(&candidate) {
        return None;
    }

    Some(candidate)
}

// ---------------------------------------------------------------------------
// Suffix stripping
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SuffixMode {
    /// A whole word: length minima apply.
    Word,
    /// A bare suffix cluster: strip everything.
    Cluster,
}

/// Iteratively strip suffixes tier by tier, restarting from the outermost
/// tier after every match.
fn peel_suffixes(word: &str, lex: Lexicon<'_>, mode: SuffixMode) -> (String, Vec<String>) {
    let mut current = word.to_string();
    // Outermost first; reversed before returning.
    let mut stripped: Vec<String> = Vec::new();

    'outer: loop {
        if mode == SuffixMode::Word
            && lex.config.features.dictionary_stops
            && lex.dictionary.contains(&current)
        {
            break;
        }
        for kind in SuffixType::TIERS {
            let min_residue = match mode {
                SuffixMode::Word => lex.config.min_stem_length.for_type(kind),
                SuffixMode::Cluster => 0,
            };
            for suffix in lex.rules.suffixes_of_type(kind) {
                if suffix.is_empty() {
                    continue;
                }
                let Some(residue) = current.strip_suffix(suffix) else {
                    continue;
                };
                if residue.chars().count() < min_residue {
                    continue;
                }
                if mode == SuffixMode::Word && is_protected(suffix, residue) {
                    continue;
                }
                stripped.push(suffix.to_string());
                current = residue.to_string();
                continue 'outer;
            }
        }
        break;
    }

    stripped.reverse();
    (current, stripped)
}

fn is_protected(suffix: &str, residue: &str) -> bool {
    PROTECTED_RESIDUES
        .iter()
        .any(|&(s, r)| s == suffix && r == residue)
}

/// Two analyses that would render identically.
fn same_morphemes(a: &Analysis, b: &Analysis) -> bool {
    a.prefixes == b.prefixes
        && a.root == b.root
        && a.suffixes == b.suffixes
        && a.redup == b.redup
        && a.redup_suffixes == b.redup_suffixes
}
