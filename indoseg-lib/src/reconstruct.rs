// Reconstruction of surface words from segmented strings.
//
// Parsing sorts the `~`-separated tokens into prefixes, suffix tiers, the
// reduplication marker and the root. Rebuilding runs in the opposite order
// to segmentation:
//   root → derivational suffixes → reduplication → possessives → particles
//   → prefixes (innermost first, with forward morphophonemics)

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::trace;

use crate::dictionary::Dictionary;
use crate::output::SEPARATOR;
use crate::rules::RuleStore;
use crate::stemmer::Stemmer;
use crate::types::*;

/// A phonetic-change marker, whose variant sits behind its own `~`.
static RS_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"rs\(~([^)]*)\)").unwrap());

/// Stand-in for a masked `rs(~V)` token while splitting.
const RS_PLACEHOLDER: &str = "\u{1}rs\u{1}";

// {meN-} keeps the {p} of an inner {per-}.
const NASAL_PREFIX: &str = "meN";
const CHAINED_PREFIX: &str = "per";

/// Parse a segmented string into its morphemes.
pub fn parse(segmented: &str, rules: &RuleStore, dict: &Dictionary) -> Morphemes {
    let mut variants: Vec<String> = Vec::new();
    let masked = RS_TOKEN.replace_all(segmented, |caps: &Captures<'_>| {
        variants.push(caps[1].to_string());
        RS_PLACEHOLDER
    });
    let mut variants = variants.into_iter();

    let mut m = Morphemes::default();
    let mut root_candidates: Vec<&str> = Vec::new();

    for token in masked.split(SEPARATOR).filter(|t| !t.is_empty()) {
        match token {
            "ulg" => m.redup = Some(RedupMarker::Ulg),
            "rp" => m.redup = Some(RedupMarker::Rp),
            RS_PLACEHOLDER => {
                m.redup = Some(RedupMarker::Rs {
                    variant: variants.next().unwrap_or_default(),
                })
            }
            t if rules.is_prefix(t) => m.prefixes.push(t.to_string()),
            t => match rules.suffix_type(t) {
                Some(SuffixType::Derivational) if m.redup.is_some() => {
                    m.suffixes_after_reduplication.push(t.to_string())
                }
                Some(SuffixType::Derivational) => m.suffixes_derivational.push(t.to_string()),
                Some(SuffixType::Possessive) => m.suffixes_possessive.push(t.to_string()),
                Some(SuffixType::Particle) => m.suffixes_particle.push(t.to_string()),
                None => root_candidates.push(t),
            },
        }
    }

    m.root = root_candidates
        .iter()
        .find(|c| dict.contains(c))
        .or_else(|| root_candidates.first())
        .map(|c| c.to_string())
        .unwrap_or_default();
    m
}

/// Rebuild the surface form of parsed morphemes.
pub fn rebuild(
    m: &Morphemes,
    rules: &RuleStore,
    dict: &Dictionary,
    stemmer: &dyn Stemmer,
) -> String {
    let mut form = m.root.clone();
    form.extend(m.suffixes_derivational.iter().map(String::as_str));

    if let Some(marker) = &m.redup {
        form = reduplicate(form, marker, m, stemmer);
    }

    form.extend(m.suffixes_possessive.iter().map(String::as_str));
    form.extend(m.suffixes_particle.iter().map(String::as_str));

    for (i, prefix) in m.prefixes.iter().enumerate().rev() {
        let inner = m.prefixes.get(i + 1).map(String::as_str);
        form = apply_prefix(prefix, &form, &m.root, inner, rules, dict);
    }

    trace!(morphemes = ?m, word = %form, "rebuilt");
    form
}

/// Parse and rebuild in one step.
pub fn reconstruct(
    segmented: &str,
    rules: &RuleStore,
    dict: &Dictionary,
    stemmer: &dyn Stemmer,
) -> String {
    rebuild(&parse(segmented, rules, dict), rules, dict, stemmer)
}

fn reduplicate(form: String, marker: &RedupMarker, m: &Morphemes, stemmer: &dyn Stemmer) -> String {
    let after = m.suffixes_after_reduplication.concat();
    match marker {
        RedupMarker::Ulg | RedupMarker::Rp if form.is_empty() => form,
        RedupMarker::Ulg if !after.is_empty() => {
            format!("{form}-{}{after}", stemmer.root_of(&form))
        }
        RedupMarker::Ulg
            if !m.suffixes_possessive.is_empty() || !m.suffixes_particle.is_empty() =>
        {
            format!("{form}-{}", stemmer.root_of(&form))
        }
        RedupMarker::Ulg => format!("{form}-{form}"),
        RedupMarker::Rp => {
            let initial: String = form.chars().take(1).collect();
            format!("{initial}e{form}{after}")
        }
        RedupMarker::Rs { variant } => format!("{form}-{variant}{after}"),
    }
}

/// Attach one canonical prefix to `base`, choosing its allomorph and
/// deleting the consonant it assimilates.
///
/// `root` is the originally parsed root, consulted for the monosyllabic and
/// exact-root conditions. `inner` is the prefix directly inside this one, if
/// any.
pub fn apply_prefix(
    canonical: &str,
    base: &str,
    root: &str,
    inner: Option<&str>,
    rules: &RuleStore,
    dict: &Dictionary,
) -> String {
    let Some(rule) = rules.get_prefix_group(canonical) else {
        return format!("{canonical}{base}");
    };

    let Some(allomorph) = rule
        .allomorphs
        .iter()
        .find(|a| allomorph_applies(a, base, root, dict))
    else {
        return format!("{}{base}", rule.surface());
    };

    let keeps_initial = canonical == NASAL_PREFIX && inner == Some(CHAINED_PREFIX);
    let effective_base = match allomorph.elided_initial() {
        Some(initial) if !keeps_initial => base.strip_prefix(initial).unwrap_or(base),
        _ => base,
    };
    format!("{}{effective_base}", allomorph.surface)
}

fn allomorph_applies(a: &Allomorph, base: &str, root: &str, dict: &Dictionary) -> bool {
    if a.is_default() {
        return true;
    }
    if !a.next_char_is.is_empty() && !a.next_char_matches(base) {
        return false;
    }
    if a.is_monosyllabic_root && !dict.is_monosyllabic_root(root) {
        return false;
    }
    if !a.condition_exact_root.is_empty()
        && !a.exact_root_matches(base)
        && !a.exact_root_matches(root)
    {
        return false;
    }
    true
}
