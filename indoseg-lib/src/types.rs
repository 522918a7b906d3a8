use serde::{Deserialize, Serialize};

/// Reduplication pattern attached to a segmentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RedupMarker {
    /// Full reduplication (dwilingga), e.g. {rumah-rumah}.
    Ulg,
    /// Partial initial reduplication (dwipurwa), e.g. {lelaki}.
    Rp,
    /// Reduplication with a phonetic change (salin suara), e.g. {sayur-mayur}.
    Rs { variant: String },
}

impl RedupMarker {
    /// Token spelling inside a segmented string.
    pub fn token(&self) -> String {
        match self {
            RedupMarker::Ulg => "ulg".to_string(),
            RedupMarker::Rp => "rp".to_string(),
            RedupMarker::Rs { variant } => format!("rs(~{variant})"),
        }
    }
}

/// Suffix category, in the order the suffix stripper peels them
/// (outermost first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SuffixType {
    #[serde(rename = "particle")]
    Particle,
    #[serde(rename = "possessive")]
    Possessive,
    #[serde(rename = "suffix_derivational")]
    Derivational,
}

impl SuffixType {
    /// Stripping tiers, outermost first.
    pub const TIERS: [SuffixType; 3] = [
        SuffixType::Particle,
        SuffixType::Possessive,
        SuffixType::Derivational,
    ];
}

/// One surface realisation of a canonical prefix.
///
/// An allomorph with no gating key set is a default and always applies.
/// When several keys are set, all of them must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allomorph {
    /// The concrete leading string (e.g. {mem}, {meny}, {bel}).
    pub surface: String,
    /// Stem-initial strings that gate applicability.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub next_char_is: Vec<String>,
    /// Requires a dictionary-known monosyllabic root.
    #[serde(default)]
    pub is_monosyllabic_root: bool,
    /// Explicit whitelist of stems.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub condition_exact_root: Vec<String>,
    /// Whether attaching this surface deletes the root-initial consonant.
    #[serde(default)]
    pub elision: bool,
    /// The consonant deleted by elision (restored when stripping).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reconstruct_root_initial: Option<String>,
}

impl Allomorph {
    pub fn is_default(&self) -> bool {
        self.next_char_is.is_empty()
            && !self.is_monosyllabic_root
            && self.condition_exact_root.is_empty()
    }

    /// The consonant restored on stripping, if this allomorph elides one.
    pub fn elided_initial(&self) -> Option<&str> {
        if !self.elision {
            return None;
        }
        self.reconstruct_root_initial
            .as_deref()
            .filter(|c| !c.is_empty())
    }

    pub fn next_char_matches(&self, stem: &str) -> bool {
        self.next_char_is.iter().any(|c| stem.starts_with(c.as_str()))
    }

    pub fn exact_root_matches(&self, stem: &str) -> bool {
        self.condition_exact_root.iter().any(|r| r == stem)
    }
}

/// A prefix rule keyed by its canonical form (e.g. {meN}, {ber}, {di}).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixRule {
    pub canonical: String,
    /// Plain surface form used when no allomorph applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allomorphs: Vec<Allomorph>,
}

impl PrefixRule {
    /// Surface used for simple prefixes and as the last-resort surface.
    pub fn surface(&self) -> &str {
        self.form.as_deref().unwrap_or(&self.canonical)
    }
}

/// A suffix rule keyed by its surface form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuffixRule {
    pub form: String,
    #[serde(rename = "type")]
    pub kind: SuffixType,
}

/// Which stripping order produced an analysis. Declaration order is the
/// tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    PrefixFirst,
    SuffixFirst,
    /// No affix was recognised; the base is emitted as the root.
    Bare,
}

/// Output of the reduplication detector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reduplication {
    /// The part handed on to affix stripping.
    pub base: String,
    pub marker: Option<RedupMarker>,
    /// Suffixes attached directly to the reduplicated whole (e.g. {-an} in
    /// {mobil-mobilan}).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suffixes: Vec<String>,
}

impl Reduplication {
    pub fn none(word: &str) -> Self {
        Self {
            base: word.to_string(),
            marker: None,
            suffixes: vec![],
        }
    }
}

/// One complete segmentation of a word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    /// Canonical prefixes, outermost first.
    pub prefixes: Vec<String>,
    pub root: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redup: Option<RedupMarker>,
    /// Suffixes in attachment order (innermost first).
    pub suffixes: Vec<String>,
    /// Suffixes attached after reduplication.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub redup_suffixes: Vec<String>,
    pub strategy: Strategy,
}

/// Morphemes parsed back out of a segmented string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Morphemes {
    pub root: String,
    /// Canonical prefixes, outermost first.
    pub prefixes: Vec<String>,
    pub suffixes_derivational: Vec<String>,
    pub suffixes_particle: Vec<String>,
    pub suffixes_possessive: Vec<String>,
    pub suffixes_after_reduplication: Vec<String>,
    pub redup: Option<RedupMarker>,
}

/// A segmented word, as emitted by batch segmentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segmentation {
    pub input: String,
    pub normalized: String,
    pub segmented: String,
}

/// A reconstructed word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reconstruction {
    pub segmented: String,
    pub word: String,
}
