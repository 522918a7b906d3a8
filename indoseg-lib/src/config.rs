// Tunable thresholds and tables, loaded from an optional JSON document.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SegmenterError};
use crate::types::SuffixType;

/// Engine configuration. Every field has a baked-in default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub min_stem_length: MinStemLength,
    /// (base, variant) pairs recognised as phonetic-change reduplication.
    pub phonetic_pairs: Vec<(String, String)>,
    pub features: Features,
}

/// Minimum residue length left behind when stripping a suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinStemLength {
    pub particle: usize,
    pub possessive: usize,
    pub derivational: usize,
    /// Floor applied to every suffix type.
    pub general: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Features {
    /// Recognise {lelaki}, {sesama}, {tetamu} as dwipurwa regardless of the
    /// stemmer.
    pub dwipurwa_whitelist: bool,
    /// Only emit segmentations that reconstruct to the input.
    pub verify_round_trip: bool,
    /// Stop affix stripping at dictionary roots: a root is never
    /// prefix-stripped, suffix peeling halts once the residue is a root, and
    /// the prefix sweep weighs fallbacks across all groups instead of
    /// committing to the first group that matches.
    pub dictionary_stops: bool,
}

const DEFAULT_PHONETIC_PAIRS: &[(&str, &str)] = &[
    ("sayur", "mayur"),
    ("bolak", "balik"),
    ("lauk", "pauk"),
    ("gerak", "gerik"),
    ("ramah", "tamah"),
    ("warna", "warni"),
    ("teka", "teki"),
    ("serba", "serbi"),
    ("hiruk", "pikuk"),
    ("mondar", "mandir"),
    ("kocar", "kacir"),
    ("porak", "poranda"),
    ("tindak", "tanduk"),
    ("corat", "coret"),
    ("compang", "camping"),
    ("robak", "rabik"),
    ("carut", "marut"),
];

impl Default for MinStemLength {
    fn default() -> Self {
        Self {
            particle: 3,
            possessive: 3,
            derivational: 4,
            general: 2,
        }
    }
}

impl Default for Features {
    fn default() -> Self {
        Self {
            dwipurwa_whitelist: true,
            verify_round_trip: true,
            dictionary_stops: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_stem_length: MinStemLength::default(),
            phonetic_pairs: DEFAULT_PHONETIC_PAIRS
                .iter()
                .map(|(b, v)| (b.to_string(), v.to_string()))
                .collect(),
            features: Features::default(),
        }
    }
}

impl MinStemLength {
    /// Minimum residue for a suffix of the given type.
    pub fn for_type(&self, kind: SuffixType) -> usize {
        let specific = match kind {
            SuffixType::Particle => self.particle,
            SuffixType::Possessive => self.possessive,
            SuffixType::Derivational => self.derivational,
        };
        specific.max(self.general)
    }
}

impl Config {
    /// Parse a JSON configuration document. Missing keys take defaults.
    pub fn from_json_str(json: &str) -> std::result::Result<Self, serde_json::Error> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(json)
    }

    /// Load a configuration file. Any failure at an explicit path is fatal.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| SegmenterError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text).map_err(|source| SegmenterError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn is_phonetic_pair(&self, base: &str, variant: &str) -> bool {
        self.phonetic_pairs
            .iter()
            .any(|(b, v)| b == base && v == variant)
    }
}
