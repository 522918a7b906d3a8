// Output formatting for segmentations.

use crate::types::*;

/// Separator between morpheme tokens.
pub const SEPARATOR: &str = "~";

/// The morpheme tokens of an analysis, in output order.
///
/// Order:
///   prefixes (outermost first), root, reduplication marker,
///   suffixes (innermost first), suffixes attached after reduplication
pub fn to_tokens(a: &Analysis) -> Vec<String> {
    let mut tokens: Vec<String> = a.prefixes.clone();
    tokens.push(a.root.clone());
    if let Some(marker) = &a.redup {
        tokens.push(marker.token());
    }
    tokens.extend(a.suffixes.iter().cloned());
    tokens.extend(a.redup_suffixes.iter().cloned());
    tokens.retain(|t| !t.is_empty());
    tokens
}

/// Convert an analysis to its `~`-joined segmented form, e.g.
/// `meN~per~taruh~kan` or `sayur~rs(~mayur)`.
pub fn to_segmented(a: &Analysis) -> String {
    to_tokens(a).join(SEPARATOR)
}
