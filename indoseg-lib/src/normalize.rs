// Input normalisation applied before any lookup.

use std::fmt::Display;

/// Punctuation stripped from the end of a word.
const TRAILING_PUNCTUATION: &[char] = &['.', ',', '?', '!', ':', ';'];

/// Lowercase, trim, and drop trailing punctuation.
///
/// Internal hyphens and digits pass through. Whitespace uncovered by
/// stripping punctuation ({rumah .}) is dropped as well, so the result
/// never ends in a space.
pub fn normalize(input: &str) -> String {
    let lowered = input.to_lowercase();
    lowered
        .trim()
        .trim_end_matches(|c: char| TRAILING_PUNCTUATION.contains(&c) || c.is_whitespace())
        .to_string()
}

/// Normalise any displayable value through its string form.
pub fn normalize_display<T: Display>(value: T) -> String {
    normalize(&value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_and_trim() {
        assert_eq!(normalize("  Rumah  "), "rumah");
        assert_eq!(normalize("MAKANAN"), "makanan");
    }

    #[test]
    fn test_trailing_punctuation() {
        assert_eq!(normalize("rumah."), "rumah");
        assert_eq!(normalize("apa?!"), "apa");
        assert_eq!(normalize("bukunyalah;:,"), "bukunyalah");
        assert_eq!(normalize("rumah ."), "rumah");
    }

    #[test]
    fn test_internal_characters_kept() {
        assert_eq!(normalize("Rumah-Rumah"), "rumah-rumah");
        assert_eq!(normalize("abad-21"), "abad-21");
        assert_eq!(normalize("a.b"), "a.b");
    }

    #[test]
    fn test_only_punctuation_is_empty() {
        assert_eq!(normalize("?!."), "");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_display_coercion() {
        assert_eq!(normalize_display(42), "42");
        assert_eq!(normalize_display('A'), "a");
    }
}
