//! Verse text canonicalization.
//!
//! Every comparison operates on normalized text: lowercase, ASCII letters and
//! single spaces only. Anything else (punctuation, digits, diacritics, verse
//! markers) becomes a word boundary.

/// Normalized form of a verse-range placeholder cell.
///
/// Aligned corpora mark verses that were merged into a neighboring verse with
/// a `<range>` placeholder, which normalizes to this sentinel. Placeholder
/// cells carry no independent content and are excluded from comparison.
pub const RANGE_PLACEHOLDER: &str = "range";

/// Canonicalize raw verse text into a comparable form.
///
/// Lowercases, maps every character outside `[a-z]` and space to a space,
/// collapses whitespace runs, and trims. Total and idempotent.
pub fn normalize(text: &str) -> String {
    let mut mapped = String::with_capacity(text.len());
    for ch in text.chars() {
        // Unicode lowercasing may expand one char into several (e.g. 'İ')
        for lc in ch.to_lowercase() {
            if lc.is_ascii_lowercase() {
                mapped.push(lc);
            } else {
                mapped.push(' ');
            }
        }
    }
    mapped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whether a normalized text is excluded from comparison.
///
/// Empty cells and range placeholders have no content of their own.
pub fn is_excluded(normalized: &str) -> bool {
    normalized.is_empty() || normalized == RANGE_PLACEHOLDER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(normalize("In the beginning, God created!"), "in the beginning god created");
        assert_eq!(normalize("Jesus wept."), "jesus wept");
    }

    #[test]
    fn collapses_whitespace_and_trims() {
        assert_eq!(normalize("  and   God\tsaid \n"), "and god said");
        assert_eq!(normalize("word"), "word");
    }

    #[test]
    fn strips_digits_and_non_ascii() {
        assert_eq!(normalize("1 Et Dieu créa 2"), "et dieu cr a");
        assert_eq!(normalize("⁂"), "");
    }

    #[test]
    fn total_on_degenerate_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("!!??..,,"), "");
    }

    #[test]
    fn idempotent() {
        for text in ["God is love.", "  A  B  C  ", "", "<range>", "Ps 23:1 — the LORD"] {
            let once = normalize(text);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn output_charset_is_lowercase_and_single_spaces() {
        let out = normalize("The LORD is my shepherd; I shall not want. (Psalm 23:1)");
        assert!(out.chars().all(|c| c.is_ascii_lowercase() || c == ' '));
        assert!(!out.contains("  "));
        assert!(!out.starts_with(' ') && !out.ends_with(' '));
    }

    #[test]
    fn range_placeholder_detection() {
        assert_eq!(normalize("<range>"), RANGE_PLACEHOLDER);
        assert!(is_excluded(&normalize("<range>")));
        assert!(is_excluded(""));
        assert!(!is_excluded("ranges of hills"));
    }
}
