//! Word normalization applied to every raw input line before segmentation.

use unicode_normalization::UnicodeNormalization;

use crate::char_class::{ZWJ, ZWNJ};

/// Canonicalize one raw input line into a Word.
///
/// Trims surrounding whitespace, applies Unicode NFC (source documents may
/// carry decomposed vowel-sign sequences which must match the composed
/// code-point ranges of the class table), and removes ZWJ/ZWNJ.
///
/// A blank line yields the empty string, which callers must skip.
pub fn normalize_word(raw: &str) -> String {
    raw.trim()
        .nfc()
        .filter(|c| *c != ZWJ && *c != ZWNJ)
        .collect()
}
