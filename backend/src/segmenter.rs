//! Akṣara (orthographic syllable) segmentation for Devanagari words.
//!
//! A single left-to-right scan with one code point of lookahead partitions a
//! normalized word into akṣaras. The partition is lossless: the akṣaras,
//! concatenated in order, reproduce the input exactly.

use crate::char_class::{classify, CharClass, VIRAMA};

/// Split a normalized word into its ordered akṣara sequence.
///
/// Three rules, applied at the current scan position:
///
/// - An independent vowel starts an akṣara and absorbs any trailing
///   diacritics (anusvāra, visarga, candrabindu).
/// - A consonant starts an akṣara, absorbs (virama, consonant) pairs to
///   build a conjunct cluster, then either a terminal virama (bare
///   consonant, e.g. word-final म्) or one dependent vowel sign, then any
///   trailing diacritics.
/// - Anything else becomes a singleton akṣara. Unclassified input is kept,
///   not dropped.
///
/// The empty string yields an empty sequence. Every returned akṣara is
/// non-empty, and each iteration advances the cursor, so the scan is O(n).
pub fn split_into_aksharas(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let n = chars.len();
    let mut aksharas: Vec<String> = Vec::new();
    let mut i = 0;

    while i < n {
        match classify(chars[i]) {
            CharClass::IndependentVowel => {
                let mut ak = String::from(chars[i]);
                i += 1;

                while i < n && classify(chars[i]) == CharClass::Diacritic {
                    ak.push(chars[i]);
                    i += 1;
                }

                aksharas.push(ak);
            }

            CharClass::Consonant => {
                let mut ak = String::from(chars[i]);
                i += 1;

                // Conjunct cluster: absorb (virama, consonant) pairs
                while i + 1 < n
                    && chars[i] == VIRAMA
                    && classify(chars[i + 1]) == CharClass::Consonant
                {
                    ak.push(chars[i]);
                    ak.push(chars[i + 1]);
                    i += 2;
                }

                if i < n && chars[i] == VIRAMA {
                    // Terminal virama (suppressed vowel, e.g. म्).
                    // Closes vowel-sign absorption for this akṣara.
                    ak.push(chars[i]);
                    i += 1;
                } else if i < n && classify(chars[i]) == CharClass::VowelSign {
                    ak.push(chars[i]);
                    i += 1;
                }

                while i < n && classify(chars[i]) == CharClass::Diacritic {
                    ak.push(chars[i]);
                    i += 1;
                }

                aksharas.push(ak);
            }

            _ => {
                // Fallback: emit unclassified code points as standalone
                // units to avoid silent data loss.
                aksharas.push(chars[i].to_string());
                i += 1;
            }
        }
    }

    aksharas
}
