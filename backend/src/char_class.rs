//! Character classes for the Devanagari Unicode block (U+0900–U+097F).
//!
//! Classification is a pure function of the code point over fixed ranges,
//! decided at design time. ZWJ/ZWNJ are stripped during normalization and
//! never reach classification.

/// U+094D DEVANAGARI SIGN VIRAMA, the inherent-vowel killer.
pub const VIRAMA: char = '\u{094D}';

/// U+200D ZERO WIDTH JOINER, a typesetting artifact with no orthographic weight.
pub const ZWJ: char = '\u{200D}';

/// U+200C ZERO WIDTH NON-JOINER, a typesetting artifact with no orthographic weight.
pub const ZWNJ: char = '\u{200C}';

/// Orthographic role of a single code point during akṣara segmentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Standalone vowel letters (अ..औ), U+0904–U+0914
    IndependentVowel,
    /// Consonant letters (क..ह), U+0915–U+0939
    Consonant,
    /// Dependent vowel signs / mātrās (ा..ौ), U+093E–U+094C
    VowelSign,
    /// U+094D, suppresses the inherent vowel
    Virama,
    /// Candrabindu, anusvāra, visarga: U+0901, U+0902, U+0903
    Diacritic,
    /// Anything else: punctuation, digits, foreign script, unclassified marks
    Other,
}

/// Classify a single code point.
pub fn classify(c: char) -> CharClass {
    match c {
        '\u{0904}'..='\u{0914}' => CharClass::IndependentVowel,
        '\u{0915}'..='\u{0939}' => CharClass::Consonant,
        '\u{093E}'..='\u{094C}' => CharClass::VowelSign,
        VIRAMA => CharClass::Virama,
        '\u{0901}' | '\u{0902}' | '\u{0903}' => CharClass::Diacritic,
        _ => CharClass::Other,
    }
}
