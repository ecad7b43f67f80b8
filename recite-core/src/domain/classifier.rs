//! Character classification for conversion and segmentation

use std::ops::RangeInclusive;

/// CJK Unified Ideographs block, the only range counted as ideographs
pub const IDEOGRAPH_RANGE: RangeInclusive<char> = '\u{4E00}'..='\u{9FFF}';

/// Classification of characters
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    /// CJK Unified Ideograph (U+4E00..=U+9FFF)
    Ideograph,
    /// ASCII or CJK punctuation
    Punctuation,
    /// Whitespace character
    Whitespace,
    /// Other character type (Latin letters, digits, kana, ...)
    Other,
}

/// Pure character classification logic
pub trait CharacterClassifier: Send + Sync {
    /// Classify a character
    fn classify(&self, ch: char) -> CharacterClass;

    /// Check if character is an ideograph
    fn is_ideograph(&self, ch: char) -> bool {
        matches!(self.classify(ch), CharacterClass::Ideograph)
    }
}

/// Default classifier for mixed Chinese / ASCII text
#[derive(Debug, Clone, Copy, Default)]
pub struct HanziClassifier;

impl HanziClassifier {
    /// Create a new classifier
    pub fn new() -> Self {
        Self
    }
}

impl CharacterClassifier for HanziClassifier {
    fn classify(&self, ch: char) -> CharacterClass {
        if IDEOGRAPH_RANGE.contains(&ch) {
            CharacterClass::Ideograph
        } else if ch.is_whitespace() {
            CharacterClass::Whitespace
        } else if is_punctuation(ch) {
            CharacterClass::Punctuation
        } else {
            CharacterClass::Other
        }
    }
}

/// ASCII punctuation plus the CJK and full-width punctuation blocks
fn is_punctuation(ch: char) -> bool {
    if ch.is_ascii() {
        return ch.is_ascii_punctuation();
    }

    matches!(ch,
        // General punctuation: dashes, curly quotes, ellipsis
        '\u{2010}'..='\u{2027}'
        | '\u{2030}'..='\u{205E}'
        // CJK symbols and punctuation: 、。「」『』【】〈〉《》
        | '\u{3001}'..='\u{3003}'
        | '\u{3008}'..='\u{3011}'
        | '\u{3014}'..='\u{301F}'
        | '\u{3030}'
        | '\u{303D}'
        | '\u{30FB}'
        // Vertical, compatibility and small forms
        | '\u{FE10}'..='\u{FE19}'
        | '\u{FE30}'..='\u{FE4F}'
        | '\u{FE50}'..='\u{FE6B}'
        // Full-width ASCII punctuation: ！＂＃％＆＇（）＊，－．／：；？＠［＼］＿｛｝
        | '\u{FF01}'..='\u{FF0F}'
        | '\u{FF1A}'..='\u{FF20}'
        | '\u{FF3B}'..='\u{FF40}'
        | '\u{FF5B}'..='\u{FF65}'
        | '\u{00A1}' | '\u{00A7}' | '\u{00AB}' | '\u{00B6}' | '\u{00B7}' | '\u{00BB}' | '\u{00BF}'
    )
}

/// Count CJK Unified Ideographs in `text`
pub fn count_ideographs(text: &str) -> usize {
    text.chars().filter(|ch| IDEOGRAPH_RANGE.contains(ch)).count()
}
