//! Built-in Mandarin readings

use pinyin::ToPinyin;
use unicode_normalization::UnicodeNormalization;

use super::Transliterator;

/// Romanization from the bundled pinyin table
///
/// Returns the primary (most common) toneless reading. Has no radical data.
#[derive(Debug, Clone, Copy, Default)]
pub struct PinyinReadings;

impl Transliterator for PinyinReadings {
    fn romanize(&self, ch: char) -> Option<String> {
        ch.to_pinyin().map(|reading| reading.plain().to_string())
    }

    fn radical_of(&self, _ch: char) -> Option<String> {
        None
    }
}

/// Strip tone marks from a tone-marked reading (`nǐ` → `ni`, `lǜ` → `lu`)
pub fn strip_tones(reading: &str) -> String {
    reading
        .nfd()
        .filter(|ch| !('\u{0300}'..='\u{036F}').contains(ch))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_readings() {
        let readings = PinyinReadings;
        assert_eq!(readings.romanize('你').as_deref(), Some("ni"));
        assert_eq!(readings.romanize('中').as_deref(), Some("zhong"));
        assert_eq!(readings.romanize('世').as_deref(), Some("shi"));
    }

    #[test]
    fn test_non_han_has_no_reading() {
        let readings = PinyinReadings;
        assert_eq!(readings.romanize('A'), None);
        assert_eq!(readings.romanize('。'), None);
        assert_eq!(readings.radical_of('你'), None);
    }

    #[test]
    fn test_strip_tones() {
        assert_eq!(strip_tones("nǐ"), "ni");
        assert_eq!(strip_tones("zhōng"), "zhong");
        assert_eq!(strip_tones("lǜ"), "lu");
        assert_eq!(strip_tones("Shì"), "shi");
        assert_eq!(strip_tones("hao"), "hao");
    }
}
