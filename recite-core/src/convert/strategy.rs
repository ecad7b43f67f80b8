//! One conversion strategy per mode

use crate::domain::Token;
use crate::lookup::Transliterator;

/// Onset clusters abbreviated to two letters and highlighted
pub const ONSET_CLUSTERS: [&str; 3] = ["zh", "ch", "sh"];

/// Placeholder emitted when an ideograph has no reading
pub const MISSING_READING: &str = "?";

/// Converts a single ideograph to a token
pub trait ConversionStrategy: Send + Sync {
    /// Convert `ch`, consulting `provider` as needed; never fails
    fn convert(&self, ch: char, provider: &dyn Transliterator) -> Token;
}

/// Leaves characters unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct LiteralStrategy;

impl ConversionStrategy for LiteralStrategy {
    fn convert(&self, ch: char, _provider: &dyn Transliterator) -> Token {
        Token::Literal(ch)
    }
}

/// Abbreviated pinyin: onset cluster or first letter
#[derive(Debug, Clone, Copy, Default)]
pub struct RomanizedStrategy;

impl ConversionStrategy for RomanizedStrategy {
    fn convert(&self, ch: char, provider: &dyn Transliterator) -> Token {
        provider
            .romanize(ch)
            .and_then(|reading| abbreviate(&reading))
            .unwrap_or_else(|| Token::annotated(MISSING_READING, false))
    }
}

/// Radical glyph, or the character itself when no radical is known
#[derive(Debug, Clone, Copy, Default)]
pub struct RadicalStrategy;

impl ConversionStrategy for RadicalStrategy {
    fn convert(&self, ch: char, provider: &dyn Transliterator) -> Token {
        Token::RadicalGlyph(provider.radical_of(ch).unwrap_or_else(|| ch.to_string()))
    }
}

/// Abbreviate a reading; `None` for an empty reading
pub fn abbreviate(reading: &str) -> Option<Token> {
    if let Some(cluster) = ONSET_CLUSTERS
        .iter()
        .find(|cluster| reading.starts_with(*cluster))
    {
        return Some(Token::annotated(*cluster, true));
    }

    reading
        .chars()
        .next()
        .map(|first| Token::annotated(first.to_string(), false))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Option<&'static str>);

    impl Transliterator for Fixed {
        fn romanize(&self, _ch: char) -> Option<String> {
            self.0.map(str::to_string)
        }

        fn radical_of(&self, _ch: char) -> Option<String> {
            self.0.map(str::to_string)
        }
    }

    #[test]
    fn test_abbreviate() {
        assert_eq!(abbreviate("zhong"), Some(Token::annotated("zh", true)));
        assert_eq!(abbreviate("chi"), Some(Token::annotated("ch", true)));
        assert_eq!(abbreviate("shi"), Some(Token::annotated("sh", true)));
        assert_eq!(abbreviate("zai"), Some(Token::annotated("z", false)));
        assert_eq!(abbreviate("ai"), Some(Token::annotated("a", false)));
        assert_eq!(abbreviate(""), None);
    }

    #[test]
    fn test_romanized_miss_is_placeholder() {
        let token = RomanizedStrategy.convert('龘', &Fixed(None));
        assert_eq!(token, Token::annotated("?", false));

        let token = RomanizedStrategy.convert('龘', &Fixed(Some("")));
        assert_eq!(token, Token::annotated("?", false));
    }

    #[test]
    fn test_radical_miss_falls_back_to_character() {
        assert_eq!(
            RadicalStrategy.convert('好', &Fixed(None)),
            Token::RadicalGlyph("好".into())
        );
        assert_eq!(
            RadicalStrategy.convert('好', &Fixed(Some("女"))),
            Token::RadicalGlyph("女".into())
        );
    }

    #[test]
    fn test_literal_ignores_provider() {
        assert_eq!(LiteralStrategy.convert('好', &Fixed(Some("x"))), Token::Literal('好'));
    }
}
