//! Text-to-token conversion
//!
//! Every input character becomes exactly one token. Punctuation, whitespace
//! and non-ideographs pass through as literals; ideographs go to the strategy
//! selected by [`ConversionMode`].

mod strategy;

pub use strategy::{
    abbreviate, ConversionStrategy, LiteralStrategy, RadicalStrategy, RomanizedStrategy,
    MISSING_READING, ONSET_CLUSTERS,
};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::{CharacterClass, CharacterClassifier, HanziClassifier, Token};
use crate::error::Error;
use crate::lookup::Transliterator;

/// How ideographs are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionMode {
    /// Characters unchanged
    Literal,
    /// Abbreviated pinyin initials
    #[default]
    Romanized,
    /// Radical glyphs
    Radical,
}

impl ConversionMode {
    /// All modes, in display order
    pub const ALL: [ConversionMode; 3] = [
        ConversionMode::Literal,
        ConversionMode::Romanized,
        ConversionMode::Radical,
    ];

    /// Strategy implementing this mode
    pub fn strategy(&self) -> &'static dyn ConversionStrategy {
        match self {
            ConversionMode::Literal => &LiteralStrategy,
            ConversionMode::Romanized => &RomanizedStrategy,
            ConversionMode::Radical => &RadicalStrategy,
        }
    }

    /// Mode name as accepted by [`FromStr`]
    pub fn name(&self) -> &'static str {
        match self {
            ConversionMode::Literal => "literal",
            ConversionMode::Romanized => "romanized",
            ConversionMode::Radical => "radical",
        }
    }

    /// Whether the mode needs radical data
    pub fn needs_radicals(&self) -> bool {
        matches!(self, ConversionMode::Radical)
    }
}

impl fmt::Display for ConversionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConversionMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "literal" | "plain" => Ok(ConversionMode::Literal),
            "romanized" | "pinyin" => Ok(ConversionMode::Romanized),
            "radical" | "radicals" => Ok(ConversionMode::Radical),
            other => Err(Error::Configuration(format!(
                "unknown conversion mode: {other}"
            ))),
        }
    }
}

/// Converts text to tokens with one strategy and one provider
pub struct Converter<'p, C: CharacterClassifier = HanziClassifier> {
    classifier: C,
    strategy: &'static dyn ConversionStrategy,
    provider: &'p dyn Transliterator,
}

impl<'p> Converter<'p> {
    /// Converter for `mode` backed by `provider`
    pub fn new(mode: ConversionMode, provider: &'p dyn Transliterator) -> Self {
        Self::with_classifier(mode, provider, HanziClassifier::new())
    }
}

impl<'p, C: CharacterClassifier> Converter<'p, C> {
    /// Converter with a custom classifier
    pub fn with_classifier(
        mode: ConversionMode,
        provider: &'p dyn Transliterator,
        classifier: C,
    ) -> Self {
        Self {
            classifier,
            strategy: mode.strategy(),
            provider,
        }
    }

    /// Convert one character
    pub fn convert_char(&self, ch: char) -> Token {
        match self.classifier.classify(ch) {
            CharacterClass::Ideograph => self.strategy.convert(ch, self.provider),
            CharacterClass::Punctuation | CharacterClass::Whitespace | CharacterClass::Other => {
                Token::Literal(ch)
            }
        }
    }

    /// Convert text; the result holds exactly one token per character
    pub fn convert(&self, text: &str) -> Vec<Token> {
        let tokens: Vec<Token> = text.chars().map(|ch| self.convert_char(ch)).collect();
        debug_assert_eq!(tokens.len(), text.chars().count());
        tokens
    }
}
