//! Output tokens produced one-per-character by the converter

use serde::Serialize;
use std::fmt;

/// One converted unit of the input text
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Token {
    /// Character passed through unchanged
    Literal(char),
    /// Abbreviated romanization
    Annotated {
        /// Abbreviation text (one or two letters, or `?` on a lookup miss)
        text: String,
        /// Whether the abbreviation is a highlighted onset cluster
        highlight: bool,
    },
    /// Radical or structural component standing in for the character
    RadicalGlyph(String),
}

impl Token {
    /// Create an annotation token
    pub fn annotated(text: impl Into<String>, highlight: bool) -> Self {
        Token::Annotated {
            text: text.into(),
            highlight,
        }
    }

    /// The literal character, if this token is a pass-through
    pub fn literal_char(&self) -> Option<char> {
        match self {
            Token::Literal(ch) => Some(*ch),
            _ => None,
        }
    }

    /// Whether this token is a highlighted annotation
    pub fn is_highlighted(&self) -> bool {
        matches!(self, Token::Annotated { highlight: true, .. })
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Literal(ch) => write!(f, "{ch}"),
            Token::Annotated { text, .. } => f.write_str(text),
            Token::RadicalGlyph(glyph) => f.write_str(glyph),
        }
    }
}

/// Plain text rendering of a token run
pub fn plain_text(tokens: &[Token]) -> String {
    tokens.iter().map(ToString::to_string).collect()
}
