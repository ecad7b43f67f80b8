//! Output types for a processed request

use serde::Serialize;

use crate::domain::{plain_text, Paragraph, Token};

/// Result of processing one block of text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Output {
    /// One token per input character
    pub tokens: Vec<Token>,
    /// Numbered paragraphs, in order
    pub paragraphs: Vec<Paragraph>,
    /// Processing statistics
    pub stats: ProcessingStats,
}

/// Counts gathered while processing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProcessingStats {
    /// Characters in the input
    pub chars_processed: usize,
    /// Ideographs in the input
    pub ideographs: usize,
    /// Sentence fragments found
    pub sentence_count: usize,
    /// Paragraphs emitted
    pub paragraph_count: usize,
    /// Ideographs the provider could not resolve
    pub lookup_misses: usize,
}

impl Output {
    /// Plain rendering of the whole converted stream
    pub fn display_text(&self) -> String {
        plain_text(&self.tokens)
    }

    /// Whether the input held no characters
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
