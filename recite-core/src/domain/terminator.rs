//! Sentence terminator lookup with O(1) membership tests
//!
//! ASCII terminators hit a direct table; full-width ones go through a set.

use std::collections::HashSet;

/// Terminal delimiters used when no custom set is configured
pub const DEFAULT_TERMINATORS: [char; 6] = ['。', '！', '？', '.', '!', '?'];

/// Fast terminator lookup table
#[derive(Debug, Clone)]
pub struct TermTable {
    /// ASCII lookup table for chars 0-127
    ascii_table: [bool; 128],
    /// Non-ASCII terminators (full-width marks)
    non_ascii: HashSet<char>,
}

impl TermTable {
    /// Create from a list of terminator characters
    pub fn new(terminators: impl IntoIterator<Item = char>) -> Self {
        let mut ascii_table = [false; 128];
        let mut non_ascii = HashSet::new();

        for ch in terminators {
            if ch.is_ascii() {
                ascii_table[ch as usize] = true;
            } else {
                non_ascii.insert(ch);
            }
        }

        Self {
            ascii_table,
            non_ascii,
        }
    }

    /// Check if character is a terminator
    #[inline]
    pub fn is_terminator(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii_table[ch as usize]
        } else {
            self.non_ascii.contains(&ch)
        }
    }
}

impl Default for TermTable {
    fn default() -> Self {
        Self::new(DEFAULT_TERMINATORS)
    }
}
