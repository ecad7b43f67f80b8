//! Sentence segmentation over text and token streams
//!
//! The same scanner runs over the original text and over the converted token
//! stream. Pass-through characters are identical in both streams, so the two
//! fragment sequences split at the same unit positions.
//!
//! A terminator closes the current fragment once the fragment holds content
//! (any unit that is neither punctuation nor whitespace). Terminators and
//! whitespace that follow the closing mark are absorbed into the same fragment,
//! so `真的吗？！` is one sentence and no fragment starts with a terminator.

use std::iter::{Enumerate, FusedIterator, Map, Peekable};
use std::ops::Range;
use std::slice;
use std::str::CharIndices;

use crate::domain::classifier::{CharacterClass, CharacterClassifier, HanziClassifier};
use crate::domain::terminator::TermTable;
use crate::domain::token::Token;

/// A stream that can be cut into sentence fragments
///
/// Each unit is reported with its offset and, when it is a pass-through
/// character, the character itself. Opaque units (`None`) count as content.
pub trait SegmentSource {
    /// Iterator over `(offset, literal)` pairs
    type Units<'a>: Iterator<Item = (usize, Option<char>)>
    where
        Self: 'a;

    /// Units of the stream in order
    fn units(&self) -> Self::Units<'_>;

    /// Offset one past the last unit
    fn end_offset(&self) -> usize;

    /// Sub-stream between two offsets
    fn slice(&self, range: Range<usize>) -> &Self;
}

fn text_unit((offset, ch): (usize, char)) -> (usize, Option<char>) {
    (offset, Some(ch))
}

fn token_unit((offset, token): (usize, &Token)) -> (usize, Option<char>) {
    (offset, token.literal_char())
}

impl SegmentSource for str {
    type Units<'a> = Map<CharIndices<'a>, fn((usize, char)) -> (usize, Option<char>)>;

    fn units(&self) -> Self::Units<'_> {
        self.char_indices().map(text_unit as fn(_) -> _)
    }

    fn end_offset(&self) -> usize {
        self.len()
    }

    fn slice(&self, range: Range<usize>) -> &Self {
        &self[range]
    }
}

impl SegmentSource for [Token] {
    type Units<'a> = Map<Enumerate<slice::Iter<'a, Token>>, fn((usize, &'a Token)) -> (usize, Option<char>)>;

    fn units(&self) -> Self::Units<'_> {
        self.iter().enumerate().map(token_unit as fn(_) -> _)
    }

    fn end_offset(&self) -> usize {
        self.len()
    }

    fn slice(&self, range: Range<usize>) -> &Self {
        &self[range]
    }
}

/// One sentence of a stream
#[derive(Debug, PartialEq, Eq)]
pub struct SentenceFragment<'a, S: ?Sized> {
    /// 0-based position of the fragment in its stream
    pub index: usize,
    /// Fragment contents, delimiter and trailing whitespace included
    pub text: &'a S,
    /// Unit positions covered (character positions for text, token positions for tokens)
    pub units: Range<usize>,
    /// Whether the fragment ends with a terminal delimiter
    pub terminated: bool,
}

impl<S: ?Sized> Clone for SentenceFragment<'_, S> {
    fn clone(&self) -> Self {
        Self {
            index: self.index,
            text: self.text,
            units: self.units.clone(),
            terminated: self.terminated,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UnitClass {
    Terminator,
    Whitespace,
    Punctuation,
    Content,
}

/// Splits streams into sentence fragments
#[derive(Debug, Clone)]
pub struct Segmenter<C: CharacterClassifier = HanziClassifier> {
    terminators: TermTable,
    classifier: C,
}

impl Segmenter {
    /// Segmenter with the default terminators `。！？.!?`
    pub fn new() -> Self {
        Self::with_terminators(TermTable::default())
    }

    /// Segmenter with a custom terminator table
    pub fn with_terminators(terminators: TermTable) -> Self {
        Self {
            terminators,
            classifier: HanziClassifier::new(),
        }
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CharacterClassifier> Segmenter<C> {
    /// Lazily segment a stream; calling again restarts from the beginning
    pub fn segment<'a, S>(&'a self, source: &'a S) -> Fragments<'a, S, C>
    where
        S: SegmentSource + ?Sized,
    {
        Fragments {
            segmenter: self,
            source,
            units: source.units().peekable(),
            position: 0,
            index: 0,
        }
    }

    fn unit_class(&self, unit: Option<char>) -> UnitClass {
        let Some(ch) = unit else {
            return UnitClass::Content;
        };

        if self.terminators.is_terminator(ch) {
            return UnitClass::Terminator;
        }

        match self.classifier.classify(ch) {
            CharacterClass::Whitespace => UnitClass::Whitespace,
            CharacterClass::Punctuation => UnitClass::Punctuation,
            CharacterClass::Ideograph | CharacterClass::Other => UnitClass::Content,
        }
    }
}

/// Iterator over the sentence fragments of one stream
pub struct Fragments<'a, S, C = HanziClassifier>
where
    S: SegmentSource + ?Sized + 'a,
    C: CharacterClassifier,
{
    segmenter: &'a Segmenter<C>,
    source: &'a S,
    units: Peekable<S::Units<'a>>,
    position: usize,
    index: usize,
}

impl<'a, S, C> Iterator for Fragments<'a, S, C>
where
    S: SegmentSource + ?Sized + 'a,
    C: CharacterClassifier,
{
    type Item = SentenceFragment<'a, S>;

    fn next(&mut self) -> Option<Self::Item> {
        let (start_offset, _) = *self.units.peek()?;
        let start_position = self.position;

        let mut end_offset = self.source.end_offset();
        let mut has_content = false;
        let mut in_tail = false;

        while let Some(&(offset, unit)) = self.units.peek() {
            let class = self.segmenter.unit_class(unit);

            if in_tail {
                if !matches!(class, UnitClass::Terminator | UnitClass::Whitespace) {
                    end_offset = offset;
                    break;
                }
            } else {
                match class {
                    UnitClass::Terminator if has_content => in_tail = true,
                    UnitClass::Content => has_content = true,
                    _ => {}
                }
            }

            self.units.next();
            self.position += 1;
        }

        let fragment = SentenceFragment {
            index: self.index,
            text: self.source.slice(start_offset..end_offset),
            units: start_position..self.position,
            terminated: in_tail,
        };
        self.index += 1;

        Some(fragment)
    }
}

impl<'a, S, C> FusedIterator for Fragments<'a, S, C>
where
    S: SegmentSource + ?Sized + 'a,
    C: CharacterClassifier,
{
}
