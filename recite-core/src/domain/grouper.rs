//! Dual-stream paragraph grouping
//!
//! Converted and original fragments are walked in lockstep and collected into
//! numbered paragraphs of up to `group_size` sentences. Display text comes from
//! the converted stream; the ideograph count always comes from the original
//! stream, since converted text holds abbreviations instead of ideographs.

use serde::Serialize;
use smallvec::SmallVec;

use crate::domain::classifier::count_ideographs;
use crate::domain::segmenter::SentenceFragment;
use crate::domain::token::{plain_text, Token};
use crate::error::{Error, Result};

/// Default number of sentences per paragraph
pub const DEFAULT_GROUP_SIZE: usize = 3;

/// A numbered group of sentences
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    /// 1-based sequential number
    pub number: usize,
    /// Ideographs in the original text of the paragraph
    pub ideographs: usize,
    /// Number of sentence fragments in the paragraph
    pub sentence_count: usize,
    /// Converted tokens of the paragraph, in order
    pub tokens: Vec<Token>,
    /// Original text of the paragraph
    pub original: String,
}

impl Paragraph {
    /// Label of the form `P01`
    pub fn label(&self) -> String {
        format!("P{:02}", self.number)
    }

    /// Plain rendering of the converted tokens
    pub fn display_text(&self) -> String {
        plain_text(&self.tokens)
    }
}

/// Groups aligned fragment sequences into paragraphs
#[derive(Debug, Clone, Copy)]
pub struct ParagraphGrouper {
    group_size: usize,
}

impl ParagraphGrouper {
    /// Create a grouper; `group_size` must be at least 1
    pub fn new(group_size: usize) -> Result<Self> {
        if group_size == 0 {
            return Err(Error::Configuration(
                "group_size must be greater than 0".into(),
            ));
        }
        Ok(Self { group_size })
    }

    /// Sentences per paragraph
    pub fn group_size(&self) -> usize {
        self.group_size
    }

    /// Lazily group two aligned fragment sequences
    ///
    /// Fails with [`Error::Alignment`] when the sequences differ in length.
    pub fn paragraphs<'g, 'a>(
        &self,
        converted: &'g [SentenceFragment<'a, [Token]>],
        original: &'g [SentenceFragment<'a, str>],
    ) -> Result<Paragraphs<'g, 'a>> {
        if converted.len() != original.len() {
            return Err(Error::Alignment {
                converted: converted.len(),
                original: original.len(),
            });
        }

        Ok(Paragraphs {
            converted,
            original,
            group_size: self.group_size,
            cursor: 0,
            next_number: 1,
        })
    }

    /// Group two aligned fragment sequences into paragraphs
    pub fn group(
        &self,
        converted: &[SentenceFragment<'_, [Token]>],
        original: &[SentenceFragment<'_, str>],
    ) -> Result<Vec<Paragraph>> {
        Ok(self.paragraphs(converted, original)?.collect())
    }
}

impl Default for ParagraphGrouper {
    fn default() -> Self {
        Self {
            group_size: DEFAULT_GROUP_SIZE,
        }
    }
}

/// Iterator over the paragraphs of two aligned fragment sequences
#[derive(Debug)]
pub struct Paragraphs<'g, 'a> {
    converted: &'g [SentenceFragment<'a, [Token]>],
    original: &'g [SentenceFragment<'a, str>],
    group_size: usize,
    cursor: usize,
    next_number: usize,
}

impl Iterator for Paragraphs<'_, '_> {
    type Item = Paragraph;

    fn next(&mut self) -> Option<Paragraph> {
        let last = self.converted.len().checked_sub(1)?;
        if self.cursor > last {
            return None;
        }

        let mut pending: SmallVec<[usize; 4]> = SmallVec::new();

        for i in self.cursor..=last {
            pending.push(i);

            if pending.len() == self.group_size || i == last {
                self.cursor = i + 1;
                return Some(self.flush(&pending));
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.converted.len().saturating_sub(self.cursor);
        let paragraphs = remaining.div_ceil(self.group_size);
        (paragraphs, Some(paragraphs))
    }
}

impl Paragraphs<'_, '_> {
    fn flush(&mut self, pending: &[usize]) -> Paragraph {
        let mut tokens = Vec::new();
        let mut original = String::new();

        for &i in pending {
            tokens.extend_from_slice(self.converted[i].text);
            original.push_str(self.original[i].text);
        }

        let number = self.next_number;
        self.next_number += 1;

        Paragraph {
            number,
            ideographs: count_ideographs(&original),
            sentence_count: pending.len(),
            tokens,
            original,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::segmenter::Segmenter;

    fn literal_tokens(text: &str) -> Vec<Token> {
        text.chars().map(Token::Literal).collect()
    }

    fn group_text(text: &str, group_size: usize) -> Vec<Paragraph> {
        let segmenter = Segmenter::new();
        let tokens = literal_tokens(text);
        let converted: Vec<_> = segmenter.segment(tokens.as_slice()).collect();
        let original: Vec<_> = segmenter.segment(text).collect();
        ParagraphGrouper::new(group_size)
            .unwrap()
            .group(&converted, &original)
            .unwrap()
    }

    #[test]
    fn test_three_sentences_one_paragraph() {
        let paragraphs = group_text("你好。世界！再见？", 3);

        assert_eq!(paragraphs.len(), 1);
        assert_eq!(paragraphs[0].label(), "P01");
        assert_eq!(paragraphs[0].ideographs, 6);
        assert_eq!(paragraphs[0].sentence_count, 3);
        assert_eq!(paragraphs[0].display_text(), "你好。世界！再见？");
    }

    #[test]
    fn test_non_cjk_grouping() {
        let paragraphs = group_text("A,B.C!D?E", 2);

        assert_eq!(paragraphs.len(), 2);
        assert_eq!(paragraphs[0].label(), "P01");
        assert_eq!(paragraphs[0].original, "A,B.C!");
        assert_eq!(paragraphs[0].ideographs, 0);
        assert_eq!(paragraphs[1].label(), "P02");
        assert_eq!(paragraphs[1].original, "D?E");
        assert_eq!(paragraphs[1].ideographs, 0);
    }

    #[test]
    fn test_short_final_group_is_flushed() {
        let paragraphs = group_text("一。二。三。四。", 3);

        assert_eq!(paragraphs.len(), 2);
        assert_eq!(paragraphs[0].sentence_count, 3);
        assert_eq!(paragraphs[1].sentence_count, 1);
        assert_eq!(paragraphs[1].original, "四。");
        assert_eq!(paragraphs[1].number, 2);
    }

    #[test]
    fn test_exact_multiple_has_no_empty_trailing_group() {
        let paragraphs = group_text("一。二。三。四。五。六。", 3);
        assert_eq!(paragraphs.len(), 2);
        assert!(paragraphs.iter().all(|p| p.sentence_count == 3));
    }

    #[test]
    fn test_group_size_one() {
        let paragraphs = group_text("一。二。三", 1);
        let numbers: Vec<_> = paragraphs.iter().map(|p| p.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_input_yields_no_paragraphs() {
        assert!(group_text("", 3).is_empty());
    }

    #[test]
    fn test_alignment_error() {
        let segmenter = Segmenter::new();
        let tokens = literal_tokens("一。二。");
        let converted: Vec<_> = segmenter.segment(tokens.as_slice()).collect();
        let original: Vec<_> = segmenter.segment("一。").collect();

        let result = ParagraphGrouper::default().group(&converted, &original);
        assert!(matches!(
            result,
            Err(Error::Alignment {
                converted: 2,
                original: 1
            })
        ));
    }

    #[test]
    fn test_zero_group_size_rejected() {
        assert!(matches!(
            ParagraphGrouper::new(0),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn test_label_width() {
        let paragraph = Paragraph {
            number: 123,
            ideographs: 0,
            sentence_count: 1,
            tokens: Vec::new(),
            original: String::new(),
        };
        assert_eq!(paragraph.label(), "P123");
    }

    #[test]
    fn test_size_hint() {
        let segmenter = Segmenter::new();
        let text = "一。二。三。四。五。";
        let tokens = literal_tokens(text);
        let converted: Vec<_> = segmenter.segment(tokens.as_slice()).collect();
        let original: Vec<_> = segmenter.segment(text).collect();
        let grouper = ParagraphGrouper::new(2).unwrap();

        let paragraphs = grouper.paragraphs(&converted, &original).unwrap();
        assert_eq!(paragraphs.size_hint(), (3, Some(3)));
    }
}
