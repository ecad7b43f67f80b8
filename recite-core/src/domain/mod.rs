//! Domain layer: pure text algorithms
//!
//! Nothing here performs I/O or lookups. The converter feeds tokens in, the
//! segmenter and grouper turn aligned streams into numbered paragraphs.

pub mod classifier;
pub mod grouper;
pub mod segmenter;
pub mod terminator;
pub mod token;

pub use classifier::{count_ideographs, CharacterClass, CharacterClassifier, HanziClassifier};
pub use grouper::{Paragraph, ParagraphGrouper, Paragraphs, DEFAULT_GROUP_SIZE};
pub use segmenter::{Fragments, SegmentSource, Segmenter, SentenceFragment};
pub use terminator::{TermTable, DEFAULT_TERMINATORS};
pub use token::{plain_text, Token};
