//! Study aids for reciting Chinese text
//!
//! The pipeline converts every character of a text to one token (abbreviated
//! pinyin, radical glyph or the character itself), splits both the converted
//! stream and the original text into sentences with the same rule, and groups
//! the aligned sentences into numbered paragraphs. Ideographs are counted from
//! the original text, so each paragraph label reports how many characters the
//! reader has to recite.
//!
//! # Architecture
//!
//! - **Domain layer**: classifier, terminator table, tokens, segmenter, grouper
//! - **Lookup layer**: romanization and radical providers with memoization
//! - **Convert / render**: per-mode strategies and HTML markup
//! - **API layer**: [`ReciteProcessor`], [`Config`], [`Input`], [`Output`]
//!
//! # Example
//!
//! ```rust
//! use recite_core::{Config, ReciteProcessor};
//!
//! let config = Config::builder().group_size(3).build().unwrap();
//! let processor = ReciteProcessor::with_builtin(config).unwrap();
//!
//! let output = processor.process("你好。世界！再见？").unwrap();
//! assert_eq!(output.paragraphs.len(), 1);
//! assert_eq!(output.paragraphs[0].label(), "P01");
//! assert_eq!(output.paragraphs[0].ideographs, 6);
//! ```

pub mod api;
pub mod convert;
pub mod domain;
pub mod error;
pub mod export;
pub mod lookup;
pub mod render;
pub mod text;

pub use api::{Config, ConfigBuilder, Input, Output, ProcessingStats, ReciteProcessor};
pub use convert::{ConversionMode, Converter};
pub use domain::{count_ideographs, Paragraph, Token};
pub use error::{Error, Result};
pub use lookup::{builtin, Chain, HanziDictionary, Memoized, PinyinReadings, Transliterator};
pub use render::{GridOptions, ResolvedStyle, StyleConfig, StyleWarning};
