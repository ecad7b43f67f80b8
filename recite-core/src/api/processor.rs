//! Request-level processing: convert, segment both streams, group

use std::sync::Arc;

use crate::api::{Config, Input, Output, ProcessingStats};
use crate::convert::{ConversionMode, Converter};
use crate::domain::{
    count_ideographs, CharacterClassifier, HanziClassifier, ParagraphGrouper, Segmenter,
};
use crate::error::Result;
use crate::lookup::{builtin, Transliterator};
use crate::render::{render_paragraphs, ResolvedStyle};

/// Processes text into converted tokens and numbered paragraphs
pub struct ReciteProcessor {
    config: Config,
    provider: Arc<dyn Transliterator>,
    segmenter: Segmenter,
    grouper: ParagraphGrouper,
}

impl ReciteProcessor {
    /// Create a processor backed by `provider`
    pub fn new(config: Config, provider: impl Transliterator + 'static) -> Result<Self> {
        Self::with_shared_provider(config, Arc::new(provider))
    }

    /// Create a processor sharing an existing provider
    pub fn with_shared_provider(
        config: Config,
        provider: Arc<dyn Transliterator>,
    ) -> Result<Self> {
        config.validate()?;
        let grouper = ParagraphGrouper::new(config.group_size)?;

        Ok(Self {
            config,
            provider,
            segmenter: Segmenter::new(),
            grouper,
        })
    }

    /// Create a processor backed by the built-in romanization table
    pub fn with_builtin(config: Config) -> Result<Self> {
        Self::new(config, builtin())
    }

    /// Process one block of text
    pub fn process(&self, text: &str) -> Result<Output> {
        let converter = Converter::new(self.config.mode, self.provider.as_ref());
        let tokens = converter.convert(text);

        let converted: Vec<_> = self.segmenter.segment(tokens.as_slice()).collect();
        let original: Vec<_> = self.segmenter.segment(text).collect();
        let paragraphs = self.grouper.group(&converted, &original)?;

        let stats = ProcessingStats {
            chars_processed: tokens.len(),
            ideographs: count_ideographs(text),
            sentence_count: original.len(),
            paragraph_count: paragraphs.len(),
            lookup_misses: self.count_misses(text),
        };

        log::debug!(
            "Processed {} chars ({} mode): {} fragments, {} paragraphs, {} lookup misses",
            stats.chars_processed,
            self.config.mode,
            stats.sentence_count,
            stats.paragraph_count,
            stats.lookup_misses
        );

        Ok(Output {
            tokens,
            paragraphs,
            stats,
        })
    }

    /// Read and process an input source
    pub fn process_input(&self, input: Input) -> Result<Output> {
        let text = input.into_text()?;
        self.process(&text)
    }

    /// Labeled paragraph markup for an output of this processor
    pub fn render(&self, output: &Output, style: &ResolvedStyle) -> String {
        render_paragraphs(&output.paragraphs, style, self.config.highlight_onsets)
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn count_misses(&self, text: &str) -> usize {
        let classifier = HanziClassifier::new();
        let provider = self.provider.as_ref();

        text.chars()
            .filter(|&ch| classifier.is_ideograph(ch))
            .filter(|&ch| match self.config.mode {
                ConversionMode::Literal => false,
                ConversionMode::Romanized => provider
                    .romanize(ch)
                    .map_or(true, |reading| reading.is_empty()),
                ConversionMode::Radical => provider
                    .radical_of(ch)
                    .map_or(true, |radical| radical.is_empty()),
            })
            .count()
    }
}

impl Default for ReciteProcessor {
    fn default() -> Self {
        Self {
            config: Config::default(),
            provider: Arc::new(builtin()),
            segmenter: Segmenter::new(),
            grouper: ParagraphGrouper::default(),
        }
    }
}
