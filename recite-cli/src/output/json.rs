//! JSON output formatter

use super::{section_title, OutputFormatter};
use anyhow::Result;
use recite_core::{ConversionMode, Output, Paragraph, ProcessingStats};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs sections as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    sections: Vec<SectionData>,
}

/// One conversion of one input source
#[derive(Debug, Serialize, Deserialize)]
pub struct SectionData {
    /// Input source name
    pub source: String,
    /// Conversion mode
    pub mode: ConversionMode,
    /// Section heading
    pub title: String,
    /// Processing statistics
    pub stats: StatsData,
    /// Paragraphs, in order
    pub paragraphs: Vec<ParagraphData>,
}

/// Statistics for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsData {
    /// Characters in the input
    pub chars: usize,
    /// Ideographs in the input
    pub ideographs: usize,
    /// Sentence fragments
    pub sentences: usize,
    /// Ideographs without a lookup result
    pub lookup_misses: usize,
}

impl From<ProcessingStats> for StatsData {
    fn from(stats: ProcessingStats) -> Self {
        Self {
            chars: stats.chars_processed,
            ideographs: stats.ideographs,
            sentences: stats.sentence_count,
            lookup_misses: stats.lookup_misses,
        }
    }
}

/// One paragraph for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct ParagraphData {
    /// Label such as `P01`
    pub label: String,
    /// Ideographs in the original text
    pub chars: usize,
    /// Sentences in the paragraph
    pub sentences: usize,
    /// Converted text
    pub text: String,
    /// Original text
    pub original: String,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            sections: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn begin_section(
        &mut self,
        source: &str,
        mode: ConversionMode,
        output: &Output,
    ) -> Result<()> {
        self.sections.push(SectionData {
            source: source.to_string(),
            mode,
            title: section_title(mode).to_string(),
            stats: output.stats.into(),
            paragraphs: Vec::new(),
        });
        Ok(())
    }

    fn format_paragraph(&mut self, paragraph: &Paragraph) -> Result<()> {
        let Some(section) = self.sections.last_mut() else {
            anyhow::bail!("paragraph formatted before any section");
        };

        section.paragraphs.push(ParagraphData {
            label: paragraph.label(),
            chars: paragraph.ideographs,
            sentences: paragraph.sentence_count,
            text: paragraph.display_text(),
            original: paragraph.original.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.sections)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
