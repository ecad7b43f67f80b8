//! Markdown output formatter

use super::{section_title, single_line, OutputFormatter};
use anyhow::Result;
use recite_core::{ConversionMode, Output, Paragraph};
use std::io::Write;

/// Markdown formatter - outputs paragraphs as a markdown list per section
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    paragraph_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            paragraph_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn begin_section(
        &mut self,
        source: &str,
        mode: ConversionMode,
        output: &Output,
    ) -> Result<()> {
        writeln!(
            self.writer,
            "## {} ({} chars)",
            section_title(mode),
            output.stats.ideographs
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "*Source: {}*", source)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn format_paragraph(&mut self, paragraph: &Paragraph) -> Result<()> {
        self.paragraph_count += 1;
        writeln!(
            self.writer,
            "- **{}** `{} chars` {}",
            paragraph.label(),
            paragraph.ideographs,
            single_line(&paragraph.display_text())
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total paragraphs: {}*", self.paragraph_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
