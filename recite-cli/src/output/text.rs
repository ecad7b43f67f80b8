//! Plain text output formatter

use super::{section_title, single_line, OutputFormatter};
use anyhow::Result;
use recite_core::{ConversionMode, Output, Paragraph};
use std::io::Write;

/// Plain text formatter - one header per section, one paragraph per line
pub struct TextFormatter<W: Write> {
    writer: W,
    sections: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            sections: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn begin_section(
        &mut self,
        source: &str,
        mode: ConversionMode,
        output: &Output,
    ) -> Result<()> {
        if self.sections > 0 {
            writeln!(self.writer)?;
        }
        self.sections += 1;

        writeln!(
            self.writer,
            "{} ({} chars) [{}]",
            section_title(mode),
            output.stats.ideographs,
            source
        )?;
        Ok(())
    }

    fn format_paragraph(&mut self, paragraph: &Paragraph) -> Result<()> {
        writeln!(
            self.writer,
            "{} ({} chars) {}",
            paragraph.label(),
            paragraph.ideographs,
            single_line(&paragraph.display_text())
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
