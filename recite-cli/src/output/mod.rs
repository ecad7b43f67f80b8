//! Output formatting module
//!
//! A formatter receives one section per conversion of an input source,
//! followed by that section's paragraphs, and writes everything out on
//! [`OutputFormatter::finish`] or as it goes.

use anyhow::{Context, Result};
use recite_core::{ConversionMode, Output, Paragraph, ResolvedStyle};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub mod html;
pub mod json;
pub mod markdown;
pub mod text;

pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Start a section: one conversion of one input source
    fn begin_section(&mut self, source: &str, mode: ConversionMode, output: &Output)
        -> Result<()>;

    /// Format and output a single paragraph of the current section
    fn format_paragraph(&mut self, paragraph: &Paragraph) -> Result<()>;

    /// Finalize output (e.g., close the document)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Standalone HTML page with labeled, highlighted paragraphs
    Html,
    /// Plain text with one paragraph per line
    Text,
    /// JSON array of sections with paragraphs and statistics
    Json,
    /// Markdown list of labeled paragraphs
    Markdown,
}

impl OutputFormat {
    /// All formats, in display order
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Html,
        OutputFormat::Text,
        OutputFormat::Json,
        OutputFormat::Markdown,
    ];

    /// Format name as accepted on the command line
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// One-line description
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Html => "Standalone HTML page with labeled, highlighted paragraphs",
            OutputFormat::Text => "Plain text with one paragraph per line",
            OutputFormat::Json => "JSON array of sections with paragraphs and statistics",
            OutputFormat::Markdown => "Markdown list of labeled paragraphs",
        }
    }
}

/// Create a formatter writing to `writer`
pub fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write + Send + Sync>,
    style: &ResolvedStyle,
    highlight: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Html => Box::new(HtmlFormatter::new(writer, style.clone(), highlight)),
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}

/// Buffered writer for an output file, or stdout when no path is given
pub fn open_writer(path: Option<&Path>) -> Result<Box<dyn Write + Send + Sync>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

/// Heading for the section of a conversion mode
pub fn section_title(mode: ConversionMode) -> &'static str {
    match mode {
        ConversionMode::Literal => "Recite helper - Text",
        ConversionMode::Romanized => "Recite helper - Pinyin",
        ConversionMode::Radical => "Recite helper - Radical",
    }
}

/// Paragraph text on one line: line breaks dropped, lines trimmed
pub fn single_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_titles() {
        assert_eq!(section_title(ConversionMode::Romanized), "Recite helper - Pinyin");
        assert_eq!(section_title(ConversionMode::Radical), "Recite helper - Radical");
    }

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("nh。\n  shj！\n"), "nh。 shj！");
        assert_eq!(single_line("\n\n"), "");
    }

    #[test]
    fn test_open_writer() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        {
            let mut writer = open_writer(Some(&path)).unwrap();
            writer.write_all("你好".as_bytes()).unwrap();
            writer.flush().unwrap();
        }
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "你好");

        let missing = dir.path().join("missing/out.txt");
        assert!(open_writer(Some(&missing)).is_err());
    }

    #[test]
    fn test_format_names() {
        let names: Vec<_> = OutputFormat::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["html", "text", "json", "markdown"]);
    }
}
