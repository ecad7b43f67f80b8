//! HTML output formatter

use super::{section_title, OutputFormatter};
use anyhow::Result;
use recite_core::render::{
    escape_html, label_stylesheet, render_label, render_section, render_tokens, wrap_document,
};
use recite_core::{ConversionMode, Output, Paragraph, ResolvedStyle};
use std::io::Write;

const DOCUMENT_TITLE: &str = "Recite helper";

struct PendingSection {
    title: &'static str,
    total: usize,
    body: String,
}

/// HTML formatter - buffers sections and writes one standalone page
pub struct HtmlFormatter<W: Write> {
    writer: W,
    style: ResolvedStyle,
    highlight: bool,
    body: String,
    source: Option<String>,
    pending: Option<PendingSection>,
}

impl<W: Write> HtmlFormatter<W> {
    /// Create a new HTML formatter
    pub fn new(writer: W, style: ResolvedStyle, highlight: bool) -> Self {
        Self {
            writer,
            style,
            highlight,
            body: String::new(),
            source: None,
            pending: None,
        }
    }

    fn flush_section(&mut self) {
        if let Some(section) = self.pending.take() {
            self.body
                .push_str(&render_section(section.title, section.total, &section.body));
            self.body.push('\n');
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for HtmlFormatter<W> {
    fn begin_section(
        &mut self,
        source: &str,
        mode: ConversionMode,
        output: &Output,
    ) -> Result<()> {
        self.flush_section();

        if self.source.as_deref() != Some(source) {
            self.body
                .push_str(&format!("<h2>{}</h2>\n", escape_html(source)));
            self.source = Some(source.to_string());
        }

        if mode == ConversionMode::Romanized {
            self.body.push_str("<h3>Result:</h3>\n<p>");
            self.body
                .push_str(&render_tokens(&output.tokens, &self.style, false));
            self.body.push_str("</p>\n");
        }

        self.pending = Some(PendingSection {
            title: section_title(mode),
            total: output.stats.ideographs,
            body: String::new(),
        });
        Ok(())
    }

    fn format_paragraph(&mut self, paragraph: &Paragraph) -> Result<()> {
        let Some(section) = self.pending.as_mut() else {
            anyhow::bail!("paragraph formatted before any section");
        };

        section.body.push_str(&render_label(paragraph));
        section
            .body
            .push_str(&render_tokens(&paragraph.tokens, &self.style, self.highlight));
        section.body.push_str("<br><br>\n");
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.flush_section();

        let mut page = label_stylesheet(&self.style);
        page.push_str(&self.body);
        self.writer
            .write_all(wrap_document(DOCUMENT_TITLE, &page).as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recite_core::{Config, HanziDictionary, ReciteProcessor};
    use std::io::Cursor;

    fn render(sections: &[(ConversionMode, &Output)], highlight: bool) -> String {
        let mut buffer = Vec::new();
        {
            let mut formatter =
                HtmlFormatter::new(&mut buffer, ResolvedStyle::default(), highlight);
            for (mode, output) in sections {
                formatter.begin_section("poem.txt", *mode, output).unwrap();
                for paragraph in &output.paragraphs {
                    formatter.format_paragraph(paragraph).unwrap();
                }
            }
            formatter.finish().unwrap();
        }
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_pinyin_page() {
        let output = ReciteProcessor::default().process("你好。世界！").unwrap();
        let html = render(&[(ConversionMode::Romanized, &output)], true);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert_eq!(html.matches("<h2>poem.txt</h2>").count(), 1);
        assert!(html.contains("<h3>Result:</h3>\n<p>nh。shj！</p>"));
        assert!(html.contains(
            "<h3>Recite helper - Pinyin <span class=\"total-count\">(4 chars)</span></h3>"
        ));
        assert!(html.contains(r#"<span class="paragraph-number">P01</span>"#));
        assert!(html.contains(r#"style="color: DarkTurquoise">sh</span>"#));
    }

    #[test]
    fn test_pinyin_and_radical_sections() {
        let pinyin = ReciteProcessor::default().process("好。").unwrap();
        let dictionary =
            HanziDictionary::from_reader(Cursor::new("{\"character\":\"好\",\"radical\":\"女\"}\n"))
                .unwrap();
        let config = Config::builder().mode("radical").build().unwrap();
        let radical = ReciteProcessor::new(config, dictionary)
            .unwrap()
            .process("好。")
            .unwrap();

        let html = render(
            &[
                (ConversionMode::Romanized, &pinyin),
                (ConversionMode::Radical, &radical),
            ],
            true,
        );

        let pinyin_at = html.find("Recite helper - Pinyin").unwrap();
        let radical_at = html.find("Recite helper - Radical").unwrap();
        assert!(pinyin_at < radical_at);
        assert!(html[radical_at..].contains("女<br><br>"));
        assert_eq!(html.matches("<h2>").count(), 1);
    }

    #[test]
    fn test_highlight_disabled() {
        let output = ReciteProcessor::default().process("中国。").unwrap();
        let html = render(&[(ConversionMode::Romanized, &output)], false);
        assert!(!html.contains("class=\"onset\""));
    }
}
