//! HTML rendering of tokens, paragraphs and character grids

use std::collections::HashSet;
use std::fmt::Write as _;

use super::style::ResolvedStyle;
use crate::domain::{Paragraph, Token};

/// Options for [`render_grid`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridOptions {
    /// Keep only the first occurrence of each character
    pub unique_only: bool,
}

/// Escape text for HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        push_escaped(&mut escaped, ch);
    }
    escaped
}

fn push_escaped(out: &mut String, ch: char) {
    match ch {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        '\'' => out.push_str("&#39;"),
        _ => out.push(ch),
    }
}

/// Inline markup for a token run
///
/// With `highlight` set, highlighted annotations are wrapped in a colored
/// span; otherwise all tokens render as plain text.
pub fn render_tokens(tokens: &[Token], style: &ResolvedStyle, highlight: bool) -> String {
    let mut out = String::new();

    for token in tokens {
        match token {
            Token::Literal(ch) => push_escaped(&mut out, *ch),
            Token::Annotated {
                text,
                highlight: true,
            } if highlight => {
                let _ = write!(
                    out,
                    r#"<span class="onset" style="color: {}">{}</span>"#,
                    style.highlight_color,
                    escape_html(text)
                );
            }
            Token::Annotated { text, .. } => out.push_str(&escape_html(text)),
            Token::RadicalGlyph(glyph) => out.push_str(&escape_html(glyph)),
        }
    }

    out
}

/// Stylesheet for paragraph labels and section totals
pub fn label_stylesheet(style: &ResolvedStyle) -> String {
    format!(
        r#"<style>
.paragraph-number {{
    background-color: {number};
    color: white;
    padding: 4px 6px;
    border-radius: 3px 0 0 3px;
    margin-right: 0;
    display: inline-flex;
    align-items: center;
    height: 20px;
    line-height: 20px;
    font-size: 0.9em;
}}
.char-count {{
    background-color: {count};
    color: white;
    padding: 4px 6px;
    border-radius: 0 3px 3px 0;
    margin-right: 10px;
    font-size: 0.9em;
    display: inline-flex;
    align-items: center;
    width: 70px;
    justify-content: center;
    height: 20px;
    line-height: 20px;
}}
.total-count {{
    color: {number};
    font-weight: bold;
}}
.label-group {{
    display: inline-flex;
    margin-right: 10px;
    align-items: center;
    height: 20px;
}}
</style>
"#,
        number = style.number_label_color,
        count = style.count_label_color,
    )
}

/// Label group for one paragraph: number badge and count badge
pub fn render_label(paragraph: &Paragraph) -> String {
    format!(
        r#"<span class="label-group"><span class="paragraph-number">{}</span><span class="char-count">{} chars</span></span>"#,
        paragraph.label(),
        paragraph.ideographs
    )
}

/// Labeled paragraphs, each followed by a blank line
pub fn render_paragraphs(paragraphs: &[Paragraph], style: &ResolvedStyle, highlight: bool) -> String {
    let mut out = label_stylesheet(style);

    for paragraph in paragraphs {
        out.push_str(&render_label(paragraph));
        out.push_str(&render_tokens(&paragraph.tokens, style, highlight));
        out.push_str("<br><br>\n");
    }

    out
}

/// Section heading with the total ideograph count, followed by `body`
pub fn render_section(title: &str, total: usize, body: &str) -> String {
    format!(
        "<h3>{} <span class=\"total-count\">({} chars)</span></h3>\n{}",
        escape_html(title),
        total,
        body
    )
}

/// Characters shown in a grid: line breaks dropped, optionally deduplicated
pub fn grid_characters(text: &str, options: GridOptions) -> Vec<char> {
    let mut seen = HashSet::new();
    text.chars()
        .filter(|ch| !matches!(ch, '\n' | '\r'))
        .filter(|ch| !options.unique_only || seen.insert(*ch))
        .collect()
}

/// Character grid: one square tile per character with a 3x3 guide grid
pub fn render_grid(text: &str, style: &ResolvedStyle, options: GridOptions) -> String {
    let mut out = format!(
        r#"<style>
.grid-container {{
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax({size}px, 1fr));
    gap: 10px;
    justify-items: center;
    align-items: center;
}}
.grid-item {{
    width: {size}px;
    height: {size}px;
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    grid-template-rows: repeat(3, 1fr);
    border: 1px solid rgb(0, 0, 0);
    background-color: #f9f9f9;
    position: relative;
}}
.grid-item .character {{
    position: absolute;
    top: 50%;
    left: 50%;
    transform: translate(-50%, -50%);
    font-size: {font_size}px;
    font-weight: {font_weight};
    color: {color};
    font-family: {font_family}, 'Noto Sans SC', sans-serif;
}}
.grid-item .sub-item {{
    border: {thickness} solid {border_color};
}}
</style>
"#,
        size = style.container_size,
        font_size = style.font_size,
        font_weight = style.font_weight,
        color = style.text_color,
        font_family = style.font_family,
        thickness = style.border_thickness,
        border_color = style.border_color,
    );

    out.push_str(r#"<div class="grid-container">"#);
    for ch in grid_characters(text, options) {
        out.push_str(r#"<div class="grid-item">"#);
        for _ in 0..9 {
            out.push_str(r#"<div class="sub-item"></div>"#);
        }
        out.push_str(r#"<span class="character">"#);
        push_escaped(&mut out, ch);
        out.push_str("</span></div>");
    }
    out.push_str("</div>\n");

    out
}

/// Standalone HTML document around `body`
pub fn wrap_document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape_html(title),
        body
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraph(number: usize, tokens: Vec<Token>, ideographs: usize) -> Paragraph {
        Paragraph {
            number,
            ideographs,
            sentence_count: 1,
            original: String::new(),
            tokens,
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<a href=\"x\">&'"), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
        assert_eq!(escape_html("你好"), "你好");
    }

    #[test]
    fn test_render_tokens_highlight() {
        let style = ResolvedStyle::default();
        let tokens = vec![
            Token::annotated("zh", true),
            Token::annotated("g", false),
            Token::Literal('<'),
        ];

        assert_eq!(
            render_tokens(&tokens, &style, true),
            r#"<span class="onset" style="color: DarkTurquoise">zh</span>g&lt;"#
        );
        assert_eq!(render_tokens(&tokens, &style, false), "zhg&lt;");
    }

    #[test]
    fn test_render_paragraphs() {
        let style = ResolvedStyle::default();
        let paragraphs = vec![
            paragraph(1, vec![Token::annotated("n", false), Token::Literal('。')], 1),
            paragraph(2, vec![Token::RadicalGlyph("女".into())], 1),
        ];

        let html = render_paragraphs(&paragraphs, &style, true);
        assert!(html.starts_with("<style>"));
        assert!(html.contains("background-color: #8B0000;"));
        assert!(html.contains(r#"<span class="paragraph-number">P01</span><span class="char-count">1 chars</span></span>n。<br><br>"#));
        assert!(html.contains(r#"<span class="paragraph-number">P02</span>"#));
        assert!(html.contains("女<br><br>"));
    }

    #[test]
    fn test_render_section() {
        let html = render_section("Recite helper - Pinyin", 6, "body");
        assert_eq!(
            html,
            "<h3>Recite helper - Pinyin <span class=\"total-count\">(6 chars)</span></h3>\nbody"
        );
    }

    #[test]
    fn test_grid_characters() {
        assert_eq!(
            grid_characters("你好\n你", GridOptions::default()),
            vec!['你', '好', '你']
        );
        assert_eq!(
            grid_characters("你好\n你们", GridOptions { unique_only: true }),
            vec!['你', '好', '们']
        );
    }

    #[test]
    fn test_render_grid() {
        let style = ResolvedStyle::default();
        let html = render_grid("天地", &style, GridOptions::default());

        assert!(html.contains("minmax(200px, 1fr)"));
        assert!(html.contains("font-size: 180px;"));
        assert!(html.contains("border: 0.5px solid #ffbebe;"));
        assert_eq!(html.matches(r#"<div class="grid-item">"#).count(), 2);
        assert_eq!(html.matches(r#"<div class="sub-item"></div>"#).count(), 18);
        assert!(html.contains(r#"<span class="character">天</span>"#));
    }

    #[test]
    fn test_wrap_document() {
        let doc = wrap_document("a<b", "<p>x</p>\n");
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>a&lt;b</title>"));
        assert!(doc.contains("<meta charset=\"utf-8\">"));
    }
}
