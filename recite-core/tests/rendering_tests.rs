//! Rendering integration tests: paragraphs, sections and grids

use recite_core::render::{render_grid, render_section, GridOptions, StyleConfig};
use recite_core::{Config, ReciteProcessor};

#[test]
fn test_recite_helper_markup() {
    let processor = ReciteProcessor::default();
    let output = processor.process("你好。世界！再见？明天见。").unwrap();
    let (style, warnings) = StyleConfig::default().resolve();
    assert!(warnings.is_empty());

    let body = processor.render(&output, &style);
    let html = render_section("Recite helper - Pinyin", output.stats.ideographs, &body);

    assert!(html.starts_with("<h3>Recite helper - Pinyin <span class=\"total-count\">(9 chars)</span></h3>"));
    assert!(html.contains(r#"<span class="paragraph-number">P01</span><span class="char-count">6 chars</span>"#));
    assert!(html.contains(r#"<span class="paragraph-number">P02</span><span class="char-count">3 chars</span>"#));
    assert!(html.contains(r#"<span class="onset" style="color: DarkTurquoise">sh</span>"#));
    assert_eq!(html.matches("<br><br>").count(), 2);
}

#[test]
fn test_custom_highlight_color() {
    let config = StyleConfig {
        highlight_color: "#ff0000".into(),
        ..StyleConfig::default()
    };
    let (style, _) = config.resolve();

    let processor = ReciteProcessor::default();
    let output = processor.process("中文。").unwrap();
    assert!(processor
        .render(&output, &style)
        .contains(r#"style="color: #ff0000">zh</span>"#));
}

#[test]
fn test_markup_in_input_is_escaped() {
    let config = Config::builder().mode("literal").build().unwrap();
    let processor = ReciteProcessor::with_builtin(config).unwrap();
    let output = processor.process("<script>alert(1)</script>。").unwrap();
    let (style, _) = StyleConfig::default().resolve();

    let html = processor.render(&output, &style);
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn test_malformed_style_falls_back() {
    let config = StyleConfig::from_toml(
        r#"
container_size = 100
border_thickness = "thick"
border_color = "not a color"
"#,
    )
    .unwrap();
    let (style, warnings) = config.resolve();

    assert_eq!(style.container_size, 100);
    assert_eq!(style.font_size, 90);
    assert_eq!(style.border_thickness, "0.5px");
    assert_eq!(style.border_color, "#ffbebe");

    let fields: Vec<_> = warnings.iter().map(|w| w.field).collect();
    assert_eq!(fields, vec!["border_thickness", "border_color"]);
}

#[test]
fn test_unique_grid() {
    let (style, _) = StyleConfig::default().resolve();
    let all = render_grid("明月\n明月光", &style, GridOptions::default());
    let unique = render_grid("明月\n明月光", &style, GridOptions { unique_only: true });

    assert_eq!(all.matches(r#"<div class="grid-item">"#).count(), 5);
    assert_eq!(unique.matches(r#"<div class="grid-item">"#).count(), 3);
}
