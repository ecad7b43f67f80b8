//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use recite_core::api::defaults as processing;
use recite_core::render::defaults as style;
use recite_core::ConversionMode;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the file to change grouping, colors or the dictionary path");
        println!("2. Validate your configuration:");
        println!("   recite validate --config {}", self.output.display());
        println!("3. Use it for processing:");
        println!(
            "   recite process -i input.txt -f html --config {}",
            self.output.display()
        );

        Ok(())
    }
}

/// Template with every option at its default value
fn generate_template() -> String {
    format!(
        r#"# recite configuration

[processing]
# Sentences per paragraph (at least 1)
group_size = {group_size}
# Default conversion mode: "literal", "romanized" or "radical"
mode = "{mode}"
# Color zh/ch/sh onsets in HTML output
highlight_onsets = {highlight}

[style]
# Grid tile size in pixels
container_size = {container_size}
font_family = "{font_family}"
# normal, bold, lighter, bolder or 100-900
font_weight = "{font_weight}"
# Font size in pixels; defaults to 90% of container_size
# font_size = 180
text_color = "{text_color}"
# Guide-line thickness, e.g. "0.5px" or "1"
border_thickness = "{border_thickness}"
border_color = "{border_color}"
highlight_color = "{highlight_color}"
number_label_color = "{number_label_color}"
count_label_color = "{count_label_color}"

[dictionary]
# Make Me a Hanzi dictionary.txt, one JSON record per line.
# Required for radical mode; can also be set with RECITE_DICTIONARY.
# path = "data/dictionary.txt"
"#,
        group_size = processing::GROUP_SIZE,
        mode = ConversionMode::default(),
        highlight = processing::HIGHLIGHT_ONSETS,
        container_size = style::CONTAINER_SIZE,
        font_family = style::FONT_FAMILY,
        font_weight = style::FONT_WEIGHT,
        text_color = style::TEXT_COLOR,
        border_thickness = style::BORDER_THICKNESS,
        border_color = style::BORDER_COLOR,
        highlight_color = style::HIGHLIGHT_COLOR,
        number_label_color = style::NUMBER_LABEL_COLOR,
        count_label_color = style::COUNT_LABEL_COLOR,
    )
}
