//! Grid command implementation

use anyhow::{Context, Result};
use clap::Args;
use recite_core::render::{render_grid, wrap_document};
use recite_core::GridOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::config::CliConfig;
use crate::input::InputSource;
use crate::output::open_writer;

/// Arguments for the grid command
#[derive(Debug, Args)]
pub struct GridArgs {
    /// Input file (`-` reads stdin)
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: String,

    /// Output HTML file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Show each character only once, in first-seen order
    #[arg(short, long)]
    pub unique: bool,

    /// Configuration file (the [style] section applies)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl GridArgs {
    /// Execute the grid command
    pub fn execute(&self) -> Result<()> {
        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let style = config.resolve_style();

        let text = InputSource::from_arg(&self.input).read_text()?;
        let options = GridOptions {
            unique_only: self.unique,
        };

        let page = wrap_document("Character grid", &render_grid(&text, &style, options));

        let mut writer = open_writer(self.output.as_deref())?;
        writer
            .write_all(page.as_bytes())
            .context("Failed to write grid")?;
        writer.flush()?;

        Ok(())
    }
}
