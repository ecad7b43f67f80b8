//! Export command implementation

use anyhow::{Context, Result};
use clap::Args;
use recite_core::export::write_csv;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use super::{load_dictionary, provider_for};
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::InputSource;

/// Arguments for the export command
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Input file (`-` reads stdin)
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: String,

    /// Output CSV file
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Character dictionary (Make Me a Hanzi dictionary.txt)
    #[arg(short, long, value_name = "FILE", env = "RECITE_DICTIONARY")]
    pub dictionary: Option<PathBuf>,

    /// Configuration file (the [dictionary] section applies)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self) -> Result<()> {
        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let dictionary_path = self.dictionary.clone().or(config.dictionary.path);
        let dictionary = load_dictionary(dictionary_path.as_deref(), false)?;
        if dictionary.is_none() {
            log::warn!("No dictionary available; the radical column will be empty");
        }

        let text = InputSource::from_arg(&self.input).read_text()?;
        if text.trim().is_empty() {
            log::warn!("No characters to export in {}", self.input);
        }

        let file = File::create(&self.output)
            .with_context(|| format!("Failed to create output file: {}", self.output.display()))?;
        let rows = write_csv(&text, provider_for(dictionary).as_ref(), BufWriter::new(file))
            .map_err(CliError::from)?;

        println!("Exported {} characters to {}", rows, self.output.display());
        Ok(())
    }
}
