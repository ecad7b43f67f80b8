//! Unique command implementation

use anyhow::Result;
use clap::Args;
use recite_core::text::unique_ideographs;

use crate::input::InputSource;

/// Arguments for the unique command
#[derive(Debug, Args)]
pub struct UniqueArgs {
    /// Input file (`-` reads stdin)
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: String,
}

impl UniqueArgs {
    /// Execute the unique command
    pub fn execute(&self) -> Result<()> {
        let text = InputSource::from_arg(&self.input).read_text()?;

        match extract(&text) {
            Some(characters) => println!("{characters}"),
            None => eprintln!("Warning: no Chinese characters found in {}", self.input),
        }
        Ok(())
    }
}

/// Distinct ideographs joined into one string, `None` when there are none
fn extract(text: &str) -> Option<String> {
    let characters: String = unique_ideographs(text).into_iter().collect();
    (!characters.is_empty()).then_some(characters)
}
