//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::config::CliConfig;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        match check(&self.config) {
            Ok(notes) => {
                println!("✓ Configuration is valid!");
                for note in notes {
                    println!("  {note}");
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {:#}", e))
            }
        }
    }
}

/// Load and check a configuration file, returning notes for the user
///
/// Invalid processing values and unparsable files are errors. Style values
/// that would fall back to defaults and a missing dictionary are reported as
/// warnings.
fn check(path: &std::path::Path) -> Result<Vec<String>> {
    let config = CliConfig::load(path)?;
    let core = config.core_config(None, None)?;

    let mut notes = vec![
        format!("Group size: {}", core.group_size()),
        format!("Mode: {}", core.mode()),
    ];

    let (_, warnings) = config.style.resolve();
    notes.extend(warnings.iter().map(|w| format!("Warning: {w}")));

    match &config.dictionary.path {
        Some(dictionary) if dictionary.is_file() => {
            notes.push(format!("Dictionary: {}", dictionary.display()));
        }
        Some(dictionary) => notes.push(format!(
            "Warning: dictionary not found: {}",
            dictionary.display()
        )),
        None => notes.push("Dictionary: none (radical mode unavailable)".to_string()),
    }

    Ok(notes)
}
