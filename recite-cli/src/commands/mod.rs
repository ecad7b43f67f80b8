//! CLI command implementations

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use recite_core::{builtin, Chain, ConversionMode, HanziDictionary, Transliterator};
use std::path::Path;
use std::sync::Arc;

use crate::error::CliError;
use crate::output::OutputFormat;

pub mod export;
pub mod generate_config;
pub mod grid;
pub mod process;
pub mod unique;
pub mod validate;

/// Recitation aids for Chinese text
#[derive(Debug, Parser)]
#[command(name = "recite", version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress output and logging
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert text into labeled recitation paragraphs
    Process(process::ProcessArgs),

    /// Render a character grid for handwriting practice
    Grid(grid::GridArgs),

    /// Export per-character radicals and readings as CSV
    Export(export::ExportArgs),

    /// Print the distinct Chinese characters of a text
    Unique(unique::UniqueArgs),

    /// Write a commented configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a configuration file
    Validate(validate::ValidateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List conversion modes
    Modes,

    /// List output formats
    Formats,
}

/// Conversion mode as given on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Characters unchanged
    Literal,
    /// Abbreviated pinyin initials
    Romanized,
    /// Radical glyphs (requires a dictionary)
    Radical,
}

impl From<Mode> for ConversionMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Literal => ConversionMode::Literal,
            Mode::Romanized => ConversionMode::Romanized,
            Mode::Radical => ConversionMode::Radical,
        }
    }
}

impl Cli {
    /// Initialize logging based on verbosity
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // A second initialization (e.g. from tests) keeps the first logger
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init();
    }

    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        log::debug!("Arguments: {:?}", self);

        match &self.command {
            Commands::Process(args) => args.execute(self.quiet),
            Commands::Grid(args) => args.execute(),
            Commands::Export(args) => args.execute(),
            Commands::Unique(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", list(subcommand));
                Ok(())
            }
        }
    }
}

/// Load the dictionary at `path`, if any
///
/// A missing or unreadable dictionary is an error only when `required`;
/// otherwise it is logged and radical lookups are unavailable.
pub fn load_dictionary(path: Option<&Path>, required: bool) -> Result<Option<HanziDictionary>> {
    let Some(path) = path else {
        return Ok(None);
    };

    match HanziDictionary::from_path(path) {
        Ok(dictionary) => Ok(Some(dictionary)),
        Err(e) if !required => {
            log::warn!("{e}; radical lookups disabled");
            Ok(None)
        }
        Err(e) => Err(CliError::from(e).into()),
    }
}

/// Provider consulting the dictionary first and the built-in readings second
pub fn provider_for(dictionary: Option<HanziDictionary>) -> Arc<dyn Transliterator> {
    match dictionary {
        Some(dictionary) => Arc::new(Chain::new(dictionary, builtin())),
        None => Arc::new(builtin()),
    }
}

fn list(subcommand: &ListCommands) -> String {
    let mut out = String::new();
    match subcommand {
        ListCommands::Modes => {
            out.push_str("Available conversion modes:\n");
            for mode in ConversionMode::ALL {
                let note = match mode {
                    ConversionMode::Literal => "characters unchanged",
                    ConversionMode::Romanized => "abbreviated pinyin (default)",
                    ConversionMode::Radical => "radical glyphs, requires a dictionary",
                };
                out.push_str(&format!("  {:<10} {}\n", mode.name(), note));
            }
        }
        ListCommands::Formats => {
            out.push_str("Available output formats:\n");
            for format in OutputFormat::ALL {
                out.push_str(&format!("  {:<10} {}\n", format.name(), format.description()));
            }
        }
    }
    out
}
