//! Process command implementation

use anyhow::Result;
use clap::Args;
use recite_core::{ConversionMode, ReciteProcessor};
use std::path::PathBuf;

use super::{load_dictionary, provider_for, Mode};
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::resolve_patterns;
use crate::output::{create_formatter, open_writer, OutputFormat};
use crate::progress::ProgressReporter;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob; `-` reads stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Conversion mode (HTML defaults to pinyin plus radicals when a dictionary is set)
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// Sentences per paragraph
    #[arg(short, long, value_name = "N")]
    pub group_size: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Character dictionary (Make Me a Hanzi dictionary.txt)
    #[arg(short, long, value_name = "FILE", env = "RECITE_DICTIONARY")]
    pub dictionary: Option<PathBuf>,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self, quiet: bool) -> Result<()> {
        log::info!("Starting text processing");

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let style = config.resolve_style();

        let (mut modes, radical_required) = self.requested_modes(&config);
        let dictionary_path = self.dictionary.clone().or(config.dictionary.path.clone());
        let dictionary = load_dictionary(dictionary_path.as_deref(), radical_required)?;

        if dictionary.is_none() {
            if radical_required {
                return Err(CliError::ConfigError(
                    "radical mode requires a dictionary (--dictionary or [dictionary] path)"
                        .into(),
                )
                .into());
            }
            modes.retain(|mode| !mode.needs_radicals());
        }

        let provider = provider_for(dictionary);
        let processors = modes
            .iter()
            .map(|&mode| {
                let core = config.core_config(self.group_size, Some(mode))?;
                let processor = ReciteProcessor::with_shared_provider(core, provider.clone())
                    .map_err(CliError::from)?;
                Ok((mode, processor))
            })
            .collect::<Result<Vec<_>, CliError>>()?;

        let sources = resolve_patterns(&self.input)?;
        log::info!("Found {} input(s) to process", sources.len());

        let writer = open_writer(self.output.as_deref())?;
        let mut formatter = create_formatter(
            self.format,
            writer,
            &style,
            config.processing.highlight_onsets,
        );

        let mut progress = ProgressReporter::new(quiet);
        progress.init_files(sources.len() as u64);

        for source in &sources {
            let name = source.name();
            let text = source.read_text()?;

            for (mode, processor) in &processors {
                let output = processor.process(&text).map_err(CliError::from)?;
                if output.stats.lookup_misses > 0 {
                    log::info!(
                        "{}: {} characters without a {} lookup",
                        name,
                        output.stats.lookup_misses,
                        mode
                    );
                }

                formatter.begin_section(&name, *mode, &output)?;
                for paragraph in &output.paragraphs {
                    formatter.format_paragraph(paragraph)?;
                }
            }

            progress.file_completed(&name);
        }

        formatter.finish()?;
        progress.finish();

        log::info!("Processing complete");
        Ok(())
    }

    /// Modes to render, and whether the radical mode was asked for explicitly
    fn requested_modes(&self, config: &CliConfig) -> (Vec<ConversionMode>, bool) {
        let mode = match self.mode {
            Some(mode) => ConversionMode::from(mode),
            None if self.format == OutputFormat::Html => {
                return (
                    vec![ConversionMode::Romanized, ConversionMode::Radical],
                    false,
                );
            }
            None => config.processing.mode,
        };

        (vec![mode], mode.needs_radicals())
    }
}
