//! Configuration file support
//!
//! A TOML file with `[processing]`, `[style]` and `[dictionary]` sections.
//! Every field is optional; command-line flags override file values.

use anyhow::{Context, Result};
use recite_core::{Config, ConversionMode, ResolvedStyle, StyleConfig, StyleWarning};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::CliError;

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Rendering style
    #[serde(default)]
    pub style: StyleConfig,

    /// Lookup data source
    #[serde(default)]
    pub dictionary: DictionaryConfig,
}

/// Processing-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Sentences per paragraph
    pub group_size: usize,

    /// Default conversion mode
    pub mode: ConversionMode,

    /// Color onset clusters in HTML output
    pub highlight_onsets: bool,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        let core = Config::default();
        Self {
            group_size: core.group_size(),
            mode: core.mode(),
            highlight_onsets: core.highlight_onsets(),
        }
    }
}

/// Dictionary-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Path to a Make Me a Hanzi style `dictionary.txt`
    pub path: Option<PathBuf>,
}

impl CliConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(source: &str) -> Result<Self, CliError> {
        toml::from_str(source).map_err(|e| CliError::ConfigError(e.to_string()))
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_toml(&source)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a file when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Core processing configuration with optional overrides
    pub fn core_config(
        &self,
        group_size: Option<usize>,
        mode: Option<ConversionMode>,
    ) -> Result<Config, CliError> {
        Config::builder()
            .group_size(group_size.unwrap_or(self.processing.group_size))
            .mode(mode.unwrap_or(self.processing.mode).name())
            .highlight_onsets(self.processing.highlight_onsets)
            .build()
            .map_err(CliError::from)
    }

    /// Resolved style, reporting every substituted value on stderr
    pub fn resolve_style(&self) -> ResolvedStyle {
        let (style, warnings) = self.style.resolve();
        // Nothing useful to do if stderr is gone
        let _ = report_style_warnings(&warnings, &mut io::stderr());
        style
    }
}

/// Write one `Warning:` line per substituted style value
pub fn report_style_warnings(warnings: &[StyleWarning], out: &mut impl Write) -> io::Result<()> {
    for warning in warnings {
        writeln!(out, "Warning: {warning}")?;
    }
    Ok(())
}
