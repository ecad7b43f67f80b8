//! Processing configuration

use crate::convert::ConversionMode;
use crate::domain::DEFAULT_GROUP_SIZE;
use crate::error::{Error, Result};

/// Default configuration constants
pub mod defaults {
    /// Sentences per paragraph
    pub const GROUP_SIZE: usize = super::DEFAULT_GROUP_SIZE;

    /// Whether onset clusters are highlighted when rendering
    pub const HIGHLIGHT_ONSETS: bool = true;
}

/// Processing configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) group_size: usize,
    pub(crate) mode: ConversionMode,
    pub(crate) highlight_onsets: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            group_size: defaults::GROUP_SIZE,
            mode: ConversionMode::default(),
            highlight_onsets: defaults::HIGHLIGHT_ONSETS,
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Sentences per paragraph
    pub fn group_size(&self) -> usize {
        self.group_size
    }

    /// Conversion mode
    pub fn mode(&self) -> ConversionMode {
        self.mode
    }

    /// Whether highlighted annotations are colored when rendering
    pub fn highlight_onsets(&self) -> bool {
        self.highlight_onsets
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.group_size == 0 {
            return Err(Error::Configuration(
                "group_size must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

/// Fluent builder for [`Config`]
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    group_size: Option<usize>,
    mode: Option<String>,
    highlight_onsets: Option<bool>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of sentences per paragraph
    pub fn group_size(mut self, size: usize) -> Self {
        self.group_size = Some(size);
        self
    }

    /// Set the conversion mode by name
    pub fn mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    /// Toggle onset highlighting
    pub fn highlight_onsets(mut self, enabled: bool) -> Self {
        self.highlight_onsets = Some(enabled);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if let Some(size) = self.group_size {
            config.group_size = size;
        }

        if let Some(mode) = self.mode {
            config.mode = mode.parse()?;
        }

        if let Some(enabled) = self.highlight_onsets {
            config.highlight_onsets = enabled;
        }

        config.validate()?;
        Ok(config)
    }
}
