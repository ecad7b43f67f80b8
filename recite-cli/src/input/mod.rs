//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use anyhow::{Context, Result};
use recite_core::Input;
use std::io;
use std::path::PathBuf;

/// Argument value that selects standard input
pub const STDIN_MARKER: &str = "-";

/// Where one block of input text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl InputSource {
    /// Source for a single command-line argument
    pub fn from_arg(arg: &str) -> Self {
        if arg == STDIN_MARKER {
            InputSource::Stdin
        } else {
            InputSource::File(PathBuf::from(arg))
        }
    }

    /// Display name
    pub fn name(&self) -> String {
        match self {
            InputSource::Stdin => "stdin".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }

    /// Read the whole source as text
    pub fn read_text(&self) -> Result<String> {
        match self {
            InputSource::Stdin => Input::from_reader(io::stdin())
                .into_text()
                .context("Failed to read standard input"),
            InputSource::File(path) => FileReader::read_text(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_arg() {
        assert_eq!(InputSource::from_arg("-"), InputSource::Stdin);
        assert_eq!(
            InputSource::from_arg("poem.txt"),
            InputSource::File(PathBuf::from("poem.txt"))
        );
        assert_eq!(InputSource::Stdin.name(), "stdin");
    }
}
