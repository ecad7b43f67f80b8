//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Processing error from core
    ProcessingError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ProcessingError(msg) => write!(f, "Processing error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<recite_core::Error> for CliError {
    fn from(err: recite_core::Error) -> Self {
        match err {
            recite_core::Error::Configuration(msg) => CliError::ConfigError(msg),
            recite_core::Error::DictionaryUnavailable(msg) => CliError::FileNotFound(msg),
            other => CliError::ProcessingError(other.to_string()),
        }
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CliError::FileNotFound("poem.txt".to_string()).to_string(),
            "File not found: poem.txt"
        );
        assert_eq!(
            CliError::InvalidPattern("[invalid".to_string()).to_string(),
            "Invalid file pattern: [invalid"
        );
        assert_eq!(
            CliError::ConfigError("bad mode".to_string()).to_string(),
            "Configuration error: bad mode"
        );
        assert_eq!(
            CliError::ProcessingError("misaligned".to_string()).to_string(),
            "Processing error: misaligned"
        );
    }

    #[test]
    fn test_from_core_error() {
        let error: CliError = recite_core::Error::Configuration("group_size".into()).into();
        assert!(matches!(error, CliError::ConfigError(_)));

        let error: CliError =
            recite_core::Error::DictionaryUnavailable("dictionary.txt".into()).into();
        assert_eq!(error.to_string(), "File not found: dictionary.txt");

        let error: CliError = recite_core::Error::Alignment {
            converted: 2,
            original: 3,
        }
        .into();
        assert!(error.to_string().starts_with("Processing error: alignment error"));
    }

    #[test]
    fn test_error_with_unicode_path() {
        let error = CliError::FileNotFound("课文/静夜思.txt".to_string());
        assert_eq!(error.to_string(), "File not found: 课文/静夜思.txt");
    }

    #[test]
    fn test_cli_result_type_alias() {
        let failure: CliResult<()> = Err(CliError::ConfigError("x".into()).into());
        assert!(failure.unwrap_err().to_string().contains("Configuration error"));
    }
}
