//! Error types for recitation processing

use thiserror::Error;

/// Error type for recite operations
#[derive(Debug, Error)]
pub enum Error {
    /// Converted and original fragment sequences disagree in length
    #[error("alignment error: {converted} converted fragments vs {original} original fragments")]
    Alignment {
        /// Number of fragments in the converted stream
        converted: usize,
        /// Number of fragments in the original stream
        original: usize,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A lookup data source could not be opened
    #[error("Dictionary unavailable: {0}")]
    DictionaryUnavailable(String),

    /// A lookup data source could not be parsed
    #[error("Dictionary error at line {line}: {message}")]
    Dictionary {
        /// 1-based line number in the record store
        line: usize,
        /// Parser message
        message: String,
    },

    /// Infrastructure error (I/O, encoding)
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),

    /// Tabular export failed
    #[error("Export error: {0}")]
    Export(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Infrastructure(err.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Export(err.to_string())
    }
}

/// Result type for recite operations
pub type Result<T> = std::result::Result<T, Error>;
