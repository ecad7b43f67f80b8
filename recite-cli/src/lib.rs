//! recite CLI library
//!
//! This library provides the command-line interface for the recite
//! recitation aids: labeled pinyin and radical helpers, character grids,
//! character extraction and dictionary export.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
