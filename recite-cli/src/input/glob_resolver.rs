//! File pattern resolution using glob

use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

use super::{InputSource, STDIN_MARKER};
use crate::error::CliError;

/// Resolve file patterns to input sources
///
/// `-` stands for standard input and may appear once. Files are sorted and
/// deduplicated; standard input, when requested, comes first.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<InputSource>> {
    let mut files: Vec<PathBuf> = Vec::new();
    let mut stdin = false;

    for pattern in patterns {
        if pattern == STDIN_MARKER {
            stdin = true;
            continue;
        }

        let paths = glob(pattern)
            .map_err(|e| CliError::InvalidPattern(format!("{pattern} ({e})")))
            .with_context(|| format!("Invalid glob pattern: {}", pattern))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    files.sort();
    files.dedup();

    let mut sources: Vec<InputSource> = Vec::with_capacity(files.len() + 1);
    if stdin {
        sources.push(InputSource::Stdin);
    }
    sources.extend(files.into_iter().map(InputSource::File));

    if sources.is_empty() {
        return Err(CliError::FileNotFound(patterns.join(", ")))
            .context("No files found matching the provided patterns");
    }

    Ok(sources)
}
