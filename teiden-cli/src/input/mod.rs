//! Document discovery

use anyhow::{Context, Result};
use glob::glob;
use std::path::{Path, PathBuf};

use crate::error::CliError;

/// List immediate children of `dir` with the given extension.
///
/// No recursion into subdirectories. The result is sorted and
/// deduplicated; an empty result is not an error.
pub fn list_documents(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let pattern = dir.join(format!("*.{extension}"));
    let pattern = pattern
        .to_str()
        .ok_or_else(|| CliError::InvalidPattern(pattern.display().to_string()))?;

    let mut files = Vec::new();
    for entry in glob(pattern).with_context(|| format!("Invalid glob pattern: {pattern}"))? {
        let path = entry.with_context(|| format!("Error resolving pattern: {pattern}"))?;

        if path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    files.dedup();

    Ok(files)
}
