//! Address list output

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Sibling path with the extension replaced.
pub fn replace_extension(path: &Path, extension: &str) -> PathBuf {
    path.with_extension(extension)
}

/// Write address lines to `path`, one per line, UTF-8.
pub fn write_address_lines(path: &Path, lines: &[String]) -> Result<()> {
    let mut content = String::new();
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }

    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
