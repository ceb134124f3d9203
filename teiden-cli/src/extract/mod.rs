//! Text extraction from source documents
//!
//! The core parser only consumes an ordered sequence of lines; how
//! those lines come out of a document lives here. PDF documents go
//! through the external pdftotext tool; pre-extracted text is read
//! directly.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::CliError;
use crate::output::replace_extension;

/// Extension of the intermediate raw text files written by pdftotext.
const RAW_EXTENSION: &str = "rawtxt";

/// Turns one source document into an ordered sequence of text lines.
pub trait LineExtractor {
    /// Extract the document's text as lines, in original order.
    fn extract_lines(&self, doc: &Path) -> Result<Vec<String>>;
}

/// Extracts text by invoking the external pdftotext tool.
///
/// The tool writes a sibling `.rawtxt` file which is read back and,
/// unless `keep_raw` is set, removed afterwards.
#[derive(Debug)]
pub struct PdftotextExtractor {
    tool: PathBuf,
    keep_raw: bool,
}

impl PdftotextExtractor {
    /// Create an extractor invoking the given executable.
    pub fn new(tool: PathBuf, keep_raw: bool) -> Self {
        Self { tool, keep_raw }
    }
}

impl LineExtractor for PdftotextExtractor {
    fn extract_lines(&self, doc: &Path) -> Result<Vec<String>> {
        let raw_path = replace_extension(doc, RAW_EXTENSION);
        if raw_path.is_file() {
            fs::remove_file(&raw_path)
                .with_context(|| format!("failed to remove stale {}", raw_path.display()))?;
        }

        let status = Command::new(&self.tool)
            .arg(doc)
            .arg(&raw_path)
            .status()
            .with_context(|| format!("failed to run {}", self.tool.display()))?;
        if !status.success() {
            return Err(CliError::ExtractionFailed(format!(
                "{} exited with {} for {}",
                self.tool.display(),
                status,
                doc.display()
            ))
            .into());
        }

        let lines = read_lines(&raw_path);
        if !self.keep_raw {
            // Best effort; the conversion already succeeded.
            let _ = fs::remove_file(&raw_path);
        }
        lines
    }
}

/// Reads a document that is already plain text.
#[derive(Debug)]
pub struct RawTextExtractor;

impl LineExtractor for RawTextExtractor {
    fn extract_lines(&self, doc: &Path) -> Result<Vec<String>> {
        read_lines(doc)
    }
}

/// Read a UTF-8 text file as owned lines.
fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(content.lines().map(str::to_owned).collect())
}
