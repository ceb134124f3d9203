//! Convert command implementation

use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

use crate::error::CliError;
use crate::extract::{LineExtractor, PdftotextExtractor, RawTextExtractor};
use crate::input;
use crate::output;
use crate::progress::ProgressReporter;

/// Extension of the source documents.
const PDF_EXTENSION: &str = "pdf";

/// Extension of pre-extracted raw text documents.
const RAW_EXTENSION: &str = "rawtxt";

/// Extension of the generated address list files.
const OUT_EXTENSION: &str = "txt";

/// Arguments for the convert command
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Directory containing the schedule documents (default: current directory)
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Path to the pdftotext executable
    #[arg(long, value_name = "PATH", default_value = "pdftotext")]
    pub tool: PathBuf,

    /// Treat .rawtxt files as already-extracted text, skipping pdftotext
    #[arg(long)]
    pub from_raw: bool,

    /// Keep the intermediate .rawtxt files after conversion
    #[arg(long)]
    pub keep_raw: bool,

    /// Process documents in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        let dir = self.dir.clone().unwrap_or_else(|| PathBuf::from("."));
        if !dir.is_dir() {
            return Err(CliError::NotADirectory(dir.display().to_string()).into());
        }

        let extension = if self.from_raw {
            RAW_EXTENSION
        } else {
            PDF_EXTENSION
        };
        let documents = input::list_documents(&dir, extension)?;
        if documents.is_empty() {
            log::warn!("no .{} files found in {}", extension, dir.display());
            return Ok(());
        }
        log::info!(
            "converting {} document(s) from {}",
            documents.len(),
            dir.display()
        );

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_documents(documents.len() as u64);

        // Documents are independent; a failure in one is reported and
        // the batch continues.
        let convert_one = |doc: &PathBuf| {
            if let Err(err) = self.convert_document(doc) {
                log::error!("failed to convert {}: {err:#}", doc.display());
            }
            progress.document_completed(doc);
        };

        if self.parallel {
            documents.par_iter().for_each(convert_one);
        } else {
            documents.iter().for_each(convert_one);
        }

        progress.finish();
        Ok(())
    }

    /// Convert a single document, writing its sibling address list.
    fn convert_document(&self, doc: &Path) -> Result<()> {
        let lines = if self.from_raw {
            RawTextExtractor.extract_lines(doc)?
        } else {
            PdftotextExtractor::new(self.tool.clone(), self.keep_raw).extract_lines(doc)?
        };

        let addresses = teiden_core::extract_address_lines(&lines)
            .with_context(|| format!("malformed document: {}", doc.display()))?;

        let out_path = output::replace_extension(doc, OUT_EXTENSION);
        output::write_address_lines(&out_path, &addresses)?;
        log::info!("generated {} ({} addresses)", out_path.display(), addresses.len());
        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();
    }
}
