//! teiden CLI library
//!
//! This library provides the command-line interface around
//! `teiden-core`: document discovery, external text extraction,
//! per-document conversion, and output writing.

pub mod commands;
pub mod error;
pub mod extract;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
