//! CLI command implementations

use clap::Subcommand;

pub mod convert;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert schedule documents in a directory into address lists
    Convert(convert::ConvertArgs),
}
