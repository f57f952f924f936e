//! CLI argument definitions for the dataset writer.

use crate::writer::OutputStyle;
use clap::Args;
use std::path::PathBuf;

/// Output options shared by every command that writes datasets.
#[derive(Args, Clone, Debug, Default)]
pub struct WriteArgs {
    /// Object layout: compact, or spaced to match the legacy generator byte for byte
    #[arg(long, value_enum, default_value_t = OutputStyle::Compact)]
    pub style: OutputStyle,

    /// Write to a temporary file and rename it into place once complete
    #[arg(long)]
    pub atomic: bool,
}

/// Arguments for generating a single dataset.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// Destination JSON file (truncated if it exists)
    #[arg(long, short = 'o')]
    pub output: PathBuf,

    /// Number of records to generate
    #[arg(long, short = 'n')]
    pub count: u64,

    #[command(flatten)]
    pub write: WriteArgs,
}

/// Arguments for verifying a generated dataset.
#[derive(Args, Clone, Debug)]
pub struct VerifyArgs {
    /// JSON file to check
    #[arg(long, short = 'i')]
    pub input: PathBuf,

    /// Number of records the file is expected to hold
    #[arg(long, short = 'n')]
    pub count: u64,
}
