//! CLI argument definitions for preset commands.

use clap::Args;
use populate_json::WriteArgs;
use std::path::PathBuf;

/// Arguments for running presets.
#[derive(Args, Clone, Debug)]
pub struct PresetsArgs {
    /// Directory preset files are written to (default: preset file's output_dir, then /tmp/data)
    #[arg(long, short = 'd', env = "GENDATA_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Specific presets to run (comma-separated, empty = all enabled presets)
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<String>,

    /// Also run presets marked as disabled
    #[arg(long)]
    pub include_disabled: bool,

    /// Create the output directory if it does not exist
    #[arg(long)]
    pub create_dir: bool,

    #[command(flatten)]
    pub source: PresetSourceArgs,

    #[command(flatten)]
    pub write: WriteArgs,
}

/// Where presets are defined.
#[derive(Args, Clone, Debug, Default)]
pub struct PresetSourceArgs {
    /// YAML file defining presets (default: built-in presets)
    #[arg(long, value_name = "PATH", env = "GENDATA_PRESET_FILE")]
    pub preset_file: Option<PathBuf>,
}
