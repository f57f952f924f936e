//! Command-line interface for gendata
//!
//! # Usage Examples
//!
//! ## Presets
//! ```bash
//! # Write sample1, sample100, sample100k and sample1m to /tmp/data
//! gendata presets
//!
//! # Only the small ones, somewhere else, with the legacy byte layout
//! gendata presets --only sample1,sample100 --output-dir ./fixtures --style spaced
//!
//! # Include the disabled 10M dataset
//! gendata presets --include-disabled --atomic
//! ```
//!
//! ## Single dataset
//! ```bash
//! gendata generate --output /tmp/data/custom.json --count 2500
//! gendata verify --input /tmp/data/custom.json --count 2500
//! ```
//!
//! Logging is controlled with `RUST_LOG` (e.g. `RUST_LOG=info`); by default a
//! successful run prints nothing.

use clap::{Parser, Subcommand};
use gendata::{list_presets, run_generate, run_presets, run_verify, PresetSourceArgs, PresetsArgs};
use populate_json::{GenerateArgs, VerifyArgs};

#[derive(Parser)]
#[command(name = "gendata")]
#[command(about = "Generate deterministic JSON person datasets for testing and benchmarking")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a single dataset of COUNT records to OUTPUT
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },

    /// Write the named preset datasets (sample1 .. sample1m by default)
    Presets {
        #[command(flatten)]
        args: PresetsArgs,
    },

    /// Check that a file holds exactly the dataset generate would write
    Verify {
        #[command(flatten)]
        args: VerifyArgs,
    },

    /// Print the available presets
    ListPresets {
        #[command(flatten)]
        source: PresetSourceArgs,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { args } => {
            run_generate(args)?;
        }
        Commands::Presets { args } => {
            run_presets(args)?;
        }
        Commands::Verify { args } => {
            run_verify(args)?;
        }
        Commands::ListPresets { source } => {
            print!("{}", list_presets(&source)?);
        }
    }

    Ok(())
}
