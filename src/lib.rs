//! gendata library
//!
//! Generates deterministic JSON fixture datasets of synthetic "person"
//! records for testing and benchmarking downstream entity stores.
//!
//! # Crates
//!
//! - `person_generator` - builds the record for each index
//! - `populate_json` - streams records into a JSON array file and verifies it
//!
//! This crate adds named presets and the command runners behind the CLI.
//!
//! # CLI Usage
//!
//! ```bash
//! # The standard fixtures: sample1, sample100, sample100k, sample1m in /tmp/data
//! gendata presets --create-dir
//!
//! # One dataset of arbitrary size
//! gendata generate --output out.json --count 2
//!
//! # Check a file against the generator
//! gendata verify --input /tmp/data/sample100.json --count 100
//! ```

pub mod args;
pub mod preset;
pub mod run;

pub use args::{PresetSourceArgs, PresetsArgs};
pub use preset::{Preset, PresetError, PresetSet, DEFAULT_OUTPUT_DIR};
pub use run::{list_presets, run_generate, run_presets, run_verify};
