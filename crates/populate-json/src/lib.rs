//! JSON array dataset writer for gendata fixtures.
//!
//! This crate streams deterministic person records into a single JSON array
//! file and can read such a file back to check it against the generator.
//!
//! # Example
//!
//! ```ignore
//! use populate_json::{JsonArrayPopulator, OutputStyle};
//!
//! let populator = JsonArrayPopulator::new()
//!     .with_style(OutputStyle::Compact)
//!     .with_atomic(true);
//!
//! let metrics = populator.populate("/tmp/data/sample100.json", 100)?;
//! println!("Generated {} rows in {:?}", metrics.rows_written, metrics.total_duration);
//! ```

pub mod args;
pub mod error;
pub mod populator;
pub mod verify;
pub mod writer;

pub use args::{GenerateArgs, VerifyArgs, WriteArgs};
pub use error::{PopulateError, VerifyError};
pub use populator::{generate, JsonArrayPopulator, PopulateMetrics, DEFAULT_BUFFER_SIZE};
pub use verify::{
    verify, verify_with_template, FieldMismatch, MismatchInfo, VerificationReport,
};
pub use writer::{JsonArrayWriter, OutputStyle};
