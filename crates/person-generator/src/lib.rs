//! Deterministic person record generator for gendata fixtures.
//!
//! This crate builds the synthetic "person" records written by the dataset
//! writer. Every field is a pure function of the record index, so the same
//! index always yields the same record and no RNG or clock is involved.
//!
//! # Architecture
//!
//! ```text
//! RecordTemplate (constants)
//!        │
//!        ▼
//! ┌──────────────────┐
//! │ PersonGenerator  │
//! │                  │
//! │  - template      │
//! │  - index         │
//! └────────┬─────────┘
//!          │
//!          ▼
//!    PersonRecord { @id, name, ..., friend..friend4, company, owner, department }
//! ```
//!
//! # Example
//!
//! ```rust
//! use person_generator::PersonGenerator;
//!
//! let mut generator = PersonGenerator::new();
//! let record = generator.next_record().unwrap();
//! assert_eq!(record.id, "obj0");
//! assert_eq!(record.friend, "<obj1>");
//! ```
//!
//! # References
//!
//! `friend`..`friend4` point at the next five indices and `company` at
//! `index + 1`. They are never checked against the generated range, so the
//! tail of every dataset holds dangling references. `owner` and `department`
//! point at entities that are never generated at all.

pub mod generator;
pub mod record;

pub use generator::{record_at, GeneratorError, PersonGenerator, PersonRecordIterator};
pub use record::{PersonRecord, RecordTemplate, FIELD_COUNT, FIELD_NAMES, FRIEND_OFFSETS};
