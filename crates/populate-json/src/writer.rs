//! Streaming writer for a single top-level JSON array.

use clap::ValueEnum;
use serde::Serialize;
use serde_json::ser::Formatter;
use std::io::{self, Write};

/// Layout used when serializing each array element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputStyle {
    /// `{"@id":"obj0","name":"person 0",...}`
    #[default]
    Compact,
    /// `{"@id": "obj0", "name": "person 0", ...}`
    Spaced,
}

impl std::fmt::Display for OutputStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputStyle::Compact => write!(f, "compact"),
            OutputStyle::Spaced => write!(f, "spaced"),
        }
    }
}

/// Formatter separating members with `", "` and keys from values with `": "`.
#[derive(Debug, Clone, Copy, Default)]
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }
}

/// Writes `[`, then each element with a leading `,` except the first, then `]`.
///
/// Elements are serialized as they arrive, so the writer never needs to know
/// how many will follow.
pub struct JsonArrayWriter<W: Write> {
    writer: W,
    style: OutputStyle,
    written: u64,
}

impl<W: Write> JsonArrayWriter<W> {
    /// Write the opening bracket and return the writer.
    pub fn begin(mut writer: W, style: OutputStyle) -> io::Result<Self> {
        writer.write_all(b"[")?;
        Ok(Self {
            writer,
            style,
            written: 0,
        })
    }

    /// Append one element.
    pub fn write_element<T>(&mut self, value: &T) -> Result<(), serde_json::Error>
    where
        T: ?Sized + Serialize,
    {
        if self.written > 0 {
            self.writer.write_all(b",").map_err(serde_json::Error::io)?;
        }

        match self.style {
            OutputStyle::Compact => serde_json::to_writer(&mut self.writer, value)?,
            OutputStyle::Spaced => {
                let mut ser =
                    serde_json::Serializer::with_formatter(&mut self.writer, SpacedFormatter);
                value.serialize(&mut ser)?;
            }
        }

        self.written += 1;
        Ok(())
    }

    /// Number of elements written so far.
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Write the closing bracket, flush, and hand back the inner writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.writer.write_all(b"]")?;
        self.writer.flush()?;
        Ok(self.writer)
    }
}
