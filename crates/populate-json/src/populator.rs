//! JSON array populator for gendata fixtures.

use crate::error::PopulateError;
use crate::writer::{JsonArrayWriter, OutputStyle};
use person_generator::{PersonGenerator, PersonRecordIterator, RecordTemplate};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Default buffer size for dataset writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Progress is logged every this many records.
pub(crate) const PROGRESS_INTERVAL: u64 = 10_000;

/// `amount` per second over `elapsed`, or 0 for an empty interval.
pub(crate) fn per_second(amount: u64, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 {
        amount as f64 / secs
    } else {
        0.0
    }
}

/// What one dataset file cost to produce.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Records in the array.
    pub rows_written: u64,
    /// Size of the finished file.
    pub file_size_bytes: u64,
    /// Wall time from start to the file being in place.
    pub total_duration: Duration,
    /// Part of the wall time spent building records.
    pub generation_duration: Duration,
    /// Part of the wall time spent serializing and writing.
    pub write_duration: Duration,
}

impl PopulateMetrics {
    pub fn rows_per_second(&self) -> f64 {
        per_second(self.rows_written, self.total_duration)
    }

    /// Output throughput in MiB/s.
    pub fn mib_per_second(&self) -> f64 {
        per_second(self.file_size_bytes, self.total_duration) / (1024.0 * 1024.0)
    }
}

/// Write `count` person records to `path` with default settings.
pub fn generate<P: AsRef<Path>>(path: P, count: u64) -> Result<PopulateMetrics, PopulateError> {
    JsonArrayPopulator::new().populate(path, count)
}

/// Create the staging file for an atomic write next to `output_path`.
///
/// The file gets the mode a plain `File::create` would give it, or the
/// destination's current permissions when it already exists.
fn staging_file(dir: &Path, output_path: &Path) -> io::Result<NamedTempFile> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(".gendata-").suffix(".tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // Subject to the process umask, like File::create
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let temp = builder.tempfile_in(dir)?;

    if let Ok(existing) = std::fs::metadata(output_path) {
        temp.as_file().set_permissions(existing.permissions())?;
    }
    Ok(temp)
}

/// Populator that writes person datasets as one JSON array per file.
#[derive(Debug, Clone)]
pub struct JsonArrayPopulator {
    template: RecordTemplate,
    style: OutputStyle,
    atomic: bool,
    buffer_size: usize,
}

impl Default for JsonArrayPopulator {
    fn default() -> Self {
        Self {
            template: RecordTemplate::default(),
            style: OutputStyle::default(),
            atomic: false,
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl JsonArrayPopulator {
    /// Create a populator writing compact, non-atomic output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the record template. Check the output with `verify_with_template`.
    pub fn with_template(mut self, template: RecordTemplate) -> Self {
        self.template = template;
        self
    }

    /// Set the element layout.
    pub fn with_style(mut self, style: OutputStyle) -> Self {
        self.style = style;
        self
    }

    /// Write through a temporary file renamed into place on success.
    pub fn with_atomic(mut self, atomic: bool) -> Self {
        self.atomic = atomic;
        self
    }

    /// Set the write buffer capacity.
    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size.max(1);
        self
    }

    /// Generate a dataset file with the specified number of records.
    ///
    /// The destination is truncated; records `0..count` are written in order.
    /// Without atomic mode a failure part way through leaves a truncated file
    /// behind.
    pub fn populate<P: AsRef<Path>>(
        &self,
        output_path: P,
        count: u64,
    ) -> Result<PopulateMetrics, PopulateError> {
        self.populate_through(output_path.as_ref(), count, |file| file)
    }

    /// `populate`, with every byte going through the sink `wrap` builds
    /// around the opened file.
    fn populate_through<S, F>(
        &self,
        output_path: &Path,
        count: u64,
        wrap: F,
    ) -> Result<PopulateMetrics, PopulateError>
    where
        S: Write,
        F: FnOnce(File) -> S,
    {
        let start_time = Instant::now();

        info!(
            "Generating dataset '{}' with {} records (style={}, atomic={})",
            output_path.display(),
            count,
            self.style,
            self.atomic
        );

        // Every file starts from index 0; the range is checked before the destination is touched
        let mut generator = PersonGenerator::new().with_template(self.template.clone());
        let records = generator.records(count)?;

        let mut metrics = if self.atomic {
            let dir = match output_path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };
            let (file, temp_path) = staging_file(dir, output_path)
                .map_err(|e| PopulateError::io(output_path, e))?
                .into_parts();
            debug!("Staging dataset in '{}'", temp_path.display());

            // On error the staging file is removed when `temp_path` drops
            let metrics = self.write_records(records, wrap(file), output_path)?;
            temp_path
                .persist(output_path)
                .map_err(|e| PopulateError::io(output_path, e.error))?;
            metrics
        } else {
            let file = File::create(output_path).map_err(|e| PopulateError::io(output_path, e))?;
            self.write_records(records, wrap(file), output_path)?
        };

        metrics.file_size_bytes = std::fs::metadata(output_path)
            .map_err(|e| PopulateError::io(output_path, e))?
            .len();
        metrics.total_duration = start_time.elapsed();

        info!(
            "Dataset generation complete: {} records, {} bytes in {:?} ({:.2} rows/sec, {:.2} MiB/s)",
            metrics.rows_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.rows_per_second(),
            metrics.mib_per_second()
        );

        Ok(metrics)
    }

    fn write_records<W: Write>(
        &self,
        mut records: PersonRecordIterator<'_>,
        sink: W,
        output_path: &Path,
    ) -> Result<PopulateMetrics, PopulateError> {
        let mut metrics = PopulateMetrics::default();

        let writer = BufWriter::with_capacity(self.buffer_size, sink);
        let mut array = JsonArrayWriter::begin(writer, self.style)
            .map_err(|e| PopulateError::io(output_path, e))?;

        let mut generation_time = Duration::ZERO;
        let mut write_time = Duration::ZERO;

        loop {
            let gen_start = Instant::now();
            let Some(record) = records.next() else {
                break;
            };
            generation_time += gen_start.elapsed();

            let write_start = Instant::now();
            array
                .write_element(&record)
                .map_err(|e| PopulateError::from_json(output_path, e))?;
            write_time += write_start.elapsed();

            metrics.rows_written += 1;

            if metrics.rows_written % PROGRESS_INTERVAL == 0 {
                debug!("Written {} records", metrics.rows_written);
            }
        }

        // Closing bracket and flush; the handle closes when the writer drops
        array
            .finish()
            .map_err(|e| PopulateError::io(output_path, e))?;

        metrics.generation_duration = generation_time;
        metrics.write_duration = write_time;
        Ok(metrics)
    }
}
