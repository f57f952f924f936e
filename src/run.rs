//! Command runners.

use anyhow::{bail, Context};
use populate_json::{
    verify, GenerateArgs, JsonArrayPopulator, PopulateMetrics, VerificationReport, VerifyArgs,
    WriteArgs,
};
use std::fmt::Write as _;
use std::path::PathBuf;

use crate::args::{PresetSourceArgs, PresetsArgs};
use crate::preset::{PresetSet, DEFAULT_OUTPUT_DIR};

fn populator(write: &WriteArgs) -> JsonArrayPopulator {
    JsonArrayPopulator::new()
        .with_style(write.style)
        .with_atomic(write.atomic)
}

fn load_presets(source: &PresetSourceArgs) -> anyhow::Result<PresetSet> {
    match &source.preset_file {
        Some(path) => PresetSet::from_file(path)
            .with_context(|| format!("Failed to load presets from {path:?}")),
        None => Ok(PresetSet::builtin()),
    }
}

/// Write one dataset.
pub fn run_generate(args: GenerateArgs) -> anyhow::Result<PopulateMetrics> {
    populator(&args.write)
        .populate(&args.output, args.count)
        .with_context(|| {
            format!(
                "Failed to generate {} records at {:?}",
                args.count, args.output
            )
        })
}

/// Write every selected preset, one after another.
///
/// Stops at the first failure; presets already written stay on disk.
pub fn run_presets(args: PresetsArgs) -> anyhow::Result<Vec<(String, PopulateMetrics)>> {
    let set = load_presets(&args.source)?;
    let selected = set.select(&args.only, args.include_disabled)?;

    let output_dir = args
        .output_dir
        .clone()
        .or_else(|| set.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    if args.create_dir {
        std::fs::create_dir_all(&output_dir)
            .with_context(|| format!("Failed to create output directory {output_dir:?}"))?;
    }

    tracing::info!("Running {} presets into {:?}", selected.len(), output_dir);

    let populator = populator(&args.write);
    let mut results = Vec::with_capacity(selected.len());

    for preset in selected {
        let path = preset.output_path(&output_dir);
        let metrics = populator.populate(&path, preset.count).with_context(|| {
            format!(
                "Failed to generate preset '{}' ({} records) at {:?}",
                preset.name, preset.count, path
            )
        })?;

        tracing::info!(
            "Preset {}: {} records, {} bytes in {:?}",
            preset.name,
            metrics.rows_written,
            metrics.file_size_bytes,
            metrics.total_duration
        );
        results.push((preset.name.clone(), metrics));
    }

    Ok(results)
}

/// Check a dataset file, failing unless it matches exactly.
pub fn run_verify(args: VerifyArgs) -> anyhow::Result<VerificationReport> {
    let report = verify(&args.input, args.count)
        .with_context(|| format!("Failed to verify {:?}", args.input))?;

    if !report.is_success() {
        let mut message = report.summary();
        for mismatch in &report.mismatched_rows {
            for field in &mismatch.field_mismatches {
                let _ = write!(
                    message,
                    "\n  record {}: field '{}' expected {} got {}",
                    mismatch.index, field.field, field.expected, field.actual
                );
            }
        }
        bail!("{message}");
    }

    Ok(report)
}

/// Render the preset table.
pub fn list_presets(source: &PresetSourceArgs) -> anyhow::Result<String> {
    let set = load_presets(source)?;
    let name_width = set
        .presets
        .iter()
        .map(|p| p.name.len())
        .max()
        .unwrap_or(0)
        .max("NAME".len());

    let mut out = String::new();
    let _ = writeln!(out, "{:<name_width$}  {:>10}  {:<8}  FILE", "NAME", "COUNT", "ENABLED");
    for preset in &set.presets {
        let _ = writeln!(
            out,
            "{:<name_width$}  {:>10}  {:<8}  {}",
            preset.name,
            preset.count,
            if preset.enabled { "yes" } else { "no" },
            preset.file.display()
        );
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_builtin_presets() {
        let table = list_presets(&PresetSourceArgs::default()).unwrap();
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("NAME"));
        assert!(lines[4].contains("1000000") && lines[4].contains("yes"));
        assert!(lines[5].starts_with("sample10m") && lines[5].contains("no"));
    }

    #[test]
    fn test_load_missing_preset_file() {
        let source = PresetSourceArgs {
            preset_file: Some(PathBuf::from("/nonexistent/presets.yaml")),
        };
        let err = load_presets(&source).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/presets.yaml"));
    }
}
