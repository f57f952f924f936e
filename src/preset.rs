//! Named dataset presets.
//!
//! A preset is a `(file, count)` pair with a name. The built-in set writes the
//! four standard fixture sizes; the 10M dataset is defined but disabled.
//! Preset sets can also be loaded from YAML:
//!
//! ```yaml
//! output_dir: /tmp/data
//! presets:
//!   - name: tiny
//!     file: tiny.json
//!     count: 3
//!   - name: huge
//!     file: huge.json
//!     count: 10000000
//!     enabled: false
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory the built-in presets write to.
pub const DEFAULT_OUTPUT_DIR: &str = "/tmp/data";

/// Error type for preset loading and selection.
#[derive(Debug, thiserror::Error)]
pub enum PresetError {
    /// Error reading preset file
    #[error("Failed to read preset file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Two presets share a name
    #[error("Duplicate preset name: {0}")]
    DuplicatePreset(String),

    /// Requested preset is not defined
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),
}

fn default_enabled() -> bool {
    true
}

/// One named dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    /// Name used to select the preset.
    pub name: String,
    /// Output file, relative to the output directory unless absolute.
    pub file: PathBuf,
    /// Number of records.
    pub count: u64,
    /// Whether the preset runs when no explicit selection is made.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl Preset {
    /// Create an enabled preset.
    pub fn new(name: &str, file: &str, count: u64) -> Self {
        Self {
            name: name.to_string(),
            file: PathBuf::from(file),
            count,
            enabled: true,
        }
    }

    /// Mark the preset as disabled.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Resolve the output file against `output_dir`.
    pub fn output_path(&self, output_dir: &Path) -> PathBuf {
        if self.file.is_absolute() {
            self.file.clone()
        } else {
            output_dir.join(&self.file)
        }
    }
}

/// An ordered collection of presets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetSet {
    /// Output directory used when none is given on the command line.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    pub presets: Vec<Preset>,
}

impl Default for PresetSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PresetSet {
    /// The standard fixture sizes.
    pub fn builtin() -> Self {
        Self {
            output_dir: Some(PathBuf::from(DEFAULT_OUTPUT_DIR)),
            presets: vec![
                Preset::new("sample1", "sample1.json", 1),
                Preset::new("sample100", "sample100.json", 100),
                Preset::new("sample100k", "sample100k.json", 100_000),
                Preset::new("sample1m", "sample1m.json", 1_000_000),
                Preset::new("sample10m", "sample10m.json", 10_000_000).disabled(),
            ],
        }
    }

    /// Load a preset set from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PresetError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a preset set from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, PresetError> {
        let set: PresetSet = serde_yaml::from_str(yaml)?;
        set.validate()?;
        Ok(set)
    }

    fn validate(&self) -> Result<(), PresetError> {
        let mut seen = HashSet::new();
        for preset in &self.presets {
            if !seen.insert(preset.name.as_str()) {
                return Err(PresetError::DuplicatePreset(preset.name.clone()));
            }
        }
        Ok(())
    }

    /// Get a preset by name.
    pub fn get(&self, name: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.name == name)
    }

    /// Get all preset names in definition order.
    pub fn names(&self) -> Vec<&str> {
        self.presets.iter().map(|p| p.name.as_str()).collect()
    }

    /// Pick the presets to run.
    ///
    /// Named presets run in the order given, whether enabled or not. With no
    /// names, every enabled preset runs in definition order, plus the disabled
    /// ones when `include_disabled` is set.
    pub fn select(
        &self,
        only: &[String],
        include_disabled: bool,
    ) -> Result<Vec<&Preset>, PresetError> {
        if only.is_empty() {
            return Ok(self
                .presets
                .iter()
                .filter(|p| p.enabled || include_disabled)
                .collect());
        }

        only.iter()
            .map(|name| {
                self.get(name)
                    .ok_or_else(|| PresetError::UnknownPreset(name.clone()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_presets() {
        let set = PresetSet::builtin();

        assert_eq!(
            set.names(),
            vec!["sample1", "sample100", "sample100k", "sample1m", "sample10m"]
        );
        assert_eq!(set.get("sample100k").unwrap().count, 100_000);
        assert_eq!(set.get("sample1m").unwrap().count, 1_000_000);
        assert!(!set.get("sample10m").unwrap().enabled);
        assert_eq!(set.output_dir.as_deref(), Some(Path::new("/tmp/data")));
    }

    #[test]
    fn test_builtin_paths() {
        let set = PresetSet::builtin();
        let dir = Path::new(DEFAULT_OUTPUT_DIR);

        let paths: Vec<PathBuf> = set
            .select(&[], false)
            .unwrap()
            .iter()
            .map(|p| p.output_path(dir))
            .collect();

        assert_eq!(
            paths,
            vec![
                PathBuf::from("/tmp/data/sample1.json"),
                PathBuf::from("/tmp/data/sample100.json"),
                PathBuf::from("/tmp/data/sample100k.json"),
                PathBuf::from("/tmp/data/sample1m.json"),
            ]
        );
    }

    #[test]
    fn test_select_include_disabled() {
        let set = PresetSet::builtin();
        assert_eq!(set.select(&[], true).unwrap().len(), 5);
    }

    #[test]
    fn test_select_by_name_keeps_order_and_ignores_enabled() {
        let set = PresetSet::builtin();
        let only = vec!["sample10m".to_string(), "sample1".to_string()];

        let names: Vec<&str> = set
            .select(&only, false)
            .unwrap()
            .iter()
            .map(|p| p.name.as_str())
            .collect();

        assert_eq!(names, vec!["sample10m", "sample1"]);
    }

    #[test]
    fn test_select_unknown() {
        let set = PresetSet::builtin();
        let result = set.select(&["sample2".to_string()], false);
        assert!(matches!(result, Err(PresetError::UnknownPreset(name)) if name == "sample2"));
    }

    #[test]
    fn test_from_yaml() {
        let yaml = r#"
output_dir: fixtures
presets:
  - name: tiny
    file: tiny.json
    count: 3
  - name: absolute
    file: /var/tmp/abs.json
    count: 0
    enabled: false
"#;
        let set = PresetSet::from_yaml(yaml).unwrap();

        assert_eq!(set.output_dir.as_deref(), Some(Path::new("fixtures")));
        assert_eq!(set.get("tiny").unwrap(), &Preset::new("tiny", "tiny.json", 3));
        let absolute = set.get("absolute").unwrap();
        assert!(!absolute.enabled);
        assert_eq!(
            absolute.output_path(Path::new("ignored")),
            PathBuf::from("/var/tmp/abs.json")
        );
    }

    #[test]
    fn test_from_yaml_without_output_dir() {
        let set = PresetSet::from_yaml("presets: []").unwrap();
        assert!(set.output_dir.is_none());
        assert!(set.presets.is_empty());
    }

    #[test]
    fn test_from_yaml_duplicate() {
        let yaml = r#"
presets:
  - { name: a, file: a.json, count: 1 }
  - { name: a, file: b.json, count: 2 }
"#;
        assert!(matches!(
            PresetSet::from_yaml(yaml),
            Err(PresetError::DuplicatePreset(name)) if name == "a"
        ));
    }

    #[test]
    fn test_from_yaml_negative_count() {
        let yaml = r#"
presets:
  - { name: a, file: a.json, count: -1 }
"#;
        assert!(matches!(
            PresetSet::from_yaml(yaml),
            Err(PresetError::YamlError(_))
        ));
    }
}
