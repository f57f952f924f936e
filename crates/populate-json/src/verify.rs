//! Streaming verifier for generated datasets.

use crate::error::VerifyError;
use crate::populator::{per_second, DEFAULT_BUFFER_SIZE, PROGRESS_INTERVAL};
use person_generator::{GeneratorError, PersonGenerator, PersonRecord, RecordTemplate, FIELD_NAMES};
use serde::de::{Deserializer as _, SeqAccess, Visitor};
use serde_json::{Map, Value};
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Maximum number of mismatched records kept in a report.
pub const MAX_REPORTED_MISMATCHES: usize = 10;

/// Information about a field mismatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMismatch {
    /// Field name.
    pub field: String,
    /// Expected value.
    pub expected: String,
    /// Actual value.
    pub actual: String,
}

/// Information about a mismatched record.
#[derive(Debug, Clone)]
pub struct MismatchInfo {
    /// Position of the record in the array.
    pub index: u64,
    /// Field mismatches.
    pub field_mismatches: Vec<FieldMismatch>,
}

/// Verification report.
#[derive(Debug, Clone, Default)]
pub struct VerificationReport {
    /// Number of records expected.
    pub expected: u64,
    /// Number of records found in the file.
    pub found: u64,
    /// Number of records that matched exactly.
    pub matched: u64,
    /// Number of records with mismatched data.
    pub mismatched: u64,
    /// Details of the first mismatched records.
    pub mismatched_rows: Vec<MismatchInfo>,
    /// Total verification time.
    pub total_duration: Duration,
}

impl VerificationReport {
    /// Check if verification passed.
    pub fn is_success(&self) -> bool {
        self.found == self.expected && self.mismatched == 0
    }

    /// Records expected but absent from the file.
    pub fn missing(&self) -> u64 {
        self.expected.saturating_sub(self.found)
    }

    /// Records present beyond the expected count.
    pub fn unexpected(&self) -> u64 {
        self.found.saturating_sub(self.expected)
    }

    /// Records read per second.
    pub fn rows_per_second(&self) -> f64 {
        per_second(self.found, self.total_duration)
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        if self.is_success() {
            format!(
                "Verification PASSED: {} records matched in {:?} ({:.2} rows/sec)",
                self.matched,
                self.total_duration,
                self.rows_per_second()
            )
        } else {
            format!(
                "Verification FAILED: expected {}, found {} (missing {}, unexpected {}), {} mismatched",
                self.expected,
                self.found,
                self.missing(),
                self.unexpected(),
                self.mismatched
            )
        }
    }

    fn check_record(
        &mut self,
        index: u64,
        expected: Result<PersonRecord, GeneratorError>,
        value: &Value,
    ) {
        let mismatches = match expected {
            Ok(record) => compare_record(&record, value),
            Err(e) => vec![FieldMismatch {
                field: "@id".to_string(),
                expected: e.to_string(),
                actual: value.get("@id").map(Value::to_string).unwrap_or_default(),
            }],
        };
        if mismatches.is_empty() {
            self.matched += 1;
            return;
        }

        self.mismatched += 1;
        if self.mismatched_rows.len() < MAX_REPORTED_MISMATCHES {
            debug!("Record {} has {} mismatched fields", index, mismatches.len());
            self.mismatched_rows.push(MismatchInfo {
                index,
                field_mismatches: mismatches,
            });
        }
    }
}

fn compare_record(expected: &PersonRecord, value: &Value) -> Vec<FieldMismatch> {
    let Some(object) = value.as_object() else {
        return vec![FieldMismatch {
            field: String::new(),
            expected: "object".to_string(),
            actual: value.to_string(),
        }];
    };

    let mut mismatches: Vec<FieldMismatch> = expected
        .fields()
        .iter()
        .filter_map(|(field, want)| match object.get(*field) {
            Some(Value::String(got)) if got == want => None,
            got => Some(FieldMismatch {
                field: field.to_string(),
                expected: want.to_string(),
                actual: got
                    .map(Value::to_string)
                    .unwrap_or_else(|| "<missing>".to_string()),
            }),
        })
        .collect();

    mismatches.extend(extra_fields(object));
    mismatches
}

fn extra_fields(object: &Map<String, Value>) -> impl Iterator<Item = FieldMismatch> + '_ {
    object
        .iter()
        .filter(|(key, _)| !FIELD_NAMES.contains(&key.as_str()))
        .map(|(key, value)| FieldMismatch {
            field: key.clone(),
            expected: "<absent>".to_string(),
            actual: value.to_string(),
        })
}

struct DatasetVisitor<'a> {
    report: &'a mut VerificationReport,
    generator: PersonGenerator,
}

impl<'de> Visitor<'de> for DatasetVisitor<'_> {
    type Value = ();

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a JSON array of person records")
    }

    fn visit_seq<A>(mut self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        while let Some(value) = seq.next_element::<Value>()? {
            let index = self.report.found;
            self.report.found += 1;
            let expected = self.generator.next_record();
            self.report.check_record(index, expected, &value);

            if self.report.found % PROGRESS_INTERVAL == 0 {
                debug!("Verified {} records", self.report.found);
            }
        }
        Ok(())
    }
}

/// Check that `path` holds exactly the dataset `generate(path, expected_count)` writes.
///
/// The array is read element by element, so memory use does not grow with
/// the file. Either output style is accepted.
pub fn verify<P: AsRef<Path>>(
    path: P,
    expected_count: u64,
) -> Result<VerificationReport, VerifyError> {
    verify_with_template(path, expected_count, &RecordTemplate::default())
}

/// Like [`verify`], for datasets written with a custom [`RecordTemplate`].
pub fn verify_with_template<P: AsRef<Path>>(
    path: P,
    expected_count: u64,
    template: &RecordTemplate,
) -> Result<VerificationReport, VerifyError> {
    let start_time = Instant::now();
    let path = path.as_ref();

    info!(
        "Verifying dataset '{}' against {} expected records",
        path.display(),
        expected_count
    );

    let file = File::open(path).map_err(|e| VerifyError::io(path, e))?;
    let reader = BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file);
    let mut de = serde_json::Deserializer::from_reader(reader);

    let mut report = VerificationReport {
        expected: expected_count,
        ..Default::default()
    };

    (&mut de)
        .deserialize_seq(DatasetVisitor {
            report: &mut report,
            generator: PersonGenerator::new().with_template(template.clone()),
        })
        .map_err(|e| VerifyError::json(path, e))?;
    de.end().map_err(|e| VerifyError::json(path, e))?;

    report.total_duration = start_time.elapsed();

    if report.is_success() {
        info!("{}", report.summary());
    } else {
        warn!("{}", report.summary());
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use person_generator::record_at;
    use serde_json::json;

    #[test]
    fn test_compare_matching_record() {
        let record = record_at(4).unwrap();
        let value = serde_json::to_value(&record).unwrap();
        assert!(compare_record(&record, &value).is_empty());
    }

    #[test]
    fn test_compare_wrong_index() {
        let value = serde_json::to_value(record_at(4).unwrap()).unwrap();
        let mismatches = compare_record(&record_at(5).unwrap(), &value);

        let fields: Vec<&str> = mismatches.iter().map(|m| m.field.as_str()).collect();
        assert!(fields.contains(&"@id"));
        assert!(fields.contains(&"name"));
        assert!(fields.contains(&"friend4"));
        assert!(!fields.contains(&"owner"));
    }

    #[test]
    fn test_compare_missing_and_extra_fields() {
        let mut value = serde_json::to_value(record_at(0).unwrap()).unwrap();
        let object = value.as_object_mut().unwrap();
        object.remove("department");
        object.insert("salary".to_string(), json!(10));

        let mismatches = compare_record(&record_at(0).unwrap(), &value);
        assert_eq!(
            mismatches,
            vec![
                FieldMismatch {
                    field: "department".to_string(),
                    expected: "<dept1443>".to_string(),
                    actual: "<missing>".to_string(),
                },
                FieldMismatch {
                    field: "salary".to_string(),
                    expected: "<absent>".to_string(),
                    actual: "10".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_compare_non_string_value() {
        let mut value = serde_json::to_value(record_at(0).unwrap()).unwrap();
        value["address"] = json!(7);

        let mismatches = compare_record(&record_at(0).unwrap(), &value);
        assert_eq!(mismatches.len(), 1);
        assert_eq!(mismatches[0].actual, "7");
    }

    #[test]
    fn test_compare_non_object() {
        let mismatches = compare_record(&record_at(0).unwrap(), &json!([1, 2]));
        assert_eq!(mismatches.len(), 1);
        assert_eq!(mismatches[0].expected, "object");
    }

    #[test]
    fn test_report_summary() {
        let report = VerificationReport {
            expected: 3,
            found: 2,
            matched: 2,
            ..Default::default()
        };
        assert!(!report.is_success());
        assert_eq!(report.missing(), 1);
        assert_eq!(report.unexpected(), 0);
        assert!(report.summary().starts_with("Verification FAILED"));
    }

    #[test]
    fn test_report_caps_mismatch_details() {
        let mut report = VerificationReport::default();
        for i in 0..(MAX_REPORTED_MISMATCHES as u64 + 5) {
            report.check_record(i, record_at(i), &json!("not a record"));
        }
        assert_eq!(report.mismatched, MAX_REPORTED_MISMATCHES as u64 + 5);
        assert_eq!(report.mismatched_rows.len(), MAX_REPORTED_MISMATCHES);
    }

    #[test]
    fn test_report_generator_error() {
        let mut report = VerificationReport::default();
        report.check_record(0, record_at(u64::MAX), &json!({"@id": "obj0"}));

        assert_eq!(report.mismatched, 1);
        let mismatch = &report.mismatched_rows[0].field_mismatches[0];
        assert_eq!(mismatch.field, "@id");
        assert_eq!(mismatch.actual, "\"obj0\"");
    }

    #[test]
    fn test_report_passed_summary_has_rate() {
        let report = VerificationReport {
            expected: 10,
            found: 10,
            matched: 10,
            total_duration: Duration::from_secs(2),
            ..Default::default()
        };
        assert_eq!(report.rows_per_second(), 5.0);
        assert!(report.summary().ends_with("(5.00 rows/sec)"));
    }
}
