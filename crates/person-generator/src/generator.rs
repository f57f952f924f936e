//! Sequential person record generator.

use crate::record::{PersonRecord, RecordTemplate, FRIEND_OFFSETS};

/// Largest offset applied to a record index.
const MAX_OFFSET: u64 = FRIEND_OFFSETS[FRIEND_OFFSETS.len() - 1];

/// Error type for generator operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeneratorError {
    /// A reference derived from the index does not fit in `u64`.
    #[error("Record index {0} is too large: friend references would overflow")]
    IndexOverflow(u64),
}

/// Build the record at `index` using the default template.
pub fn record_at(index: u64) -> Result<PersonRecord, GeneratorError> {
    build_checked(&RecordTemplate::default(), index)
}

fn build_checked(template: &RecordTemplate, index: u64) -> Result<PersonRecord, GeneratorError> {
    if index.checked_add(MAX_OFFSET).is_none() {
        return Err(GeneratorError::IndexOverflow(index));
    }
    Ok(PersonRecord::build(template, index))
}

/// Generator that produces person records in index order.
///
/// Records depend only on their index, so two generators at the same index
/// always agree.
#[derive(Debug, Clone, Default)]
pub struct PersonGenerator {
    /// Constants shared by every record
    template: RecordTemplate,
    /// Index of the next record
    index: u64,
}

impl PersonGenerator {
    /// Create a generator starting at index 0 with the default template.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the record template.
    pub fn with_template(mut self, template: RecordTemplate) -> Self {
        self.template = template;
        self
    }

    /// Set the starting index for record generation.
    pub fn with_start_index(mut self, index: u64) -> Self {
        self.index = index;
        self
    }

    /// Get the index of the next record.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Generate the next record.
    pub fn next_record(&mut self) -> Result<PersonRecord, GeneratorError> {
        let record = build_checked(&self.template, self.index)?;
        self.index += 1;
        Ok(record)
    }

    /// Generate `count` records lazily.
    ///
    /// Fails up front if the last index of the range would overflow.
    pub fn records(&mut self, count: u64) -> Result<PersonRecordIterator<'_>, GeneratorError> {
        if count > 0 {
            let last = self
                .index
                .checked_add(count - 1)
                .ok_or(GeneratorError::IndexOverflow(self.index))?;
            if last.checked_add(MAX_OFFSET).is_none() {
                return Err(GeneratorError::IndexOverflow(last));
            }
        }

        Ok(PersonRecordIterator {
            generator: self,
            remaining: count,
        })
    }
}

/// Iterator that lazily generates person records.
pub struct PersonRecordIterator<'a> {
    generator: &'a mut PersonGenerator,
    remaining: u64,
}

impl Iterator for PersonRecordIterator<'_> {
    type Item = PersonRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;

        // The whole range was checked in `records`
        self.generator.next_record().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl ExactSizeIterator for PersonRecordIterator<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_single_record() {
        let mut generator = PersonGenerator::new();

        let record = generator.next_record().unwrap();

        assert_eq!(record.id, "obj0");
        assert_eq!(record.name, "person 0");
        assert_eq!(generator.current_index(), 1);
    }

    #[test]
    fn test_deterministic_generation() {
        let mut gen1 = PersonGenerator::new();
        let mut gen2 = PersonGenerator::new();

        for _ in 0..5 {
            assert_eq!(gen1.next_record().unwrap(), gen2.next_record().unwrap());
        }
    }

    #[test]
    fn test_generate_multiple_records() {
        let mut generator = PersonGenerator::new();

        let records: Vec<_> = generator.records(10).unwrap().collect();

        assert_eq!(records.len(), 10);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.id, format!("obj{i}"));
            assert_eq!(record.friend, format!("<obj{}>", i + 1));
            assert_eq!(record.friend4, format!("<obj{}>", i + 5));
            assert_eq!(record.company, format!("<company{}>", i + 1));
        }
    }

    #[test]
    fn test_records_size_hint() {
        let mut generator = PersonGenerator::new();
        let iter = generator.records(7).unwrap();
        assert_eq!(iter.len(), 7);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_size_hint_of_huge_range() {
        let mut generator = PersonGenerator::new();
        let iter = generator.records(u64::MAX - 10).unwrap();
        assert_eq!(iter.size_hint(), (usize::MAX - 10, Some(usize::MAX - 10)));
    }

    #[test]
    fn test_zero_records() {
        let mut generator = PersonGenerator::new();
        assert_eq!(generator.records(0).unwrap().count(), 0);
        assert_eq!(generator.current_index(), 0);
    }

    #[test]
    fn test_with_start_index() {
        let mut gen1 = PersonGenerator::new().with_start_index(5);
        let record = gen1.next_record().unwrap();
        assert_eq!(record.id, "obj5");

        let mut gen2 = PersonGenerator::new();
        let records: Vec<_> = gen2.records(6).unwrap().collect();
        assert_eq!(records[5], record);
    }

    #[test]
    fn test_record_at_matches_generator() {
        let mut generator = PersonGenerator::new().with_start_index(99);
        assert_eq!(generator.next_record().unwrap(), record_at(99).unwrap());
    }

    #[test]
    fn test_index_overflow() {
        assert_eq!(
            record_at(u64::MAX),
            Err(GeneratorError::IndexOverflow(u64::MAX))
        );
        assert!(record_at(u64::MAX - 5).is_ok());
        assert!(record_at(u64::MAX - 4).is_err());

        let mut generator = PersonGenerator::new().with_start_index(u64::MAX - 7);
        assert!(generator.records(3).is_ok());
        assert!(matches!(
            generator.records(4),
            Err(GeneratorError::IndexOverflow(_))
        ));
    }

    #[test]
    fn test_custom_template() {
        let template = RecordTemplate {
            address: "bergen".to_string(),
            ..RecordTemplate::default()
        };
        let mut generator = PersonGenerator::new().with_template(template);

        let record = generator.next_record().unwrap();
        assert_eq!(record.address, "bergen");
        assert_eq!(record.description, RecordTemplate::default().description);
    }
}
