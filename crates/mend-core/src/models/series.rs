use serde::Serialize;

use super::Record;
use crate::errors::InputError;

/// A validated, non-empty, time-ordered sequence of records.
///
/// This is the only input the corrector accepts: ordering, emptiness and
/// finiteness are checked once here, before any scoring happens.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    records: Vec<Record>,
}

impl Series {
    /// Validate `records` and take ownership of them.
    ///
    /// Duplicate timestamps are allowed; a timestamp earlier than its
    /// predecessor is not. `NaN` readings become missing, infinite
    /// readings are rejected.
    pub fn new(records: Vec<Record>) -> Result<Self, InputError> {
        if records.is_empty() {
            return Err(InputError::Empty);
        }

        let mut records = records;
        for (index, record) in records.iter_mut().enumerate() {
            match record.raw_value {
                Some(v) if v.is_nan() => record.raw_value = None,
                Some(v) if v.is_infinite() => return Err(InputError::NonFiniteValue { index }),
                _ => {}
            }
        }

        if let Some(index) = records
            .windows(2)
            .position(|w| w[1].timestamp < w[0].timestamp)
        {
            return Err(InputError::OutOfOrder {
                index: index + 1,
                previous: records[index].timestamp.to_string(),
                current: records[index + 1].timestamp.to_string(),
            });
        }

        Ok(Self { records })
    }

    /// Stable-sort by timestamp, then validate. Records sharing a
    /// timestamp keep their input order.
    pub fn sorted(mut records: Vec<Record>) -> Result<Self, InputError> {
        records.sort_by_key(|r| r.timestamp);
        Self::new(records)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Readings that are present, in order.
    pub fn present_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().filter_map(|r| r.raw_value)
    }

    pub fn missing_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_missing()).count()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl TryFrom<Vec<Record>> for Series {
    type Error = InputError;

    fn try_from(records: Vec<Record>) -> Result<Self, Self::Error> {
        Self::new(records)
    }
}
