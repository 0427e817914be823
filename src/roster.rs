//! Ordered, appendable, sortable collection of student records.

use crate::error::{GraderError, Result};
use crate::record::Record;

/// All records for a run, in insertion order until sorted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Roster {
    records: Vec<Record>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record to the end of the roster.
    ///
    /// # Errors
    ///
    /// Returns [`GraderError::NullRecord`] when given `None`.
    pub fn append(&mut self, record: impl Into<Option<Record>>) -> Result<()> {
        let record = record.into().ok_or(GraderError::NullRecord)?;
        self.records.push(record);
        Ok(())
    }

    /// Sorts by name using byte-wise string ordering.
    ///
    /// The sort is stable: records with equal names keep their relative order.
    pub fn sort_by_name(&mut self) {
        self.records.sort_by(|a, b| a.name().cmp(b.name()));
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, Record> {
        self.records.iter_mut()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
