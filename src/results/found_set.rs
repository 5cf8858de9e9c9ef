use std::collections::HashMap;
use std::sync::Arc;

use crate::driver::LayoutRecord;
use crate::results::Record;

/// Ordered result of one select.
///
/// Holds both a plain [`Record`] snapshot of each row and the live
/// driver records needed to commit later field assignments. The
/// snapshot reflects the store at select time; staged assignments do
/// not refresh it.
pub struct FoundSet<R> {
    layout: String,
    records: Vec<Record>,
    raw: Vec<R>,
}

impl<R: LayoutRecord> FoundSet<R> {
    pub(crate) fn new(layout: String, raw: Vec<R>) -> Self {
        let field_names: Arc<Vec<String>> = Arc::new(
            raw.first()
                .map(|record| record.field_names().to_vec())
                .unwrap_or_default(),
        );
        let cache: Arc<HashMap<String, usize>> = Arc::new(
            field_names
                .iter()
                .enumerate()
                .map(|(i, name)| (name.clone(), i))
                .collect(),
        );

        let records = raw
            .iter()
            .map(|record| {
                let values = field_names
                    .iter()
                    .map(|name| record.field(name).unwrap_or("").to_string())
                    .collect();
                Record::new(
                    record.record_id(),
                    Arc::clone(&field_names),
                    values,
                    Arc::clone(&cache),
                )
            })
            .collect();

        Self {
            layout,
            records,
            raw,
        }
    }

    /// The layout this found set came from.
    #[must_use]
    pub fn layout(&self) -> &str {
        &self.layout
    }

    /// The records of the found set, in the order the store returned
    /// them.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Remote-assigned id of the first record, `None` when the found
    /// set is empty.
    #[must_use]
    pub fn record_id(&self) -> Option<u64> {
        self.records.first().map(Record::record_id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub(crate) fn raw_mut(&mut self) -> &mut [R] {
        &mut self.raw
    }
}

impl<'a, R> IntoIterator for &'a FoundSet<R> {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
