//! Record and store types.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

use crate::store::loader::StoreError;

/// A single profile record.
///
/// Field order is the serialization order of search responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Unique key within the store.
    pub id: String,
    pub name: String,
    pub age: i64,
    pub occupation: String,
}

impl Record {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        age: i64,
        occupation: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
            occupation: occupation.into(),
        }
    }
}

/// Read-only, ordered collection of records.
///
/// Cloning is cheap: all clones share the same backing slice.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Arc<[Record]>,
}

impl RecordStore {
    /// Build a store, rejecting the first duplicate id found.
    pub fn from_records(records: Vec<Record>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(StoreError::DuplicateId(record.id.clone()));
            }
        }

        Ok(Self {
            records: records.into(),
        })
    }

    /// Records in store order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
