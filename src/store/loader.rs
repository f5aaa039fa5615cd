//! Record loading from disk.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;

use crate::store::record::{Record, RecordStore};

/// Error type for record store loading.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate record id: {0}")]
    DuplicateId(String),
}

/// Load a record store from a JSON array file.
pub fn load_records(path: &Path) -> Result<RecordStore, StoreError> {
    let file = File::open(path)?;
    let records: Vec<Record> = serde_json::from_reader(BufReader::new(file))?;
    let store = RecordStore::from_records(records)?;

    tracing::info!(path = ?path, records = store.len(), "Loaded record store");
    Ok(store)
}
