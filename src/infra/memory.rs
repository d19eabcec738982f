use std::{collections::HashMap, sync::Mutex};

use serde_json::Value;

use super::store::{EntityStore, RawCollection, StoreError};

/// Volatile store, used by tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<&'static str, RawCollection>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EntityStore for MemoryStore {
    fn read_raw(&self, collection: &'static str) -> Result<RawCollection, StoreError> {
        let collections = self.collections.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(collections.get(collection).cloned().unwrap_or_default())
    }

    fn write_raw(
        &self,
        collection: &'static str,
        expected_revision: u64,
        records: Vec<Value>,
    ) -> Result<u64, StoreError> {
        let mut collections = self.collections.lock().map_err(|_| StoreError::Poisoned)?;
        let entry = collections.entry(collection).or_default();
        if entry.revision != expected_revision {
            return Err(StoreError::Conflict {
                collection,
                expected: expected_revision,
                actual: entry.revision,
            });
        }
        entry.revision += 1;
        entry.records = records;
        Ok(entry.revision)
    }
}
