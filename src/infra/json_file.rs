//! On-disk store: one pretty-printed JSON document per collection.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde_json::Value;
use tracing::{debug, warn};

use super::store::{EntityStore, RawCollection, StoreError};

#[derive(Clone, Debug)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Opens (and creates if needed) a store rooted at `root`.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        debug!(root = %root.display(), "opened json store");
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn collection_path(&self, collection: &str) -> PathBuf {
        self.root.join(format!("{collection}.json"))
    }
}

impl EntityStore for JsonFileStore {
    fn read_raw(&self, collection: &'static str) -> Result<RawCollection, StoreError> {
        let path = self.collection_path(collection);
        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(collection, "no file yet, starting empty");
                return Ok(RawCollection::default());
            }
            Err(err) => return Err(err.into()),
        };
        let raw: RawCollection = serde_json::from_str(&data)?;
        debug!(collection, revision = raw.revision, records = raw.records.len(), "loaded collection");
        Ok(raw)
    }

    fn write_raw(
        &self,
        collection: &'static str,
        expected_revision: u64,
        records: Vec<Value>,
    ) -> Result<u64, StoreError> {
        let actual = self.read_raw(collection)?.revision;
        if actual != expected_revision {
            warn!(collection, expected_revision, actual, "revision conflict");
            return Err(StoreError::Conflict {
                collection,
                expected: expected_revision,
                actual,
            });
        }

        let next = RawCollection {
            revision: actual + 1,
            records,
        };
        let path = self.collection_path(collection);
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, serde_json::to_string_pretty(&next)?)?;
        fs::rename(&staging, &path)?;
        debug!(collection, revision = next.revision, "saved collection");
        Ok(next.revision)
    }
}
