//! Keyed entity persistence with an optimistic revision per collection.

use std::io;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Error as SerdeError, Value};

use crate::domain::{Brand, CargoType, Driver, DriverLicenseCategory, Itinerary, Order, Vehicle};

/// A record that lives in a named collection and is keyed by its id.
pub trait Record: Serialize + DeserializeOwned + Clone {
    const COLLECTION: &'static str;

    fn id(&self) -> &str;
}

macro_rules! record {
    ($ty:ty, $collection:literal) => {
        impl Record for $ty {
            const COLLECTION: &'static str = $collection;

            fn id(&self) -> &str {
                &self.id
            }
        }
    };
}

record!(DriverLicenseCategory, "categories");
record!(CargoType, "cargo_types");
record!(Brand, "brands");
record!(Driver, "drivers");
record!(Vehicle, "vehicles");
record!(Order, "orders");
record!(Itinerary, "itineraries");

/// Untyped collection contents as persisted by a backend.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RawCollection {
    pub revision: u64,
    #[serde(default)]
    pub records: Vec<Value>,
}

/// Typed snapshot of a collection in insertion order.
#[derive(Clone, Debug, PartialEq)]
pub struct Collection<T> {
    pub revision: u64,
    pub records: Vec<T>,
}

impl<T: Record> Collection<T> {
    pub fn find(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store lock poisoned")]
    Poisoned,
    #[error("collection `{collection}` changed underneath us (expected revision {expected}, found {actual})")]
    Conflict {
        collection: &'static str,
        expected: u64,
        actual: u64,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}

/// Backend contract. Backends only move raw collections around; typing and
/// keyed merging are provided on top.
pub trait EntityStore {
    fn read_raw(&self, collection: &'static str) -> Result<RawCollection, StoreError>;

    /// Replaces the collection contents if its revision still equals
    /// `expected_revision`. Returns the new revision.
    fn write_raw(
        &self,
        collection: &'static str,
        expected_revision: u64,
        records: Vec<Value>,
    ) -> Result<u64, StoreError>;

    fn load<T: Record>(&self) -> Result<Collection<T>, StoreError>
    where
        Self: Sized,
    {
        let raw = self.read_raw(T::COLLECTION)?;
        let records = raw
            .records
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<T>, _>>()?;
        Ok(Collection {
            revision: raw.revision,
            records,
        })
    }

    /// Inserts or replaces `records` by id. Existing records keep their slot,
    /// new ones are appended in the given order.
    fn upsert<T: Record>(&self, records: &[T], expected_revision: u64) -> Result<u64, StoreError>
    where
        Self: Sized,
    {
        let mut current = self.load::<T>()?;
        if current.revision != expected_revision {
            return Err(StoreError::Conflict {
                collection: T::COLLECTION,
                expected: expected_revision,
                actual: current.revision,
            });
        }

        for record in records {
            match current.records.iter_mut().find(|r| r.id() == record.id()) {
                Some(slot) => *slot = record.clone(),
                None => current.records.push(record.clone()),
            }
        }

        let values = current
            .records
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        self.write_raw(T::COLLECTION, expected_revision, values)
    }
}
