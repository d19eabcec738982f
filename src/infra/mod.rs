//! Persistence backends for dispatch records.

pub mod json_file;
pub mod memory;
pub mod store;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use store::{Collection, EntityStore, RawCollection, Record, StoreError};
