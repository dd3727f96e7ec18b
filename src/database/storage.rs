//! Snapshot storage
//!
//! Every collection is persisted as one JSON document holding the whole
//! collection. A write replaces the document; there is no append log and no
//! index, so each write costs O(n) in the size of the collection.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use serde::{de::DeserializeOwned, Serialize};
use crate::config::StorageConfig;
use crate::utils::errors::Result;
use crate::utils::logging::log_storage_operation;

/// The seven persisted collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionName {
    Customers,
    Admins,
    Events,
    Bookings,
    Tickets,
    Payments,
    Discounts,
}

impl CollectionName {
    pub const ALL: [CollectionName; 7] = [
        CollectionName::Customers,
        CollectionName::Admins,
        CollectionName::Events,
        CollectionName::Bookings,
        CollectionName::Tickets,
        CollectionName::Payments,
        CollectionName::Discounts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionName::Customers => "customers",
            CollectionName::Admins => "admins",
            CollectionName::Events => "events",
            CollectionName::Bookings => "bookings",
            CollectionName::Tickets => "tickets",
            CollectionName::Payments => "payments",
            CollectionName::Discounts => "discounts",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.json", self.as_str())
    }
}

/// Directory of collection snapshots
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    data_dir: PathBuf,
}

impl SnapshotStore {
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            data_dir: config.data_dir.clone(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn path_for(&self, collection: CollectionName) -> PathBuf {
        self.data_dir.join(collection.file_name())
    }

    /// Load a collection. A missing snapshot is an empty collection; a
    /// snapshot that cannot be parsed is an error rather than silently
    /// dropped data.
    pub fn load<T: DeserializeOwned>(&self, collection: CollectionName) -> Result<Vec<T>> {
        let path = self.path_for(collection);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(collection = collection.as_str(), "No snapshot found, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => {
                log_storage_operation("load", collection.as_str(), 0, false);
                return Err(e.into());
            }
        };

        match serde_json::from_str::<Vec<T>>(&contents) {
            Ok(records) => {
                log_storage_operation("load", collection.as_str(), records.len(), true);
                Ok(records)
            }
            Err(e) => {
                tracing::error!(collection = collection.as_str(), path = %path.display(), error = %e, "Snapshot is corrupt");
                log_storage_operation("load", collection.as_str(), 0, false);
                Err(e.into())
            }
        }
    }

    /// Replace the snapshot of a collection. The directory is created on
    /// first write and the file is swapped in with a rename.
    pub fn save<T: Serialize>(&self, collection: CollectionName, records: &[T]) -> Result<()> {
        let result = self.write_snapshot(collection, records);
        log_storage_operation("save", collection.as_str(), records.len(), result.is_ok());
        result
    }

    fn write_snapshot<T: Serialize>(&self, collection: CollectionName, records: &[T]) -> Result<()> {
        fs::create_dir_all(&self.data_dir)?;

        let path = self.path_for(collection);
        let tmp_path = path.with_extension("json.tmp");
        let serialized = serde_json::to_vec_pretty(records)?;
        fs::write(&tmp_path, serialized)?;
        fs::rename(&tmp_path, &path)?;
        Ok(())
    }
}
