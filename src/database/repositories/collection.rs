//! In-memory collection backed by a snapshot file
//!
//! Lookups are linear scans. Every mutation rewrites the collection's
//! snapshot; if the write fails the in-memory change is undone so memory and
//! disk stay in step.

use std::fmt;
use serde::{de::DeserializeOwned, Serialize};
use crate::database::storage::{CollectionName, SnapshotStore};
use crate::utils::errors::{GrandPrixError, Result};

/// A record stored in its own collection and identified by a primary key
pub trait Record: Clone + Serialize + DeserializeOwned {
    type Key: PartialEq + Clone + fmt::Display;

    const COLLECTION: CollectionName;
    const ENTITY: &'static str;

    fn key(&self) -> Self::Key;
}

#[derive(Debug, Clone)]
pub struct Collection<T: Record> {
    records: Vec<T>,
    store: SnapshotStore,
}

impl<T: Record> Collection<T> {
    /// Load the collection from its snapshot
    pub fn load(store: SnapshotStore) -> Result<Self> {
        let records = store.load::<T>(T::COLLECTION)?;
        Ok(Self { records, store })
    }

    pub fn all(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, key: &T::Key) -> Option<&T> {
        self.records.iter().find(|record| record.key() == *key)
    }

    pub fn contains_key(&self, key: &T::Key) -> bool {
        self.get(key).is_some()
    }

    pub fn find<P>(&self, predicate: P) -> Option<&T>
    where
        P: Fn(&T) -> bool,
    {
        self.records.iter().find(|record| predicate(record))
    }

    pub fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        self.records.iter().filter(|record| predicate(record)).cloned().collect()
    }

    /// Append a record, refusing a duplicate primary key
    pub fn insert(&mut self, record: T) -> Result<T> {
        let key = record.key();
        if self.contains_key(&key) {
            return Err(GrandPrixError::Conflict(format!("{} {} already exists", T::ENTITY, key)));
        }

        self.records.push(record.clone());
        if let Err(e) = self.persist() {
            self.records.pop();
            return Err(e);
        }

        tracing::debug!(entity = T::ENTITY, key = %key, "Record added");
        Ok(record)
    }

    /// Replace the record with the same primary key. `Ok(false)` means no
    /// such record exists and nothing changed.
    pub fn replace(&mut self, record: T) -> Result<bool> {
        let key = record.key();
        let Some(position) = self.records.iter().position(|existing| existing.key() == key) else {
            return Ok(false);
        };

        let previous = std::mem::replace(&mut self.records[position], record);
        if let Err(e) = self.persist() {
            self.records[position] = previous;
            return Err(e);
        }

        tracing::debug!(entity = T::ENTITY, key = %key, "Record updated");
        Ok(true)
    }

    /// Remove the record with `key`. `Ok(false)` means it was not present.
    pub fn remove(&mut self, key: &T::Key) -> Result<bool> {
        let Some(position) = self.records.iter().position(|existing| existing.key() == *key) else {
            return Ok(false);
        };

        let removed = self.records.remove(position);
        if let Err(e) = self.persist() {
            self.records.insert(position, removed);
            return Err(e);
        }

        tracing::debug!(entity = T::ENTITY, key = %key, "Record deleted");
        Ok(true)
    }

    fn persist(&self) -> Result<()> {
        self.store.save(T::COLLECTION, &self.records)
    }
}
