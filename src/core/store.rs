//! Entity state store - The ordered, in-memory collection behind an admin screen.
//!
//! Every mutation returns a new store and leaves the receiver untouched, so a
//! previous snapshot stays valid for re-rendering, undo and assertions in tests.
//! Mutations that target an unknown identifier report [`Error::RecordNotFound`]
//! rather than silently succeeding; the caller decides whether that matters.

use crate::{
    entities::Record,
    errors::{Error, Result},
};
use std::collections::HashSet;
use tracing::debug;

/// Ordered collection of records, in insertion (and display) order.
#[derive(Clone, Debug, PartialEq)]
pub struct EntityStore<T> {
    records: Vec<T>,
}

impl<T> Default for EntityStore<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: Record> EntityStore<T> {
    /// Creates a store holding `records` in the given order.
    ///
    /// # Errors
    /// Returns [`Error::DuplicateId`] if two records share an identifier.
    pub fn new(records: Vec<T>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        if let Some(id) = records.iter().map(Record::id).find(|id| !seen.insert(*id)) {
            return Err(Error::DuplicateId { kind: T::KIND, id });
        }
        Ok(Self { records })
    }

    /// The records, in display order.
    #[must_use]
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up a record by identifier.
    #[must_use]
    pub fn get(&self, id: i64) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Identifier for the next new record: one past the largest identifier in use,
    /// or `1` for an empty store. Removing the largest identifier frees it again.
    #[must_use]
    pub fn next_id(&self) -> i64 {
        self.records.iter().map(Record::id).max().map_or(1, |max| max + 1)
    }

    /// Returns a new store with `record` appended.
    ///
    /// # Errors
    /// Returns [`Error::DuplicateId`] if the identifier is already taken; `self` is unchanged.
    pub fn insert(&self, record: T) -> Result<Self> {
        let id = record.id();
        if self.get(id).is_some() {
            return Err(Error::DuplicateId { kind: T::KIND, id });
        }
        debug!(kind = T::KIND, id, "Inserting record");
        let mut records = self.records.clone();
        records.push(record);
        Ok(Self { records })
    }

    /// Returns a new store where the record with `id` has been passed through `updater`.
    /// The record keeps its position.
    ///
    /// # Errors
    /// Returns [`Error::RecordNotFound`] if no record has `id`; `self` is unchanged.
    pub fn replace<F>(&self, id: i64, updater: F) -> Result<Self>
    where
        F: FnOnce(&T) -> T,
    {
        let index = self.position(id)?;
        debug!(kind = T::KIND, id, "Replacing record");
        let mut records = self.records.clone();
        records[index] = updater(&self.records[index]);
        Ok(Self { records })
    }

    /// Like [`replace`](Self::replace), for updaters that can reject the update.
    ///
    /// # Errors
    /// Returns [`Error::RecordNotFound`] if no record has `id`, or whatever `updater` returns.
    pub fn try_replace<F>(&self, id: i64, updater: F) -> Result<Self>
    where
        F: FnOnce(&T) -> Result<T>,
    {
        let index = self.position(id)?;
        let updated = updater(&self.records[index])?;
        debug!(kind = T::KIND, id, "Replacing record");
        let mut records = self.records.clone();
        records[index] = updated;
        Ok(Self { records })
    }

    /// Returns a new store without the record with `id`.
    ///
    /// # Errors
    /// Returns [`Error::RecordNotFound`] if no record has `id`; `self` is unchanged.
    pub fn remove(&self, id: i64) -> Result<Self> {
        self.position(id)?;
        debug!(kind = T::KIND, id, "Removing record");
        let records = self
            .records
            .iter()
            .filter(|r| r.id() != id)
            .cloned()
            .collect();
        Ok(Self { records })
    }

    fn position(&self, id: i64) -> Result<usize> {
        self.records
            .iter()
            .position(|r| r.id() == id)
            .ok_or(Error::RecordNotFound { kind: T::KIND, id })
    }
}
