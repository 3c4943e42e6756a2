//! In-memory query backend.
//!
//! This module provides a thread-safe in-memory implementation of the
//! [`Query`] trait. It is intended for embedded usage, tests, and as a
//! reference implementation of the handle contract.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::entity::{Entity, Theorise};
use crate::error::QueryError;
use crate::query::Query;

fn lock_err(context: &'static str) -> QueryError {
    QueryError::Backend(format!("poisoned lock: {context}"))
}

/// Thread-safe in-memory data source keyed by raw entity key.
///
/// `get` answers from the stored records; `theorise` answers from the stored
/// records when possible and otherwise manufactures a hypothetical record via
/// the entity's [`Theorise`] capability.
pub struct InMemoryQuery<T: Entity> {
    records: RwLock<HashMap<T::Key, T>>,
}

impl<T: Entity> InMemoryQuery<T> {
    /// Creates an empty in-memory data source.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Inserts or replaces the record stored under `key`.
    ///
    /// # Errors
    /// Returns [`QueryError::Backend`] if the record lock is poisoned.
    pub fn insert(&self, key: T::Key, record: T) -> Result<(), QueryError> {
        let mut records = self.records.write().map_err(|_| lock_err("records"))?;
        records.insert(key, record);
        Ok(())
    }

    /// Removes the record stored under `key`, returning it if present.
    ///
    /// # Errors
    /// Returns [`QueryError::Backend`] if the record lock is poisoned.
    pub fn remove(&self, key: &T::Key) -> Result<Option<T>, QueryError> {
        let mut records = self.records.write().map_err(|_| lock_err("records"))?;
        Ok(records.remove(key))
    }

    /// Returns the number of stored records.
    ///
    /// # Errors
    /// Returns [`QueryError::Backend`] if the record lock is poisoned.
    pub fn len(&self) -> Result<usize, QueryError> {
        let records = self.records.read().map_err(|_| lock_err("records"))?;
        Ok(records.len())
    }

    /// Returns true if no records are stored.
    ///
    /// # Errors
    /// Returns [`QueryError::Backend`] if the record lock is poisoned.
    pub fn is_empty(&self) -> Result<bool, QueryError> {
        Ok(self.len()? == 0)
    }
}

impl<T: Entity> Default for InMemoryQuery<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Query<T> for InMemoryQuery<T>
where
    T: Entity + Theorise + Clone + Send + Sync,
    T::Key: Send + Sync,
{
    fn get(&self, key: &T::Key) -> Result<Option<T>, QueryError> {
        let records = self.records.read().map_err(|_| lock_err("records"))?;
        Ok(records.get(key).cloned())
    }

    fn theorise(&self, key: &T::Key) -> Result<T, QueryError> {
        let records = self.records.read().map_err(|_| lock_err("records"))?;
        Ok(records
            .get(key)
            .cloned()
            .unwrap_or_else(|| T::theorise(key.clone())))
    }
}
