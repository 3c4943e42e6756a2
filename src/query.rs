//! Abstract query-handle capability.
//!
//! The [`Query`] trait defines the contract a data-access backend must
//! implement to be usable with the guarded retrieval operations. By using a
//! trait, we enable:
//! - In-memory backends for testing and embedded use
//! - Persistent backends for production
//!
//! Connection handling, caching, and transaction semantics all belong to the
//! implementor; this crate only ever forwards a raw key and passes the
//! result through.

use crate::entity::Entity;
use crate::error::QueryError;

/// Capability to retrieve records of entity type `T` from a data source.
///
/// # Safety Considerations
/// - Implementations should handle concurrent access safely; callers may
///   share one handle across threads.
pub trait Query<T: Entity>: Send + Sync {
    /// Gets a single record by raw key.
    ///
    /// Returns `Ok(None)` when the data source holds nothing for the key;
    /// absence is not an error.
    fn get(&self, key: &T::Key) -> Result<Option<T>, QueryError>;

    /// Creates an instance based upon a theory that `key` exists in the
    /// underlying data source.
    ///
    /// Always produces an instance when it succeeds, even if the record does
    /// not actually exist. If a theorised instance is created for a record
    /// that is not really there, using that instance may fail later.
    fn theorise(&self, key: &T::Key) -> Result<T, QueryError>;
}
