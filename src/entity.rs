//! Entity capability marker and key contract.
//!
//! Everything in this crate hangs off the [`Entity`] trait: it names the raw
//! key type that uniquely designates one instance of a domain type, and the
//! guarded retrieval operations are bounded by it.

use std::fmt;
use std::hash::Hash;

/// Marker capability for domain types that can be retrieved by identity.
///
/// Implementors declare the raw key type that designates one instance of the
/// type within the data source. The crate never inspects the key beyond
/// passing it to a query handle.
///
/// # Examples
///
/// ```
/// use idquery::Entity;
///
/// struct Customer {
///     id: u64,
///     name: String,
/// }
///
/// impl Entity for Customer {
///     type Key = u64;
/// }
/// ```
pub trait Entity {
    /// Raw key type that uniquely designates one instance within this type.
    type Key: Clone + Eq + Hash + fmt::Debug;
}

/// Capability to manufacture a hypothetical record for an unverified key.
///
/// A theorised instance stands in for a record assumed to exist in the data
/// source. The assumption is not checked at construction time; using the
/// instance may fail later if the record was never there.
pub trait Theorise: Entity + Sized {
    /// Constructs an instance under the assumption that `key` exists in the
    /// underlying data source.
    fn theorise(key: Self::Key) -> Self;
}
