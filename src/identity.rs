//! Typed identity wrappers.
//!
//! An [`Identity`] pairs an entity type with an optional raw key value. The
//! optionality is deliberate: an identity can be constructed before the
//! record it designates has a key, and the guarded retrieval operations use
//! that absence to short-circuit instead of issuing a request that cannot
//! resolve.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use crate::entity::Entity;

/// Typed wrapper around the raw key value that designates one instance of
/// `T` within the data source.
///
/// The wrapper may hold no value at all ([`Identity::absent`]); such an
/// identity can never resolve to a record and the retrieval operations in
/// [`crate::fetch`] treat it as "nothing to look up".
///
/// # Examples
///
/// ```
/// use idquery::{Entity, Identity};
///
/// struct Customer;
///
/// impl Entity for Customer {
///     type Key = u64;
/// }
///
/// let identity = Identity::<Customer>::new(42);
/// assert_eq!(identity.value(), Some(&42));
///
/// let absent = Identity::<Customer>::absent();
/// assert!(absent.is_absent());
/// ```
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(
    serialize = "T::Key: Serialize",
    deserialize = "T::Key: Deserialize<'de>"
))]
pub struct Identity<T: Entity> {
    value: Option<T::Key>,
    #[serde(skip)]
    _entity: PhantomData<fn() -> T>,
}

impl<T: Entity> Identity<T> {
    /// Creates an identity holding the given raw key value.
    #[must_use]
    pub fn new(value: T::Key) -> Self {
        Self {
            value: Some(value),
            _entity: PhantomData,
        }
    }

    /// Creates an identity holding no raw key value.
    #[must_use]
    pub const fn absent() -> Self {
        Self {
            value: None,
            _entity: PhantomData,
        }
    }

    /// Creates an identity from an optional raw key value.
    #[must_use]
    pub fn from_optional(value: Option<T::Key>) -> Self {
        Self {
            value,
            _entity: PhantomData,
        }
    }

    /// Returns the wrapped raw key value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&T::Key> {
        self.value.as_ref()
    }

    /// Consumes the identity, returning the wrapped raw key value.
    #[must_use]
    pub fn into_value(self) -> Option<T::Key> {
        self.value
    }

    /// Returns true if this identity holds no raw key value.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        self.value.is_none()
    }
}

impl<T: Entity> Default for Identity<T> {
    fn default() -> Self {
        Self::absent()
    }
}

// Manual impls: deriving would bound `T` itself, but only `T::Key` matters.

impl<T: Entity> Clone for Identity<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T: Entity> fmt::Debug for Identity<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Identity").field(&self.value).finish()
    }
}

impl<T: Entity> PartialEq for Identity<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Entity> Eq for Identity<T> {}

impl<T: Entity> Hash for Identity<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T: Entity> fmt::Display for Identity<T>
where
    T::Key: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{value}"),
            None => write!(f, "<absent>"),
        }
    }
}
