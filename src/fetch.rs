//! Identity-guarded retrieval over a query handle.
//!
//! Both operations follow the same guard-then-delegate shape: fail fast when
//! the query handle is missing, short-circuit to `Ok(None)` when the identity
//! cannot possibly resolve, and otherwise forward the extracted raw key to
//! the handle and pass its result through unchanged.
//!
//! The short circuit covers two layers of absence: the identity argument
//! itself, and an identity wrapper holding no raw key value. Neither case
//! touches the handle, so no request is ever issued for an identity that
//! cannot resolve to anything.

use crate::entity::Entity;
use crate::error::{FetchError, FetchResult, QueryError};
use crate::identity::Identity;
use crate::query::Query;

/// Gets a single record from the underlying data source, designated by an
/// identity.
///
/// Returns `Ok(None)` when the identity is absent, when it wraps no raw key
/// value, or when the handle itself finds nothing.
///
/// # Errors
/// - [`FetchError::MissingArgument`] when `query` is `None`.
/// - [`FetchError::Query`] when the handle fails; the underlying
///   [`QueryError`] is carried unchanged.
pub fn get<T, Q>(query: Option<&Q>, identity: Option<&Identity<T>>) -> FetchResult<Option<T>>
where
    T: Entity,
    Q: Query<T> + ?Sized,
{
    fetch_single(query, identity, |q, key| q.get(key))
}

/// Creates an instance of the entity type based upon a theory that it exists
/// in the underlying data source.
///
/// The handle's single-key theorise always produces an instance, but this
/// guarded form still returns `Ok(None)` whenever the identity guard fails.
/// The "always an instance" guarantee therefore only holds when a usable
/// identity was supplied; callers must not assume a non-`None` result.
///
/// # Errors
/// - [`FetchError::MissingArgument`] when `query` is `None`.
/// - [`FetchError::Query`] when the handle fails.
pub fn theorise<T, Q>(query: Option<&Q>, identity: Option<&Identity<T>>) -> FetchResult<Option<T>>
where
    T: Entity,
    Q: Query<T> + ?Sized,
{
    fetch_single(query, identity, |q, key| q.theorise(key).map(Some))
}

/// Gets a single record using a delegate naming which single-key retrieval
/// to invoke. Performs the guard checks once for both public operations.
fn fetch_single<T, Q, F>(
    query: Option<&Q>,
    identity: Option<&Identity<T>>,
    op: F,
) -> FetchResult<Option<T>>
where
    T: Entity,
    Q: Query<T> + ?Sized,
    F: FnOnce(&Q, &T::Key) -> Result<Option<T>, QueryError>,
{
    let query = query.ok_or(FetchError::MissingArgument { parameter: "query" })?;

    match identity.and_then(Identity::value) {
        None => Ok(None),
        Some(key) => Ok(op(query, key)?),
    }
}

/// Extension methods for [`Query`] implementors.
///
/// The receiver form cannot express an absent handle, so the
/// missing-argument failure mode belongs to the free functions only; these
/// methods carry the identity guard.
pub trait QueryExt<T: Entity>: Query<T> {
    /// Identity-guarded form of [`Query::get`]. See [`get`].
    ///
    /// # Errors
    /// Returns [`FetchError::Query`] when the handle fails.
    fn get_identified(&self, identity: Option<&Identity<T>>) -> FetchResult<Option<T>> {
        get(Some(self), identity)
    }

    /// Identity-guarded form of [`Query::theorise`]. See [`theorise`].
    ///
    /// # Errors
    /// Returns [`FetchError::Query`] when the handle fails.
    fn theorise_identified(&self, identity: Option<&Identity<T>>) -> FetchResult<Option<T>> {
        theorise(Some(self), identity)
    }
}

impl<T: Entity, Q: Query<T> + ?Sized> QueryExt<T> for Q {}
