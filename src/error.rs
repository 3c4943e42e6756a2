//! Error types for identity-guarded retrieval.
//!
//! All errors are strongly typed using thiserror. "Not found" is never an
//! error in this crate: an absent record surfaces as `Ok(None)`.

use thiserror::Error;

/// Errors raised by a query handle while executing a retrieval.
///
/// These originate in the backend behind the handle; the guarded operations
/// in [`crate::fetch`] propagate them to the caller without reinterpreting
/// them.
#[derive(Debug, Error)]
pub enum QueryError {
    /// Backend failure.
    #[error("query backend error: {0}")]
    Backend(String),

    /// Connection to the data source failed.
    #[error("connection error: {0}")]
    Connection(String),

    /// A record could not be serialized or deserialized.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Errors raised by the guarded retrieval operations themselves.
#[derive(Debug, Error)]
pub enum FetchError {
    /// A required argument was not supplied.
    #[error("required argument '{parameter}' was not supplied")]
    MissingArgument {
        /// Name of the offending parameter.
        parameter: &'static str,
    },

    /// The underlying query handle failed.
    #[error("query error: {0}")]
    Query(#[from] QueryError),
}

impl FetchError {
    /// Returns true if this is a missing-argument error.
    #[must_use]
    pub const fn is_missing_argument(&self) -> bool {
        matches!(self, Self::MissingArgument { .. })
    }

    /// Returns true if this error originated in the query handle.
    #[must_use]
    pub const fn is_query(&self) -> bool {
        matches!(self, Self::Query(_))
    }
}

/// Result type alias for the guarded retrieval operations.
pub type FetchResult<T> = Result<T, FetchError>;
