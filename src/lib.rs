//! # idquery - Identity-Guarded Entity Retrieval
//!
//! idquery wraps a data-access query handle with identity-aware convenience
//! operations. Given a strongly-typed identity, it either retrieves the
//! designated record or short-circuits to "nothing" when the identity cannot
//! possibly resolve, without ever touching the underlying data source.
//!
//! ## Core Concepts
//!
//! - **Entity**: A domain type retrievable by a raw key
//! - **Identity**: A typed wrapper around an optional raw key value
//! - **Query**: The capability object that executes retrieval against the
//!   underlying data source
//! - **Theorise**: Construct an entity reference under the assumption it
//!   exists in the data source, without verifying that assumption
//!
//! ## Usage
//!
//! ```
//! use idquery::{fetch, Entity, Identity, InMemoryQuery, Theorise};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Customer {
//!     id: u64,
//!     name: String,
//! }
//!
//! impl Entity for Customer {
//!     type Key = u64;
//! }
//!
//! impl Theorise for Customer {
//!     fn theorise(key: u64) -> Self {
//!         Self { id: key, name: String::new() }
//!     }
//! }
//!
//! let store = InMemoryQuery::new();
//! store.insert(7, Customer { id: 7, name: "Ada".to_string() })?;
//!
//! let identity = Identity::<Customer>::new(7);
//! let found = fetch::get(Some(&store), Some(&identity))?;
//! assert_eq!(found.map(|c| c.name), Some("Ada".to_string()));
//!
//! // An absent identity short-circuits without touching the store.
//! let skipped = fetch::get(Some(&store), Option::<&Identity<Customer>>::None)?;
//! assert!(skipped.is_none());
//! # Ok::<(), idquery::FetchError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod entity;
pub mod error;
pub mod fetch;
pub mod identity;
pub mod memory;
pub mod query;

// Re-export primary types at crate root for convenience
pub use entity::{Entity, Theorise};
pub use error::{FetchError, FetchResult, QueryError};
pub use fetch::QueryExt;
pub use identity::Identity;
pub use memory::InMemoryQuery;
pub use query::Query;
