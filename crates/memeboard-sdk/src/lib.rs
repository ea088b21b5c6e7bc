//! High-level SDK for Memeboard.
//!
//! [`Memeboard`] exposes the boundary contract (create, upvote, query, get)
//! with string inputs and JSON text outputs. Callers are identified through
//! an [`IdentitySource`]; the board never authenticates anyone itself.

pub mod board;
pub mod error;
pub mod identity;

pub use board::Memeboard;
pub use error::{SdkError, SdkResult};
pub use identity::{FixedIdentity, IdentitySource};

// Re-export key types
pub use memeboard_query::{RangeQuery, MAX_PAGE_SIZE};
pub use memeboard_store::{InMemoryPostStore, Post, PostStore};
pub use memeboard_types::{EpochSeconds, PostId, Principal, SortKey};
