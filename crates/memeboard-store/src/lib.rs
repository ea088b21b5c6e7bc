//! Append-only post storage for Memeboard.
//!
//! This crate owns every post in the system and the counter that names them.
//!
//! # Types
//!
//! - [`Post`] -- immutable content record plus its upvote set
//! - [`UpvoteTracker`] -- per-post set of principals that upvoted it
//!
//! # Storage Backends
//!
//! All backends implement the [`PostStore`] trait:
//!
//! - [`InMemoryPostStore`] -- `Vec`-backed store living for the process lifetime
//!
//! # Design Rules
//!
//! 1. Posts are appended in creation order and never removed or reordered.
//! 2. IDs are allocated from a counter that only moves forward.
//! 3. A principal is recorded at most once per post; votes are permanent.
//! 4. Every operation either applies its single mutation or changes nothing.
//! 5. Readers get cloned snapshots; no post is ever aliased outside the store.

pub mod error;
pub mod memory;
pub mod post;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryPostStore;
pub use post::{Post, UpvoteTracker};
pub use traits::PostStore;
