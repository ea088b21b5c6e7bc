//! Foundation types for Memeboard.
//!
//! This crate provides the identity, temporal, and ordering types shared by
//! every other Memeboard crate.
//!
//! # Key Types
//!
//! - [`Principal`] — Identity of an author or voter, supplied by the caller
//! - [`PostId`] — Monotonically assigned post identifier, rendered in decimal
//! - [`EpochSeconds`] — Strictly positive Unix timestamp in seconds
//! - [`SortKey`] — Ordering applied by range queries

pub mod error;
pub mod identity;
pub mod post_id;
pub mod sort;
pub mod temporal;

pub use error::TypeError;
pub use identity::Principal;
pub use post_id::PostId;
pub use sort::SortKey;
pub use temporal::EpochSeconds;
