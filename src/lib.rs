//! Bidirectionally indexed relation containers.
//!
//! Each container in this crate stores a set of `(left, right)` pairs and keeps
//! two reverse-indexed maps in permanent agreement, so that lookups are fast
//! from either side. The containers differ only in their arity rule:
//!
//! - [`OneToMany`]: a left value can have any number of right counterparts, but
//!   a right value belongs to at most one left value. Inserting a right value
//!   that is already bound elsewhere transfers it.
//! - [`ManyToMany`]: no restriction and no eviction on either side.
//! - [`OneToOne`]: left and right values are each other's sole partner;
//!   inserting either side evicts that side's prior pairing.
//!
//! All three are built on [`hashbrown`]'s `HashMap` and on the sorted,
//! duplicate-free vector algebra in [`sorted_vec`]. Multi-pair operations are
//! batched into one merge or difference pass per touched key instead of
//! per-pair map updates.
//!
//! The containers are single-threaded; callers needing shared access must
//! serialize externally.

#![deny(unused_imports, missing_debug_implementations, unreachable_pub)]
#![cfg_attr(doc, deny(missing_docs, rustdoc::broken_intra_doc_links))]
#![warn(rust_2018_idioms)]

/// A set of pairs where each right value has at most one left counterpart
pub mod one_to_many;
pub use crate::one_to_many::OneToMany;

/// A set of pairs with no arity restriction
pub mod many_to_many;
pub use crate::many_to_many::ManyToMany;

/// A set of pairs where every value has at most one counterpart
pub mod one_to_one;
pub use crate::one_to_one::OneToOne;

/// Enums similar to Option used with pairs of items
pub mod optionals;
pub use crate::optionals::{InsertOptional, OptionalPair};

/// Free functions over sorted, duplicate-free vectors
pub mod sorted_vec;

#[cfg(feature = "serde")]
mod serde_impls;
