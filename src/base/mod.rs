//! Foundation types for the declaration index.
//!
//! This module provides the identities the trie is keyed by:
//! - [`KeyId`], [`KeyAllocator`] - Stable key ordinals and their tree order
//! - [`Name`], [`Interner`] - Symbol name interning
//! - [`Universe`], [`TypeId`], [`TypeHierarchy`] - Object registry and meta-chains
//!
//! This module has NO dependencies on other entity-index modules.

mod intern;
mod key;
mod universe;

pub use intern::{Interner, Name};
pub use key::{KeyAllocator, KeyId};
pub use universe::{ObjectId, TypeHierarchy, TypeId, Universe};
