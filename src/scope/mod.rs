//! Declaration scopes: the entity trie and the lifecycle of its entities.
//!
//! A [`DeclarationScope`] maps token sequences (see [`crate::signature`]) to
//! entities:
//!
//! - [`DeclarationScope::get_entity`] - insert or redeclare
//! - [`DeclarationScope::find_entity`] - exact lookup
//! - [`DeclarationScope::search_entity`] - lookup with supertype fallback
//! - [`DeclarationScope::pop_entity`] - undeclare one use
//! - [`DeclarationScope::close`] - free everything

mod dump;
mod table;
mod trie;

pub use dump::DeclaredPath;
pub use table::{CloseSummary, DeclarationScope, ScopeStats};

#[cfg(test)]
mod tests;
