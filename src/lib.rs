//! # entity-index
//!
//! Declaration index for semantic analysis: resolves the token sequence of a
//! procedure/operator header or call-site signature to exactly one canonical
//! entity, with supertype fallback for call sites and reference-counted
//! undeclaration.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! scope     → DeclarationScope: trie walks, entity lifecycle, owners, dumps
//!   ↓
//! tree      → Key-Trees: per-edge binary search trees in a node arena
//!   ↓
//! entity    → Entity records
//!   ↓
//! signature → Tokens, formal parameters, classification
//!   ↓
//! base      → Primitives (KeyId ordinals, symbol interning, type registry)
//! ```

// ============================================================================
// MODULES (dependency order: base → signature → entity → tree → scope)
// ============================================================================

/// Foundation types: KeyId, Name interning, Universe
pub mod base;

/// Signatures: tokens and parameter-list classification
pub mod signature;

/// Entity records
pub mod entity;

/// Key-Trees over the node arena
pub mod tree;

/// Declaration scopes: the entity trie proper
pub mod scope;

pub mod config;
pub mod error;

pub use base::{KeyId, ObjectId, TypeHierarchy, TypeId, Universe};
pub use config::IndexConfig;
pub use entity::{Entity, EntityId};
pub use error::{ResourceError, ResourceResult};
pub use scope::{CloseSummary, DeclarationScope, DeclaredPath, ScopeStats};
pub use signature::{EdgeKind, Element, FormalParam, ParamMode, Signature, Token, classify};
