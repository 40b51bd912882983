//! Error types for declaration index operations.

use std::collections::TryReserveError;

use thiserror::Error;

/// Resource exhaustion while growing the declaration index.
///
/// This is the only failure the index reports. Lookups never fail: a missing
/// declaration is `None`, not an error.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The configured budget of live trie nodes is used up.
    #[error("node budget exhausted: {limit} live nodes")]
    NodeBudget { limit: usize },

    /// The configured budget of entities for this scope is used up.
    #[error("entity budget exhausted: {limit} entities")]
    EntityBudget { limit: usize },

    /// The allocator refused to grow a node arena, entity arena or signature copy.
    #[error("out of memory: {0}")]
    OutOfMemory(#[from] TryReserveError),
}

impl ResourceError {
    /// Create a node budget error.
    pub fn node_budget(limit: usize) -> Self {
        Self::NodeBudget { limit }
    }

    /// Create an entity budget error.
    pub fn entity_budget(limit: usize) -> Self {
        Self::EntityBudget { limit }
    }
}

pub type ResourceResult<T> = Result<T, ResourceError>;
