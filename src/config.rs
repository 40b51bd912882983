//! Declaration index options

/// Resource limits for one declaration scope.
///
/// The defaults are unbounded; the arenas then only fail when the allocator
/// refuses to grow them.
#[derive(Debug, Clone, Default)]
pub struct IndexConfig {
    /// Maximum number of live trie nodes, root included
    pub max_nodes: Option<usize>,
    /// Maximum number of entities created over the scope's lifetime
    pub max_entities: Option<usize>,
}

impl IndexConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_nodes(mut self, limit: usize) -> Self {
        self.max_nodes = Some(limit);
        self
    }

    pub fn with_max_entities(mut self, limit: usize) -> Self {
        self.max_entities = Some(limit);
        self
    }
}
