use std::ops::{Index, IndexMut};

use crate::base::KeyId;
use crate::entity::EntityId;
use crate::error::{ResourceError, ResourceResult};
use crate::signature::EdgeKind;

/// Unique identifier for a node in a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub fn new(index: usize) -> Self {
        Self(index as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Roots of the four Key-Trees hanging off one trie node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Branches {
    pub by_symbol: Option<NodeId>,
    pub by_inout_param_type: Option<NodeId>,
    pub by_other_param_type: Option<NodeId>,
    pub by_attr_type: Option<NodeId>,
}

impl Branches {
    pub fn get(&self, kind: EdgeKind) -> Option<NodeId> {
        match kind {
            EdgeKind::Symbol => self.by_symbol,
            EdgeKind::InOutParam => self.by_inout_param_type,
            EdgeKind::OtherParam => self.by_other_param_type,
            EdgeKind::Attr => self.by_attr_type,
        }
    }

    pub fn slot_mut(&mut self, kind: EdgeKind) -> &mut Option<NodeId> {
        match kind {
            EdgeKind::Symbol => &mut self.by_symbol,
            EdgeKind::InOutParam => &mut self.by_inout_param_type,
            EdgeKind::OtherParam => &mut self.by_other_param_type,
            EdgeKind::Attr => &mut self.by_attr_type,
        }
    }

    /// Detach all four Key-Trees, leaving the branches empty.
    pub fn take_all(&mut self) -> [Option<NodeId>; 4] {
        [
            self.by_symbol.take(),
            self.by_inout_param_type.take(),
            self.by_other_param_type.take(),
            self.by_attr_type.take(),
        ]
    }

    pub fn is_empty(&self) -> bool {
        *self == Branches::default()
    }
}

/// One Key-Tree entry, which is at the same time one trie node.
///
/// `less`/`greater` link siblings inside the Key-Tree that contains this node;
/// `branches` hold the Key-Trees one trie level deeper.
#[derive(Debug, Clone)]
pub struct Node {
    pub key: KeyId,
    pub less: Option<NodeId>,
    pub greater: Option<NodeId>,
    /// 0 means present in the skeleton but logically absent
    pub usage_count: u32,
    pub entity: Option<EntityId>,
    pub branches: Branches,
}

impl Node {
    /// A freshly linked node counts its first use.
    fn new(key: KeyId) -> Self {
        Self {
            key,
            less: None,
            greater: None,
            usage_count: 1,
            entity: None,
            branches: Branches::default(),
        }
    }

    fn vacant() -> Self {
        Self {
            usage_count: 0,
            ..Self::new(KeyId::ROOT)
        }
    }

    pub fn is_active(&self) -> bool {
        self.usage_count > 0
    }
}

/// Arena storage for the trie nodes of one declaration scope.
///
/// Released nodes go to a free list and their slots are reused; no node is
/// ever moved, so [`NodeId`]s stay valid until released.
#[derive(Debug)]
pub struct NodeArena {
    pub(super) nodes: Vec<Node>,
    pub(super) free: Vec<NodeId>,
    max_nodes: Option<usize>,
}

impl NodeArena {
    pub fn new(max_nodes: Option<usize>) -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            max_nodes,
        }
    }

    /// Allocate a node with usage count 1.
    pub fn alloc(&mut self, key: KeyId) -> ResourceResult<NodeId> {
        if let Some(limit) = self.max_nodes {
            if self.live_nodes() >= limit {
                tracing::warn!("[KEY_TREE] node budget of {} exhausted", limit);
                return Err(ResourceError::node_budget(limit));
            }
        }

        if let Some(id) = self.free.pop() {
            self.nodes[id.index()] = Node::new(key);
            return Ok(id);
        }

        self.nodes.try_reserve(1)?;
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Node::new(key));
        Ok(id)
    }

    /// Return a node's slot to the free list.
    pub(super) fn release_slot(&mut self, id: NodeId) -> Node {
        let node = std::mem::replace(&mut self.nodes[id.index()], Node::vacant());
        self.free.push(id);
        node
    }

    pub fn live_nodes(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    pub fn free_slots(&self) -> usize {
        self.free.len()
    }
}

impl Index<NodeId> for NodeArena {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }
}

impl IndexMut<NodeId> for NodeArena {
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }
}
