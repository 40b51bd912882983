//! Key-Tree operations.
//!
//! A Key-Tree is the binary search tree holding the out-edges of one trie node
//! for one [`EdgeKind`]. Entries are ordered by [`KeyId::tree_order`], which
//! only shapes the tree and carries no meaning.

use crate::base::KeyId;
use crate::entity::EntityId;
use crate::error::ResourceResult;
use crate::signature::EdgeKind;

use super::node::{NodeArena, NodeId};

impl NodeArena {
    /// Locate the node for `key` in the Key-Tree rooted at `tree`, active or not.
    pub fn locate(&self, tree: Option<NodeId>, key: KeyId) -> Option<NodeId> {
        let order = key.tree_order();
        let mut current = tree;
        while let Some(id) = current {
            let node = &self[id];
            if node.key == key {
                return Some(id);
            }
            current = if order < node.key.tree_order() {
                node.less
            } else {
                node.greater
            };
        }
        None
    }

    /// Find the active node for `key`. Inactive nodes are invisible.
    pub fn find(&self, tree: Option<NodeId>, key: KeyId) -> Option<NodeId> {
        self.locate(tree, key).filter(|&id| self[id].is_active())
    }

    /// Find the node for `key` in `parent`'s `kind` Key-Tree, counting one more
    /// use of it, or link a fresh node there.
    ///
    /// An inactive node is reactivated with a usage count of 1; its branches
    /// and entity were cleared when it went inactive.
    pub fn get_or_insert(
        &mut self,
        parent: NodeId,
        kind: EdgeKind,
        key: KeyId,
    ) -> ResourceResult<NodeId> {
        let Some(mut current) = self[parent].branches.get(kind) else {
            let id = self.alloc(key)?;
            *self[parent].branches.slot_mut(kind) = Some(id);
            tracing::trace!("[KEY_TREE] new {} root {}", kind.label(), key);
            return Ok(id);
        };

        let order = key.tree_order();
        loop {
            let node = &self[current];
            if node.key == key {
                let node = &mut self[current];
                node.usage_count += 1;
                tracing::trace!("[KEY_TREE] reuse {} usage={}", key, node.usage_count);
                return Ok(current);
            }

            let go_less = order < node.key.tree_order();
            let next = if go_less { node.less } else { node.greater };
            match next {
                Some(child) => current = child,
                None => {
                    let id = self.alloc(key)?;
                    let node = &mut self[current];
                    if go_less {
                        node.less = Some(id);
                    } else {
                        node.greater = Some(id);
                    }
                    tracing::trace!("[KEY_TREE] new {} node {}", kind.label(), key);
                    return Ok(id);
                }
            }
        }
    }

    /// Count one use less of the node for `key` in `parent`'s `kind` Key-Tree.
    ///
    /// When the count drops to 0 the node's entity is detached and its four
    /// Key-Trees are released; the node keeps its key and sibling links.
    /// Entities detached on the way are appended to `released`.
    ///
    /// Returns the node only if it is still in use afterwards.
    pub fn pop(
        &mut self,
        parent: NodeId,
        kind: EdgeKind,
        key: KeyId,
        released: &mut Vec<EntityId>,
    ) -> Option<NodeId> {
        let id = self.locate(self[parent].branches.get(kind), key)?;
        let node = &mut self[id];
        if node.usage_count == 0 {
            return None;
        }

        node.usage_count -= 1;
        if node.usage_count > 0 {
            return Some(id);
        }

        released.extend(node.entity.take());
        let subtrees = node.branches.take_all();
        for tree in subtrees {
            self.release(tree, released);
        }
        tracing::trace!("[KEY_TREE] {} went inactive", key);
        None
    }

    /// Free every node of the Key-Tree rooted at `tree`, together with all
    /// deeper Key-Trees, using an explicit work stack.
    pub fn release(&mut self, tree: Option<NodeId>, released: &mut Vec<EntityId>) {
        let mut stack: Vec<NodeId> = tree.into_iter().collect();
        while let Some(id) = stack.pop() {
            let mut node = self.release_slot(id);
            released.extend(node.entity);
            stack.extend(node.less);
            stack.extend(node.greater);
            stack.extend(node.branches.take_all().into_iter().flatten());
        }
    }

    /// Active nodes of the Key-Tree rooted at `tree`, in tree order.
    pub fn active_nodes(&self, tree: Option<NodeId>) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack = Vec::new();
        let mut current = tree;
        loop {
            while let Some(id) = current {
                stack.push(id);
                current = self[id].less;
            }
            let Some(id) = stack.pop() else {
                break;
            };
            if self[id].is_active() {
                result.push(id);
            }
            current = self[id].greater;
        }
        result
    }
}
