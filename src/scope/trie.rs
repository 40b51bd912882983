//! Entity trie walks.
//!
//! Every operation consumes one token per trie level, starting at the root.
//! The token's [`EdgeKind`](crate::signature::EdgeKind) picks which of the
//! current node's four Key-Trees holds the next edge, and its key picks the
//! edge inside that Key-Tree.

use crate::base::{ObjectId, TypeHierarchy};
use crate::entity::EntityId;
use crate::error::ResourceResult;
use crate::signature::{Signature, Token};
use crate::tree::NodeId;

use super::table::DeclarationScope;

impl DeclarationScope {
    /// Resolve `tokens` to their entity, creating the path and the entity as needed.
    ///
    /// Every node on the path counts one more use. If an allocation fails
    /// midway, the part of the path already walked is popped again before the
    /// error is returned.
    pub fn get_entity(&mut self, tokens: &[Token]) -> ResourceResult<EntityId> {
        let mut current = self.root;
        for (depth, token) in tokens.iter().enumerate() {
            match self.nodes.get_or_insert(current, token.edge(), token.key()) {
                Ok(next) => current = next,
                Err(err) => {
                    self.unwind(&tokens[..depth]);
                    return Err(err);
                }
            }
        }

        if let Some(existing) = self.nodes[current].entity {
            tracing::trace!("[ENTITY] redeclared entity {}", existing.index());
            return Ok(existing);
        }

        match Signature::persist(tokens).and_then(|signature| self.new_entity(signature)) {
            Ok(created) => {
                self.nodes[current].entity = Some(created);
                tracing::debug!(
                    "[ENTITY] created entity {} ({} tokens)",
                    created.index(),
                    tokens.len()
                );
                Ok(created)
            }
            Err(err) => {
                self.unwind(tokens);
                Err(err)
            }
        }
    }

    /// Exact lookup: every token must match an active edge by identity.
    pub fn find_entity(&self, tokens: &[Token]) -> Option<EntityId> {
        let mut current = self.root;
        for token in tokens {
            let tree = self.nodes[current].branches.get(token.edge());
            current = self.nodes.find(tree, token.key())?;
        }
        self.nodes[current].entity
    }

    /// Call-site lookup with supertype fallback.
    ///
    /// Typed tokens try their type and then each meta ancestor, most specific
    /// first; the first alternative that leads to an entity wins. Symbol
    /// tokens and untyped attribute tokens match by identity only.
    pub fn search_entity<H>(&self, tokens: &[Token], hierarchy: &H) -> Option<EntityId>
    where
        H: TypeHierarchy + ?Sized,
    {
        let mut stack: Vec<(NodeId, usize)> = vec![(self.root, 0)];
        let mut candidates = Vec::new();

        while let Some((node, depth)) = stack.pop() {
            let Some(token) = tokens.get(depth) else {
                if let Some(found) = self.nodes[node].entity {
                    tracing::trace!("[SEARCH] matched entity {}", found.index());
                    return Some(found);
                }
                continue;
            };

            let tree = self.nodes[node].branches.get(token.edge());
            candidates.clear();
            match token.search_type() {
                Some(ty) => {
                    let mut ancestor = Some(ty);
                    while let Some(current) = ancestor {
                        candidates.extend(self.nodes.find(tree, current.key()));
                        ancestor = hierarchy.meta(current);
                    }
                }
                None => candidates.extend(self.nodes.find(tree, token.key())),
            }

            // Reversed so the most specific candidate is explored first.
            stack.extend(candidates.iter().rev().map(|&child| (child, depth + 1)));
        }

        tracing::trace!("[SEARCH] no match for {} tokens", tokens.len());
        None
    }

    /// Undeclare one use of `id`'s signature.
    ///
    /// Replays the stored tokens through Key-Tree pops. Nodes reaching zero
    /// usage are cleared and entities detached on the way become inactive.
    /// Popping an inactive entity does nothing.
    pub fn pop_entity(&mut self, id: EntityId) {
        let Some(entity) = self.entities.get(id.index()) else {
            tracing::warn!("[ENTITY] pop of unknown entity {}", id.index());
            return;
        };
        if !entity.is_active() {
            tracing::warn!("[ENTITY] pop of inactive entity {}", id.index());
            return;
        }

        let tokens = entity.tokens().to_vec();
        self.unwind(&tokens);
        tracing::debug!("[ENTITY] popped entity {}", id.index());
    }

    /// Current owner of the best call-site match for `tokens`.
    pub fn search_owner<H>(&self, tokens: &[Token], hierarchy: &H) -> Option<ObjectId>
    where
        H: TypeHierarchy + ?Sized,
    {
        self.entity(self.search_entity(tokens, hierarchy)?)?.owner()
    }

    /// Usage count of the node `tokens` lead to, active or not.
    pub fn usage_count(&self, tokens: &[Token]) -> Option<u32> {
        let mut current = self.root;
        for token in tokens {
            let tree = self.nodes[current].branches.get(token.edge());
            current = self.nodes.locate(tree, token.key())?;
        }
        Some(self.nodes[current].usage_count)
    }

    /// Pop `tokens` from the root, stopping at the first node that goes inactive.
    fn unwind(&mut self, tokens: &[Token]) {
        let mut released = Vec::new();
        let mut current = self.root;
        for token in tokens {
            match self
                .nodes
                .pop(current, token.edge(), token.key(), &mut released)
            {
                Some(next) => current = next,
                None => break,
            }
        }
        self.retire(released);
    }
}
