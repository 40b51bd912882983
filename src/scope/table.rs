use crate::base::{KeyId, Name, ObjectId};
use crate::config::IndexConfig;
use crate::entity::{Entity, EntityId};
use crate::error::{ResourceError, ResourceResult};
use crate::signature::{Signature, Token};
use crate::tree::{NodeArena, NodeId};

/// Declaration index of one program or scope.
///
/// Owns the trie root, every trie node (in a [`NodeArena`]) and every entity
/// ever created here. Entities whose trie node was cleared stay in the arena
/// and are listed as inactive until [`DeclarationScope::close`].
#[derive(Debug)]
pub struct DeclarationScope {
    pub(super) nodes: NodeArena,
    pub(super) root: NodeId,
    /// Arena storage for all entities - single source of truth
    pub(super) entities: Vec<Entity>,
    /// Entities no longer held by any trie node, in retirement order
    pub(super) inactive: Vec<EntityId>,
    config: IndexConfig,
}

/// Counters describing a scope's memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeStats {
    pub live_nodes: usize,
    pub free_node_slots: usize,
    pub entities: usize,
    pub active_entities: usize,
    pub inactive_entities: usize,
}

/// What [`DeclarationScope::close`] tore down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseSummary {
    pub nodes_freed: usize,
    pub entities_freed: usize,
}

impl DeclarationScope {
    /// Establish a scope with an empty trie root.
    pub fn init(config: IndexConfig) -> ResourceResult<Self> {
        let mut nodes = NodeArena::new(config.max_nodes);
        let root = nodes.alloc(KeyId::ROOT)?;
        tracing::debug!("[ENTITY] scope initialised");
        Ok(Self {
            nodes,
            root,
            entities: Vec::new(),
            inactive: Vec::new(),
            config,
        })
    }

    /// Tear the scope down, freeing the trie and every entity, inactive ones included.
    pub fn close(mut self) -> CloseSummary {
        let active: Vec<EntityId> = (0..self.entities.len())
            .map(EntityId::new)
            .filter(|id| self.entities[id.index()].is_active())
            .collect();
        self.retire(active);

        let summary = CloseSummary {
            nodes_freed: self.nodes.live_nodes(),
            entities_freed: self.entities.len(),
        };
        tracing::info!(
            "[ENTITY] scope closed: {} nodes, {} entities freed",
            summary.nodes_freed,
            summary.entities_freed
        );
        summary
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    pub fn stats(&self) -> ScopeStats {
        ScopeStats {
            live_nodes: self.nodes.live_nodes(),
            free_node_slots: self.nodes.free_slots(),
            entities: self.entities.len(),
            active_entities: self.entities.len() - self.inactive.len(),
            inactive_entities: self.inactive.len(),
        }
    }

    // ============================================================
    // Entities
    // ============================================================

    /// Get an entity by its EntityId (O(1) arena lookup)
    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.index())
    }

    /// Entities no longer reachable through the trie, oldest first.
    pub fn inactive_entities(&self) -> &[EntityId] {
        &self.inactive
    }

    pub fn set_ident(&mut self, id: EntityId, ident: Option<&str>) {
        if let Some(entity) = self.entities.get_mut(id.index()) {
            entity.set_ident(ident.map(Name::new));
        }
    }

    pub fn set_public_symbol(&mut self, id: EntityId, symbol: Option<KeyId>) {
        if let Some(entity) = self.entities.get_mut(id.index()) {
            entity.set_public_symbol(symbol);
        }
    }

    pub(super) fn new_entity(&mut self, signature: Signature) -> ResourceResult<EntityId> {
        if let Some(limit) = self.config.max_entities {
            if self.entities.len() >= limit {
                tracing::warn!("[ENTITY] entity budget of {} exhausted", limit);
                return Err(ResourceError::entity_budget(limit));
            }
        }

        self.entities.try_reserve(1)?;
        let id = EntityId::new(self.entities.len());
        self.entities.push(Entity::new(signature));
        Ok(id)
    }

    /// Move entities detached from the trie onto the inactive list.
    pub(super) fn retire(&mut self, released: Vec<EntityId>) {
        for id in released {
            let entity = &mut self.entities[id.index()];
            if !entity.is_active() {
                continue;
            }
            entity.deactivate();
            self.inactive.push(id);
            tracing::debug!(
                "[ENTITY] entity {} inactive ({} tokens)",
                id.index(),
                entity.signature().len()
            );
        }
    }

    // ============================================================
    // Owners
    // ============================================================

    /// Declare `tokens` on behalf of `owner`: resolve or create the entity and
    /// make `owner` its current definition.
    pub fn declare(&mut self, tokens: &[Token], owner: ObjectId) -> ResourceResult<EntityId> {
        let id = self.get_entity(tokens)?;
        self.entities[id.index()].push_owner(owner);
        Ok(id)
    }

    /// Drop the current owner of `id` and undeclare one use of its signature.
    ///
    /// Returns the owner removed, or `None` if the entity had none.
    pub fn undeclare(&mut self, id: EntityId) -> Option<ObjectId> {
        let owner = self.entities.get_mut(id.index())?.pop_owner()?;
        self.pop_entity(id);
        Some(owner)
    }

    /// Current owner of the declaration matching `tokens` exactly.
    pub fn resolve_owner(&self, tokens: &[Token]) -> Option<ObjectId> {
        self.entity(self.find_entity(tokens)?)?.owner()
    }
}
