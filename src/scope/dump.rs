//! Listing of the declarations a scope currently holds.

use crate::base::{KeyId, Universe};
use crate::entity::EntityId;
use crate::signature::EdgeKind;
use crate::tree::NodeId;

use super::table::DeclarationScope;

/// An active declaration together with the trie path leading to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredPath {
    pub entity: EntityId,
    pub edges: Vec<(EdgeKind, KeyId)>,
}

impl DeclaredPath {
    /// Render as e.g. `add other_param Int other_param Int`.
    pub fn render(&self, universe: &Universe) -> String {
        self.edges
            .iter()
            .map(|&(kind, key)| match kind {
                EdgeKind::Symbol => universe.describe(key),
                _ => format!("{} {}", kind.label(), universe.describe(key)),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl DeclarationScope {
    /// Every declaration reachable through active nodes, depth first.
    pub fn declared_paths(&self) -> Vec<DeclaredPath> {
        let mut paths = Vec::new();
        let mut stack: Vec<(NodeId, Vec<(EdgeKind, KeyId)>)> = vec![(self.root, Vec::new())];

        while let Some((id, edges)) = stack.pop() {
            let node = &self.nodes[id];
            if let Some(entity) = node.entity {
                paths.push(DeclaredPath {
                    entity,
                    edges: edges.clone(),
                });
            }

            let mut children = Vec::new();
            for kind in EdgeKind::ALL {
                for child in self.nodes.active_nodes(node.branches.get(kind)) {
                    let mut path = edges.clone();
                    path.push((kind, self.nodes[child].key));
                    children.push((child, path));
                }
            }
            stack.extend(children.into_iter().rev());
        }
        paths
    }

    /// Log every active declaration at debug level.
    pub fn trace_declarations(&self, universe: &Universe) {
        let paths = self.declared_paths();
        tracing::debug!("[ENTITY] {} names declared", paths.len());
        for path in &paths {
            tracing::debug!(
                "[ENTITY] {} -> entity {}",
                path.render(universe),
                path.entity.index()
            );
        }
    }
}
