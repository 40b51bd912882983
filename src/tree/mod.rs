//! Key-Trees: per-edge binary search trees of trie nodes.
//!
//! All nodes of one declaration scope live in a single [`NodeArena`]. A
//! Key-Tree is identified by the [`NodeId`] of its root entry, stored in one
//! of the parent node's [`Branches`].

mod key_tree;
mod node;

pub use node::{Branches, Node, NodeArena, NodeId};
