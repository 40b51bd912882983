//! Symbol interner.
//!
//! Literal keyword/operator symbols are keyed by identity in the trie, so two
//! occurrences of `+` must map to the same [`KeyId`]. The interner deduplicates
//! names and hands out one key per distinct name.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use super::key::{KeyAllocator, KeyId};

/// Interned symbol name.
pub type Name = SmolStr;

/// Name to key deduplication table.
#[derive(Debug, Default, Clone)]
pub struct Interner {
    keys: FxHashMap<Name, KeyId>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a symbol name, returning its key.
    ///
    /// If the name was already interned, returns the existing key.
    /// Otherwise a fresh key is drawn from `keys`.
    pub fn intern(&mut self, keys: &mut KeyAllocator, name: &str) -> KeyId {
        if let Some(existing) = self.keys.get(name) {
            *existing
        } else {
            let key = keys.fresh();
            self.keys.insert(Name::new(name), key);
            key
        }
    }

    /// Get the key of an interned name if it exists, without creating it.
    pub fn get(&self, name: &str) -> Option<KeyId> {
        self.keys.get(name).copied()
    }

    /// Number of unique names interned.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
