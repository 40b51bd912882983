//! Key identities.
//!
//! Every object that can select an edge in the declaration trie (a literal
//! symbol, a type, a formal parameter) is represented by a [`KeyId`]: a stable
//! ordinal handed out once, when the object is registered. Two keys are the
//! same key exactly when their ordinals are equal.

use std::fmt;

/// Stable identity of a key object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyId(u32);

impl KeyId {
    /// Reserved identity carried by trie roots. Never handed out by a [`KeyAllocator`].
    pub const ROOT: KeyId = KeyId(0);

    /// Multiplier for the tree-order scramble (odd, so the map is a bijection on `u32`).
    const SCRAMBLE: u32 = 0x9E37_79B9;

    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u32 {
        self.0
    }

    /// Position of this key in Key-Tree order.
    ///
    /// Ordinals are handed out sequentially, so comparing them directly would
    /// turn every Key-Tree into a linked list. The scramble spreads consecutive
    /// ordinals over the whole `u32` range while staying injective, which keeps
    /// the order total and stable without looking at what the key denotes.
    #[inline]
    pub fn tree_order(self) -> u32 {
        self.0.wrapping_mul(Self::SCRAMBLE)
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "k{}", self.0)
    }
}

/// Hands out fresh [`KeyId`]s.
#[derive(Debug, Clone)]
pub struct KeyAllocator {
    next: u32,
}

impl KeyAllocator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn fresh(&mut self) -> KeyId {
        let key = KeyId(self.next);
        self.next = self
            .next
            .checked_add(1)
            .unwrap_or_else(|| panic!("key ordinal space exhausted"));
        key
    }

    /// Number of keys handed out so far.
    pub fn issued(&self) -> usize {
        (self.next - 1) as usize
    }
}

impl Default for KeyAllocator {
    fn default() -> Self {
        Self::new()
    }
}
