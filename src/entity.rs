//! Entities: canonical declaration records.

use crate::base::{KeyId, Name, ObjectId};
use crate::signature::{Signature, Token};

/// Unique identifier for an entity in its scope's entity arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(u32);

impl EntityId {
    pub fn new(index: usize) -> Self {
        Self(index as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A declaration, uniquely identified by its full structural signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    ident: Option<Name>,
    public_symbol: Option<KeyId>,
    signature: Signature,
    /// Defining objects, most recent last
    owners: Vec<ObjectId>,
    active: bool,
}

impl Entity {
    pub(crate) fn new(signature: Signature) -> Self {
        Self {
            ident: None,
            public_symbol: None,
            signature,
            owners: Vec::new(),
            active: true,
        }
    }

    /// Identifier of the declaration; absent for anonymous and operator declarations.
    pub fn ident(&self) -> Option<&str> {
        self.ident.as_deref()
    }

    /// Canonical public symbol object of the declaration, if any.
    pub fn public_symbol(&self) -> Option<KeyId> {
        self.public_symbol
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn tokens(&self) -> &[Token] {
        self.signature.tokens()
    }

    /// The object currently defining this entity.
    pub fn owner(&self) -> Option<ObjectId> {
        self.owners.last().copied()
    }

    pub fn owners(&self) -> &[ObjectId] {
        &self.owners
    }

    /// Whether a trie node still holds this entity.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn set_ident(&mut self, ident: Option<Name>) {
        self.ident = ident;
    }

    pub(crate) fn set_public_symbol(&mut self, symbol: Option<KeyId>) {
        self.public_symbol = symbol;
    }

    pub(crate) fn push_owner(&mut self, owner: ObjectId) {
        self.owners.push(owner);
    }

    pub(crate) fn pop_owner(&mut self) -> Option<ObjectId> {
        self.owners.pop()
    }

    pub(crate) fn deactivate(&mut self) {
        self.active = false;
    }
}
