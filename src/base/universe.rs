//! Registry of key objects: literal symbols, types and formal parameters.
//!
//! The declaration trie never looks inside these objects. It needs their
//! identities (for edge selection) and, during call-site search, the
//! supertype of a type. The [`Universe`] is the in-crate provider of both;
//! a host compiler with its own object model implements [`TypeHierarchy`]
//! instead.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use super::intern::{Interner, Name};
use super::key::{KeyAllocator, KeyId};

/// Identity of a type. A type's canonical key is its match key in the trie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(KeyId);

impl TypeId {
    pub fn key(self) -> KeyId {
        self.0
    }
}

/// Opaque handle for a defined object owning an entity (see `DeclarationScope::declare`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(pub u32);

/// Supertype accessor consulted by fallback search.
///
/// Implementations must keep every meta-chain finite (acyclic).
pub trait TypeHierarchy {
    /// The single declared supertype of `ty`, if any.
    fn meta(&self, ty: TypeId) -> Option<TypeId>;
}

#[derive(Debug, Clone)]
struct TypeInfo {
    name: Name,
    meta: Option<TypeId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyKind {
    Symbol,
    Type,
    Formal,
}

/// Object registry handing out keys for symbols, types and formals.
#[derive(Debug, Default)]
pub struct Universe {
    keys: KeyAllocator,
    symbols: Interner,
    types: IndexMap<TypeId, TypeInfo>,
    names: FxHashMap<KeyId, (KeyKind, Name)>,
}

impl Universe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key of the literal symbol `name`; the same name always yields the same key.
    pub fn symbol(&mut self, name: &str) -> KeyId {
        let key = self.symbols.intern(&mut self.keys, name);
        self.names
            .entry(key)
            .or_insert_with(|| (KeyKind::Symbol, Name::new(name)));
        key
    }

    /// Register a new type. `meta` must be an already registered type, so
    /// meta-chains cannot form cycles.
    pub fn declare_type(&mut self, name: &str, meta: Option<TypeId>) -> TypeId {
        debug_assert!(meta.is_none_or(|m| self.types.contains_key(&m)));
        let ty = TypeId(self.keys.fresh());
        self.types.insert(
            ty,
            TypeInfo {
                name: Name::new(name),
                meta,
            },
        );
        self.names.insert(ty.key(), (KeyKind::Type, Name::new(name)));
        ty
    }

    /// Register a formal parameter object. Every call yields a distinct key,
    /// even for equal names: formals are distinguished by identity.
    pub fn formal(&mut self, name: &str) -> KeyId {
        let key = self.keys.fresh();
        self.names.insert(key, (KeyKind::Formal, Name::new(name)));
        key
    }

    pub fn type_name(&self, ty: TypeId) -> Option<&str> {
        self.types.get(&ty).map(|info| info.name.as_str())
    }

    /// Look up a registered type by name (first registration wins).
    pub fn type_named(&self, name: &str) -> Option<TypeId> {
        self.types
            .iter()
            .find(|(_, info)| info.name.as_str() == name)
            .map(|(ty, _)| *ty)
    }

    /// The meta-chain of `ty`, most specific first, `ty` included.
    pub fn ancestors(&self, ty: TypeId) -> Vec<TypeId> {
        let mut chain = vec![ty];
        let mut current = ty;
        while let Some(parent) = self.meta(current) {
            chain.push(parent);
            current = parent;
        }
        chain
    }

    /// Human-readable rendering of a key for diagnostics and dumps.
    pub fn describe(&self, key: KeyId) -> String {
        match self.names.get(&key) {
            Some((KeyKind::Formal, name)) => format!("formal {name}"),
            Some((_, name)) => name.to_string(),
            None if key == KeyId::ROOT => "<root>".to_string(),
            None => format!("<{key}>"),
        }
    }

    pub fn key_count(&self) -> usize {
        self.keys.issued()
    }
}

impl TypeHierarchy for Universe {
    fn meta(&self, ty: TypeId) -> Option<TypeId> {
        self.types.get(&ty).and_then(|info| info.meta)
    }
}
