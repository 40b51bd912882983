use crate::base::{KeyId, TypeId};
use crate::error::ResourceResult;

/// Which of a trie node's four Key-Trees a token selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// Literal keyword or operator symbol
    Symbol,
    /// Mutable by-reference (in-out) parameter, keyed by declared type
    InOutParam,
    /// Value or read-only reference parameter, keyed by declared type
    OtherParam,
    /// Type/attribute parameter
    Attr,
}

impl EdgeKind {
    pub const ALL: [EdgeKind; 4] = [
        EdgeKind::Symbol,
        EdgeKind::InOutParam,
        EdgeKind::OtherParam,
        EdgeKind::Attr,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EdgeKind::Symbol => "symbol",
            EdgeKind::InOutParam => "inout_param",
            EdgeKind::OtherParam => "other_param",
            EdgeKind::Attr => "attr",
        }
    }
}

/// One structural element of a declaration header or call-site signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// Literal symbol, matched by identity only.
    Symbol(KeyId),
    /// In-out parameter of the given declared type.
    InOut(TypeId),
    /// Value or read-only reference parameter of the given declared type.
    Value(TypeId),
    /// Type parameter. Keyed by `ty` when it is concrete, otherwise by the
    /// formal parameter object itself.
    Attr { ty: Option<TypeId>, formal: KeyId },
}

impl Token {
    pub fn edge(&self) -> EdgeKind {
        match self {
            Token::Symbol(_) => EdgeKind::Symbol,
            Token::InOut(_) => EdgeKind::InOutParam,
            Token::Value(_) => EdgeKind::OtherParam,
            Token::Attr { .. } => EdgeKind::Attr,
        }
    }

    /// The key identity selecting the edge.
    pub fn key(&self) -> KeyId {
        match *self {
            Token::Symbol(key) => key,
            Token::InOut(ty) | Token::Value(ty) => ty.key(),
            Token::Attr { ty: Some(ty), .. } => ty.key(),
            Token::Attr { ty: None, formal } => formal,
        }
    }

    /// The type whose meta-chain fallback search may walk, if any.
    pub fn search_type(&self) -> Option<TypeId> {
        match *self {
            Token::InOut(ty) | Token::Value(ty) => Some(ty),
            Token::Attr { ty, .. } => ty,
            Token::Symbol(_) => None,
        }
    }
}

/// Persisted copy of a token list, owned by an entity.
///
/// Later changes to the caller's transient list never reach the stored copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signature {
    tokens: Vec<Token>,
}

impl Signature {
    /// Copy `tokens`, reporting allocator refusal instead of aborting.
    pub fn persist(tokens: &[Token]) -> ResourceResult<Self> {
        let mut copy = Vec::new();
        copy.try_reserve_exact(tokens.len())?;
        copy.extend_from_slice(tokens);
        Ok(Self { tokens: copy })
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
