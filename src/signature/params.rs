//! Formal-parameter lists and their classification into trie tokens.

use crate::base::{KeyId, TypeId};

use super::token::Token;

/// Passing mode of a formal parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamMode {
    /// Mutable by-reference parameter
    InOut,
    /// Read-only reference parameter
    Ref,
    /// By-value parameter
    Value,
    /// The formal denotes a type
    Type,
}

/// A formal parameter object as produced by the declaration parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormalParam {
    /// Identity of the parameter object itself
    pub key: KeyId,
    pub mode: ParamMode,
    /// Declared type; for `ParamMode::Type` the denoted type, if concrete yet
    pub ty: Option<TypeId>,
}

impl FormalParam {
    pub fn new(key: KeyId, mode: ParamMode, ty: Option<TypeId>) -> Self {
        Self { key, mode, ty }
    }
}

/// One element of a raw declaration header or argument list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Symbol(KeyId),
    Formal(FormalParam),
}

/// Classify a raw element list into the token sequence the trie is walked with.
///
/// In-out formals select the in-out Key-Tree and value/ref formals the other
/// parameter Key-Tree, both keyed by declared type. Type formals become
/// attribute tokens. A value-like formal without a declared type falls back
/// to a symbol token keyed by the formal itself.
pub fn classify(elements: &[Element]) -> Vec<Token> {
    elements.iter().map(classify_one).collect()
}

fn classify_one(element: &Element) -> Token {
    match *element {
        Element::Symbol(key) => Token::Symbol(key),
        Element::Formal(param) => match (param.mode, param.ty) {
            (ParamMode::InOut, Some(ty)) => Token::InOut(ty),
            (ParamMode::Ref | ParamMode::Value, Some(ty)) => Token::Value(ty),
            (ParamMode::Type, ty) => Token::Attr {
                ty,
                formal: param.key,
            },
            (_, None) => Token::Symbol(param.key),
        },
    }
}
