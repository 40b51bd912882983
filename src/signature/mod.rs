//! Declaration signatures: the token sequences the entity trie is keyed by.

mod params;
mod token;

pub use params::{Element, FormalParam, ParamMode, classify};
pub use token::{EdgeKind, Signature, Token};
