
use crate::base::{TypeId, Universe};
use crate::config::IndexConfig;
use crate::scope::DeclarationScope;
use crate::signature::Token;

/// Universe with a small type hierarchy plus an unbounded scope.
pub(super) struct Fixture {
    pub universe: Universe,
    pub scope: DeclarationScope,
    pub object: TypeId,
    pub int: TypeId,
    pub positive_int: TypeId,
    pub animal: TypeId,
    pub dog: TypeId,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_config(IndexConfig::default())
    }

    pub fn with_config(config: IndexConfig) -> Self {
        let mut universe = Universe::new();
        let object = universe.declare_type("Object", None);
        let int = universe.declare_type("Int", None);
        let positive_int = universe.declare_type("PositiveInt", Some(int));
        let animal = universe.declare_type("Animal", Some(object));
        let dog = universe.declare_type("Dog", Some(animal));
        let scope = match DeclarationScope::init(config) {
            Ok(scope) => scope,
            Err(err) => panic!("scope init failed: {err}"),
        };
        Self {
            universe,
            scope,
            object,
            int,
            positive_int,
            animal,
            dog,
        }
    }

    pub fn sym(&mut self, name: &str) -> Token {
        Token::Symbol(self.universe.symbol(name))
    }
}
