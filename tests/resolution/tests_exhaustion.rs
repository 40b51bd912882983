//! Resource exhaustion and recovery.

use entity_index::{IndexConfig, ResourceError, classify};

use crate::helpers::prelude::{CallPart, Prelude};
use CallPart::{Arg, Sym};

#[test]
fn test_node_budget_failure_leaves_no_trace() {
    let mut p = Prelude::with_config(IndexConfig::new().with_max_nodes(4));
    let header = [p.sym("f"), p.val("x", p.integer)];
    p.declare(&header);

    // Shares `f`, needs three new nodes with one left.
    let header = [p.sym("f"), p.val("x", p.float), p.sym("to"), p.val("y", p.string)];
    let tokens = classify(&header);
    let err = p.scope.get_entity(&tokens).unwrap_err();
    assert!(matches!(err, ResourceError::NodeBudget { limit: 4 }));
    assert!(err.to_string().contains("node budget"));

    for len in 1..=tokens.len() {
        let prefix = &tokens[..len];
        if len == 1 {
            assert_eq!(p.scope.usage_count(prefix), Some(1));
        } else {
            assert_eq!(p.scope.find_entity(prefix), None);
        }
    }
    assert!(p.resolve(&[Sym("f"), Arg(p.natural)]).is_some());
}

#[test]
fn test_freed_nodes_make_room_again() {
    let mut p = Prelude::with_config(IndexConfig::new().with_max_nodes(3));
    let header = [p.sym("g"), p.val("x", p.integer)];
    let (entity, _) = p.declare(&header);

    let header = [p.sym("h")];
    let tokens = classify(&header);
    assert!(p.scope.get_entity(&tokens).is_err());

    // Undeclaring `g` frees its parameter node; `g` itself stays as skeleton.
    p.scope.undeclare(entity);
    assert_eq!(p.scope.stats().live_nodes, 2);
    assert!(p.scope.get_entity(&tokens).is_ok());
}

#[test]
fn test_entity_budget_failure() {
    let mut p = Prelude::with_config(IndexConfig::new().with_max_entities(2));
    for name in ["one", "two"] {
        let header = [p.sym(name)];
        p.declare(&header);
    }

    let header = [p.sym("three")];
    let tokens = classify(&header);
    let err = p.scope.get_entity(&tokens).unwrap_err();
    assert!(matches!(err, ResourceError::EntityBudget { limit: 2 }));
    assert_eq!(p.scope.usage_count(&tokens), Some(0));
    assert_eq!(p.scope.find_entity(&tokens), None);
}
