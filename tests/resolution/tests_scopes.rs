//! Local declarations going in and out of scope.

use entity_index::ObjectId;

use crate::helpers::prelude::{CallPart, Prelude};
use CallPart::{Arg, Sym};

#[test]
fn test_local_shadowing_and_restore() {
    let mut p = Prelude::new();
    let header = [p.sym("x")];
    let (entity, global) = p.declare(&header);

    // A local `x` in an inner block shadows the global one.
    let (inner, local) = p.declare(&header);
    assert_eq!(inner, entity);
    assert_eq!(p.resolve(&[Sym("x")]), Some(local));

    // Leaving the block restores the outer definition.
    assert_eq!(p.scope.undeclare(entity), Some(local));
    assert_eq!(p.resolve(&[Sym("x")]), Some(global));

    assert_eq!(p.scope.undeclare(entity), Some(global));
    assert_eq!(p.resolve(&[Sym("x")]), None);
}

#[test]
fn test_leaving_scope_keeps_overloads_with_shared_prefix() {
    let mut p = Prelude::new();
    let header = [p.sym("print"), p.val("x", p.integer)];
    let (_, global) = p.declare(&header);
    let header = [p.sym("print"), p.val("x", p.float)];
    let (local_entity, _) = p.declare(&header);

    p.scope.undeclare(local_entity);

    assert_eq!(p.resolve(&[Sym("print"), Arg(p.natural)]), Some(global));
    assert_eq!(p.resolve(&[Sym("print"), Arg(p.float)]), None);
    assert!(!p.scope.entity(local_entity).unwrap().is_active());
}

#[test]
fn test_redeclared_after_scope_exit_is_fresh() {
    let mut p = Prelude::new();
    let header = [p.sym("tmp"), p.val("x", p.integer)];
    let (first, _) = p.declare(&header);
    p.scope.undeclare(first);

    let (second, owner) = p.declare(&header);
    assert_ne!(first, second);
    assert_eq!(p.scope.entity(second).unwrap().owners(), &[owner]);
    assert_eq!(p.scope.inactive_entities(), &[first]);
}

#[test]
fn test_declared_paths_render_headers() {
    let mut p = Prelude::new();
    let header = [p.val("a", p.integer), p.sym("div"), p.val("b", p.integer)];
    p.declare(&header);

    let rendered: Vec<String> = p
        .scope
        .declared_paths()
        .iter()
        .map(|path| path.render(&p.universe))
        .collect();
    assert_eq!(rendered, vec!["other_param integer div other_param integer"]);
}

#[test]
fn test_close_reports_everything_freed() {
    let mut p = Prelude::new();
    for name in ["a", "b", "c"] {
        let header = [p.sym(name), p.val("x", p.integer)];
        p.declare(&header);
    }
    let header = [p.sym("b"), p.val("x", p.integer)];
    let (b, _) = p.declare(&header);
    p.scope.undeclare(b);
    p.scope.undeclare(b);

    let stats = p.scope.stats();
    assert_eq!(stats.entities, 3);
    assert_eq!(stats.inactive_entities, 1);

    let summary = p.scope.close();
    assert_eq!(summary.entities_freed, 3);
    assert_eq!(summary.nodes_freed, stats.live_nodes);
}

#[test]
fn test_undeclare_without_owner_is_none() {
    let mut p = Prelude::new();
    let tokens = p.call(&[Sym("anon")]);
    let entity = p.scope.get_entity(&tokens).unwrap();
    assert_eq!(p.scope.undeclare(entity), None::<ObjectId>);
    assert_eq!(p.scope.find_entity(&tokens), Some(entity));
}
