//! Overload resolution under nominal subtyping.

use rstest::rstest;

use crate::helpers::prelude::{CallPart, Prelude};
use CallPart::{Arg, Sym, Var};

/// `+` declared for (number, number), (integer, integer) and (string, string).
fn arithmetic() -> (Prelude, [entity_index::ObjectId; 3]) {
    let mut p = Prelude::new();
    let header = [p.val("a", p.number), p.sym("+"), p.val("b", p.number)];
    let (_, numbers) = p.declare(&header);
    let header = [p.val("a", p.integer), p.sym("+"), p.val("b", p.integer)];
    let (_, integers) = p.declare(&header);
    let header = [p.val("a", p.string), p.sym("+"), p.val("b", p.string)];
    let (_, strings) = p.declare(&header);
    (p, [numbers, integers, strings])
}

#[rstest]
#[case("integer", "integer", Some(1))]
#[case("natural", "natural", Some(1))]
#[case("natural", "integer", Some(1))]
#[case("float", "float", Some(0))]
#[case("float", "integer", Some(0))]
#[case("natural", "float", Some(0))]
#[case("number", "number", Some(0))]
#[case("string", "string", Some(2))]
#[case("string", "integer", None)]
#[case("object", "object", None)]
fn test_binary_operator_resolution(
    #[case] left: &str,
    #[case] right: &str,
    #[case] expected: Option<usize>,
) {
    let (mut p, owners) = arithmetic();
    let left = p.universe.type_named(left).unwrap();
    let right = p.universe.type_named(right).unwrap();

    let resolved = p.resolve(&[Arg(left), Sym("+"), Arg(right)]);
    assert_eq!(resolved, expected.map(|i| owners[i]));
}

#[test]
fn test_exact_lookup_ignores_supertypes() {
    let (mut p, _) = arithmetic();
    let tokens = p.call(&[Arg(p.natural), Sym("+"), Arg(p.natural)]);
    assert_eq!(p.scope.find_entity(&tokens), None);

    let tokens = p.call(&[Arg(p.integer), Sym("+"), Arg(p.integer)]);
    assert!(p.scope.find_entity(&tokens).is_some());
}

#[test]
fn test_reference_and_value_params_share_a_tree() {
    let mut p = Prelude::new();
    let header = [p.sym("length"), p.sym("("), p.reference("s", p.string), p.sym(")")];
    let (_, owner) = p.declare(&header);

    let resolved = p.resolve(&[Sym("length"), Sym("("), Arg(p.string), Sym(")")]);
    assert_eq!(resolved, Some(owner));
}

#[test]
fn test_inout_params_need_variable_arguments() {
    let mut p = Prelude::new();
    let header = [p.sym("incr"), p.sym("("), p.inout("x", p.integer), p.sym(")")];
    let (_, owner) = p.declare(&header);

    assert_eq!(
        p.resolve(&[Sym("incr"), Sym("("), Var(p.natural), Sym(")")]),
        Some(owner)
    );
    assert_eq!(
        p.resolve(&[Sym("incr"), Sym("("), Arg(p.natural), Sym(")")]),
        None
    );
}

#[test]
fn test_keyword_mismatch_is_not_rescued_by_fallback() {
    let mut p = Prelude::new();
    let header = [p.sym("write"), p.val("x", p.object)];
    p.declare(&header);

    assert_eq!(p.resolve(&[Sym("writeln"), Arg(p.string)]), None);
    assert!(p.resolve(&[Sym("write"), Arg(p.string)]).is_some());
}

#[test]
fn test_fallback_explores_later_parameters() {
    let mut p = Prelude::new();
    // Only the general left operand combines with a float on the right.
    let header = [p.val("a", p.integer), p.sym("*"), p.val("b", p.integer)];
    let (_, integers) = p.declare(&header);
    let header = [p.val("a", p.number), p.sym("*"), p.val("b", p.float)];
    let (_, mixed) = p.declare(&header);

    assert_eq!(
        p.resolve(&[Arg(p.natural), Sym("*"), Arg(p.natural)]),
        Some(integers)
    );
    assert_eq!(
        p.resolve(&[Arg(p.natural), Sym("*"), Arg(p.float)]),
        Some(mixed)
    );
}
