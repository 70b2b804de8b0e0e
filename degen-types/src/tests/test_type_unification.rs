//! Tests for unification of type parameters during generic-call resolution

use crate::{
    identical, infer_type_arguments, unify, BasicKind, Field, InferenceError, Restriction,
    Substitution, TypeArena, TypeRef,
};
use pretty_assertions::assert_eq;

fn basic(kind: BasicKind) -> TypeRef {
    TypeRef::basic(kind)
}

/// An arena with one unrestricted parameter `P`
fn create_test_context() -> (TypeArena, TypeRef) {
    let mut arena = TypeArena::new();
    let p = arena.type_param("P", Restriction::empty());
    (arena, p)
}

#[test]
fn test_repeated_parameter_unifies_consistently() {
    let (arena, p) = create_test_context();
    let int = basic(BasicKind::Int);

    let subst = infer_type_arguments(&arena, &[p, p], &[int, int]).unwrap();
    assert_eq!(subst.lookup(&arena, p), Some(int));
    assert_eq!(subst.len(), 1);
}

#[test]
fn test_repeated_parameter_with_conflicting_arguments_fails() {
    let (arena, p) = create_test_context();
    let int = basic(BasicKind::Int);
    let string = basic(BasicKind::String);

    let result = infer_type_arguments(&arena, &[p, p], &[int, string]);
    assert_eq!(
        result,
        Err(InferenceError::Mismatch {
            index: 1,
            parameter: "P".to_string(),
            argument: "string".to_string(),
        })
    );
}

#[test]
fn test_bound_parameter_is_substituted() {
    let (arena, p) = create_test_context();
    let int = basic(BasicKind::Int);

    let mut subst = Substitution::new();
    assert!(unify(&arena, &mut subst, int, p));
    assert!(unify(&arena, &mut subst, int, p));
    assert!(!unify(&arena, &mut subst, basic(BasicKind::String), p));
    assert_eq!(subst.lookup(&arena, p), Some(int));
}

#[test]
fn test_untyped_constants_bind_their_default_type() {
    let cases = [
        (BasicKind::UntypedBool, basic(BasicKind::Bool)),
        (BasicKind::UntypedInt, basic(BasicKind::Int)),
        (BasicKind::UntypedRune, TypeRef::RUNE),
        (BasicKind::UntypedFloat, basic(BasicKind::Float64)),
        (BasicKind::UntypedComplex, basic(BasicKind::Complex128)),
        (BasicKind::UntypedString, basic(BasicKind::String)),
    ];

    for (untyped, expected) in cases {
        let (arena, p) = create_test_context();
        let mut subst = Substitution::new();
        assert!(unify(&arena, &mut subst, basic(untyped), p));
        assert_eq!(subst.lookup(&arena, p), Some(expected), "default of {untyped:?}");
    }
}

#[test]
fn test_restrictions_reject_unsuitable_arguments() {
    let mut arena = TypeArena::new();
    let ordered = arena.type_param("O", Restriction::ORD);
    let numeric = arena.type_param("N", Restriction::NUM);
    let equatable = arena.type_param("E", Restriction::EQ);
    let ints = arena.slice(basic(BasicKind::Int));
    let with_slice = arena.struct_type(vec![Field::new("items", ints)]);
    let ptr = arena.pointer(ints);

    let accepts = |param: TypeRef, arg: TypeRef| {
        let mut subst = Substitution::new();
        let ok = unify(&arena, &mut subst, arg, param);
        assert_eq!(ok, !subst.is_empty(), "a rejected binding must leave nothing behind");
        ok
    };

    assert!(accepts(ordered, basic(BasicKind::String)));
    assert!(accepts(ordered, basic(BasicKind::Float32)));
    assert!(!accepts(ordered, basic(BasicKind::Bool)));
    assert!(!accepts(ordered, basic(BasicKind::Complex64)));

    assert!(accepts(numeric, basic(BasicKind::Complex128)));
    assert!(accepts(numeric, basic(BasicKind::UntypedInt)));
    assert!(!accepts(numeric, basic(BasicKind::String)));

    assert!(accepts(equatable, ptr));
    assert!(accepts(equatable, basic(BasicKind::Bool)));
    assert!(!accepts(equatable, ints));
    assert!(!accepts(equatable, with_slice));
    assert!(!accepts(equatable, basic(BasicKind::UntypedNil)));
}

#[test]
fn test_untyped_nil_binds_itself_without_restriction() {
    let (arena, p) = create_test_context();
    let mut subst = Substitution::new();
    let nil = basic(BasicKind::UntypedNil);

    assert!(unify(&arena, &mut subst, nil, p));
    assert_eq!(subst.lookup(&arena, p), Some(nil));
}

#[test]
fn test_type_parameter_argument_satisfies_by_restriction() {
    let mut arena = TypeArena::new();
    let p = arena.type_param("P", Restriction::ORD);
    let q = arena.type_param("Q", Restriction::ORD | Restriction::EQ);
    let r = arena.type_param("R", Restriction::EQ);

    let mut subst = Substitution::new();
    assert!(unify(&arena, &mut subst, q, p));
    assert_eq!(subst.lookup(&arena, p), Some(q));

    let mut subst = Substitution::new();
    assert!(!unify(&arena, &mut subst, r, p));
}

#[test]
fn test_nested_unification() {
    let mut arena = TypeArena::new();
    let k = arena.type_param("K", Restriction::EQ);
    let v = arena.type_param("V", Restriction::empty());
    let string = basic(BasicKind::String);
    let ints = arena.slice(basic(BasicKind::Int));

    let generic_map = arena.map(k, v);
    let concrete_map = arena.map(string, ints);
    let generic_fn = arena.signature(vec![generic_map, k], vec![v]);
    let concrete_fn = arena.signature(vec![concrete_map, string], vec![ints]);

    let mut subst = Substitution::new();
    assert!(unify(&arena, &mut subst, concrete_fn, generic_fn));
    let bindings: Vec<_> = subst.iter().map(|(_, ty)| ty).collect();
    assert_eq!(bindings, vec![string, ints]);

    let bad_fn = arena.signature(vec![concrete_map, ints], vec![ints]);
    let mut subst = Substitution::new();
    assert!(!unify(&arena, &mut subst, bad_fn, generic_fn));
}

#[test]
fn test_generic_instance_arguments_unify() {
    let mut arena = TypeArena::new();
    let t = arena.type_param("T", Restriction::empty());
    let list = arena.declare_generic("List", None, vec![t]).unwrap();
    let p = arena.type_param("P", Restriction::empty());

    let list_p = arena.instance(list, vec![p]).unwrap();
    let list_int = arena.instance(list, vec![basic(BasicKind::Int)]).unwrap();

    let subst = infer_type_arguments(&arena, &[list_p], &[list_int]).unwrap();
    assert_eq!(subst.lookup(&arena, p), Some(basic(BasicKind::Int)));

    // the unbound comparison sees two different instances
    assert!(!identical(&arena, list_int, list_p));
}

#[test]
fn test_argument_count_mismatch() {
    let (arena, p) = create_test_context();
    let result = infer_type_arguments(&arena, &[p, p], &[basic(BasicKind::Int)]);
    assert_eq!(
        result,
        Err(InferenceError::ArgumentCountMismatch {
            expected: 2,
            found: 1
        })
    );
}

#[test]
fn test_missing_bindings_are_reported() {
    let mut arena = TypeArena::new();
    let k = arena.type_param("K", Restriction::empty());
    let v = arena.type_param("V", Restriction::empty());

    let subst = infer_type_arguments(&arena, &[k], &[basic(BasicKind::Int)]).unwrap();
    assert_eq!(subst.missing(&arena, &[k, v]), vec![v]);
}

#[test]
fn test_named_argument_binds_without_unwrapping() {
    let (mut arena, p) = create_test_context();
    let celsius = arena.declare_named("Celsius", None);
    arena
        .set_underlying(celsius, basic(BasicKind::Float64))
        .unwrap();

    let subst = infer_type_arguments(&arena, &[p, p], &[celsius, celsius]).unwrap();
    assert_eq!(subst.lookup(&arena, p), Some(celsius));

    let result = infer_type_arguments(&arena, &[p, p], &[celsius, basic(BasicKind::Float64)]);
    assert!(matches!(result, Err(InferenceError::Mismatch { index: 1, .. })));
}
