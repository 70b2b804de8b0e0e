//! Tests for identity of self-referential interfaces

use crate::{identical, unify, BasicKind, Method, Restriction, Substitution, TypeArena, TypeRef};

/// Build a ring of `depth` anonymous interfaces where each one's `Next`
/// method returns the following interface, and the last returns the first
fn interface_ring(arena: &mut TypeArena, depth: usize, param: TypeRef) -> TypeRef {
    let ring: Vec<_> = (0..depth).map(|_| arena.new_interface()).collect();
    for (i, iface) in ring.iter().enumerate() {
        let next = ring[(i + 1) % depth];
        let sig = arena.signature(vec![param], vec![next]);
        arena
            .complete_interface(*iface, vec![Method::new("Next", sig)])
            .unwrap();
    }
    ring[0]
}

#[test]
fn test_self_referential_interfaces_are_identical() {
    let mut arena = TypeArena::new();
    let int = TypeRef::basic(BasicKind::Int);
    let a = interface_ring(&mut arena, 1, int);
    let b = interface_ring(&mut arena, 1, int);

    assert!(identical(&arena, a, b));
    assert!(identical(&arena, b, a));
}

#[test]
fn test_nested_self_embedding_terminates() {
    let int = TypeRef::basic(BasicKind::Int);
    for depth in 1..=5 {
        let mut arena = TypeArena::new();
        let a = interface_ring(&mut arena, depth, int);
        let b = interface_ring(&mut arena, depth, int);
        assert!(identical(&arena, a, b), "rings of depth {depth} should be identical");
    }
}

#[test]
fn test_rings_of_different_depth_unfold_identically() {
    let mut arena = TypeArena::new();
    let int = TypeRef::basic(BasicKind::Int);
    let short = interface_ring(&mut arena, 1, int);
    let long = interface_ring(&mut arena, 3, int);

    assert!(identical(&arena, short, long));
}

#[test]
fn test_cyclic_interfaces_with_different_methods_differ() {
    let mut arena = TypeArena::new();
    let a = interface_ring(&mut arena, 3, TypeRef::basic(BasicKind::Int));
    let b = interface_ring(&mut arena, 3, TypeRef::basic(BasicKind::String));

    assert!(!identical(&arena, a, b));
}

#[test]
fn test_declared_interfaces_with_recursive_methods() {
    // type Node interface { Children() []Node }, declared twice
    let mut arena = TypeArena::new();
    let build = |arena: &mut TypeArena, name: &str| {
        let named = arena.declare_named(name, None);
        let children = arena.slice(named);
        let sig = arena.signature(vec![], vec![children]);
        let iface = arena.interface(vec![Method::new("Children", sig)]);
        arena.set_underlying(named, iface).unwrap();
        (named, iface)
    };
    let (node_a, iface_a) = build(&mut arena, "NodeA");
    let (node_b, iface_b) = build(&mut arena, "NodeB");

    // declared types differ, so their method sets differ too
    assert!(!identical(&arena, node_a, node_b));
    assert!(!identical(&arena, iface_a, iface_b));
    assert!(identical(&arena, iface_a, iface_a));
}

#[test]
fn test_unification_through_cyclic_interfaces() {
    let mut arena = TypeArena::new();
    let t = arena.type_param("T", Restriction::empty());
    let generic = interface_ring(&mut arena, 2, t);
    let concrete = interface_ring(&mut arena, 2, TypeRef::basic(BasicKind::Float64));

    let mut subst = Substitution::new();
    assert!(unify(&arena, &mut subst, concrete, generic));
    assert_eq!(subst.lookup(&arena, t), Some(TypeRef::basic(BasicKind::Float64)));
}
