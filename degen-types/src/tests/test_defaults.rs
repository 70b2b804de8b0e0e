//! Tests for default types of untyped constants

use crate::{default_type, is_typed, BasicKind, Restriction, TypeArena, TypeRef};

#[test]
fn test_untyped_defaults() {
    let arena = TypeArena::new();
    let cases = [
        (BasicKind::UntypedBool, TypeRef::basic(BasicKind::Bool)),
        (BasicKind::UntypedInt, TypeRef::basic(BasicKind::Int)),
        (BasicKind::UntypedRune, TypeRef::RUNE),
        (BasicKind::UntypedFloat, TypeRef::basic(BasicKind::Float64)),
        (BasicKind::UntypedComplex, TypeRef::basic(BasicKind::Complex128)),
        (BasicKind::UntypedString, TypeRef::basic(BasicKind::String)),
    ];

    for (untyped, expected) in cases {
        let actual = default_type(&arena, TypeRef::basic(untyped));
        assert_eq!(actual, expected, "default of {untyped:?}");
        assert!(is_typed(&arena, actual));
    }
}

#[test]
fn test_untyped_nil_has_no_default() {
    let arena = TypeArena::new();
    let nil = TypeRef::basic(BasicKind::UntypedNil);
    assert_eq!(default_type(&arena, nil), nil);
}

#[test]
fn test_typed_types_are_unchanged() {
    let mut arena = TypeArena::new();
    let slice = arena.slice(TypeRef::basic(BasicKind::UntypedInt));
    let named = arena.declare_named("Untyped", None);
    arena
        .set_underlying(named, TypeRef::basic(BasicKind::UntypedInt))
        .unwrap();
    let param = arena.type_param("T", Restriction::NUM);

    let samples = [
        TypeRef::basic(BasicKind::Int),
        TypeRef::basic(BasicKind::Invalid),
        TypeRef::BYTE,
        TypeRef::ABSENT,
        slice,
        named,
        param,
    ];
    for ty in samples {
        assert_eq!(default_type(&arena, ty), ty, "{}", arena.display(ty));
    }
}

#[test]
fn test_default_is_idempotent_for_all_basics() {
    let arena = TypeArena::new();
    for kind in BasicKind::ALL {
        let once = default_type(&arena, TypeRef::basic(kind));
        assert_eq!(default_type(&arena, once), once, "{kind:?}");
    }
}
