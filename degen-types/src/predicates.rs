//! Type predicates
//!
//! Classification queries over the underlying type of a node. All of them are
//! total; the invalid basic type left behind by an earlier error is treated
//! so that it does not trigger follow-up diagnostics.

use crate::arena::TypeArena;
use crate::types::{BasicInfo, BasicKind, Restriction, Type, TypeRef};

fn basic_info(arena: &TypeArena, ty: TypeRef) -> Option<BasicInfo> {
    arena.underlying_type(ty).as_basic().map(|basic| basic.info)
}

fn has_info(arena: &TypeArena, ty: TypeRef, info: BasicInfo) -> bool {
    basic_info(arena, ty).is_some_and(|bits| bits.intersects(info))
}

fn restriction(arena: &TypeArena, ty: TypeRef) -> Option<Restriction> {
    arena
        .underlying_type(ty)
        .as_type_param()
        .map(|param| param.restriction)
}

/// Basic, declared and instantiated types have names
pub fn is_named(arena: &TypeArena, ty: TypeRef) -> bool {
    matches!(
        arena.get(ty),
        Type::Basic(_) | Type::Named(_) | Type::Instance { .. }
    )
}

pub fn is_boolean(arena: &TypeArena, ty: TypeRef) -> bool {
    has_info(arena, ty, BasicInfo::BOOLEAN)
}

pub fn is_integer(arena: &TypeArena, ty: TypeRef) -> bool {
    has_info(arena, ty, BasicInfo::INTEGER)
}

pub fn is_unsigned(arena: &TypeArena, ty: TypeRef) -> bool {
    has_info(arena, ty, BasicInfo::UNSIGNED)
}

pub fn is_float(arena: &TypeArena, ty: TypeRef) -> bool {
    has_info(arena, ty, BasicInfo::FLOAT)
}

pub fn is_complex(arena: &TypeArena, ty: TypeRef) -> bool {
    has_info(arena, ty, BasicInfo::COMPLEX)
}

pub fn is_string(arena: &TypeArena, ty: TypeRef) -> bool {
    has_info(arena, ty, BasicInfo::STRING)
}

/// Numeric basic types, and type parameters that permit arithmetic
pub fn is_numeric(arena: &TypeArena, ty: TypeRef) -> bool {
    if restriction(arena, ty).is_some_and(|r| r.contains(Restriction::NUM)) {
        return true;
    }
    has_info(arena, ty, BasicInfo::NUMERIC)
}

/// Ordered basic types, and type parameters that permit ordering
pub fn is_ordered(arena: &TypeArena, ty: TypeRef) -> bool {
    if restriction(arena, ty).is_some_and(|r| r.contains(Restriction::ORD)) {
        return true;
    }
    has_info(arena, ty, BasicInfo::ORDERED)
}

pub fn is_typed(arena: &TypeArena, ty: TypeRef) -> bool {
    basic_info(arena, ty).map_or(true, |info| !info.contains(BasicInfo::UNTYPED))
}

pub fn is_untyped(arena: &TypeArena, ty: TypeRef) -> bool {
    has_info(arena, ty, BasicInfo::UNTYPED)
}

/// Types a constant may have
pub fn is_const_type(arena: &TypeArena, ty: TypeRef) -> bool {
    has_info(arena, ty, BasicInfo::CONST_TYPE)
}

pub fn is_interface(arena: &TypeArena, ty: TypeRef) -> bool {
    matches!(arena.underlying_type(ty), Type::Interface { .. })
}

/// Reports whether values of type `ty` can be compared with `==`
pub fn comparable(arena: &TypeArena, ty: TypeRef) -> bool {
    match arena.underlying_type(ty) {
        // the invalid type counts as comparable to avoid follow-up errors
        Type::Basic(basic) => basic.kind != BasicKind::UntypedNil,
        Type::Pointer { .. } | Type::Interface { .. } | Type::Chan { .. } => true,
        Type::Struct { fields } => fields.iter().all(|field| comparable(arena, field.ty)),
        Type::Array { elem, .. } => comparable(arena, *elem),
        Type::TypeParam(param) => param.restriction.contains(Restriction::EQ),
        Type::Slice { .. }
        | Type::Map { .. }
        | Type::Signature(_)
        | Type::Tuple { .. }
        | Type::Absent
        | Type::Named(_)
        | Type::Instance { .. } => false,
    }
}

/// Reports whether `nil` is a value of type `ty`
pub fn has_nil(arena: &TypeArena, ty: TypeRef) -> bool {
    match arena.underlying_type(ty) {
        Type::Basic(basic) => basic.kind == BasicKind::UnsafePointer,
        Type::Slice { .. }
        | Type::Pointer { .. }
        | Type::Signature(_)
        | Type::Interface { .. }
        | Type::Map { .. }
        | Type::Chan { .. } => true,
        _ => false,
    }
}

/// Reports whether `ty` may be bound to a type parameter with the given
/// restriction
pub fn satisfies(arena: &TypeArena, ty: TypeRef, restriction: Restriction) -> bool {
    if restriction.contains(Restriction::EQ) && !comparable(arena, ty) {
        return false;
    }
    if restriction.contains(Restriction::ORD) && !is_ordered(arena, ty) {
        return false;
    }
    if restriction.contains(Restriction::NUM) && !is_numeric(arena, ty) {
        return false;
    }
    true
}
