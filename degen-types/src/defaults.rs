//! Default types of untyped constants

use crate::arena::TypeArena;
use crate::types::{BasicKind, Type, TypeRef};

/// The typed type an untyped constant takes when nothing else decides it
///
/// Untyped nil has no default and maps to itself. Every other type is
/// returned unchanged; only the node itself is inspected, not its
/// underlying type.
pub fn default_type(arena: &TypeArena, ty: TypeRef) -> TypeRef {
    let Type::Basic(basic) = arena.get(ty) else {
        return ty;
    };
    match basic.kind {
        BasicKind::UntypedBool => TypeRef::basic(BasicKind::Bool),
        BasicKind::UntypedInt => TypeRef::basic(BasicKind::Int),
        BasicKind::UntypedRune => TypeRef::RUNE,
        BasicKind::UntypedFloat => TypeRef::basic(BasicKind::Float64),
        BasicKind::UntypedComplex => TypeRef::basic(BasicKind::Complex128),
        BasicKind::UntypedString => TypeRef::basic(BasicKind::String),
        _ => ty,
    }
}
