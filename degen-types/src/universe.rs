//! Predeclared primitive types
//!
//! Every [`TypeArena`](crate::arena::TypeArena) is seeded from this table, so
//! the handles in [`TypeRef`](crate::types::TypeRef) for basic kinds, `byte`,
//! `rune` and the absent type are valid in all arenas.

use crate::types::{Basic, BasicInfo, BasicKind};
use lazy_static::lazy_static;

lazy_static! {
    /// Universe basic types indexed by kind, followed by the `byte` and
    /// `rune` aliases
    pub static ref UNIVERSE_BASICS: Vec<Basic> = build_universe();
}

fn basic(kind: BasicKind, info: BasicInfo, name: &'static str) -> Basic {
    Basic { kind, info, name }
}

fn build_universe() -> Vec<Basic> {
    use BasicKind::*;

    let integer = BasicInfo::INTEGER;
    let unsigned = BasicInfo::INTEGER | BasicInfo::UNSIGNED;
    let untyped = BasicInfo::UNTYPED;

    let table = vec![
        basic(Invalid, BasicInfo::empty(), "invalid type"),
        basic(Bool, BasicInfo::BOOLEAN, "bool"),
        basic(Int, integer, "int"),
        basic(Int8, integer, "int8"),
        basic(Int16, integer, "int16"),
        basic(Int32, integer, "int32"),
        basic(Int64, integer, "int64"),
        basic(Uint, unsigned, "uint"),
        basic(Uint8, unsigned, "uint8"),
        basic(Uint16, unsigned, "uint16"),
        basic(Uint32, unsigned, "uint32"),
        basic(Uint64, unsigned, "uint64"),
        basic(Uintptr, unsigned, "uintptr"),
        basic(Float32, BasicInfo::FLOAT, "float32"),
        basic(Float64, BasicInfo::FLOAT, "float64"),
        basic(Complex64, BasicInfo::COMPLEX, "complex64"),
        basic(Complex128, BasicInfo::COMPLEX, "complex128"),
        basic(String, BasicInfo::STRING, "string"),
        basic(UnsafePointer, BasicInfo::empty(), "Pointer"),
        basic(UntypedBool, BasicInfo::BOOLEAN | untyped, "untyped bool"),
        basic(UntypedInt, integer | untyped, "untyped int"),
        basic(UntypedRune, integer | untyped, "untyped rune"),
        basic(UntypedFloat, BasicInfo::FLOAT | untyped, "untyped float"),
        basic(UntypedComplex, BasicInfo::COMPLEX | untyped, "untyped complex"),
        basic(UntypedString, BasicInfo::STRING | untyped, "untyped string"),
        basic(UntypedNil, untyped, "untyped nil"),
        // aliases
        basic(Uint8, unsigned, "byte"),
        basic(Int32, integer, "rune"),
    ];

    debug_assert!(table
        .iter()
        .take(BasicKind::COUNT)
        .zip(BasicKind::ALL)
        .all(|(basic, kind)| basic.kind == kind));

    table
}
