//! Type graph for the degen type engine
//!
//! The graph is a closed set of variants addressed through [`TypeRef`] handles
//! into a [`TypeArena`](crate::arena::TypeArena). Declared types and type
//! parameters carry a [`DeclId`] and are compared by declaration site; every
//! other variant is compared structurally.

use bitflags::bitflags;
use std::fmt;

/// Handle to a node in a [`TypeArena`](crate::arena::TypeArena)
///
/// Handle equality is node identity. Primitive types occupy fixed slots, so
/// their handles are the same in every arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeRef(pub(crate) u32);

impl TypeRef {
    /// `byte`, an alias node for `uint8`
    pub const BYTE: TypeRef = TypeRef(BasicKind::COUNT as u32);
    /// `rune`, an alias node for `int32`
    pub const RUNE: TypeRef = TypeRef(BasicKind::COUNT as u32 + 1);
    /// The canonical "no type" node
    pub const ABSENT: TypeRef = TypeRef(BasicKind::COUNT as u32 + 2);

    /// Handle of the universe node for a basic kind
    pub const fn basic(kind: BasicKind) -> Self {
        TypeRef(kind as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeRef({})", self.0)
    }
}

/// Declaration-site identity of a declared type or a type parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeclId(pub(crate) u32);

impl fmt::Display for DeclId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DeclId({})", self.0)
    }
}

/// Interned package path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageId(pub(crate) u32);

/// Primitive type kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum BasicKind {
    Invalid,

    // predeclared types
    Bool,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Uintptr,
    Float32,
    Float64,
    Complex64,
    Complex128,
    String,
    UnsafePointer,

    // types for untyped values
    UntypedBool,
    UntypedInt,
    UntypedRune,
    UntypedFloat,
    UntypedComplex,
    UntypedString,
    UntypedNil,
}

impl BasicKind {
    pub const COUNT: usize = BasicKind::UntypedNil as usize + 1;

    pub const ALL: [BasicKind; BasicKind::COUNT] = [
        BasicKind::Invalid,
        BasicKind::Bool,
        BasicKind::Int,
        BasicKind::Int8,
        BasicKind::Int16,
        BasicKind::Int32,
        BasicKind::Int64,
        BasicKind::Uint,
        BasicKind::Uint8,
        BasicKind::Uint16,
        BasicKind::Uint32,
        BasicKind::Uint64,
        BasicKind::Uintptr,
        BasicKind::Float32,
        BasicKind::Float64,
        BasicKind::Complex64,
        BasicKind::Complex128,
        BasicKind::String,
        BasicKind::UnsafePointer,
        BasicKind::UntypedBool,
        BasicKind::UntypedInt,
        BasicKind::UntypedRune,
        BasicKind::UntypedFloat,
        BasicKind::UntypedComplex,
        BasicKind::UntypedString,
        BasicKind::UntypedNil,
    ];
}

bitflags! {
    /// Properties of a basic type
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct BasicInfo: u8 {
        const BOOLEAN = 1 << 0;
        const INTEGER = 1 << 1;
        const UNSIGNED = 1 << 2;
        const FLOAT = 1 << 3;
        const COMPLEX = 1 << 4;
        const STRING = 1 << 5;
        const UNTYPED = 1 << 6;

        const ORDERED = Self::INTEGER.bits() | Self::FLOAT.bits() | Self::STRING.bits();
        const NUMERIC = Self::INTEGER.bits() | Self::FLOAT.bits() | Self::COMPLEX.bits();
        const CONST_TYPE = Self::BOOLEAN.bits() | Self::NUMERIC.bits() | Self::STRING.bits();
    }
}

bitflags! {
    /// Operations a type parameter's eventual binding must support
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Restriction: u8 {
        /// `==` and `!=`
        const EQ = 1 << 0;
        /// `<`, `<=`, `>`, `>=`
        const ORD = 1 << 1;
        /// arithmetic operators
        const NUM = 1 << 2;
    }
}

/// Channel direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChanDir {
    SendRecv,
    SendOnly,
    RecvOnly,
}

/// A primitive type. Aliases (`byte`, `rune`) share the kind of their target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Basic {
    pub kind: BasicKind,
    pub info: BasicInfo,
    pub name: &'static str,
}

/// A struct field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    /// Declaring package; decides identity of unexported names
    pub pkg: Option<PackageId>,
    pub ty: TypeRef,
    pub tag: String,
    pub anonymous: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            pkg: None,
            ty,
            tag: String::new(),
            anonymous: false,
        }
    }

    pub fn in_package(mut self, pkg: PackageId) -> Self {
        self.pkg = Some(pkg);
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// An embedded field; its name is the embedded type's name
    pub fn embedded(mut self) -> Self {
        self.anonymous = true;
        self
    }
}

/// An interface method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    pub name: String,
    pub pkg: Option<PackageId>,
    /// Always a `Signature` node
    pub sig: TypeRef,
}

impl Method {
    pub fn new(name: impl Into<String>, sig: TypeRef) -> Self {
        Self {
            name: name.into(),
            pkg: None,
            sig,
        }
    }

    pub fn in_package(mut self, pkg: PackageId) -> Self {
        self.pkg = Some(pkg);
        self
    }
}

/// Reports whether an identifier is visible outside its package
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

/// A function signature. The receiver never takes part in identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub recv: Option<TypeRef>,
    /// `None` is the absent tuple, equivalent to an empty one
    pub params: Option<TypeRef>,
    pub results: Option<TypeRef>,
    pub variadic: bool,
}

/// A generic type parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeParam {
    pub decl: DeclId,
    pub restriction: Restriction,
}

/// A node of the type graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    Basic(Basic),
    Array {
        elem: TypeRef,
        len: u64,
    },
    Slice {
        elem: TypeRef,
    },
    Struct {
        fields: Vec<Field>,
    },
    Pointer {
        base: TypeRef,
    },
    Tuple {
        elems: Vec<TypeRef>,
    },
    Signature(Signature),
    /// Fully resolved method set, sorted by unique method name
    Interface {
        methods: Vec<Method>,
    },
    Map {
        key: TypeRef,
        elem: TypeRef,
    },
    Chan {
        elem: TypeRef,
        dir: ChanDir,
    },
    /// A declared type, identified by its declaration
    Named(DeclId),
    /// A generic declared type applied to type arguments
    Instance {
        base: TypeRef,
        args: Vec<TypeRef>,
    },
    TypeParam(TypeParam),
    /// No type, e.g. an empty tuple slot
    Absent,
}

impl Type {
    /// Short variant name for diagnostics
    pub fn variant_name(&self) -> &'static str {
        match self {
            Type::Basic(_) => "basic",
            Type::Array { .. } => "array",
            Type::Slice { .. } => "slice",
            Type::Struct { .. } => "struct",
            Type::Pointer { .. } => "pointer",
            Type::Tuple { .. } => "tuple",
            Type::Signature(_) => "signature",
            Type::Interface { .. } => "interface",
            Type::Map { .. } => "map",
            Type::Chan { .. } => "chan",
            Type::Named(_) => "named",
            Type::Instance { .. } => "instance",
            Type::TypeParam(_) => "type parameter",
            Type::Absent => "absent",
        }
    }

    pub fn as_basic(&self) -> Option<&Basic> {
        match self {
            Type::Basic(basic) => Some(basic),
            _ => None,
        }
    }

    pub fn as_type_param(&self) -> Option<&TypeParam> {
        match self {
            Type::TypeParam(param) => Some(param),
            _ => None,
        }
    }
}
