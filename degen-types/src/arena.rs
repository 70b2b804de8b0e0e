//! Type arena
//!
//! Owns every node of a type graph. Producers (the parser and type
//! construction passes) build the graph through the constructor methods; the
//! identity engine and the predicates only ever read it through
//! [`TypeArena::get`] and [`TypeArena::underlying`].

use crate::error::GraphError;
use crate::types::{
    is_exported, BasicKind, ChanDir, DeclId, Field, Method, PackageId, Restriction, Signature,
    Type, TypeParam, TypeRef,
};
use crate::universe::UNIVERSE_BASICS;
use indexmap::IndexSet;
use std::borrow::Cow;
use std::collections::HashSet;

/// A declaration site of a named type or a type parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub pkg: Option<PackageId>,
    /// Underlying type of a declared type; `None` until set, and always
    /// `None` for type parameters
    pub underlying: Option<TypeRef>,
    /// Type parameters of a generic declared type
    pub type_params: Vec<TypeRef>,
}

/// Storage for a type graph
#[derive(Debug, Clone)]
pub struct TypeArena {
    types: Vec<Type>,
    decls: Vec<Declaration>,
    packages: IndexSet<String>,
    incomplete: HashSet<TypeRef>,
    /// Type parameters already owned by a generic declaration
    owned_params: HashSet<DeclId>,
}

impl Default for TypeArena {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeArena {
    /// Create an arena holding only the universe types
    pub fn new() -> Self {
        let mut types: Vec<Type> = UNIVERSE_BASICS.iter().cloned().map(Type::Basic).collect();
        types.push(Type::Absent);
        debug_assert_eq!(types.len(), TypeRef::ABSENT.index() + 1);

        Self {
            types,
            decls: Vec::new(),
            packages: IndexSet::new(),
            incomplete: HashSet::new(),
            owned_params: HashSet::new(),
        }
    }

    /// Number of nodes, universe included
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Look up a node. Handles from another arena are a caller bug.
    pub fn get(&self, ty: TypeRef) -> &Type {
        &self.types[ty.index()]
    }

    /// Look up a node, reporting foreign handles
    pub fn try_get(&self, ty: TypeRef) -> Result<&Type, GraphError> {
        self.types
            .get(ty.index())
            .ok_or(GraphError::UnknownHandle { handle: ty })
    }

    pub fn decl(&self, id: DeclId) -> &Declaration {
        &self.decls[id.0 as usize]
    }

    /// Unwrap declared types and instances down to their structural type
    ///
    /// A declared type whose underlying type was never set resolves to the
    /// invalid basic type.
    pub fn underlying(&self, ty: TypeRef) -> TypeRef {
        let mut current = ty;
        // Each node is visited at most once on an acyclic chain.
        for _ in 0..self.types.len() {
            match self.get(current) {
                Type::Named(decl) => match self.decl(*decl).underlying {
                    Some(underlying) => current = underlying,
                    None => return TypeRef::basic(BasicKind::Invalid),
                },
                Type::Instance { base, .. } => current = *base,
                _ => return current,
            }
        }
        TypeRef::basic(BasicKind::Invalid)
    }

    /// The structural node behind `ty`
    pub fn underlying_type(&self, ty: TypeRef) -> &Type {
        self.get(self.underlying(ty))
    }

    /// Intern a package path
    pub fn package(&mut self, path: &str) -> PackageId {
        let (index, _) = self.packages.insert_full(path.to_string());
        PackageId(index as u32)
    }

    pub fn package_path(&self, pkg: PackageId) -> &str {
        self.packages
            .get_index(pkg.0 as usize)
            .map(String::as_str)
            .unwrap_or("_")
    }

    /// Package qualifier of an unexported identifier; `_` when there is none
    fn qualifier(&self, pkg: Option<PackageId>) -> &str {
        match pkg.map(|pkg| self.package_path(pkg)) {
            Some(path) if !path.is_empty() => path,
            _ => "_",
        }
    }

    /// Unique name of a field or method: the bare name when exported,
    /// qualified by package path otherwise
    pub fn object_id<'a>(&self, name: &'a str, pkg: Option<PackageId>) -> Cow<'a, str> {
        if is_exported(name) {
            return Cow::Borrowed(name);
        }
        Cow::Owned(format!("{}.{name}", self.qualifier(pkg)))
    }

    /// Reports whether two (name, package) pairs denote the same identifier,
    /// without building their unique names
    pub fn same_id(
        &self,
        name: &str,
        pkg: Option<PackageId>,
        other_name: &str,
        other_pkg: Option<PackageId>,
    ) -> bool {
        if name != other_name {
            return false;
        }
        is_exported(name) || pkg == other_pkg || self.qualifier(pkg) == self.qualifier(other_pkg)
    }

    /// Reports whether a method list is ordered by unique name
    pub fn methods_sorted(&self, methods: &[Method]) -> bool {
        methods.windows(2).all(|pair| {
            self.object_id(&pair[0].name, pair[0].pkg)
                <= self.object_id(&pair[1].name, pair[1].pkg)
        })
    }

    fn alloc(&mut self, ty: Type) -> TypeRef {
        let handle = TypeRef(self.types.len() as u32);
        self.types.push(ty);
        handle
    }

    fn alloc_decl(&mut self, decl: Declaration) -> DeclId {
        let id = DeclId(self.decls.len() as u32);
        self.decls.push(decl);
        id
    }

    /// Declare a named type; its underlying type is set later
    pub fn declare_named(&mut self, name: impl Into<String>, pkg: Option<PackageId>) -> TypeRef {
        let decl = self.alloc_decl(Declaration {
            name: name.into(),
            pkg,
            underlying: None,
            type_params: Vec::new(),
        });
        self.alloc(Type::Named(decl))
    }

    /// Declare a generic named type with the given type parameters
    ///
    /// Every parameter must be a type parameter node created by
    /// [`TypeArena::type_param`] that no other declaration owns yet.
    pub fn declare_generic(
        &mut self,
        name: impl Into<String>,
        pkg: Option<PackageId>,
        type_params: Vec<TypeRef>,
    ) -> Result<TypeRef, GraphError> {
        let name = name.into();
        let mut owned = Vec::with_capacity(type_params.len());
        for param in &type_params {
            let decl = match self.try_get(*param)? {
                Type::TypeParam(tp) => tp.decl,
                other => {
                    return Err(GraphError::NotTypeParam {
                        found: other.variant_name(),
                    })
                }
            };
            if self.owned_params.contains(&decl) || owned.contains(&decl) {
                return Err(GraphError::TypeParamAlreadyOwned {
                    param: self.decl(decl).name.clone(),
                    name,
                });
            }
            owned.push(decl);
        }
        self.owned_params.extend(owned);

        let decl = self.alloc_decl(Declaration {
            name,
            pkg,
            underlying: None,
            type_params,
        });
        Ok(self.alloc(Type::Named(decl)))
    }

    /// Another node referring to an existing declaration
    pub fn named_ref(&mut self, decl: DeclId) -> TypeRef {
        self.alloc(Type::Named(decl))
    }

    /// Declaration behind a named type node
    pub fn decl_of(&self, named: TypeRef) -> Result<DeclId, GraphError> {
        match self.try_get(named)? {
            Type::Named(decl) => Ok(*decl),
            other => Err(GraphError::NotDeclared {
                found: other.variant_name(),
            }),
        }
    }

    pub fn set_underlying(
        &mut self,
        named: TypeRef,
        underlying: TypeRef,
    ) -> Result<(), GraphError> {
        let decl = self.decl_of(named)?;
        self.try_get(underlying)?;
        let entry = &mut self.decls[decl.0 as usize];
        if entry.underlying.is_some() {
            return Err(GraphError::UnderlyingAlreadySet {
                name: entry.name.clone(),
                decl,
            });
        }
        entry.underlying = Some(underlying);
        Ok(())
    }

    /// Declare a type parameter
    pub fn type_param(&mut self, name: impl Into<String>, restriction: Restriction) -> TypeRef {
        let decl = self.alloc_decl(Declaration {
            name: name.into(),
            pkg: None,
            underlying: None,
            type_params: Vec::new(),
        });
        self.alloc(Type::TypeParam(TypeParam { decl, restriction }))
    }

    pub fn array(&mut self, elem: TypeRef, len: u64) -> TypeRef {
        self.alloc(Type::Array { elem, len })
    }

    pub fn slice(&mut self, elem: TypeRef) -> TypeRef {
        self.alloc(Type::Slice { elem })
    }

    pub fn pointer(&mut self, base: TypeRef) -> TypeRef {
        self.alloc(Type::Pointer { base })
    }

    pub fn tuple(&mut self, elems: Vec<TypeRef>) -> TypeRef {
        self.alloc(Type::Tuple { elems })
    }

    pub fn map(&mut self, key: TypeRef, elem: TypeRef) -> TypeRef {
        self.alloc(Type::Map { key, elem })
    }

    pub fn chan(&mut self, elem: TypeRef, dir: ChanDir) -> TypeRef {
        self.alloc(Type::Chan { elem, dir })
    }

    pub fn struct_type(&mut self, fields: Vec<Field>) -> TypeRef {
        self.alloc(Type::Struct { fields })
    }

    /// A signature; empty parameter or result lists become absent tuples
    pub fn signature(&mut self, params: Vec<TypeRef>, results: Vec<TypeRef>) -> TypeRef {
        self.build_signature(params, results, false)
    }

    /// A signature whose last parameter is variadic
    pub fn variadic_signature(&mut self, params: Vec<TypeRef>, results: Vec<TypeRef>) -> TypeRef {
        self.build_signature(params, results, true)
    }

    fn build_signature(
        &mut self,
        params: Vec<TypeRef>,
        results: Vec<TypeRef>,
        variadic: bool,
    ) -> TypeRef {
        let params = (!params.is_empty()).then(|| self.tuple(params));
        let results = (!results.is_empty()).then(|| self.tuple(results));
        self.signature_with(Signature {
            recv: None,
            params,
            results,
            variadic,
        })
    }

    pub fn signature_with(&mut self, sig: Signature) -> TypeRef {
        self.alloc(Type::Signature(sig))
    }

    /// An interface with a complete method set
    pub fn interface(&mut self, methods: Vec<Method>) -> TypeRef {
        let methods = self.sort_methods(methods);
        self.alloc(Type::Interface { methods })
    }

    /// An interface whose methods are supplied later, so that method
    /// signatures can refer back to it
    pub fn new_interface(&mut self) -> TypeRef {
        let iface = self.alloc(Type::Interface {
            methods: Vec::new(),
        });
        self.incomplete.insert(iface);
        iface
    }

    pub fn complete_interface(
        &mut self,
        iface: TypeRef,
        methods: Vec<Method>,
    ) -> Result<(), GraphError> {
        if !self.incomplete.remove(&iface) {
            let found = self.try_get(iface)?.variant_name().to_string();
            return Err(GraphError::NotIncompleteInterface { found });
        }
        let sorted = self.sort_methods(methods);
        if let Type::Interface { methods } = &mut self.types[iface.index()] {
            *methods = sorted;
        }
        Ok(())
    }

    fn sort_methods(&self, mut methods: Vec<Method>) -> Vec<Method> {
        methods.sort_by(|a, b| {
            let a = self.object_id(&a.name, a.pkg);
            a.cmp(&self.object_id(&b.name, b.pkg))
        });
        methods
    }

    /// Instantiate a generic declared type
    pub fn instance(&mut self, base: TypeRef, args: Vec<TypeRef>) -> Result<TypeRef, GraphError> {
        let decl = self.decl(self.decl_of(base)?);
        if decl.type_params.is_empty() {
            return Err(GraphError::NotGeneric {
                name: decl.name.clone(),
            });
        }
        if decl.type_params.len() != args.len() {
            return Err(GraphError::ArityMismatch {
                name: decl.name.clone(),
                expected: decl.type_params.len(),
                found: args.len(),
            });
        }
        for arg in &args {
            self.try_get(*arg)?;
        }
        Ok(self.alloc(Type::Instance { base, args }))
    }
}
