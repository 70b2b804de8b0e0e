//! Type parameter unification for generic calls
//!
//! A [`Substitution`] is owned by the caller for exactly one instantiation
//! attempt. [`infer_type_arguments`] runs the usual resolver loop: every call
//! argument is unified against the corresponding parameter type of the
//! generic signature, and the first failure rejects the whole attempt.

use crate::arena::TypeArena;
use crate::error::InferenceError;
use crate::identity::unify;
use crate::types::{DeclId, Type, TypeRef};
use indexmap::IndexMap;

/// Bindings of type parameters, keyed by their declaration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitution {
    bindings: IndexMap<DeclId, TypeRef>,
}

impl Substitution {
    pub fn new() -> Self {
        Self::default()
    }

    /// The type bound to a type parameter declaration
    pub fn get(&self, param: DeclId) -> Option<TypeRef> {
        self.bindings.get(&param).copied()
    }

    /// The type bound to a type parameter node
    pub fn lookup(&self, arena: &TypeArena, param: TypeRef) -> Option<TypeRef> {
        match arena.get(param) {
            Type::TypeParam(param) => self.get(param.decl),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Bindings in the order they were made
    pub fn iter(&self) -> impl Iterator<Item = (DeclId, TypeRef)> + '_ {
        self.bindings.iter().map(|(decl, ty)| (*decl, *ty))
    }

    /// A parameter is bound at most once per attempt
    pub(crate) fn bind(&mut self, param: DeclId, ty: TypeRef) {
        let previous = self.bindings.insert(param, ty);
        debug_assert!(previous.is_none(), "type parameter bound twice");
    }

    /// Type parameters from `params` that are still unbound
    pub fn missing(&self, arena: &TypeArena, params: &[TypeRef]) -> Vec<TypeRef> {
        params
            .iter()
            .copied()
            .filter(|param| self.lookup(arena, *param).is_none())
            .collect()
    }
}

/// Match call arguments against the parameter types of a generic signature
///
/// Returns the accumulated bindings, or the first argument that failed to
/// unify. A rejected attempt leaves nothing behind.
pub fn infer_type_arguments(
    arena: &TypeArena,
    params: &[TypeRef],
    args: &[TypeRef],
) -> Result<Substitution, InferenceError> {
    if params.len() != args.len() {
        return Err(InferenceError::ArgumentCountMismatch {
            expected: params.len(),
            found: args.len(),
        });
    }

    let mut subst = Substitution::new();
    for (index, (param, arg)) in params.iter().zip(args).enumerate() {
        if !unify(arena, &mut subst, *arg, *param) {
            return Err(InferenceError::Mismatch {
                index,
                parameter: arena.display(*param).to_string(),
                argument: arena.display(*arg).to_string(),
            });
        }
    }
    Ok(subst)
}
