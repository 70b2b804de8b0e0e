//! Error types for the degen type engine
//!
//! The identity algorithm itself is total and answers with `bool`. Errors only
//! arise when a producer builds an inconsistent graph, or when the generic-call
//! helper rejects an instantiation and the caller wants a diagnostic for it.

use crate::types::{DeclId, TypeRef};
use miette::Diagnostic;
use thiserror::Error;

/// Misuse of the [`TypeArena`](crate::arena::TypeArena) construction API
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Unknown type handle {handle}")]
    #[diagnostic(
        code(degen::types::graph::unknown_handle),
        help("Type handles are only valid in the arena that created them")
    )]
    UnknownHandle { handle: TypeRef },

    #[error("{name} is not a generic declared type")]
    #[diagnostic(
        code(degen::types::graph::not_generic),
        help("Only types declared with type parameters can be instantiated")
    )]
    NotGeneric { name: String },

    #[error("Arity mismatch: {name} expects {expected} type arguments, found {found}")]
    #[diagnostic(
        code(degen::types::graph::arity_mismatch),
        help("An instance must supply one argument per type parameter of its base")
    )]
    ArityMismatch {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("Expected a declared type, found {found}")]
    #[diagnostic(code(degen::types::graph::not_declared))]
    NotDeclared { found: &'static str },

    #[error("Expected a type parameter, found {found}")]
    #[diagnostic(
        code(degen::types::graph::not_type_param),
        help("Generic declarations take type parameter nodes created with `type_param`")
    )]
    NotTypeParam { found: &'static str },

    #[error("Type parameter {param} of {name} already belongs to a declaration")]
    #[diagnostic(
        code(degen::types::graph::type_param_already_owned),
        help("Declare a fresh type parameter for each generic declaration")
    )]
    TypeParamAlreadyOwned { param: String, name: String },

    #[error("Underlying type of {name} is already set")]
    #[diagnostic(
        code(degen::types::graph::underlying_already_set),
        help("The type graph is immutable once a declaration is complete")
    )]
    UnderlyingAlreadySet { name: String, decl: DeclId },

    #[error("Expected an incomplete interface, found {found}")]
    #[diagnostic(
        code(degen::types::graph::not_incomplete_interface),
        help("Only interfaces created with `new_interface` can be completed, and only once")
    )]
    NotIncompleteInterface { found: String },
}

/// Rejection of a candidate generic instantiation
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum InferenceError {
    #[error("Argument count mismatch: expected {expected} arguments, found {found}")]
    #[diagnostic(
        code(degen::types::inference::argument_count),
        help("Expand variadic arguments before matching them against parameters")
    )]
    ArgumentCountMismatch { expected: usize, found: usize },

    #[error("Cannot use {argument} as {parameter} in argument {index}")]
    #[diagnostic(
        code(degen::types::inference::mismatch),
        help("The argument type does not unify with the parameter type, or violates its constraint")
    )]
    Mismatch {
        index: usize,
        parameter: String,
        argument: String,
    },
}
