//! Degen type engine
//!
//! Type identity and constraint satisfaction for the degen generics toolchain.
//!
//! ## Architecture
//!
//! The type checker and the monomorphization pass build type graphs in a
//! [`TypeArena`] and ask this crate questions about them. The graph is never
//! modified by those questions:
//!
//! - **Type Graph**: a closed set of variants addressed by [`TypeRef`] handles,
//!   with primitive types seeded from a shared universe table
//! - **Predicates**: classification of basic kinds and type parameter restrictions,
//!   plus comparability and nullability
//! - **Identity**: structural comparison with optional unification of type
//!   parameters and cycle-safe interface comparison
//! - **Defaults**: the typed representation of untyped constants
//!
//! ## Unification
//!
//! A generic-call resolver owns one [`Substitution`] per candidate instantiation
//! and passes it to [`unify`] (or uses [`infer_type_arguments`]). Substitutions
//! are never shared between calls.

pub mod arena;
pub mod defaults;
pub mod display;
pub mod error;
pub mod identity;
pub mod predicates;
pub mod types;
pub mod unification;
pub mod universe;

// Re-export public API
pub use arena::{Declaration, TypeArena};
pub use defaults::default_type;
pub use display::TypeDisplay;
pub use error::{GraphError, InferenceError};
pub use identity::{identical, identical_ignore_tags, identical_with, unify};
pub use predicates::{
    comparable, has_nil, is_boolean, is_complex, is_const_type, is_float, is_integer,
    is_interface, is_named, is_numeric, is_ordered, is_string, is_typed, is_unsigned, is_untyped,
    satisfies,
};
pub use types::{
    BasicInfo, BasicKind, ChanDir, DeclId, Field, Method, PackageId, Restriction, Signature, Type,
    TypeParam, TypeRef,
};
pub use unification::{infer_type_arguments, Substitution};

#[cfg(test)]
mod tests;
