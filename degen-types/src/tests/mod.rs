//! Tests for the degen type engine
//!
//! Each file builds small type graphs directly in a `TypeArena`; there is no
//! parser in this crate.

#![allow(clippy::assertions_on_constants)]

mod test_interface_cycles;

// Unification during generic-call resolution
mod test_type_unification;

// Predicates and defaults
mod test_defaults;
