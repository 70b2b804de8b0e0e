//! Structural type identity
//!
//! Two types are identical when they have the same variant and identical
//! components, except for declared types and type parameters, which are
//! identical only when they come from the same declaration.
//!
//! During generic-call resolution the comparison also unifies: a type
//! parameter appearing on the right-hand side is bound to the left-hand type
//! the first time it is met, and every later occurrence must match that
//! binding.
//!
//! Interfaces are the only types whose structure can cycle without passing
//! through a declared type (a method returning an anonymous interface that
//! embeds the enclosing one). Pairs of interfaces under comparison are kept on
//! a stack; meeting the same pair again means the outer comparison has not
//! failed so far, and the pair is taken as identical.

use crate::arena::TypeArena;
use crate::defaults::default_type;
use crate::predicates::{is_untyped, satisfies};
use crate::types::{Type, TypeParam, TypeRef};
use crate::unification::Substitution;
use tracing::{debug, trace};

/// Reports whether `x` and `y` are identical types, struct tags included
pub fn identical(arena: &TypeArena, x: TypeRef, y: TypeRef) -> bool {
    identical_with(arena, None, x, y, true)
}

/// Reports whether `x` and `y` are identical types if struct tags are ignored
pub fn identical_ignore_tags(arena: &TypeArena, x: TypeRef, y: TypeRef) -> bool {
    identical_with(arena, None, x, y, false)
}

/// Identity with unification of the type parameters of `y`
///
/// Bindings accumulate in `subst`. A `false` result may leave bindings made
/// before the mismatch was found; callers discard the substitution of a
/// failed attempt.
pub fn unify(arena: &TypeArena, subst: &mut Substitution, x: TypeRef, y: TypeRef) -> bool {
    identical_with(arena, Some(subst), x, y, true)
}

/// The general form behind [`identical`], [`identical_ignore_tags`] and
/// [`unify`]
pub fn identical_with(
    arena: &TypeArena,
    subst: Option<&mut Substitution>,
    x: TypeRef,
    y: TypeRef,
    compare_tags: bool,
) -> bool {
    Comparer {
        arena,
        subst,
        compare_tags,
        ifaces: Vec::new(),
    }
    .identical(x, y)
}

/// State of one top-level comparison
struct Comparer<'a, 's> {
    arena: &'a TypeArena,
    subst: Option<&'s mut Substitution>,
    compare_tags: bool,
    /// Interface pairs currently being compared
    ifaces: Vec<(TypeRef, TypeRef)>,
}

impl Comparer<'_, '_> {
    fn identical(&mut self, x: TypeRef, mut y: TypeRef) -> bool {
        if x == y {
            return true;
        }

        let arena = self.arena;

        if let (Type::TypeParam(param), Some(subst)) =
            (arena.underlying_type(y), self.subst.as_deref_mut())
        {
            match subst.get(param.decl) {
                Some(bound) => {
                    trace!(
                        param = %arena.display(y),
                        bound = %arena.display(bound),
                        "substituting bound type parameter"
                    );
                    y = bound;
                }
                None => return bind(arena, subst, x, y, param),
            }
        }

        match (arena.get(x), arena.get(y)) {
            // Basic types are singletons except for the byte and rune
            // aliases, so the handle check above is not enough.
            (Type::Basic(a), Type::Basic(b)) => a.kind == b.kind,

            (Type::Array { elem: a, len: n }, Type::Array { elem: b, len: m }) => {
                n == m && self.identical(*a, *b)
            }

            (Type::Slice { elem: a }, Type::Slice { elem: b }) => self.identical(*a, *b),

            (Type::Struct { fields: a }, Type::Struct { fields: b }) => {
                a.len() == b.len()
                    && a.iter().zip(b).all(|(f, g)| {
                        f.anonymous == g.anonymous
                            && (!self.compare_tags || f.tag == g.tag)
                            && arena.same_id(&f.name, f.pkg, &g.name, g.pkg)
                            && self.identical(f.ty, g.ty)
                    })
            }

            (Type::Pointer { base: a }, Type::Pointer { base: b }) => self.identical(*a, *b),

            (Type::Tuple { elems: a }, Type::Tuple { elems: b }) => {
                a.len() == b.len() && a.iter().zip(b).all(|(v, w)| self.identical(*v, *w))
            }

            // Parameter and result names, and receivers, do not matter.
            (Type::Signature(a), Type::Signature(b)) => {
                a.variadic == b.variadic
                    && self.identical_tuples(a.params, b.params)
                    && self.identical_tuples(a.results, b.results)
            }

            (Type::Interface { methods: a }, Type::Interface { methods: b }) => {
                if a.len() != b.len() {
                    return false;
                }
                if self.ifaces.iter().any(|&(p, q)| (p == x && q == y) || (p == y && q == x)) {
                    debug!(
                        x = %arena.display(x),
                        y = %arena.display(y),
                        "interface pair already under comparison"
                    );
                    return true;
                }
                debug_assert!(arena.methods_sorted(a), "unsorted method set");
                debug_assert!(arena.methods_sorted(b), "unsorted method set");

                self.ifaces.push((x, y));
                let result = a.iter().zip(b).all(|(f, g)| {
                    arena.same_id(&f.name, f.pkg, &g.name, g.pkg) && self.identical(f.sig, g.sig)
                });
                self.ifaces.pop();
                result
            }

            (Type::Map { key: k, elem: v }, Type::Map { key: l, elem: w }) => {
                self.identical(*k, *l) && self.identical(*v, *w)
            }

            (Type::Chan { elem: a, dir: d }, Type::Chan { elem: b, dir: e }) => {
                d == e && self.identical(*a, *b)
            }

            (Type::Named(a), Type::Named(b)) => a == b,

            (Type::Instance { base: a, args: xs }, Type::Instance { base: b, args: ys }) => {
                if !self.identical(*a, *b) {
                    return false;
                }
                debug_assert_eq!(xs.len(), ys.len(), "instances of one base with different arity");
                xs.len() == ys.len() && xs.iter().zip(ys).all(|(v, w)| self.identical(*v, *w))
            }

            (Type::TypeParam(a), Type::TypeParam(b)) => a.decl == b.decl,

            _ => false,
        }
    }

    /// Signature tuples, where an absent tuple equals an empty one
    fn identical_tuples(&mut self, x: Option<TypeRef>, y: Option<TypeRef>) -> bool {
        match (x, y) {
            (None, None) => true,
            (Some(x), Some(y)) => self.identical(x, y),
            (Some(t), None) | (None, Some(t)) => {
                matches!(self.arena.get(t), Type::Tuple { elems } if elems.is_empty())
            }
        }
    }
}

/// Bind an unbound type parameter to `x`, defaulting untyped constants first
fn bind(
    arena: &TypeArena,
    subst: &mut Substitution,
    x: TypeRef,
    param_ty: TypeRef,
    param: &TypeParam,
) -> bool {
    let x = if is_untyped(arena, x) {
        default_type(arena, x)
    } else {
        x
    };

    if !satisfies(arena, x, param.restriction) {
        debug!(
            param = %arena.display(param_ty),
            candidate = %arena.display(x),
            restriction = ?param.restriction,
            "type does not satisfy parameter restriction"
        );
        return false;
    }

    trace!(
        param = %arena.display(param_ty),
        bound = %arena.display(x),
        "binding type parameter"
    );
    subst.bind(param.decl, x);
    true
}
