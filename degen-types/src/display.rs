//! Type strings for diagnostics and trace output

use crate::arena::TypeArena;
use crate::types::{ChanDir, Signature, Type, TypeRef};
use std::fmt;

/// Displays a type the way it is written in source
pub struct TypeDisplay<'a> {
    arena: &'a TypeArena,
    ty: TypeRef,
}

impl TypeArena {
    pub fn display(&self, ty: TypeRef) -> TypeDisplay<'_> {
        TypeDisplay { arena: self, ty }
    }
}

impl fmt::Display for TypeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        TypeWriter {
            arena: self.arena,
            f,
            ifaces: Vec::new(),
        }
        .write_type(self.ty)
    }
}

fn tuple_elems(arena: &TypeArena, tuple: Option<TypeRef>) -> &[TypeRef] {
    match tuple.map(|t| arena.get(t)) {
        Some(Type::Tuple { elems }) => elems,
        _ => &[],
    }
}

struct TypeWriter<'a, 'f, 'w> {
    arena: &'a TypeArena,
    f: &'f mut fmt::Formatter<'w>,
    /// Interfaces being written, to cut anonymous cycles
    ifaces: Vec<TypeRef>,
}

impl TypeWriter<'_, '_, '_> {
    fn write_list(&mut self, types: &[TypeRef]) -> fmt::Result {
        for (i, ty) in types.iter().enumerate() {
            if i > 0 {
                write!(self.f, ", ")?;
            }
            self.write_type(*ty)?;
        }
        Ok(())
    }

    fn write_type(&mut self, ty: TypeRef) -> fmt::Result {
        let arena = self.arena;
        match arena.get(ty) {
            Type::Basic(basic) => write!(self.f, "{}", basic.name),
            Type::Array { elem, len } => {
                write!(self.f, "[{len}]")?;
                self.write_type(*elem)
            }
            Type::Slice { elem } => {
                write!(self.f, "[]")?;
                self.write_type(*elem)
            }
            Type::Struct { fields } => {
                write!(self.f, "struct{{")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(self.f, "; ")?;
                    }
                    if !field.anonymous {
                        write!(self.f, "{} ", field.name)?;
                    }
                    self.write_type(field.ty)?;
                    if !field.tag.is_empty() {
                        write!(self.f, " {:?}", field.tag)?;
                    }
                }
                write!(self.f, "}}")
            }
            Type::Pointer { base } => {
                write!(self.f, "*")?;
                self.write_type(*base)
            }
            Type::Tuple { elems } => {
                write!(self.f, "(")?;
                self.write_list(elems)?;
                write!(self.f, ")")
            }
            Type::Signature(sig) => {
                write!(self.f, "func")?;
                self.write_signature(sig)
            }
            Type::Interface { methods } => {
                if self.ifaces.contains(&ty) {
                    return write!(self.f, "interface{{...}}");
                }
                self.ifaces.push(ty);
                write!(self.f, "interface{{")?;
                for (i, method) in methods.iter().enumerate() {
                    if i > 0 {
                        write!(self.f, "; ")?;
                    }
                    write!(self.f, "{}", method.name)?;
                    match arena.get(method.sig) {
                        Type::Signature(sig) => self.write_signature(sig)?,
                        _ => {
                            write!(self.f, " ")?;
                            self.write_type(method.sig)?;
                        }
                    }
                }
                self.ifaces.pop();
                write!(self.f, "}}")
            }
            Type::Map { key, elem } => {
                write!(self.f, "map[")?;
                self.write_type(*key)?;
                write!(self.f, "]")?;
                self.write_type(*elem)
            }
            Type::Chan { elem, dir } => {
                let prefix = match dir {
                    ChanDir::SendRecv => "chan ",
                    ChanDir::SendOnly => "chan<- ",
                    ChanDir::RecvOnly => "<-chan ",
                };
                write!(self.f, "{prefix}")?;
                // chan (<-chan T) would otherwise read as chan<- chan T
                let parens = *dir == ChanDir::SendRecv
                    && matches!(
                        arena.get(*elem),
                        Type::Chan {
                            dir: ChanDir::RecvOnly,
                            ..
                        }
                    );
                if parens {
                    write!(self.f, "(")?;
                }
                self.write_type(*elem)?;
                if parens {
                    write!(self.f, ")")?;
                }
                Ok(())
            }
            Type::Named(decl) => {
                let decl = arena.decl(*decl);
                if let Some(pkg) = decl.pkg {
                    write!(self.f, "{}.", arena.package_path(pkg))?;
                }
                write!(self.f, "{}", decl.name)
            }
            Type::Instance { base, args } => {
                self.write_type(*base)?;
                write!(self.f, "[")?;
                self.write_list(args)?;
                write!(self.f, "]")
            }
            Type::TypeParam(param) => write!(self.f, "{}", arena.decl(param.decl).name),
            Type::Absent => write!(self.f, "<nil>"),
        }
    }

    fn write_signature(&mut self, sig: &Signature) -> fmt::Result {
        let arena = self.arena;
        let params = tuple_elems(arena, sig.params);
        write!(self.f, "(")?;
        for (i, param) in params.iter().enumerate() {
            if i > 0 {
                write!(self.f, ", ")?;
            }
            if sig.variadic && i + 1 == params.len() {
                write!(self.f, "...")?;
                match arena.get(*param) {
                    Type::Slice { elem } => self.write_type(*elem)?,
                    _ => self.write_type(*param)?,
                }
            } else {
                self.write_type(*param)?;
            }
        }
        write!(self.f, ")")?;

        match tuple_elems(arena, sig.results) {
            [] => Ok(()),
            [single] => {
                write!(self.f, " ")?;
                self.write_type(*single)
            }
            results => {
                write!(self.f, " (")?;
                self.write_list(results)?;
                write!(self.f, ")")
            }
        }
    }
}
