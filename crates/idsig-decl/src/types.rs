//! Resolved type references as they appear in callable shapes.
//!
//! Only the structure needed to tell overloads apart is kept: classifier ids,
//! type arguments, nullability and type parameter positions.

use std::fmt;

use idsig_identity::{ClassId, Name};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// A classifier type, possibly generic (`kotlin.collections.List<T>`).
    Class {
        id: ClassId,
        arguments: Vec<TypeRef>,
        nullable: bool,
    },
    /// Reference to a type parameter by its position in the declaring callable.
    Parameter { index: u32, nullable: bool },
    /// Star projection in argument position.
    Star,
}

impl TypeRef {
    pub fn class(id: ClassId) -> Self {
        Self::Class {
            id,
            arguments: Vec::new(),
            nullable: false,
        }
    }

    pub fn generic(id: ClassId, arguments: Vec<TypeRef>) -> Self {
        Self::Class {
            id,
            arguments,
            nullable: false,
        }
    }

    pub fn parameter(index: u32) -> Self {
        Self::Parameter {
            index,
            nullable: false,
        }
    }

    /// The same type marked nullable. Star projections are unchanged.
    pub fn nullable(self) -> Self {
        match self {
            Self::Class { id, arguments, .. } => Self::Class {
                id,
                arguments,
                nullable: true,
            },
            Self::Parameter { index, .. } => Self::Parameter {
                index,
                nullable: true,
            },
            Self::Star => Self::Star,
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nullable = match self {
            TypeRef::Class {
                id,
                arguments,
                nullable,
            } => {
                write!(f, "{}", id.relative_class_name())?;
                if !arguments.is_empty() {
                    f.write_str("<")?;
                    for (idx, arg) in arguments.iter().enumerate() {
                        if idx > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{arg}")?;
                    }
                    f.write_str(">")?;
                }
                *nullable
            }
            TypeRef::Parameter { index, nullable } => {
                write!(f, "T{index}")?;
                *nullable
            }
            TypeRef::Star => return f.write_str("*"),
        };
        if nullable {
            f.write_str("?")?;
        }
        Ok(())
    }
}

/// A declared type parameter. References to it use its position, not its name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeParameter {
    pub name: Name,
    pub bounds: Vec<TypeRef>,
}

impl TypeParameter {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            bounds: Vec::new(),
        }
    }

    pub fn with_bound(mut self, bound: TypeRef) -> Self {
        self.bounds.push(bound);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValueParameter {
    pub name: Name,
    pub ty: TypeRef,
    pub is_vararg: bool,
}

impl ValueParameter {
    pub fn new(name: Name, ty: TypeRef) -> Self {
        Self {
            name,
            ty,
            is_vararg: false,
        }
    }

    pub fn vararg(name: Name, ty: TypeRef) -> Self {
        Self {
            name,
            ty,
            is_vararg: true,
        }
    }
}

impl fmt::Display for ValueParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_vararg {
            f.write_str("vararg ")?;
        }
        write!(f, "{}: {}", self.name, self.ty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use idsig_identity::FqName;

    fn class(name: &str) -> ClassId {
        ClassId::top_level(FqName::parse("kotlin"), Name::identifier(name))
    }

    #[test]
    fn displays_generic_nullable_type() {
        let list = TypeRef::generic(class("List"), vec![TypeRef::parameter(0)]).nullable();
        assert_eq!(list.to_string(), "List<T0>?");
    }

    #[test]
    fn star_ignores_nullability() {
        assert_eq!(TypeRef::Star.nullable(), TypeRef::Star);
        assert_eq!(TypeRef::Star.to_string(), "*");
    }

    #[test]
    fn displays_vararg_parameter() {
        let param = ValueParameter::vararg(Name::identifier("xs"), TypeRef::class(class("Int")));
        assert_eq!(param.to_string(), "vararg xs: Int");
    }
}
