// display.rs
//
// One-line rendering of declarations for diagnostics.

use std::fmt;

use crate::nodes::{Declaration, MemberStatus};
use crate::types::{TypeParameter, TypeRef, ValueParameter};

fn write_status(f: &mut fmt::Formatter<'_>, status: &MemberStatus) -> fmt::Result {
    write!(f, "{} ", status.visibility)?;
    if status.is_expect {
        f.write_str("expect ")?;
    }
    Ok(())
}

fn write_type_parameters(f: &mut fmt::Formatter<'_>, params: &[TypeParameter]) -> fmt::Result {
    if params.is_empty() {
        return Ok(());
    }
    f.write_str("<")?;
    for (idx, param) in params.iter().enumerate() {
        if idx > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", param.name)?;
        if let [bound] = param.bounds.as_slice() {
            write!(f, " : {bound}")?;
        }
    }
    f.write_str("> ")
}

fn write_receiver(f: &mut fmt::Formatter<'_>, receiver: Option<&TypeRef>) -> fmt::Result {
    match receiver {
        Some(receiver) => write!(f, "{receiver}."),
        None => Ok(()),
    }
}

fn write_value_parameters(f: &mut fmt::Formatter<'_>, params: &[ValueParameter]) -> fmt::Result {
    f.write_str("(")?;
    for (idx, param) in params.iter().enumerate() {
        if idx > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{param}")?;
    }
    f.write_str(")")
}

fn write_return_type(f: &mut fmt::Formatter<'_>, return_type: Option<&TypeRef>) -> fmt::Result {
    match return_type {
        Some(ty) => write!(f, ": {ty}"),
        None => Ok(()),
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Declaration::Class(class) => {
                write_status(f, &class.status)?;
                write!(f, "{} {}", class.kind.keyword(), class.class_id)
            }
            Declaration::TypeAlias(alias) => {
                write_status(f, &alias.status)?;
                write!(f, "typealias {} = {}", alias.class_id, alias.expanded)
            }
            Declaration::Constructor(ctor) => {
                write_status(f, &ctor.status)?;
                if ctor.is_primary {
                    f.write_str("primary ")?;
                }
                write!(f, "constructor {}", ctor.callable_id)?;
                write_value_parameters(f, &ctor.value_parameters)
            }
            Declaration::Function(function) => {
                write_status(f, &function.status)?;
                f.write_str("fun ")?;
                write_type_parameters(f, &function.type_parameters)?;
                write_receiver(f, function.receiver.as_ref())?;
                write!(f, "{}", function.callable_id)?;
                write_value_parameters(f, &function.value_parameters)?;
                write_return_type(f, function.return_type.as_ref())
            }
            Declaration::Property(property) => {
                write_status(f, &property.status)?;
                f.write_str(if property.is_var { "var " } else { "val " })?;
                write_type_parameters(f, &property.type_parameters)?;
                write_receiver(f, property.receiver.as_ref())?;
                write!(f, "{}", property.callable_id)?;
                write_return_type(f, property.return_type.as_ref())
            }
            Declaration::EnumEntry(entry) => {
                write_status(f, &entry.status)?;
                write!(f, "enum entry {}", entry.callable_id)
            }
            Declaration::OtherMember(member) => {
                write_status(f, &member.status)?;
                write!(f, "member {}", member.callable_id)?;
                write_return_type(f, member.return_type.as_ref())
            }
            Declaration::AnonymousObject(object) => {
                f.write_str("object")?;
                for (idx, supertype) in object.supertypes.iter().enumerate() {
                    f.write_str(if idx == 0 { " : " } else { ", " })?;
                    write!(f, "{supertype}")?;
                }
                Ok(())
            }
            Declaration::AnonymousFunction(function) => {
                f.write_str("fun ")?;
                write_receiver(f, function.receiver.as_ref())?;
                write_value_parameters(f, &function.value_parameters)?;
                write_return_type(f, function.return_type.as_ref())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::{AnonymousObject, Constructor, Property, RegularClass, SimpleFunction};
    use crate::visibility::{EffectiveVisibility, Visibility};
    use idsig_identity::{CallableId, ClassId, FqName, Name};

    fn builtin(name: &str) -> TypeRef {
        TypeRef::class(ClassId::top_level(
            FqName::parse("kotlin"),
            Name::identifier(name),
        ))
    }

    fn outer() -> ClassId {
        ClassId::top_level(FqName::parse("a.b"), Name::identifier("Outer"))
    }

    #[test]
    fn renders_expect_function() {
        let function = SimpleFunction::new(
            CallableId::member(outer(), Name::identifier("f")),
            MemberStatus::public().expect(),
        )
        .with_parameter(ValueParameter::new(Name::identifier("x"), builtin("Int")))
        .returning(builtin("Unit"));

        assert_eq!(
            Declaration::from(function).to_string(),
            "public expect fun a.b/Outer.f(x: Int): Unit"
        );
    }

    #[test]
    fn renders_generic_extension_function() {
        let function = SimpleFunction::new(
            CallableId::top_level(FqName::parse("a"), Name::identifier("first")),
            MemberStatus::new(Visibility::Internal),
        )
        .with_type_parameter(TypeParameter::new(Name::identifier("T")))
        .with_receiver(TypeRef::generic(
            ClassId::top_level(FqName::parse("kotlin"), Name::identifier("List")),
            vec![TypeRef::parameter(0)],
        ))
        .returning(TypeRef::parameter(0));

        assert_eq!(
            Declaration::from(function).to_string(),
            "internal fun <T> List<T0>.a/first(): T0"
        );
    }

    #[test]
    fn renders_class_and_constructor() {
        let class = RegularClass::new(outer(), MemberStatus::public());
        assert_eq!(Declaration::from(class).to_string(), "public class a.b/Outer");

        let ctor = Constructor::new(
            outer(),
            MemberStatus::public().inside(EffectiveVisibility::Public),
        )
        .primary();
        assert_eq!(
            Declaration::from(ctor).to_string(),
            "public primary constructor a.b/Outer.<init>()"
        );
    }

    #[test]
    fn renders_property_and_anonymous_object() {
        let property = Property::new(
            CallableId::member(outer(), Name::identifier("size")),
            MemberStatus::new(Visibility::Protected),
        )
        .mutable()
        .returning(builtin("Int"));
        assert_eq!(
            Declaration::from(property).to_string(),
            "protected var a.b/Outer.size: Int"
        );

        let object = AnonymousObject {
            supertypes: vec![builtin("Runnable"), builtin("Closeable")],
        };
        assert_eq!(
            Declaration::from(object).to_string(),
            "object : Runnable, Closeable"
        );
    }
}
