use crate::{CallableId, FqName, Name};

/// Which accessor of a property a signature refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessorKind {
    Getter,
    Setter,
}

impl AccessorKind {
    pub fn from_is_setter(is_setter: bool) -> Self {
        if is_setter { Self::Setter } else { Self::Getter }
    }

    fn prefix(self) -> &'static str {
        match self {
            Self::Getter => "get",
            Self::Setter => "set",
        }
    }
}

/// Path of a callable relative to its package.
///
/// Member callables are nested under their class path (`Outer.Inner.member`),
/// top-level callables are just their name.
pub fn relative_callable_name(callable_id: &CallableId) -> FqName {
    let name = callable_id.callable_name().clone();
    match callable_id.class_name() {
        Some(class_name) => class_name.child(name),
        None => FqName::top_level(name),
    }
}

/// Special name of a property accessor: `<get-NAME>` / `<set-NAME>`.
pub fn accessor_name(kind: AccessorKind, property_name: &Name) -> Name {
    Name::special(format!("<{}-{}>", kind.prefix(), property_name))
}
