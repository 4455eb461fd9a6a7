//! Structural identities for classifiers and callables.
//!
//! These carry the package/class/callable position a declaration was written at.
//! They are the only inputs used to derive a signature's qualified path.

use std::fmt;

use crate::{FqName, Name};

/// Identity for a classifier (class, interface, object, type alias).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassId {
    package_name: FqName,
    relative_class_name: FqName,
    /// Declared inside a function body or initializer; unreachable by name
    /// from outside that body.
    is_local: bool,
}

impl ClassId {
    /// Panics if `relative_class_name` is the root path.
    pub fn new(package_name: FqName, relative_class_name: FqName, is_local: bool) -> Self {
        assert!(!relative_class_name.is_root(), "class ids need a name");
        Self {
            package_name,
            relative_class_name,
            is_local,
        }
    }

    pub fn top_level(package_name: FqName, name: Name) -> Self {
        Self::new(package_name, FqName::top_level(name), false)
    }

    /// A local class. Nested classes of a local class are local too.
    pub fn local(package_name: FqName, name: Name) -> Self {
        Self::new(package_name, FqName::top_level(name), true)
    }

    pub fn nested(&self, name: Name) -> Self {
        Self {
            package_name: self.package_name.clone(),
            relative_class_name: self.relative_class_name.child(name),
            is_local: self.is_local,
        }
    }

    pub fn package_name(&self) -> &FqName {
        &self.package_name
    }

    pub fn relative_class_name(&self) -> &FqName {
        &self.relative_class_name
    }

    pub fn is_local(&self) -> bool {
        self.is_local
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.package_name, self.relative_class_name)
    }
}

/// Identity for a callable (function, constructor, property, field, enum entry).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallableId {
    package_name: FqName,
    class_id: Option<ClassId>,
    callable_name: Name,
}

impl CallableId {
    pub fn top_level(package_name: FqName, callable_name: Name) -> Self {
        Self {
            package_name,
            class_id: None,
            callable_name,
        }
    }

    /// A callable declared inside `class_id`. The package is taken from the class.
    pub fn member(class_id: ClassId, callable_name: Name) -> Self {
        Self {
            package_name: class_id.package_name().clone(),
            class_id: Some(class_id),
            callable_name,
        }
    }

    pub fn constructor(class_id: ClassId) -> Self {
        Self::member(class_id, Name::constructor())
    }

    pub fn package_name(&self) -> &FqName {
        &self.package_name
    }

    pub fn class_id(&self) -> Option<&ClassId> {
        self.class_id.as_ref()
    }

    pub fn class_name(&self) -> Option<&FqName> {
        self.class_id.as_ref().map(ClassId::relative_class_name)
    }

    pub fn callable_name(&self) -> &Name {
        &self.callable_name
    }

    pub fn is_in_local_class(&self) -> bool {
        self.class_id.as_ref().is_some_and(ClassId::is_local)
    }
}

impl fmt::Display for CallableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/", self.package_name)?;
        if let Some(class_name) = self.class_name() {
            write!(f, "{class_name}.")?;
        }
        write!(f, "{}", self.callable_name)
    }
}
