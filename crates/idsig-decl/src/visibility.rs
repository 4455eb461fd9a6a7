// visibility.rs
//
// Declared and effective visibility of member declarations.

use std::fmt;

/// Visibility as written on a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    Protected,
    Internal,
    Private,
    /// Declared inside a function body.
    Local,
}

impl Visibility {
    /// Effective visibility when declared inside a container whose effective
    /// visibility is `container` (`None` for top-level declarations).
    pub fn effective_in(self, container: Option<EffectiveVisibility>) -> EffectiveVisibility {
        let own = EffectiveVisibility::from(self);
        match container {
            Some(container) => own.lowest(container),
            None => own,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Internal => "internal",
            Self::Private => "private",
            Self::Local => "local",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// The narrowest visibility reachable through a declaration and all of its
/// enclosing scopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectiveVisibility {
    Local,
    Private,
    Protected,
    Internal,
    /// Both module-internal and restricted to subclasses.
    InternalProtected,
    Public,
}

impl EffectiveVisibility {
    /// Meet of two visibilities.
    ///
    /// `Local` absorbs everything, `Private` absorbs the rest, and the
    /// incomparable `Protected`/`Internal` pair meets at `InternalProtected`.
    pub fn lowest(self, other: Self) -> Self {
        use EffectiveVisibility::*;
        match (self, other) {
            (Local, _) | (_, Local) => Local,
            (Private, _) | (_, Private) => Private,
            (Public, v) | (v, Public) => v,
            (InternalProtected, _) | (_, InternalProtected) => InternalProtected,
            (Protected, Protected) => Protected,
            (Internal, Internal) => Internal,
            (Protected, Internal) | (Internal, Protected) => InternalProtected,
        }
    }

    /// Whether another module can ever refer to a declaration with this
    /// visibility by name.
    pub fn is_linkage_visible(self) -> bool {
        !matches!(self, Self::Local | Self::Private)
    }
}

impl From<Visibility> for EffectiveVisibility {
    fn from(visibility: Visibility) -> Self {
        match visibility {
            Visibility::Public => Self::Public,
            Visibility::Protected => Self::Protected,
            Visibility::Internal => Self::Internal,
            Visibility::Private => Self::Private,
            Visibility::Local => Self::Local,
        }
    }
}
