//! Declaration nodes produced by the front end.
//!
//! `Declaration` is a closed set: every dispatch site matches it exhaustively,
//! so adding a kind forces a decision wherever declarations are consumed.

use std::fmt;

use idsig_identity::{CallableId, ClassId, Name};

use crate::types::{TypeParameter, TypeRef, ValueParameter};
use crate::visibility::{EffectiveVisibility, Visibility};

/// Visibility and modality data shared by every member declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemberStatus {
    pub visibility: Visibility,
    /// Effective visibility of the enclosing class; `None` at top level.
    pub container: Option<EffectiveVisibility>,
    pub is_expect: bool,
}

impl MemberStatus {
    pub fn new(visibility: Visibility) -> Self {
        Self {
            visibility,
            container: None,
            is_expect: false,
        }
    }

    pub fn public() -> Self {
        Self::new(Visibility::Public)
    }

    pub fn inside(mut self, container: EffectiveVisibility) -> Self {
        self.container = Some(container);
        self
    }

    pub fn expect(mut self) -> Self {
        self.is_expect = true;
        self
    }

    pub fn effective_visibility(&self) -> EffectiveVisibility {
        self.visibility.effective_in(self.container)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassKind {
    Class,
    Interface,
    EnumClass,
    Object,
    AnnotationClass,
}

impl ClassKind {
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::EnumClass => "enum class",
            Self::Object => "object",
            Self::AnnotationClass => "annotation class",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegularClass {
    pub status: MemberStatus,
    pub class_id: ClassId,
    pub kind: ClassKind,
}

impl RegularClass {
    pub fn new(class_id: ClassId, status: MemberStatus) -> Self {
        Self {
            status,
            class_id,
            kind: ClassKind::Class,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeAlias {
    pub status: MemberStatus,
    pub class_id: ClassId,
    pub expanded: TypeRef,
}

impl TypeAlias {
    pub fn new(class_id: ClassId, expanded: TypeRef, status: MemberStatus) -> Self {
        Self {
            status,
            class_id,
            expanded,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constructor {
    pub status: MemberStatus,
    pub callable_id: CallableId,
    pub value_parameters: Vec<ValueParameter>,
    pub is_primary: bool,
}

impl Constructor {
    pub fn new(class_id: ClassId, status: MemberStatus) -> Self {
        Self {
            status,
            callable_id: CallableId::constructor(class_id),
            value_parameters: Vec::new(),
            is_primary: false,
        }
    }

    pub fn primary(mut self) -> Self {
        self.is_primary = true;
        self
    }

    pub fn with_parameter(mut self, parameter: ValueParameter) -> Self {
        self.value_parameters.push(parameter);
        self
    }
}

/// A named function (top-level, member or extension).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleFunction {
    pub status: MemberStatus,
    pub callable_id: CallableId,
    pub type_parameters: Vec<TypeParameter>,
    pub receiver: Option<TypeRef>,
    pub value_parameters: Vec<ValueParameter>,
    pub return_type: Option<TypeRef>,
}

impl SimpleFunction {
    pub fn new(callable_id: CallableId, status: MemberStatus) -> Self {
        Self {
            status,
            callable_id,
            type_parameters: Vec::new(),
            receiver: None,
            value_parameters: Vec::new(),
            return_type: None,
        }
    }

    pub fn with_type_parameter(mut self, parameter: TypeParameter) -> Self {
        self.type_parameters.push(parameter);
        self
    }

    pub fn with_receiver(mut self, receiver: TypeRef) -> Self {
        self.receiver = Some(receiver);
        self
    }

    pub fn with_parameter(mut self, parameter: ValueParameter) -> Self {
        self.value_parameters.push(parameter);
        self
    }

    pub fn returning(mut self, return_type: TypeRef) -> Self {
        self.return_type = Some(return_type);
        self
    }

    pub fn name(&self) -> &Name {
        self.callable_id.callable_name()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub status: MemberStatus,
    pub callable_id: CallableId,
    pub type_parameters: Vec<TypeParameter>,
    pub receiver: Option<TypeRef>,
    pub return_type: Option<TypeRef>,
    pub is_var: bool,
}

impl Property {
    pub fn new(callable_id: CallableId, status: MemberStatus) -> Self {
        Self {
            status,
            callable_id,
            type_parameters: Vec::new(),
            receiver: None,
            return_type: None,
            is_var: false,
        }
    }

    pub fn mutable(mut self) -> Self {
        self.is_var = true;
        self
    }

    pub fn with_type_parameter(mut self, parameter: TypeParameter) -> Self {
        self.type_parameters.push(parameter);
        self
    }

    pub fn with_receiver(mut self, receiver: TypeRef) -> Self {
        self.receiver = Some(receiver);
        self
    }

    pub fn returning(mut self, return_type: TypeRef) -> Self {
        self.return_type = Some(return_type);
        self
    }

    /// The simple declared name, not the qualified path.
    pub fn name(&self) -> &Name {
        self.callable_id.callable_name()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumEntry {
    pub status: MemberStatus,
    pub callable_id: CallableId,
}

impl EnumEntry {
    pub fn new(enum_class: ClassId, name: Name, status: MemberStatus) -> Self {
        Self {
            status,
            callable_id: CallableId::member(enum_class, name),
        }
    }
}

/// Any other callable member, e.g. a backing field or a synthetic member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtherMember {
    pub status: MemberStatus,
    pub callable_id: CallableId,
    pub return_type: Option<TypeRef>,
}

impl OtherMember {
    pub fn new(callable_id: CallableId, status: MemberStatus) -> Self {
        Self {
            status,
            callable_id,
            return_type: None,
        }
    }
}

/// An object expression. Has no name and no visibility.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnonymousObject {
    pub supertypes: Vec<TypeRef>,
}

/// A lambda or anonymous `fun`. Has no name and no visibility.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnonymousFunction {
    pub receiver: Option<TypeRef>,
    pub value_parameters: Vec<ValueParameter>,
    pub return_type: Option<TypeRef>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Class(RegularClass),
    TypeAlias(TypeAlias),
    Constructor(Constructor),
    Function(SimpleFunction),
    Property(Property),
    EnumEntry(EnumEntry),
    AnonymousObject(AnonymousObject),
    AnonymousFunction(AnonymousFunction),
    OtherMember(OtherMember),
}

/// Fieldless mirror of [`Declaration`] for logs and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Class,
    TypeAlias,
    Constructor,
    Function,
    Property,
    EnumEntry,
    AnonymousObject,
    AnonymousFunction,
    OtherMember,
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Class => "class",
            Self::TypeAlias => "type alias",
            Self::Constructor => "constructor",
            Self::Function => "function",
            Self::Property => "property",
            Self::EnumEntry => "enum entry",
            Self::AnonymousObject => "anonymous object",
            Self::AnonymousFunction => "anonymous function",
            Self::OtherMember => "member",
        };
        f.write_str(name)
    }
}

impl Declaration {
    pub fn kind(&self) -> DeclarationKind {
        match self {
            Self::Class(_) => DeclarationKind::Class,
            Self::TypeAlias(_) => DeclarationKind::TypeAlias,
            Self::Constructor(_) => DeclarationKind::Constructor,
            Self::Function(_) => DeclarationKind::Function,
            Self::Property(_) => DeclarationKind::Property,
            Self::EnumEntry(_) => DeclarationKind::EnumEntry,
            Self::AnonymousObject(_) => DeclarationKind::AnonymousObject,
            Self::AnonymousFunction(_) => DeclarationKind::AnonymousFunction,
            Self::OtherMember(_) => DeclarationKind::OtherMember,
        }
    }

    /// Status of a member declaration; `None` for anonymous constructs.
    pub fn status(&self) -> Option<&MemberStatus> {
        match self {
            Self::Class(d) => Some(&d.status),
            Self::TypeAlias(d) => Some(&d.status),
            Self::Constructor(d) => Some(&d.status),
            Self::Function(d) => Some(&d.status),
            Self::Property(d) => Some(&d.status),
            Self::EnumEntry(d) => Some(&d.status),
            Self::OtherMember(d) => Some(&d.status),
            Self::AnonymousObject(_) | Self::AnonymousFunction(_) => None,
        }
    }

    pub fn is_expect(&self) -> bool {
        self.status().is_some_and(|status| status.is_expect)
    }

    pub fn callable_id(&self) -> Option<&CallableId> {
        match self {
            Self::Constructor(d) => Some(&d.callable_id),
            Self::Function(d) => Some(&d.callable_id),
            Self::Property(d) => Some(&d.callable_id),
            Self::EnumEntry(d) => Some(&d.callable_id),
            Self::OtherMember(d) => Some(&d.callable_id),
            Self::Class(_)
            | Self::TypeAlias(_)
            | Self::AnonymousObject(_)
            | Self::AnonymousFunction(_) => None,
        }
    }
}

macro_rules! impl_from_node {
    ($($variant:ident($node:ty)),* $(,)?) => {
        $(
            impl From<$node> for Declaration {
                fn from(node: $node) -> Self {
                    Declaration::$variant(node)
                }
            }
        )*
    };
}

impl_from_node!(
    Class(RegularClass),
    TypeAlias(TypeAlias),
    Constructor(Constructor),
    Function(SimpleFunction),
    Property(Property),
    EnumEntry(EnumEntry),
    AnonymousObject(AnonymousObject),
    AnonymousFunction(AnonymousFunction),
    OtherMember(OtherMember),
);

#[cfg(test)]
mod tests {
    use super::*;
    use idsig_identity::FqName;

    #[test]
    fn anonymous_declarations_have_no_status() {
        let object: Declaration = AnonymousObject::default().into();
        let lambda: Declaration = AnonymousFunction::default().into();

        assert!(object.status().is_none());
        assert!(lambda.status().is_none());
        assert!(!object.is_expect());
    }

    #[test]
    fn member_status_narrows_through_container() {
        let status = MemberStatus::public().inside(EffectiveVisibility::Internal);
        assert_eq!(status.effective_visibility(), EffectiveVisibility::Internal);
    }

    #[test]
    fn enum_entry_is_a_member_of_its_enum() {
        let color = ClassId::top_level(FqName::parse("p"), Name::identifier("Color"));
        let entry: Declaration =
            EnumEntry::new(color.clone(), Name::identifier("RED"), MemberStatus::public()).into();

        assert_eq!(entry.kind(), DeclarationKind::EnumEntry);
        assert_eq!(
            entry.callable_id().and_then(CallableId::class_id),
            Some(&color)
        );
    }
}
