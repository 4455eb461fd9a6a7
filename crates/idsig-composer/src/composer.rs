//! Linkage signature composition.
//!
//! Decides which declarations take part in cross-module linking and assembles
//! their signatures from identity metadata plus the builder's hash and flags.

use idsig_decl::{Declaration, MemberStatus, Property, Visibility};
use idsig_identity::{
    AccessorKind, CallableId, ClassId, Signature, accessor_name, relative_callable_name,
};

use crate::builder::{SignatureParts, build_parts};
use crate::errors::SignatureError;
use crate::mangle::Mangler;

/// Seam between the front end and the lowering stage.
pub trait ComposeSignature {
    /// Signature of `declaration`, or `None` when nothing outside its defining
    /// scope can refer to it.
    fn compose_signature(
        &self,
        declaration: &Declaration,
    ) -> Result<Option<Signature>, SignatureError>;

    /// Signature of a property accessor, derived from the property's.
    fn compose_accessor_signature(
        &self,
        property: &Property,
        accessor: AccessorKind,
    ) -> Result<Option<Signature>, SignatureError>;
}

/// Stateless composer over an injected [`Mangler`].
///
/// `Send`/`Sync` exactly when the mangler is, so one composer can serve
/// several lowering threads.
#[derive(Debug, Clone, Default)]
pub struct SignatureComposer<M> {
    mangler: M,
}

fn is_linkage_visible(status: &MemberStatus) -> bool {
    status.effective_visibility().is_linkage_visible()
}

fn classifier_signature(class_id: &ClassId, parts: SignatureParts) -> Signature {
    Signature::new(
        class_id.package_name().as_string(),
        class_id.relative_class_name().as_string(),
        parts.hash_id,
        parts.flags,
    )
}

fn callable_signature(callable_id: &CallableId, parts: SignatureParts) -> Option<Signature> {
    if callable_id.is_in_local_class() {
        tracing::trace!(%callable_id, "callable in local class has no signature");
        return None;
    }
    Some(Signature::new(
        callable_id.package_name().as_string(),
        relative_callable_name(callable_id).as_string(),
        parts.hash_id,
        parts.flags,
    ))
}

impl<M: Mangler> SignatureComposer<M> {
    pub fn new(mangler: M) -> Self {
        Self { mangler }
    }

    /// Compose the signature of `declaration`.
    ///
    /// Returns `Ok(None)` for anonymous declarations, for members whose
    /// effective visibility is local or private, and for callables nested in a
    /// local class. Returns `Err` only when the declaration kind is one this
    /// composer is never supposed to see.
    #[tracing::instrument(level = "trace", skip_all, fields(kind = %declaration.kind()))]
    pub fn compose_signature(
        &self,
        declaration: &Declaration,
    ) -> Result<Option<Signature>, SignatureError> {
        if matches!(
            declaration,
            Declaration::AnonymousObject(_) | Declaration::AnonymousFunction(_)
        ) {
            tracing::trace!("anonymous declaration has no signature");
            return Ok(None);
        }
        if let Some(status) = declaration.status()
            && !is_linkage_visible(status)
        {
            tracing::trace!(
                visibility = ?status.effective_visibility(),
                "declaration not visible outside its scope"
            );
            return Ok(None);
        }

        let parts = build_parts(&self.mangler, declaration)?;

        let signature = match declaration {
            Declaration::Class(class) if class.status.visibility != Visibility::Local => {
                Some(classifier_signature(&class.class_id, parts))
            }
            Declaration::TypeAlias(alias) => Some(classifier_signature(&alias.class_id, parts)),
            Declaration::Constructor(ctor) => callable_signature(&ctor.callable_id, parts),
            Declaration::Function(function) => callable_signature(&function.callable_id, parts),
            Declaration::Property(property) => callable_signature(&property.callable_id, parts),
            Declaration::EnumEntry(entry) => callable_signature(&entry.callable_id, parts),
            Declaration::OtherMember(member) => callable_signature(&member.callable_id, parts),
            Declaration::Class(_)
            | Declaration::AnonymousObject(_)
            | Declaration::AnonymousFunction(_) => {
                return Err(SignatureError::unsupported(declaration));
            }
        };

        if let Some(signature) = &signature {
            tracing::debug!(%signature, "composed signature");
        }
        Ok(signature)
    }

    /// Compose the getter or setter signature of `property`.
    ///
    /// Same package, hash and flags as the property; the path gains a
    /// `<get-NAME>` / `<set-NAME>` segment built from the simple name.
    /// `Ok(None)` whenever the property itself has no signature.
    pub fn compose_accessor_signature(
        &self,
        property: &Property,
        accessor: AccessorKind,
    ) -> Result<Option<Signature>, SignatureError> {
        let property_declaration = Declaration::Property(property.clone());
        let Some(property_signature) = self.compose_signature(&property_declaration)? else {
            return Ok(None);
        };
        let declaration_path = format!(
            "{}.{}",
            property_signature.declaration_path(),
            accessor_name(accessor, property.name())
        );
        Ok(Some(Signature::new(
            property_signature.package_name(),
            declaration_path,
            property_signature.hash_id(),
            property_signature.flags(),
        )))
    }
}

impl<M: Mangler> ComposeSignature for SignatureComposer<M> {
    fn compose_signature(
        &self,
        declaration: &Declaration,
    ) -> Result<Option<Signature>, SignatureError> {
        SignatureComposer::compose_signature(self, declaration)
    }

    fn compose_accessor_signature(
        &self,
        property: &Property,
        accessor: AccessorKind,
    ) -> Result<Option<Signature>, SignatureError> {
        SignatureComposer::compose_accessor_signature(self, property, accessor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SignatureErrorKind;
    use crate::mangle::MangleTarget;
    use idsig_decl::{
        AnonymousObject, Constructor, EffectiveVisibility, EnumEntry, OtherMember, RegularClass,
        SimpleFunction, TypeAlias, TypeRef,
    };
    use idsig_identity::{FqName, Name};

    /// Hashes only the callable's name length, enough to see it was consulted.
    struct NameLengthMangler;

    impl Mangler for NameLengthMangler {
        fn signature_mangle(&self, target: MangleTarget<'_>) -> u64 {
            let name = match target {
                MangleTarget::Constructor(ctor) => ctor.callable_id.callable_name(),
                MangleTarget::Function(function) => function.name(),
                MangleTarget::Property(property) => property.name(),
            };
            name.as_str().len() as u64
        }
    }

    fn composer() -> SignatureComposer<NameLengthMangler> {
        SignatureComposer::new(NameLengthMangler)
    }

    fn pkg() -> FqName {
        FqName::parse("org.sample")
    }

    fn outer() -> ClassId {
        ClassId::top_level(pkg(), Name::identifier("Outer"))
    }

    fn member_status() -> MemberStatus {
        MemberStatus::public().inside(EffectiveVisibility::Public)
    }

    #[test]
    fn anonymous_object_has_no_signature() {
        let object: Declaration = AnonymousObject::default().into();
        assert_eq!(composer().compose_signature(&object), Ok(None));
    }

    #[test]
    fn private_member_has_no_signature() {
        let function: Declaration = SimpleFunction::new(
            CallableId::member(outer(), Name::identifier("hidden")),
            MemberStatus::new(Visibility::Private).inside(EffectiveVisibility::Public),
        )
        .into();
        assert_eq!(composer().compose_signature(&function), Ok(None));
    }

    #[test]
    fn public_member_of_private_class_has_no_signature() {
        let function: Declaration = SimpleFunction::new(
            CallableId::member(outer(), Name::identifier("f")),
            MemberStatus::public().inside(EffectiveVisibility::Private),
        )
        .into();
        assert_eq!(composer().compose_signature(&function), Ok(None));
    }

    #[test]
    fn private_other_member_is_filtered_before_builder() {
        let field: Declaration = OtherMember::new(
            CallableId::member(outer(), Name::identifier("backing")),
            MemberStatus::new(Visibility::Private).inside(EffectiveVisibility::Public),
        )
        .into();
        assert_eq!(composer().compose_signature(&field), Ok(None));
    }

    #[test]
    fn nested_class_uses_relative_class_path() {
        let inner = outer().nested(Name::identifier("Inner"));
        let class: Declaration = RegularClass::new(inner, member_status()).into();

        let sig = composer().compose_signature(&class).unwrap().unwrap();
        assert_eq!(sig.package_name(), "org.sample");
        assert_eq!(sig.declaration_path(), "Outer.Inner");
        assert_eq!(sig.hash_id(), None);
    }

    #[test]
    fn type_alias_uses_its_own_class_id() {
        let alias_id = ClassId::top_level(pkg(), Name::identifier("Handler"));
        let target = TypeRef::class(outer());
        let alias: Declaration =
            TypeAlias::new(alias_id, target, MemberStatus::public().expect()).into();

        let sig = composer().compose_signature(&alias).unwrap().unwrap();
        assert_eq!(sig.to_string(), "org.sample/Handler|null[1]");
    }

    #[test]
    fn constructor_path_ends_in_init() {
        let ctor: Declaration = Constructor::new(outer(), member_status()).into();

        let sig = composer().compose_signature(&ctor).unwrap().unwrap();
        assert_eq!(sig.declaration_path(), "Outer.<init>");
        assert_eq!(sig.hash_id(), Some("<init>".len() as u64));
    }

    #[test]
    fn enum_entry_is_callable_without_hash() {
        let color = ClassId::top_level(pkg(), Name::identifier("Color"));
        let entry: Declaration =
            EnumEntry::new(color, Name::identifier("RED"), member_status()).into();

        let sig = composer().compose_signature(&entry).unwrap().unwrap();
        assert_eq!(sig.declaration_path(), "Color.RED");
        assert_eq!(sig.hash_id(), None);
    }

    #[test]
    fn public_other_member_is_a_builder_error() {
        let field: Declaration = OtherMember::new(
            CallableId::member(outer(), Name::identifier("backing")),
            member_status(),
        )
        .into();

        let err = composer().compose_signature(&field).unwrap_err();
        assert_eq!(err.kind, SignatureErrorKind::UnexpectedBuilderInput);
        assert_eq!(err.rendered, "public member org.sample/Outer.backing");
    }

    #[test]
    fn local_class_has_no_signature() {
        let status = MemberStatus::new(Visibility::Local).inside(EffectiveVisibility::Public);
        let class: Declaration =
            RegularClass::new(ClassId::local(pkg(), Name::identifier("L")), status).into();

        assert_eq!(composer().compose_signature(&class), Ok(None));
    }

    #[test]
    fn member_of_local_class_has_no_signature() {
        let local = ClassId::local(pkg(), Name::identifier("L"));
        let function: Declaration = SimpleFunction::new(
            CallableId::member(local, Name::identifier("run")),
            MemberStatus::public(),
        )
        .into();

        assert_eq!(composer().compose_signature(&function), Ok(None));
    }

    #[test]
    fn accessor_is_property_signature_plus_segment() {
        let property = Property::new(
            CallableId::member(outer(), Name::identifier("size")),
            member_status().expect(),
        );
        let composer = composer();

        let base = composer
            .compose_signature(&Declaration::Property(property.clone()))
            .unwrap()
            .unwrap();
        let getter = composer
            .compose_accessor_signature(&property, AccessorKind::Getter)
            .unwrap()
            .unwrap();

        assert_eq!(
            getter.declaration_path(),
            format!("{}.<get-size>", base.declaration_path())
        );
        assert_eq!(getter.package_name(), base.package_name());
        assert_eq!(getter.hash_id(), base.hash_id());
        assert_eq!(getter.flags(), base.flags());
    }

    #[test]
    fn accessors_extend_property_path() {
        let property = Property::new(
            CallableId::member(outer(), Name::identifier("size")),
            member_status(),
        )
        .mutable();
        let composer = composer();

        let getter = composer
            .compose_accessor_signature(&property, AccessorKind::Getter)
            .unwrap()
            .unwrap();
        let setter = composer
            .compose_accessor_signature(&property, AccessorKind::Setter)
            .unwrap()
            .unwrap();

        assert_eq!(getter.declaration_path(), "Outer.size.<get-size>");
        assert_eq!(setter.declaration_path(), "Outer.size.<set-size>");
        assert_eq!(getter.hash_id(), Some(4));
        assert_eq!(getter.package_name(), "org.sample");
    }

    #[test]
    fn accessor_of_hidden_property_has_no_signature() {
        let property = Property::new(
            CallableId::member(outer(), Name::identifier("size")),
            MemberStatus::new(Visibility::Private),
        );
        assert_eq!(
            composer().compose_accessor_signature(&property, AccessorKind::Getter),
            Ok(None)
        );
    }
}
