//! Per-kind signature metadata.
//!
//! Inspects exactly one declaration node, never its children, and extracts the
//! overload hash (callables only) and the structural flag bits.

use idsig_decl::{Declaration, MemberStatus};
use idsig_identity::SignatureFlags;

use crate::errors::SignatureError;
use crate::mangle::{MangleTarget, Mangler};

/// Hash and flags extracted from a single declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SignatureParts {
    pub hash_id: Option<u64>,
    pub flags: SignatureFlags,
}

impl SignatureParts {
    fn classifier(status: &MemberStatus) -> Self {
        Self {
            hash_id: None,
            flags: expect_flags(status),
        }
    }

    /// Parts of a callable: the mangler's hash plus the expect bit.
    pub fn callable(mangler: &impl Mangler, target: MangleTarget<'_>) -> Self {
        let status = match target {
            MangleTarget::Constructor(ctor) => &ctor.status,
            MangleTarget::Function(function) => &function.status,
            MangleTarget::Property(property) => &property.status,
        };
        Self {
            hash_id: Some(mangler.signature_mangle(target)),
            flags: expect_flags(status),
        }
    }
}

fn expect_flags(status: &MemberStatus) -> SignatureFlags {
    SignatureFlags::empty().with(SignatureFlags::IS_EXPECT, status.is_expect)
}

/// Extract [`SignatureParts`] for `declaration`.
///
/// Only classes, type aliases, enum entries, constructors, functions and
/// properties are handled. Anything else means the composer let an ineligible
/// declaration through.
pub fn build_parts(
    mangler: &impl Mangler,
    declaration: &Declaration,
) -> Result<SignatureParts, SignatureError> {
    let parts = match declaration {
        Declaration::Class(class) => SignatureParts::classifier(&class.status),
        Declaration::TypeAlias(alias) => SignatureParts::classifier(&alias.status),
        Declaration::EnumEntry(entry) => SignatureParts::classifier(&entry.status),
        Declaration::Constructor(ctor) => {
            SignatureParts::callable(mangler, MangleTarget::Constructor(ctor))
        }
        Declaration::Function(function) => {
            SignatureParts::callable(mangler, MangleTarget::Function(function))
        }
        Declaration::Property(property) => {
            SignatureParts::callable(mangler, MangleTarget::Property(property))
        }
        Declaration::AnonymousObject(_)
        | Declaration::AnonymousFunction(_)
        | Declaration::OtherMember(_) => {
            return Err(SignatureError::unexpected_builder_input(declaration));
        }
    };
    Ok(parts)
}
