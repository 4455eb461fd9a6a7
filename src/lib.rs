// src/lib.rs
//! Linkage signatures for cross-module symbol resolution.
//!
//! Re-exports the workspace crates under one roof:
//! - [`identity`]: names, declaration ids and the `Signature` value
//! - [`decl`]: the declaration model produced by the front end
//! - [`composer`]: the signature composer and its mangler seam

pub use idsig_composer as composer;
pub use idsig_decl as decl;
pub use idsig_identity as identity;

pub mod prelude {
    pub use idsig_composer::{
        ComposeSignature, MangleTarget, Mangler, SignatureComposer, SignatureError,
        StructuralMangler,
    };
    pub use idsig_decl::{
        AnonymousFunction, AnonymousObject, Constructor, Declaration, EffectiveVisibility,
        EnumEntry, MemberStatus, OtherMember, Property, RegularClass, SimpleFunction, TypeAlias,
        TypeParameter, TypeRef, ValueParameter, Visibility,
    };
    pub use idsig_identity::{
        AccessorKind, CallableId, ClassId, FqName, Name, Signature, SignatureFlags,
    };
}
