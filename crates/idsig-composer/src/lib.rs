//! Linkage signature composer: decides which declarations are linkage-visible
//! and builds their cross-module signatures.

pub mod builder;
pub mod composer;
pub mod errors;
pub mod mangle;

pub use builder::{SignatureParts, build_parts};
pub use composer::{ComposeSignature, SignatureComposer};
pub use errors::{SignatureError, SignatureErrorKind};
pub use mangle::{MangleTarget, Mangler, StructuralMangler, hash_mangle};
