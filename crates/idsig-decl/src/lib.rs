//! Declaration model consumed by the signature composer.
//!
//! The front end produces these nodes; the composer only reads them.

mod display;
pub mod nodes;
pub mod types;
pub mod visibility;

pub use nodes::{
    AnonymousFunction, AnonymousObject, ClassKind, Constructor, Declaration, DeclarationKind,
    EnumEntry, MemberStatus, OtherMember, Property, RegularClass, SimpleFunction, TypeAlias,
};
pub use types::{TypeParameter, TypeRef, ValueParameter};
pub use visibility::{EffectiveVisibility, Visibility};
