//! Identity primitives for linkage signatures.
//!
//! Names and paths (`Name`, `FqName`), the structural position of a declaration
//! (`ClassId`, `CallableId`), and the `Signature` value the composer produces.

mod flags;
mod ids;
mod name;
pub mod naming;
mod signature;

pub use flags::SignatureFlags;
pub use ids::{CallableId, ClassId};
pub use name::{FqName, Name};
pub use naming::{AccessorKind, accessor_name, relative_callable_name};
pub use signature::Signature;
