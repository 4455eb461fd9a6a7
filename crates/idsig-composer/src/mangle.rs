//! Overload hashing for callable declarations.
//!
//! The composer never inspects how a hash is computed; it only asks a
//! [`Mangler`] for one. [`StructuralMangler`] is the default implementation.

use std::fmt::Write as _;

use idsig_decl::{Constructor, Property, SimpleFunction, TypeParameter, TypeRef, ValueParameter};
use sha2::{Digest, Sha256};

/// A callable whose overload hash is requested.
#[derive(Debug, Clone, Copy)]
pub enum MangleTarget<'a> {
    Constructor(&'a Constructor),
    Function(&'a SimpleFunction),
    Property(&'a Property),
}

/// Produces the overload-disambiguating hash of a callable.
///
/// Implementations must be a pure function of the callable's structural
/// identity, deterministic across compilations of the same source. A mangler
/// shared between threads must be safe for concurrent read-only use.
pub trait Mangler {
    fn signature_mangle(&self, target: MangleTarget<'_>) -> u64;
}

impl<M: Mangler + ?Sized> Mangler for &M {
    fn signature_mangle(&self, target: MangleTarget<'_>) -> u64 {
        (**self).signature_mangle(target)
    }
}

/// Hashes a textual mangling of the callable's shape.
///
/// The mangled form covers type parameters (by position, with bounds), the
/// extension receiver, the callable name and value parameter types. Parameter
/// names, visibility, expect-ness and return types are not part of it.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralMangler;

impl StructuralMangler {
    pub fn new() -> Self {
        Self
    }

    /// The string that gets hashed. Exposed for debugging hash collisions.
    pub fn mangled_signature(&self, target: MangleTarget<'_>) -> String {
        let mut out = String::new();
        match target {
            MangleTarget::Constructor(ctor) => {
                out.push_str(ctor.callable_id.callable_name().as_str());
                mangle_value_parameters(&mut out, &ctor.value_parameters);
            }
            MangleTarget::Function(function) => {
                mangle_type_parameters(&mut out, &function.type_parameters);
                mangle_receiver(&mut out, function.receiver.as_ref());
                out.push_str(function.name().as_str());
                mangle_value_parameters(&mut out, &function.value_parameters);
            }
            MangleTarget::Property(property) => {
                mangle_type_parameters(&mut out, &property.type_parameters);
                mangle_receiver(&mut out, property.receiver.as_ref());
                out.push_str(property.name().as_str());
            }
        }
        out
    }
}

impl Mangler for StructuralMangler {
    fn signature_mangle(&self, target: MangleTarget<'_>) -> u64 {
        hash_mangle(&self.mangled_signature(target))
    }
}

/// Fold a mangled string to 64 bits: the first eight bytes of its SHA-256
/// digest, little endian.
pub fn hash_mangle(mangled: &str) -> u64 {
    let digest = Sha256::digest(mangled.as_bytes());
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(head)
}

fn mangle_type(out: &mut String, ty: &TypeRef) {
    match ty {
        TypeRef::Class {
            id,
            arguments,
            nullable,
        } => {
            // `package/Class.Path`: the slash keeps `a/B` apart from `/a.B`.
            let _ = write!(out, "{id}");
            if !arguments.is_empty() {
                out.push('<');
                for (idx, arg) in arguments.iter().enumerate() {
                    if idx > 0 {
                        out.push(',');
                    }
                    mangle_type(out, arg);
                }
                out.push('>');
            }
            if *nullable {
                out.push('?');
            }
        }
        TypeRef::Parameter { index, nullable } => {
            let _ = write!(out, "#{index}");
            if *nullable {
                out.push('?');
            }
        }
        TypeRef::Star => out.push('*'),
    }
}

fn mangle_type_parameters(out: &mut String, params: &[TypeParameter]) {
    if params.is_empty() {
        return;
    }
    out.push('{');
    for (idx, param) in params.iter().enumerate() {
        if idx > 0 {
            out.push(';');
        }
        let _ = write!(out, "#{idx}");
        for (bound_idx, bound) in param.bounds.iter().enumerate() {
            out.push(if bound_idx == 0 { ':' } else { '&' });
            mangle_type(out, bound);
        }
    }
    out.push('}');
}

fn mangle_receiver(out: &mut String, receiver: Option<&TypeRef>) {
    if let Some(receiver) = receiver {
        out.push('@');
        mangle_type(out, receiver);
        out.push('.');
    }
}

fn mangle_value_parameters(out: &mut String, params: &[ValueParameter]) {
    out.push('(');
    for (idx, param) in params.iter().enumerate() {
        if idx > 0 {
            out.push(';');
        }
        mangle_type(out, &param.ty);
        if param.is_vararg {
            out.push_str("...");
        }
    }
    out.push(')');
}
