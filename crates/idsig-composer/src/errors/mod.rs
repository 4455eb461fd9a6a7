// errors/mod.rs
//! Signature composition errors.
//!
//! These are internal compiler errors (ICEs): they mean an upstream invariant
//! was broken, e.g. a declaration kind was added without teaching the composer
//! about it. Expected absences ("this declaration has no signature") are
//! `None`, never an error.
//!
//! Error codes:
//! - E4001: unsupported declaration reached composer dispatch
//! - E4002: builder invoked on a declaration kind it does not handle

use std::fmt;

use idsig_decl::{Declaration, DeclarationKind};
use miette::Diagnostic;
use thiserror::Error;

/// The kind of composition error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureErrorKind {
    /// Declaration survived the visibility filter but matches no dispatch arm
    UnsupportedDeclaration,
    /// Builder asked for metadata of a kind it never handles
    UnexpectedBuilderInput,
}

/// Composition error carrying a rendering of the offending declaration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {rendered}")]
pub struct SignatureError {
    pub kind: SignatureErrorKind,
    pub declaration_kind: DeclarationKind,
    /// One-line rendering of the declaration, for the bug report.
    pub rendered: String,
}

impl SignatureError {
    fn new(kind: SignatureErrorKind, declaration: &Declaration) -> Self {
        Self {
            kind,
            declaration_kind: declaration.kind(),
            rendered: declaration.to_string(),
        }
    }

    /// Create an unsupported declaration error
    pub fn unsupported(declaration: &Declaration) -> Self {
        Self::new(SignatureErrorKind::UnsupportedDeclaration, declaration)
    }

    /// Create an unexpected builder input error
    pub fn unexpected_builder_input(declaration: &Declaration) -> Self {
        Self::new(SignatureErrorKind::UnexpectedBuilderInput, declaration)
    }
}

impl Diagnostic for SignatureError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code: &'static str = match self.kind {
            SignatureErrorKind::UnsupportedDeclaration => "E4001",
            SignatureErrorKind::UnexpectedBuilderInput => "E4002",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(format!(
            "this is a compiler bug: {} declarations are not expected here",
            self.declaration_kind
        )))
    }
}

impl fmt::Display for SignatureErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignatureErrorKind::UnsupportedDeclaration => {
                f.write_str("internal error: unsupported declaration in signature composer")
            }
            SignatureErrorKind::UnexpectedBuilderInput => {
                f.write_str("internal error: signature builder reached an unhandled declaration")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use idsig_decl::AnonymousObject;

    #[test]
    fn error_carries_rendering_and_code() {
        let declaration: Declaration = AnonymousObject::default().into();
        let err = SignatureError::unexpected_builder_input(&declaration);

        assert_eq!(err.declaration_kind, DeclarationKind::AnonymousObject);
        assert_eq!(
            err.to_string(),
            "internal error: signature builder reached an unhandled declaration: object"
        );
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("E4002"));
    }

    #[test]
    fn unsupported_declaration_has_its_own_code() {
        let declaration: Declaration = AnonymousObject::default().into();
        let err = SignatureError::unsupported(&declaration);

        assert_eq!(err.kind, SignatureErrorKind::UnsupportedDeclaration);
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("E4001"));
        let help = err.help().map(|h| h.to_string());
        assert_eq!(
            help.as_deref(),
            Some("this is a compiler bug: anonymous object declarations are not expected here")
        );
    }
}
