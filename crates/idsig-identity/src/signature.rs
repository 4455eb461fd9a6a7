//! The linkage signature value handed to the lowering stage.

use std::fmt;

use crate::SignatureFlags;

/// Stable cross-module key for a linkage-visible declaration.
///
/// `(package_name, declaration_path, hash_id)` identifies one declaration;
/// `flags` carries structural bits that do not take part in overload
/// disambiguation. Values are immutable and hold no reference back to the
/// declaration they were composed from.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Signature {
    package_name: String,
    declaration_path: String,
    hash_id: Option<u64>,
    flags: SignatureFlags,
}

impl Signature {
    pub fn new(
        package_name: impl Into<String>,
        declaration_path: impl Into<String>,
        hash_id: Option<u64>,
        flags: SignatureFlags,
    ) -> Self {
        Self {
            package_name: package_name.into(),
            declaration_path: declaration_path.into(),
            hash_id,
            flags,
        }
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn declaration_path(&self) -> &str {
        &self.declaration_path
    }

    /// Overload hash; only callables carry one.
    pub fn hash_id(&self) -> Option<u64> {
        self.hash_id
    }

    pub fn flags(&self) -> SignatureFlags {
        self.flags
    }

    pub fn is_expect(&self) -> bool {
        self.flags.is_expect()
    }

    /// Last segment of the declaration path.
    ///
    /// Special segments such as `<get-x>` may themselves contain dots only if
    /// the property name did, which identifiers never do.
    pub fn short_name(&self) -> &str {
        self.declaration_path
            .rsplit_once('.')
            .map_or(self.declaration_path.as_str(), |(_, last)| last)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}|", self.package_name, self.declaration_path)?;
        match self.hash_id {
            Some(id) => write!(f, "{id}")?,
            None => f.write_str("null")?,
        }
        write!(f, "[{:b}]", self.flags)
    }
}
