// flags.rs
//
// Structural flag bits carried by a linkage signature.

use std::fmt;
use std::ops::BitOr;

/// Fixed-width bit field of signature flags.
///
/// The bit positions are part of the signature key consumed by the lowering
/// stage; never renumber an existing flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SignatureFlags(u64);

impl SignatureFlags {
    /// Declared `expect`: no implementation in this module, supplied by a
    /// platform-specific declaration elsewhere.
    pub const IS_EXPECT: Self = Self(1 << 0);

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u64 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Set `flag` when `enabled`, otherwise return `self` unchanged.
    pub const fn with(self, flag: Self, enabled: bool) -> Self {
        if enabled { Self(self.0 | flag.0) } else { self }
    }

    pub const fn is_expect(self) -> bool {
        self.contains(Self::IS_EXPECT)
    }
}

impl BitOr for SignatureFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Binary for SignatureFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}
