// name.rs
//
// Simple and fully-qualified names.

use std::fmt;

use smallvec::SmallVec;

/// SmallVec for name segments - most paths have <= 4 segments
type SegmentVec = SmallVec<[Name; 4]>;

/// A single identifier segment (`foo`, `Outer`, `<init>`).
///
/// Special names are wrapped in angle brackets and never collide with
/// identifiers written in source.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Name(String);

impl Name {
    pub fn identifier(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Create a special name. The caller supplies the angle brackets.
    pub fn special(name: impl Into<String>) -> Self {
        let name = name.into();
        debug_assert!(
            name.starts_with('<') && name.ends_with('>'),
            "special names are bracketed: {name}"
        );
        Self(name)
    }

    /// The name every constructor is declared under.
    pub fn constructor() -> Self {
        Self::special("<init>")
    }

    pub fn is_special(&self) -> bool {
        self.0.starts_with('<')
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A dot-separated path of [`Name`] segments.
///
/// The root path has no segments and renders as the empty string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FqName {
    segments: SegmentVec,
}

impl FqName {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn top_level(name: Name) -> Self {
        let mut segments = SegmentVec::new();
        segments.push(name);
        Self { segments }
    }

    pub fn from_segments(segments: impl IntoIterator<Item = Name>) -> Self {
        Self {
            segments: segments.into_iter().collect(),
        }
    }

    /// Split a dotted path. Empty input yields the root path.
    pub fn parse(path: &str) -> Self {
        if path.is_empty() {
            return Self::root();
        }
        Self::from_segments(path.split('.').map(Name::identifier))
    }

    pub fn child(&self, name: Name) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name);
        Self { segments }
    }

    /// The path without its last segment, or `None` at the root.
    pub fn parent(&self) -> Option<Self> {
        let (_, rest) = self.segments.split_last()?;
        Some(Self::from_segments(rest.iter().cloned()))
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[Name] {
        &self.segments
    }

    pub fn short_name(&self) -> Option<&Name> {
        self.segments.last()
    }

    /// Render as a dotted string (`a.b.C`).
    pub fn as_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FqName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, segment) in self.segments.iter().enumerate() {
            if idx > 0 {
                f.write_str(".")?;
            }
            f.write_str(segment.as_str())?;
        }
        Ok(())
    }
}
