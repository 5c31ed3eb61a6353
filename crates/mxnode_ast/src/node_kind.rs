//! Node kind definitions.
//!
//! A [`NodeKind`] names the payload variant a [`Node`](crate::Node) carries.
//! It is always derived from the payload itself, never stored separately.

/// Payload kinds a tree node can carry.
///
/// CDATA sections and comments are not separate kinds: they are
/// [`NodeKind::Element`] nodes with a marker name (see [`crate::cdata`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase"))]
pub enum NodeKind {
    /// Named element with attributes and children.
    Element,
    /// Signed integer value.
    Integer,
    /// Raw string, stored without interpretation.
    Opaque,
    /// Floating point value.
    Real,
    /// Text fragment with a leading-whitespace flag.
    Text,
    /// Caller-defined data with an optional destroyer.
    Custom,
    /// Ignorable whitespace between elements.
    Ignore,
}

impl NodeKind {
    /// Returns true if nodes of this kind may own children.
    #[inline]
    pub const fn is_parent(&self) -> bool {
        matches!(self, NodeKind::Element)
    }

    /// Returns true if this kind carries a single typed value that an
    /// enclosing element can expose through auto-descent.
    #[inline]
    pub const fn is_value(&self) -> bool {
        matches!(
            self,
            NodeKind::Integer
                | NodeKind::Opaque
                | NodeKind::Real
                | NodeKind::Text
                | NodeKind::Custom
        )
    }

    /// Returns the display name of this kind.
    pub const fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Element => "Element",
            NodeKind::Integer => "Integer",
            NodeKind::Opaque => "Opaque",
            NodeKind::Real => "Real",
            NodeKind::Text => "Text",
            NodeKind::Custom => "Custom",
            NodeKind::Ignore => "Ignore",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
