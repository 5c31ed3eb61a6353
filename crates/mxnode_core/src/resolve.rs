//! Effective target resolution.
//!
//! Value operations may be called on a generic element that wraps a single
//! typed child. Resolution decides, once per call, whether the operation
//! applies to the node itself or to its first child.

use mxnode_ast::{Node, NodeKind};
use tracing::trace;

/// What a value operation expects to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A node of the given kind.
    ///
    /// Value kinds auto-descend from an element into a matching first child.
    /// `Kind(NodeKind::Element)` never descends.
    Kind(NodeKind),
    /// An element named with the CDATA marker.
    Cdata,
}

impl Target {
    /// Returns true if `node` itself satisfies this target.
    pub fn matches(self, node: &Node) -> bool {
        match self {
            Target::Kind(kind) => node.kind() == kind,
            Target::Cdata => node.is_cdata(),
        }
    }

    /// Returns true if the operation should be redirected to the first child.
    ///
    /// For CDATA the parent must be an element that is not itself a CDATA
    /// section while its first child is one.
    pub fn descends(self, node: &Node) -> bool {
        if node.kind() != NodeKind::Element {
            return false;
        }

        match self {
            Target::Kind(kind) => {
                kind.is_value() && node.first_child().is_some_and(|child| child.kind() == kind)
            }
            Target::Cdata => !node.is_cdata() && node.first_child().is_some_and(Node::is_cdata),
        }
    }
}

/// Resolves the node an operation applies to, or `None` if it is inapplicable.
pub fn resolve_target(node: &Node, target: Target) -> Option<&Node> {
    let node = if target.descends(node) {
        node.first_child()?
    } else {
        node
    };

    if target.matches(node) { Some(node) } else { None }
}

/// Mutable counterpart of [`resolve_target`].
pub fn resolve_target_mut(node: &mut Node, target: Target) -> Option<&mut Node> {
    let node = if target.descends(node) {
        trace!(?target, "redirecting to first child");
        node.first_child_mut()?
    } else {
        node
    };

    if target.matches(node) { Some(node) } else { None }
}
