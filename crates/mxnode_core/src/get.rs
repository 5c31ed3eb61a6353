//! Node value getters.
//!
//! Getters apply the same auto-descent rule as the setters, so a value
//! written through a wrapping element can be read back through it.

use std::any::Any;

use mxnode_ast::{Node, NodeKind, NodeValue, cdata_body};

use crate::resolve::{Target, resolve_target};

/// Read access to the typed value of a node.
///
/// Each getter returns `None` when the node (after auto-descent) does not
/// hold the requested kind.
pub trait GetValue {
    /// Returns the element name. Does not descend into children.
    fn element_name(&self) -> Option<&str>;

    /// Returns the body of a CDATA section, without the markers.
    fn cdata(&self) -> Option<&str>;

    /// Returns the data of a custom node, if it holds any.
    fn custom(&self) -> Option<&dyn Any>;

    fn integer(&self) -> Option<i64>;

    fn opaque(&self) -> Option<&str>;

    fn real(&self) -> Option<f64>;

    /// Returns the whitespace flag and string of a text node.
    fn text(&self) -> Option<(bool, &str)>;
}

fn value_of(node: &Node, target: Target) -> Option<&NodeValue> {
    resolve_target(node, target).map(|node| &node.value)
}

impl GetValue for Node {
    fn element_name(&self) -> Option<&str> {
        self.name()
    }

    fn cdata(&self) -> Option<&str> {
        match value_of(self, Target::Cdata)? {
            NodeValue::Element { name, .. } => cdata_body(name),
            _ => None,
        }
    }

    fn custom(&self) -> Option<&dyn Any> {
        match value_of(self, Target::Kind(NodeKind::Custom))? {
            NodeValue::Custom(custom) => custom.data(),
            _ => None,
        }
    }

    fn integer(&self) -> Option<i64> {
        match value_of(self, Target::Kind(NodeKind::Integer))? {
            NodeValue::Integer(integer) => Some(*integer),
            _ => None,
        }
    }

    fn opaque(&self) -> Option<&str> {
        match value_of(self, Target::Kind(NodeKind::Opaque))? {
            NodeValue::Opaque(opaque) => Some(opaque.as_str()),
            _ => None,
        }
    }

    fn real(&self) -> Option<f64> {
        match value_of(self, Target::Kind(NodeKind::Real))? {
            NodeValue::Real(real) => Some(*real),
            _ => None,
        }
    }

    fn text(&self) -> Option<(bool, &str)> {
        match value_of(self, Target::Kind(NodeKind::Text))? {
            NodeValue::Text { whitespace, string } => Some((*whitespace, string.as_str())),
            _ => None,
        }
    }
}

impl GetValue for Option<&Node> {
    fn element_name(&self) -> Option<&str> {
        self.and_then(Node::element_name)
    }

    fn cdata(&self) -> Option<&str> {
        self.and_then(Node::cdata)
    }

    fn custom(&self) -> Option<&dyn Any> {
        self.and_then(Node::custom)
    }

    fn integer(&self) -> Option<i64> {
        self.and_then(Node::integer)
    }

    fn opaque(&self) -> Option<&str> {
        self.and_then(Node::opaque)
    }

    fn real(&self) -> Option<f64> {
        self.and_then(Node::real)
    }

    fn text(&self) -> Option<(bool, &str)> {
        self.and_then(Node::text)
    }
}
