//! Node definition.
//!
//! The core tree node type. Every node carries exactly one [`NodeValue`];
//! its [`NodeKind`] is derived from that value.

use std::any::Any;

use crate::cdata::{cdata_name, is_cdata_name};
use crate::{CustomData, Destroyer, NodeKind, UserData};

/// A node in the document tree.
///
/// Children are owned by their parent and dropped with it. `user_data` is a
/// caller-owned pointer that the node never frees.
///
/// # Example
///
/// ```rust
/// use mxnode_ast::{Node, NodeKind};
///
/// let node = Node::new_element("price").with_child(Node::new_integer(12));
///
/// assert_eq!(node.kind(), NodeKind::Element);
/// assert_eq!(node.first_child().map(Node::kind), Some(NodeKind::Integer));
/// ```
#[derive(Debug)]
pub struct Node {
    /// The payload of this node.
    pub value: NodeValue,

    /// Child nodes, in document order.
    pub children: Vec<Node>,

    /// Opaque caller pointer, not owned by the node.
    pub user_data: Option<UserData>,
}

/// The payload of a node. Exactly one variant is active at a time.
#[derive(Debug)]
pub enum NodeValue {
    Element {
        name: String,
        attributes: Vec<Attribute>,
    },
    Integer(i64),
    Opaque(String),
    Real(f64),
    Text {
        /// Whether the text was preceded by whitespace.
        whitespace: bool,
        string: String,
    },
    Custom(CustomData),
    Ignore(String),
}

/// A name/value attribute on an element.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl NodeValue {
    /// Returns the kind of this payload.
    #[inline]
    pub const fn kind(&self) -> NodeKind {
        match self {
            NodeValue::Element { .. } => NodeKind::Element,
            NodeValue::Integer(_) => NodeKind::Integer,
            NodeValue::Opaque(_) => NodeKind::Opaque,
            NodeValue::Real(_) => NodeKind::Real,
            NodeValue::Text { .. } => NodeKind::Text,
            NodeValue::Custom(_) => NodeKind::Custom,
            NodeValue::Ignore(_) => NodeKind::Ignore,
        }
    }
}

impl Node {
    /// Creates a childless node holding `value`.
    #[inline]
    pub const fn new(value: NodeValue) -> Self {
        Self {
            value,
            children: Vec::new(),
            user_data: None,
        }
    }

    /// Creates an element node without attributes.
    pub fn new_element(name: impl Into<String>) -> Self {
        Self::new(NodeValue::Element {
            name: name.into(),
            attributes: Vec::new(),
        })
    }

    /// Creates a CDATA section holding `data`.
    pub fn new_cdata(data: &str) -> Self {
        Self::new_element(cdata_name(data))
    }

    pub fn new_integer(integer: i64) -> Self {
        Self::new(NodeValue::Integer(integer))
    }

    pub fn new_opaque(opaque: impl Into<String>) -> Self {
        Self::new(NodeValue::Opaque(opaque.into()))
    }

    pub fn new_real(real: f64) -> Self {
        Self::new(NodeValue::Real(real))
    }

    /// Creates a text node. `whitespace` records leading whitespace.
    pub fn new_text(whitespace: bool, string: impl Into<String>) -> Self {
        Self::new(NodeValue::Text {
            whitespace,
            string: string.into(),
        })
    }

    /// Creates a custom node that owns `data` and releases it with `destroyer`.
    pub fn new_custom(data: Option<Box<dyn Any>>, destroyer: Option<Destroyer>) -> Self {
        Self::new(NodeValue::Custom(CustomData::new(data, destroyer)))
    }

    pub fn new_ignore(whitespace: impl Into<String>) -> Self {
        Self::new(NodeValue::Ignore(whitespace.into()))
    }

    /// Returns the kind of this node.
    #[inline]
    pub const fn kind(&self) -> NodeKind {
        self.value.kind()
    }

    /// Returns the element name, or `None` for non-element nodes.
    #[inline]
    pub fn name(&self) -> Option<&str> {
        match &self.value {
            NodeValue::Element { name, .. } => Some(name.as_str()),
            _ => None,
        }
    }

    /// Returns true if this is an element named with the CDATA marker.
    #[inline]
    pub fn is_cdata(&self) -> bool {
        self.name().is_some_and(is_cdata_name)
    }

    /// Returns the element attributes. Empty for non-element nodes.
    pub fn attributes(&self) -> &[Attribute] {
        match &self.value {
            NodeValue::Element { attributes, .. } => attributes,
            _ => &[],
        }
    }

    /// Returns the value of the named attribute.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes()
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    /// Adds an attribute to an element node. Ignored for other kinds.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let NodeValue::Element { attributes, .. } = &mut self.value {
            attributes.push(Attribute::new(name, value));
        }
        self
    }

    /// Appends `child` and returns `self`, for building trees inline.
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Appends `child` and returns a reference to it.
    pub fn append_child(&mut self, child: Node) -> &mut Node {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Returns true if this node has children.
    #[inline]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    #[inline]
    pub fn first_child(&self) -> Option<&Node> {
        self.children.first()
    }

    #[inline]
    pub fn first_child_mut(&mut self) -> Option<&mut Node> {
        self.children.first_mut()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let is_parent = self.kind().is_parent();
        let mut len = 1; // type
        if is_parent || self.has_children() {
            len += 1;
        }
        len += self.value.present_field_count();

        let mut state = serializer.serialize_struct("Node", len)?;
        state.serialize_field("type", &self.kind())?;
        self.value.serialize_fields(&mut state)?;

        if is_parent || self.has_children() {
            state.serialize_field("children", &self.children)?;
        }

        state.end()
    }
}

#[cfg(feature = "serde")]
impl NodeValue {
    /// Returns the number of fields this payload contributes.
    fn present_field_count(&self) -> usize {
        match self {
            NodeValue::Element { attributes, .. } => {
                if attributes.is_empty() {
                    1
                } else {
                    2
                }
            }
            NodeValue::Text { .. } => 2,
            NodeValue::Custom(_) => 2,
            NodeValue::Integer(_)
            | NodeValue::Opaque(_)
            | NodeValue::Real(_)
            | NodeValue::Ignore(_) => 1,
        }
    }

    fn serialize_fields<S: serde::ser::SerializeStruct>(
        &self,
        state: &mut S,
    ) -> Result<(), S::Error> {
        match self {
            NodeValue::Element { name, attributes } => {
                state.serialize_field("name", name)?;
                if !attributes.is_empty() {
                    state.serialize_field("attributes", attributes)?;
                }
            }
            NodeValue::Integer(integer) => state.serialize_field("value", integer)?,
            NodeValue::Opaque(opaque) => state.serialize_field("value", opaque)?,
            NodeValue::Real(real) => state.serialize_field("value", real)?,
            NodeValue::Text { whitespace, string } => {
                state.serialize_field("whitespace", whitespace)?;
                state.serialize_field("value", string)?;
            }
            // Custom data is opaque to the serializer; only presence is reported.
            NodeValue::Custom(custom) => {
                state.serialize_field("hasData", &custom.has_data())?;
                state.serialize_field("hasDestroyer", &custom.has_destroyer())?;
            }
            NodeValue::Ignore(whitespace) => state.serialize_field("value", whitespace)?,
        }
        Ok(())
    }
}
