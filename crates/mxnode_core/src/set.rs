//! Node value setters.
//!
//! Every setter follows the same sequence: resolve the effective target
//! (possibly the first child, see [`crate::resolve`]), check its kind,
//! release the previous payload and install the new one. A rejected call
//! leaves the node untouched.

use std::any::Any;
use std::fmt;

use mxnode_ast::{Destroyer, Node, NodeKind, NodeValue, UserData, cdata_name};
use tracing::trace;

use crate::error::{SetError, SetResult};
use crate::resolve::{Target, resolve_target_mut};

/// Value mutation operations on a tree node.
///
/// Implemented for [`Node`] and for `Option<&mut Node>`, so the result of a
/// lookup can be passed straight in. An absent node is inapplicable for
/// every operation.
///
/// # Example
///
/// ```rust
/// use mxnode_ast::{Node, NodeValue};
/// use mxnode_core::SetValue;
///
/// let mut node = Node::new_element("total").with_child(Node::new_integer(0));
///
/// // The element wraps a single integer, so the setter descends into it.
/// node.set_integer(42).unwrap();
/// assert!(matches!(node.children[0].value, NodeValue::Integer(42)));
///
/// node.set_opaque_fmt(format_args!("{}-{}", 3, "ok")).unwrap_err();
/// ```
pub trait SetValue {
    /// Renames an element node. Does not descend into children.
    fn set_element(&mut self, name: &str) -> SetResult<()>;

    /// Replaces the body of a CDATA section, storing `![CDATA[data]]`.
    fn set_cdata(&mut self, data: &str) -> SetResult<()>;

    /// Replaces the data and destroyer of a custom node.
    ///
    /// The old destroyer runs on the old data when both are present. The new
    /// destroyer is only stored. A rejected call consumes the supplied pair:
    /// the data is dropped and the destroyer is not invoked.
    fn set_custom(
        &mut self,
        data: Option<Box<dyn Any>>,
        destroyer: Option<Destroyer>,
    ) -> SetResult<()>;

    fn set_integer(&mut self, integer: i64) -> SetResult<()>;

    fn set_opaque(&mut self, opaque: &str) -> SetResult<()>;

    /// Sets an opaque node to a formatted string built from `args`.
    ///
    /// Fails without touching the node if a formatting impl returns an error.
    fn set_opaque_fmt(&mut self, args: fmt::Arguments<'_>) -> SetResult<()>;

    fn set_real(&mut self, real: f64) -> SetResult<()>;

    /// Sets a text node. The whitespace flag is always overwritten.
    fn set_text(&mut self, whitespace: bool, string: &str) -> SetResult<()>;

    /// Sets a text node to a formatted string built from `args`.
    ///
    /// Fails without touching the node if a formatting impl returns an error.
    fn set_text_fmt(&mut self, whitespace: bool, args: fmt::Arguments<'_>) -> SetResult<()>;

    /// Attaches a caller-owned pointer. Applies to any node kind and never
    /// releases the previous pointer.
    fn set_user_data(&mut self, data: Option<UserData>) -> SetResult<()>;
}

fn format_value(args: fmt::Arguments<'_>) -> SetResult<String> {
    let mut formatted = String::new();
    fmt::Write::write_fmt(&mut formatted, args).map_err(|_| SetError::Inapplicable)?;
    Ok(formatted)
}

fn target_mut(node: &mut Node, target: Target) -> SetResult<&mut Node> {
    resolve_target_mut(node, target).ok_or(SetError::Inapplicable)
}

fn element_name_mut(node: &mut Node, target: Target) -> SetResult<&mut String> {
    match &mut target_mut(node, target)?.value {
        NodeValue::Element { name, .. } => Ok(name),
        _ => Err(SetError::Inapplicable),
    }
}

fn text_mut(node: &mut Node) -> SetResult<(&mut bool, &mut String)> {
    match &mut target_mut(node, Target::Kind(NodeKind::Text))?.value {
        NodeValue::Text { whitespace, string } => Ok((whitespace, string)),
        _ => Err(SetError::Inapplicable),
    }
}

fn opaque_mut(node: &mut Node) -> SetResult<&mut String> {
    match &mut target_mut(node, Target::Kind(NodeKind::Opaque))?.value {
        NodeValue::Opaque(opaque) => Ok(opaque),
        _ => Err(SetError::Inapplicable),
    }
}

impl SetValue for Node {
    fn set_element(&mut self, name: &str) -> SetResult<()> {
        let slot = element_name_mut(self, Target::Kind(NodeKind::Element))?;
        *slot = name.to_owned();
        Ok(())
    }

    fn set_cdata(&mut self, data: &str) -> SetResult<()> {
        let slot = element_name_mut(self, Target::Cdata)?;
        *slot = cdata_name(data);
        Ok(())
    }

    fn set_custom(
        &mut self,
        data: Option<Box<dyn Any>>,
        destroyer: Option<Destroyer>,
    ) -> SetResult<()> {
        let NodeValue::Custom(custom) = &mut target_mut(self, Target::Kind(NodeKind::Custom))?.value
        else {
            return Err(SetError::Inapplicable);
        };

        if custom.replace(data, destroyer) {
            trace!("released previous custom data");
        }
        Ok(())
    }

    fn set_integer(&mut self, integer: i64) -> SetResult<()> {
        match &mut target_mut(self, Target::Kind(NodeKind::Integer))?.value {
            NodeValue::Integer(slot) => {
                *slot = integer;
                Ok(())
            }
            _ => Err(SetError::Inapplicable),
        }
    }

    fn set_opaque(&mut self, opaque: &str) -> SetResult<()> {
        let slot = opaque_mut(self)?;
        *slot = opaque.to_owned();
        Ok(())
    }

    fn set_opaque_fmt(&mut self, args: fmt::Arguments<'_>) -> SetResult<()> {
        let formatted = format_value(args)?;
        let slot = opaque_mut(self)?;
        *slot = formatted;
        Ok(())
    }

    fn set_real(&mut self, real: f64) -> SetResult<()> {
        match &mut target_mut(self, Target::Kind(NodeKind::Real))?.value {
            NodeValue::Real(slot) => {
                *slot = real;
                Ok(())
            }
            _ => Err(SetError::Inapplicable),
        }
    }

    fn set_text(&mut self, whitespace: bool, string: &str) -> SetResult<()> {
        let (flag, slot) = text_mut(self)?;
        *flag = whitespace;
        *slot = string.to_owned();
        Ok(())
    }

    fn set_text_fmt(&mut self, whitespace: bool, args: fmt::Arguments<'_>) -> SetResult<()> {
        let formatted = format_value(args)?;
        let (flag, slot) = text_mut(self)?;
        *flag = whitespace;
        *slot = formatted;
        Ok(())
    }

    fn set_user_data(&mut self, data: Option<UserData>) -> SetResult<()> {
        self.user_data = data;
        Ok(())
    }
}

impl SetValue for Option<&mut Node> {
    fn set_element(&mut self, name: &str) -> SetResult<()> {
        present(self)?.set_element(name)
    }

    fn set_cdata(&mut self, data: &str) -> SetResult<()> {
        present(self)?.set_cdata(data)
    }

    fn set_custom(
        &mut self,
        data: Option<Box<dyn Any>>,
        destroyer: Option<Destroyer>,
    ) -> SetResult<()> {
        present(self)?.set_custom(data, destroyer)
    }

    fn set_integer(&mut self, integer: i64) -> SetResult<()> {
        present(self)?.set_integer(integer)
    }

    fn set_opaque(&mut self, opaque: &str) -> SetResult<()> {
        present(self)?.set_opaque(opaque)
    }

    fn set_opaque_fmt(&mut self, args: fmt::Arguments<'_>) -> SetResult<()> {
        present(self)?.set_opaque_fmt(args)
    }

    fn set_real(&mut self, real: f64) -> SetResult<()> {
        present(self)?.set_real(real)
    }

    fn set_text(&mut self, whitespace: bool, string: &str) -> SetResult<()> {
        present(self)?.set_text(whitespace, string)
    }

    fn set_text_fmt(&mut self, whitespace: bool, args: fmt::Arguments<'_>) -> SetResult<()> {
        present(self)?.set_text_fmt(whitespace, args)
    }

    fn set_user_data(&mut self, data: Option<UserData>) -> SetResult<()> {
        present(self)?.set_user_data(data)
    }
}

fn present<'a>(node: &'a mut Option<&mut Node>) -> SetResult<&'a mut Node> {
    node.as_deref_mut().ok_or(SetError::Inapplicable)
}
