//! # mxnode_ast
//!
//! Node definitions for the mxnode XML tree.
//!
//! This crate provides the data model shared by the rest of the workspace:
//! a [`Node`] that carries exactly one [`NodeValue`] payload, the derived
//! [`NodeKind`] tag, and the ownership types for custom payloads and
//! caller-owned user data.
//!
//! ## Ownership
//!
//! - Children, strings and custom data are owned by their node and released
//!   when it is dropped
//! - Custom data is released through its [`Destroyer`], only when both data
//!   and destroyer are present
//! - [`UserData`] is never freed by the node
//!
//! ## Example
//!
//! ```rust
//! use mxnode_ast::{Node, NodeKind};
//!
//! let root = Node::new_element("doc")
//!     .with_child(Node::new_cdata("<raw>"))
//!     .with_child(Node::new_text(false, "tail"));
//!
//! assert!(root.children[0].is_cdata());
//! assert_eq!(root.children[1].kind(), NodeKind::Text);
//! ```

pub mod cdata;
mod custom;
mod node;
mod node_kind;
mod user_data;

pub use cdata::{CDATA_PREFIX, CDATA_SUFFIX, cdata_body, cdata_name, is_cdata_name};
pub use custom::{CustomData, Destroyer};
pub use node::{Attribute, Node, NodeValue};
pub use node_kind::NodeKind;
pub use user_data::UserData;
