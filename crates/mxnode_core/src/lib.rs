//! # mxnode_core
//!
//! Value setters and getters for mxnode tree nodes.
//!
//! This crate provides:
//! - The [`SetValue`] trait: one setter per payload kind, with auto-descent
//!   into a wrapping element's first child
//! - The [`GetValue`] trait: matching getters using the same resolution
//! - [`resolve_target`] / [`resolve_target_mut`]: the shared resolution step
//!
//! ## Contract
//!
//! A setter either replaces the value of the resolved node, releasing what it
//! previously owned, or returns [`SetError::Inapplicable`] and leaves the tree
//! untouched. The node kind never changes.
//!
//! ## Example
//!
//! ```rust
//! use mxnode_ast::Node;
//! use mxnode_core::{GetValue, SetError, SetValue};
//!
//! let mut script = Node::new_element("script").with_child(Node::new_cdata("old"));
//!
//! script.set_cdata("if (a < b) {}").unwrap();
//! assert_eq!(script.cdata(), Some("if (a < b) {}"));
//!
//! assert_eq!(script.set_integer(1), Err(SetError::Inapplicable));
//! ```

mod error;
mod get;
pub mod resolve;
mod set;

pub use error::{SetError, SetResult};
pub use get::GetValue;
pub use resolve::{Target, resolve_target, resolve_target_mut};
pub use set::SetValue;
