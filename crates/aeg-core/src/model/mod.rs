//! Graph tree node model
//!
//! `Node` is a closed union of Sheet, Cut and Atom. Queries walk down from the
//! receiver; nothing stores a parent pointer.

pub mod atom;
pub mod node;
pub mod path;

pub use atom::Atom;
pub use node::{conflicts_with, Node, NodeKind};
pub use path::NodePath;
