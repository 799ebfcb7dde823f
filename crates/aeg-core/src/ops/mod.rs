//! Tree operations: the invariant-preserving wrapper around the graph tree

pub mod tree;

pub use tree::AegTree;
