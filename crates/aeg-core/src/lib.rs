//! AEG Core - Peirce Alpha Existential Graph kernel
//!
//! This crate provides the in-memory model and rules for Alpha existential
//! graphs, including:
//! - A geometry kernel of points, rectangles and ellipses with sampled
//!   overlap/containment predicates
//! - The Sheet/Cut/Atom node tree with point queries and structural equality
//! - Invariant-preserving tree operations (insert with adoption, verify)
//! - Draw-mode edit commands applied atomically
//! - The proof engine: rule legality, rewrites and a linear proof history
//! - An explicit application state implementing preview/commit/cancel

pub mod apply;
pub mod commands;
pub mod config;
pub mod errors;
pub mod geometry;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod proof;
pub mod rules;
pub mod state;

// Re-export commonly used types
pub use apply::apply_edit;
pub use commands::EditCommand;
pub use config::ProofConfig;
pub use errors::{AegError, ExError, ExErrorKind, Result};
pub use geometry::{Ellipse, Point, Rectangle, Shape};
pub use model::{Atom, Node, NodeKind, NodePath};
pub use ops::AegTree;
pub use proof::{ProofEngine, ProofHistory, ProofNode};
pub use rules::{ProofCommand, ProofRule};
pub use state::{AppState, Mode};
