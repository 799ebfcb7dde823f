//! AEG Store - JSON persistence for graphs and proofs
//!
//! Provides:
//! - Serde records mirroring the graph tree and proof history
//! - Hydration from records back into verified core types
//! - Atomic file save and load for trees, proofs and either-kind documents

pub mod atomic;
pub mod errors;
pub mod hydration;
pub mod persist;
pub mod records;

// Re-export key types
pub use errors::Result;
pub use persist::{
    document_from_json_str, load_document, load_proof, load_tree, proof_from_json_str,
    proof_to_json_string, save_proof, save_tree, tree_from_json_str, tree_to_json_string,
    Document,
};
