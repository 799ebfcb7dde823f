//! Proof engine and linear proof history

pub mod engine;
pub mod history;

pub use engine::ProofEngine;
pub use history::{ProofHistory, ProofNode};
