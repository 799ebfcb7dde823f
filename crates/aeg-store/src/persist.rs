//! Load and save trees and proofs as JSON
//!
//! String functions do the encoding; the path functions add file IO and the
//! start/end/error log events.

use std::fs;
use std::path::Path;
use std::time::Instant;

use aeg_core::{log_op_end, log_op_error, log_op_start, AegTree, ProofHistory};
use serde::Deserialize;

use crate::atomic::atomic_write;
use crate::errors::{io_error, serialization_error, Result};
use crate::hydration::{proof_from_record, proof_to_record, tree_from_record, tree_to_record};
use crate::records::{ProofRecord, TreeRecord};

/// Either kind of file the store writes
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Tree(AegTree),
    Proof(ProofHistory),
}

impl Document {
    /// The tree a new proof step would apply to
    pub fn current_tree(&self) -> &AegTree {
        match self {
            Document::Tree(tree) => tree,
            Document::Proof(history) => history.current().tree(),
        }
    }

    /// A proof over this document; a bare tree becomes a one-step proof
    pub fn into_history(self) -> ProofHistory {
        match self {
            Document::Tree(tree) => ProofHistory::new(tree),
            Document::Proof(history) => history,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DocumentRecord {
    Tree(TreeRecord),
    Proof(ProofRecord),
}

/// # Errors
/// * `Serialization` - If encoding fails
pub fn tree_to_json_string(tree: &AegTree) -> Result<String> {
    serde_json::to_string_pretty(&tree_to_record(tree))
        .map_err(|e| serialization_error("tree_to_json", e))
}

/// # Errors
/// * `Serialization` - If `json` is not a tree document
/// * Any hydration error; see [`crate::hydration::tree_from_record`]
pub fn tree_from_json_str(json: &str) -> Result<AegTree> {
    let record: TreeRecord =
        serde_json::from_str(json).map_err(|e| serialization_error("tree_from_json", e))?;
    tree_from_record(record)
}

/// # Errors
/// * `Serialization` - If encoding fails
pub fn proof_to_json_string(history: &ProofHistory) -> Result<String> {
    serde_json::to_string_pretty(&proof_to_record(history))
        .map_err(|e| serialization_error("proof_to_json", e))
}

/// # Errors
/// * `Serialization` - If `json` is not a proof document
/// * Any hydration error; see [`crate::hydration::proof_from_record`]
pub fn proof_from_json_str(json: &str) -> Result<ProofHistory> {
    let record: ProofRecord =
        serde_json::from_str(json).map_err(|e| serialization_error("proof_from_json", e))?;
    proof_from_record(record)
}

/// Parse a tree or a proof document
///
/// # Errors
/// * `Serialization` - If `json` is neither
/// * Any hydration error
pub fn document_from_json_str(json: &str) -> Result<Document> {
    let record: DocumentRecord =
        serde_json::from_str(json).map_err(|e| serialization_error("document_from_json", e))?;
    match record {
        DocumentRecord::Tree(tree) => tree_from_record(tree).map(Document::Tree),
        DocumentRecord::Proof(proof) => proof_from_record(proof).map(Document::Proof),
    }
}

/// # Errors
/// * `Serialization` / `Io` - If encoding or writing fails
pub fn save_tree(path: &Path, tree: &AegTree) -> Result<()> {
    logged("save_tree", path, || {
        atomic_write(path, tree_to_json_string(tree)?.as_bytes())
    })
}

/// # Errors
/// * `Io` - If the file cannot be read
/// * Any error of [`tree_from_json_str`]
pub fn load_tree(path: &Path) -> Result<AegTree> {
    logged("load_tree", path, || tree_from_json_str(&read(path)?))
}

/// # Errors
/// * `Serialization` / `Io` - If encoding or writing fails
pub fn save_proof(path: &Path, history: &ProofHistory) -> Result<()> {
    logged("save_proof", path, || {
        atomic_write(path, proof_to_json_string(history)?.as_bytes())
    })
}

/// # Errors
/// * `Io` - If the file cannot be read
/// * Any error of [`proof_from_json_str`]
pub fn load_proof(path: &Path) -> Result<ProofHistory> {
    logged("load_proof", path, || proof_from_json_str(&read(path)?))
}

/// # Errors
/// * `Io` - If the file cannot be read
/// * Any error of [`document_from_json_str`]
pub fn load_document(path: &Path) -> Result<Document> {
    logged("load_document", path, || document_from_json_str(&read(path)?))
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| io_error("read_file", e))
}

fn logged<T>(op: &'static str, path: &Path, body: impl FnOnce() -> Result<T>) -> Result<T> {
    let file = path.display().to_string();
    log_op_start!(op, path = file.as_str());
    let start = Instant::now();

    let result = body();
    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(_) => {
            log_op_end!(op, duration_ms = duration_ms, path = file.as_str());
        }
        Err(e) => {
            log_op_error!(op, e.clone(), duration_ms = duration_ms, path = file.as_str());
        }
    }
    result
}
