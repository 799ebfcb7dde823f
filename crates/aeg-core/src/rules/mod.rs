//! Structural invariants and proof rules
//!
//! `invariants` and `validation` check a tree's shape. The remaining modules
//! implement the Alpha rules of inference as pure rewrites: each takes the
//! current tree and returns the rewritten tree when the rule applies.

pub mod command;
pub mod double_cut;
pub mod inference;
pub mod invariants;
pub mod moves;
pub mod validation;

pub use command::{ProofCommand, ProofRule};

use crate::config::ProofConfig;
use crate::ops::AegTree;

/// Apply `command` to `tree`, returning the rewritten tree when legal
///
/// `tree` is never modified; every rewrite happens on a copy, and a result
/// that fails verification is discarded.
pub fn rewrite(tree: &AegTree, command: &ProofCommand, config: &ProofConfig) -> Option<AegTree> {
    let next = match command {
        ProofCommand::Erasure { point } => inference::erasure(tree, point),
        ProofCommand::Insertion { node } => inference::insertion(tree, node),
        ProofCommand::Iteration {
            selected,
            destination,
        } => inference::iteration(tree, selected, destination),
        ProofCommand::Deiteration { point } => inference::deiteration(tree, point),
        ProofCommand::DoubleCutInsertion {
            center,
            radius_x,
            radius_y,
        } => double_cut::double_cut_insertion(tree, *center, *radius_x, *radius_y, config),
        ProofCommand::DoubleCutDeletion { point } => double_cut::double_cut_deletion(tree, point),
        ProofCommand::Move {
            selected,
            destination,
        } => moves::move_subtree(tree, selected, destination),
        ProofCommand::MoveSingle {
            selected,
            destination,
        } => moves::move_single(tree, selected, destination),
    };
    next.filter(AegTree::verify)
}

/// Whether `command` can be applied to `tree`
pub fn is_legal(tree: &AegTree, command: &ProofCommand, config: &ProofConfig) -> bool {
    rewrite(tree, command, config).is_some()
}
